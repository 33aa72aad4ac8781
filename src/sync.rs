use leptos::prelude::*;

use crate::config::SliderBounds;
use crate::numeric::parse_leading_int;

impl SliderBounds {
    /// Where a range input lands for `text`: clamped into bounds, or the
    /// midpoint when the text holds no number (the native default).
    pub fn position(&self, text: &str) -> i64 {
        match parse_leading_int(text) {
            Some(v) => v.clamp(self.min, self.max),
            None => self.min + (self.max - self.min) / 2,
        }
    }
}

/// A numeric field and its slider, both driven by one text signal so they
/// always show the same value. The field text is authoritative; the slider
/// shows its clamped position.
#[derive(Clone, Copy)]
pub struct PairedControl {
    text: RwSignal<String>,
    bounds: SliderBounds,
}

impl PairedControl {
    pub fn new(initial: i64, bounds: SliderBounds) -> Self {
        Self {
            text: RwSignal::new(initial.to_string()),
            bounds,
        }
    }

    pub fn bounds(&self) -> SliderBounds {
        self.bounds
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn slider_value(&self) -> String {
        self.text.with(|t| self.bounds.position(t)).to_string()
    }

    /// Slider moved: the field takes the slider's value.
    pub fn on_slider_input(&self, value: String) {
        self.text.set(value);
    }

    /// Field typed into: the slider follows through `slider_value`.
    pub fn on_number_input(&self, value: String) {
        self.text.set(value);
    }
}
