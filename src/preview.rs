use web_sys::HtmlElement;

use crate::config::{
    MAX_DPI, MIN_GUTTER_CSS_PX, PAGE_WIDTH_PX, PREVIEW_WIDTH_PX, REFERENCE_DPI, UNIT_MAX,
    UNIT_MIN,
};
use crate::numeric::{clamped_or, parse_leading_int};

/// Margin/gutter in physical pixel units plus the source DPI, already
/// defaulted and clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewConfig {
    pub margin_units: i64,
    pub gutter_units: i64,
    pub dpi_units: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewGeometry {
    pub css_margin_px: i64,
    pub css_gutter_px: i64,
    pub css_column_px: i64,
}

impl PreviewConfig {
    pub fn new(margin_units: i64, gutter_units: i64, dpi_units: i64) -> Self {
        Self {
            margin_units: margin_units.clamp(UNIT_MIN, UNIT_MAX),
            gutter_units: gutter_units.clamp(UNIT_MIN, UNIT_MAX),
            dpi_units: if dpi_units > 0 {
                dpi_units.min(MAX_DPI)
            } else {
                REFERENCE_DPI
            },
        }
    }

    /// Reads the raw field texts. Blank or unparseable margin/gutter count
    /// as 0; blank, unparseable or non-positive DPI counts as 300, and DPI
    /// above `MAX_DPI` is capped.
    pub fn from_fields(margin: &str, gutter: &str, dpi: &str) -> Self {
        let dpi = parse_leading_int(dpi)
            .filter(|dpi| *dpi > 0)
            .unwrap_or(REFERENCE_DPI);
        Self::new(
            clamped_or(margin, 0, UNIT_MIN, UNIT_MAX),
            clamped_or(gutter, 0, UNIT_MIN, UNIT_MAX),
            dpi,
        )
    }

    pub fn base_scale() -> f64 {
        f64::from(PREVIEW_WIDTH_PX) / f64::from(PAGE_WIDTH_PX)
    }

    /// Display units per physical unit. Grows with DPI so the preview keeps
    /// the page's apparent physical size.
    pub fn effective_scale(&self) -> f64 {
        Self::base_scale() * (self.dpi_units as f64 / REFERENCE_DPI as f64)
    }

    pub fn geometry(&self) -> PreviewGeometry {
        let scale = self.effective_scale();
        let css_margin_px = (self.margin_units as f64 * scale).round() as i64;
        let css_gutter_px =
            ((self.gutter_units as f64 * scale).round() as i64).max(MIN_GUTTER_CSS_PX);
        let printable = i64::from(PREVIEW_WIDTH_PX)
            .saturating_sub(css_margin_px.saturating_mul(2))
            .saturating_sub(css_gutter_px);
        PreviewGeometry {
            css_margin_px,
            css_gutter_px,
            css_column_px: (printable / 2).max(0),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::new(0, 0, REFERENCE_DPI)
    }
}

/// Writes the geometry onto the page-content and gutter elements.
/// Does nothing unless both are present.
pub fn apply_geometry(
    geometry: &PreviewGeometry,
    page_inner: Option<&HtmlElement>,
    gutter_el: Option<&HtmlElement>,
) {
    let (Some(page_inner), Some(gutter_el)) = (page_inner, gutter_el) else {
        return;
    };
    let _ = page_inner
        .style()
        .set_property("inset", &format!("{}px", geometry.css_margin_px));
    let _ = gutter_el
        .style()
        .set_property("width", &format!("{}px", geometry.css_gutter_px));
}
