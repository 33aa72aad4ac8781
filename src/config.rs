/// A4 width at 300 DPI, in physical pixel units.
pub const PAGE_WIDTH_PX: u32 = 2480;
/// A4 height at 300 DPI, in physical pixel units.
pub const PAGE_HEIGHT_PX: u32 = 3508;
/// CSS width of the page preview box.
pub const PREVIEW_WIDTH_PX: u32 = 420;
pub const REFERENCE_DPI: i64 = 300;
/// Larger DPI values are read as this; the preview is meaningless far past it.
pub const MAX_DPI: i64 = 9600;

pub const UNIT_MIN: i64 = 0;
pub const UNIT_MAX: i64 = 1000;

/// The gutter divider never collapses below this, even at zero gutter.
pub const MIN_GUTTER_CSS_PX: i64 = 2;

pub const DEFAULT_MARGIN: i64 = 60;
pub const DEFAULT_GUTTER: i64 = 50;

pub const UPLOAD_ENDPOINT: &str = "/upload";

pub fn preview_height_px() -> u32 {
    (f64::from(PREVIEW_WIDTH_PX) * f64::from(PAGE_HEIGHT_PX) / f64::from(PAGE_WIDTH_PX)).round()
        as u32
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl Locale {
    /// Resolves a BCP 47 tag such as the document's `lang` attribute.
    pub fn from_lang_tag(tag: &str) -> Self {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ko") {
            Locale::Korean
        } else {
            Locale::English
        }
    }

    pub fn move_up_label(self) -> &'static str {
        match self {
            Locale::English => "Up",
            Locale::Korean => "위로",
        }
    }

    pub fn move_down_label(self) -> &'static str {
        match self {
            Locale::English => "Down",
            Locale::Korean => "아래로",
        }
    }

    pub fn clear_all_label(self) -> &'static str {
        match self {
            Locale::English => "Clear all",
            Locale::Korean => "모두 지우기",
        }
    }

    pub fn photo_alt(self, position: usize) -> String {
        match self {
            Locale::English => format!("Photo {position}"),
            Locale::Korean => format!("사진 {position}"),
        }
    }

    pub fn order_warning(self) -> &'static str {
        match self {
            Locale::English => {
                "This browser cannot reorder the file field. Files may be submitted in the order they were picked."
            }
            Locale::Korean => {
                "이 브라우저에서는 파일 순서를 바꿀 수 없습니다. 선택한 순서대로 제출될 수 있습니다."
            }
        }
    }

    pub fn column_caption(self, column_px: i64) -> String {
        match self {
            Locale::English => format!("column width: {column_px}px"),
            Locale::Korean => format!("단 너비: {column_px}px"),
        }
    }
}

/// Paired slider range for one tunable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderBounds {
    pub min: i64,
    pub max: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub margin: i64,
    pub gutter: i64,
    pub dpi: i64,
    pub margin_slider: SliderBounds,
    pub gutter_slider: SliderBounds,
    pub upload_endpoint: &'static str,
    pub locale: Locale,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            gutter: DEFAULT_GUTTER,
            dpi: REFERENCE_DPI,
            margin_slider: SliderBounds { min: 0, max: 400 },
            gutter_slider: SliderBounds { min: 0, max: 300 },
            upload_endpoint: UPLOAD_ENDPOINT,
            locale: Locale::default(),
        }
    }
}

impl FormConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
