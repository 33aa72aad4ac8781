use crate::config::Locale;
use crate::selection::FileHandle;

/// Status line under the file picker: empty for no files, the file name
/// for one, the count for several.
pub fn hint_text<F: FileHandle>(files: &[F], locale: Locale) -> String {
    match files {
        [] => String::new(),
        [only] => match locale {
            Locale::English => format!("selected: {}", only.file_name()),
            Locale::Korean => format!("선택됨: {}", only.file_name()),
        },
        many => match locale {
            Locale::English => format!("{} selected", many.len()),
            Locale::Korean => format!("{}개 선택됨", many.len()),
        },
    }
}
