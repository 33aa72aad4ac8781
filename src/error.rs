use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why the displayed order could not be written back into the file input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsupported {
    #[error("cannot construct a file collection: {0}")]
    Construct(String),

    #[error("cannot add file to collection: {0}")]
    Append(String),

    #[error("file input ignored the new collection (expected {expected} files, found {found})")]
    AssignIgnored { expected: u32, found: u32 },
}

/// Readable text for a thrown JS value.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        let err = Unsupported::Construct("DataTransfer is not a constructor".into());
        assert_eq!(
            err.to_string(),
            "cannot construct a file collection: DataTransfer is not a constructor"
        );

        let err = Unsupported::AssignIgnored { expected: 3, found: 0 };
        assert!(err.to_string().contains("expected 3 files, found 0"));
    }
}
