use web_sys::{DataTransfer, File, FileList, HtmlInputElement};

use crate::error::{Unsupported, describe_js_error};
use crate::selection::OrderWriteBack;

pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    let mut out = Vec::new();
    for i in 0..files.length() {
        if let Some(f) = files.get(i) {
            out.push(f);
        }
    }
    out
}

/// Writes the displayed order into an `<input type=file>` by building a
/// fresh `DataTransfer` collection and assigning its `files`.
pub struct FileInputWriteBack<'a> {
    input: &'a HtmlInputElement,
}

impl<'a> FileInputWriteBack<'a> {
    pub fn new(input: &'a HtmlInputElement) -> Self {
        Self { input }
    }
}

impl OrderWriteBack<File> for FileInputWriteBack<'_> {
    fn attempt_reflect_order(&self, files: &[File]) -> Result<(), Unsupported> {
        let transfer =
            DataTransfer::new().map_err(|err| Unsupported::Construct(describe_js_error(&err)))?;
        let items = transfer.items();
        for file in files {
            items
                .add_with_file(file)
                .map_err(|err| Unsupported::Append(describe_js_error(&err)))?;
        }

        let collection = transfer.files();
        self.input.set_files(collection.as_ref());

        let expected = files.len() as u32;
        let found = self.input.files().map_or(0, |list| list.length());
        if found != expected {
            return Err(Unsupported::AssignIgnored { expected, found });
        }
        Ok(())
    }

    fn reset(&self) {
        self.input.set_value("");
    }
}
