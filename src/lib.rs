//! Browser controller for the photo sheet upload form: keeps the picked
//! files in a user-chosen order and previews print margins and gutter.

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod hint;
pub mod numeric;
pub mod preview;
pub mod selection;
pub mod sync;
pub mod thumbnail;

pub use app::App;
pub use config::{FormConfig, Locale};
pub use error::Unsupported;
pub use preview::{PreviewConfig, PreviewGeometry};
pub use selection::{Capability, FileOrder, ListOp, Row};
