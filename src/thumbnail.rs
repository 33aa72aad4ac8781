use leptos::prelude::*;
use web_sys::{File, Url};

use crate::config::Locale;
use crate::selection::Row;

/// A transient display resource that must be handed back exactly once.
pub trait Release {
    fn release(self);
}

/// Owns one resource until the image has decoded or the thumbnail goes
/// away, whichever comes first.
#[derive(Debug)]
pub struct DisplayLease<R: Release> {
    resource: Option<R>,
}

impl<R: Release> DisplayLease<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    pub fn is_held(&self) -> bool {
        self.resource.is_some()
    }

    /// Returns false if it was already released.
    pub fn release(&mut self) -> bool {
        match self.resource.take() {
            Some(resource) => {
                resource.release();
                true
            }
            None => false,
        }
    }
}

impl<R: Release> Drop for DisplayLease<R> {
    fn drop(&mut self) {
        self.release();
    }
}

/// `blob:` URL pointing at a picked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn for_file(file: &File) -> Result<Self, wasm_bindgen::JsValue> {
        Url::create_object_url_with_blob(file).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Release for ObjectUrl {
    fn release(self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbAction {
    MoveUp(usize),
    MoveDown(usize),
    Remove(usize),
}

/// One row of the thumbnail list: badge, preview image, remove and move
/// buttons. The lease lives in the row's reactive owner, so disposing the
/// row drops the lease if its image never loaded.
pub fn thumbnail_view(
    row: Row,
    file: File,
    locale: Locale,
    dispatch: impl Fn(ThumbAction) + Copy + 'static,
) -> impl IntoView {
    let position = row.position;
    let idx = row.index();
    let (src, lease) = match ObjectUrl::for_file(&file) {
        Ok(url) => (
            Some(url.as_str().to_string()),
            Some(StoredValue::new(DisplayLease::new(url))),
        ),
        Err(err) => {
            gloo::console::warn!(
                "thumbnail: object url failed",
                crate::error::describe_js_error(&err)
            );
            (None, None)
        }
    };

    // A failed decode releases too; the image will never display.
    let settle = move || {
        if let Some(lease) = lease {
            lease.update_value(|l| {
                l.release();
            });
        }
    };

    view! {
        <div class="thumb">
            <span class="badge">{position}</span>
            <img
                src=src
                alt=locale.photo_alt(position)
                on:load=move |_| settle()
                on:error=move |_| settle()
            />
            <button type="button" class="remove" on:click=move |_| dispatch(ThumbAction::Remove(idx))>
                "×"
            </button>
            <div class="controls">
                <button type="button" on:click=move |_| dispatch(ThumbAction::MoveUp(idx))>
                    {locale.move_up_label()}
                </button>
                <button type="button" on:click=move |_| dispatch(ThumbAction::MoveDown(idx))>
                    {locale.move_down_label()}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Counted(Rc<Cell<usize>>);

    impl Release for Counted {
        fn release(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn load_then_drop_releases_once() {
        let count = Rc::new(Cell::new(0));
        let mut lease = DisplayLease::new(Counted(count.clone()));
        assert!(lease.is_held());
        assert!(lease.release());
        assert!(!lease.release());
        drop(lease);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn removal_before_load_releases_eagerly() {
        let count = Rc::new(Cell::new(0));
        let lease = DisplayLease::new(Counted(count.clone()));
        drop(lease);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn leases_release_independently() {
        let count = Rc::new(Cell::new(0));
        let mut leases: Vec<_> = (0..4)
            .map(|_| DisplayLease::new(Counted(count.clone())))
            .collect();
        leases[2].release();
        leases[0].release();
        assert_eq!(count.get(), 2);
        leases.clear();
        assert_eq!(count.get(), 4);
    }
}
