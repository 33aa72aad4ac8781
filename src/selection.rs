//! Ordered list of picked files and its reflection into the native file input.
//!
//! The list is generic over the file handle so the state machine runs
//! without a browser; the DOM side supplies `web_sys::File` and an
//! [`OrderWriteBack`] bound to the real `<input type=file>`.

use crate::error::Unsupported;

/// Opaque reference to a user-chosen file.
pub trait FileHandle: Clone {
    fn file_name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Destination that receives the displayed order.
pub trait OrderWriteBack<F> {
    /// Replaces the control's file collection with `files`, in order.
    fn attempt_reflect_order(&self, files: &[F]) -> Result<(), Unsupported>;

    /// Empties the control's value.
    fn reset(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    #[default]
    Unknown,
    Supported,
    /// Sticky for the rest of the session.
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<F> {
    pub id: u64,
    pub file: F,
}

/// Render key for one thumbnail row: the entry and its 1-based badge.
/// A row is rebuilt only when either changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    pub id: u64,
    pub position: usize,
}

impl Row {
    pub fn index(&self) -> usize {
        self.position - 1
    }
}

#[derive(Clone, Debug)]
pub enum ListOp<F> {
    Select(Vec<F>),
    MoveUp(usize),
    MoveDown(usize),
    Remove(usize),
    ClearAll,
}

/// What a mutation did, for the caller's logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    /// `None` when no write-back was attempted.
    pub write_back: Option<Result<(), Unsupported>>,
    /// Set when this mutation moved capability to `Unsupported`.
    pub degraded: bool,
}

#[derive(Clone, Debug)]
pub struct FileOrder<F> {
    entries: Vec<Entry<F>>,
    capability: Capability,
    next_id: u64,
}

impl<F> Default for FileOrder<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            capability: Capability::Unknown,
            next_id: 0,
        }
    }
}

impl<F: FileHandle> FileOrder<F> {
    pub fn entries(&self) -> &[Entry<F>] {
        &self.entries
    }

    pub fn files(&self) -> Vec<F> {
        self.entries.iter().map(|e| e.file.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn warning_visible(&self) -> bool {
        self.capability == Capability::Unsupported
    }

    /// Thumbnail rows in display order.
    pub fn rows(&self) -> Vec<Row> {
        self.entries
            .iter()
            .zip(1..)
            .map(|(entry, position)| Row {
                id: entry.id,
                position,
            })
            .collect()
    }

    pub fn file_by_id(&self, id: u64) -> Option<&F> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.file)
    }

    pub fn apply(&mut self, op: ListOp<F>, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        match op {
            ListOp::Select(files) => self.select(files, sink),
            ListOp::MoveUp(idx) => self.move_up(idx, sink),
            ListOp::MoveDown(idx) => self.move_down(idx, sink),
            ListOp::Remove(idx) => self.remove(idx, sink),
            ListOp::ClearAll => self.clear_all(sink),
        }
    }

    /// Replaces the whole list; a new pick supersedes the previous one.
    pub fn select(&mut self, files: Vec<F>, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        self.entries = files
            .into_iter()
            .map(|file| {
                let id = self.next_id;
                self.next_id += 1;
                Entry { id, file }
            })
            .collect();
        self.write_back(sink)
    }

    pub fn move_up(&mut self, idx: usize, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        if idx == 0 || idx >= self.entries.len() {
            return Outcome::default();
        }
        self.entries.swap(idx - 1, idx);
        self.write_back(sink)
    }

    pub fn move_down(&mut self, idx: usize, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        if idx >= self.entries.len().saturating_sub(1) {
            return Outcome::default();
        }
        self.entries.swap(idx, idx + 1);
        self.write_back(sink)
    }

    pub fn remove(&mut self, idx: usize, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        if idx >= self.entries.len() {
            return Outcome::default();
        }
        self.entries.remove(idx);
        self.write_back(sink)
    }

    /// Empties the list and the native control. Capability is untouched.
    pub fn clear_all(&mut self, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        self.entries.clear();
        if let Some(sink) = sink {
            sink.reset();
        }
        Outcome {
            changed: true,
            ..Outcome::default()
        }
    }

    fn write_back(&mut self, sink: Option<&dyn OrderWriteBack<F>>) -> Outcome {
        let mut outcome = Outcome {
            changed: true,
            ..Outcome::default()
        };
        let Some(sink) = sink else {
            return outcome;
        };
        if self.capability == Capability::Unsupported {
            return outcome;
        }

        let result = sink.attempt_reflect_order(&self.files());
        match result {
            Ok(()) => self.capability = Capability::Supported,
            Err(_) => {
                self.capability = Capability::Unsupported;
                outcome.degraded = true;
            }
        }
        outcome.write_back = Some(result);
        outcome
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct TestFile(pub &'static str);

    impl FileHandle for TestFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    /// Records what the native control would hold.
    #[derive(Default)]
    pub(crate) struct FakeInput {
        pub fail: Cell<bool>,
        pub calls: Cell<usize>,
        pub resets: Cell<usize>,
        pub held: RefCell<Vec<TestFile>>,
    }

    impl FakeInput {
        pub(crate) fn failing() -> Self {
            let input = Self::default();
            input.fail.set(true);
            input
        }
    }

    impl OrderWriteBack<TestFile> for FakeInput {
        fn attempt_reflect_order(&self, files: &[TestFile]) -> Result<(), Unsupported> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                return Err(Unsupported::Construct("no DataTransfer".into()));
            }
            *self.held.borrow_mut() = files.to_vec();
            Ok(())
        }

        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
            self.held.borrow_mut().clear();
        }
    }

    pub(crate) fn names(order: &FileOrder<TestFile>) -> Vec<&'static str> {
        order.entries().iter().map(|e| e.file.0).collect()
    }

    fn picked(names: &[&'static str]) -> Vec<TestFile> {
        names.iter().copied().map(TestFile).collect()
    }

    #[test]
    fn select_replaces_previous_pick() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        order.select(picked(&["a.jpg", "b.jpg"]), Some(&input));
        order.select(picked(&["c.jpg"]), Some(&input));
        assert_eq!(names(&order), vec!["c.jpg"]);
        assert_eq!(*input.held.borrow(), picked(&["c.jpg"]));
    }

    #[test]
    fn move_up_swaps_with_previous() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b", "c"]), Some(&input));
        let outcome = order.move_up(2, Some(&input));
        assert!(outcome.changed);
        assert_eq!(names(&order), vec!["a", "c", "b"]);
        assert_eq!(*input.held.borrow(), picked(&["a", "c", "b"]));
    }

    #[test]
    fn move_down_swaps_with_next() {
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b", "c"]), None);
        order.move_down(0, None);
        assert_eq!(names(&order), vec!["b", "a", "c"]);
    }

    #[test]
    fn boundary_moves_are_noops() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b", "c"]), Some(&input));
        let calls = input.calls.get();

        assert_eq!(order.move_up(0, Some(&input)), Outcome::default());
        assert_eq!(order.move_down(2, Some(&input)), Outcome::default());
        assert_eq!(order.move_down(7, Some(&input)), Outcome::default());
        assert_eq!(order.remove(3, Some(&input)), Outcome::default());
        assert_eq!(names(&order), vec!["a", "b", "c"]);
        assert_eq!(input.calls.get(), calls);
    }

    #[test]
    fn remove_shifts_later_entries_down() {
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b", "c"]), None);
        order.remove(1, None);
        assert_eq!(names(&order), vec!["a", "c"]);
        let positions: Vec<_> = order.rows().iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn removing_last_entry_empties_list_and_control() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        order.select(picked(&["a"]), Some(&input));
        order.remove(0, Some(&input));
        assert!(order.is_empty());
        assert!(input.held.borrow().is_empty());
    }

    #[test]
    fn clear_all_resets_control_without_probing() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b"]), Some(&input));
        let calls = input.calls.get();

        let outcome = order.clear_all(Some(&input));
        assert!(outcome.changed);
        assert_eq!(outcome.write_back, None);
        assert!(order.is_empty());
        assert_eq!(input.resets.get(), 1);
        assert_eq!(input.calls.get(), calls);
        assert_eq!(order.capability(), Capability::Supported);
    }

    #[test]
    fn successful_write_back_hides_warning() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        assert!(!order.warning_visible());
        let outcome = order.select(picked(&["a", "b"]), Some(&input));
        assert_eq!(outcome.write_back, Some(Ok(())));
        assert_eq!(order.capability(), Capability::Supported);
        assert!(!order.warning_visible());
    }

    #[test]
    fn failed_write_back_shows_warning_for_the_session() {
        let input = FakeInput::failing();
        let mut order = FileOrder::default();
        let outcome = order.select(picked(&["a", "b", "c"]), Some(&input));
        assert!(outcome.degraded);
        assert!(matches!(outcome.write_back, Some(Err(Unsupported::Construct(_)))));
        assert!(order.warning_visible());

        // The runtime recovering later must not flicker the warning off.
        input.fail.set(false);
        let calls = input.calls.get();
        let outcome = order.move_down(0, Some(&input));
        assert!(outcome.changed);
        assert_eq!(outcome.write_back, None);
        assert!(!outcome.degraded);
        order.remove(0, Some(&input));
        order.select(picked(&["d"]), Some(&input));
        order.clear_all(Some(&input));
        assert!(order.warning_visible());
        assert_eq!(input.calls.get(), calls);
    }

    #[test]
    fn degraded_order_still_reorders_list() {
        let input = FakeInput::failing();
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b"]), Some(&input));
        order.move_up(1, Some(&input));
        assert_eq!(names(&order), vec!["b", "a"]);
    }

    #[test]
    fn missing_control_keeps_capability() {
        let mut order = FileOrder::default();
        let outcome = order.select(picked(&["a"]), None);
        assert!(outcome.changed);
        assert_eq!(outcome.write_back, None);
        assert_eq!(order.capability(), Capability::Unknown);
    }

    #[test]
    fn entry_ids_follow_files_through_reorder() {
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b"]), None);
        let before: Vec<_> = order.entries().iter().map(|e| (e.id, e.file.0)).collect();
        order.move_down(0, None);
        let after: Vec<_> = order.entries().iter().map(|e| (e.id, e.file.0)).collect();
        assert_eq!(after, vec![before[1], before[0]]);
    }

    #[test]
    fn rows_follow_entries_and_resolve_files() {
        let mut order = FileOrder::default();
        order.select(picked(&["a", "b", "c"]), None);
        let ids: Vec<u64> = order.entries().iter().map(|e| e.id).collect();
        order.move_up(2, None);

        let rows = order.rows();
        assert_eq!(
            rows,
            vec![
                Row { id: ids[0], position: 1 },
                Row { id: ids[2], position: 2 },
                Row { id: ids[1], position: 3 },
            ]
        );
        assert_eq!(order.file_by_id(ids[2]), Some(&TestFile("c")));
        assert_eq!(rows[1].index(), 1);

        order.remove(0, None);
        assert_eq!(order.file_by_id(ids[0]), None);
        assert_eq!(order.rows()[0], Row { id: ids[2], position: 1 });
    }

    #[test]
    fn apply_dispatches_ops() {
        let input = FakeInput::default();
        let mut order = FileOrder::default();
        order.apply(ListOp::Select(picked(&["a", "b", "c"])), Some(&input));
        order.apply(ListOp::MoveDown(0), Some(&input));
        order.apply(ListOp::Remove(2), Some(&input));
        assert_eq!(names(&order), vec!["b", "a"]);
        order.apply(ListOp::ClearAll, Some(&input));
        assert!(order.is_empty());
    }
}
