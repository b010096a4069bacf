use egui::{Id, Key, Vec2};
use tracing::debug;

use crate::utils::splice_move;

/// One of the two fixed slots holding an ordered item sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    Left,
    Right,
}

impl Container {
    pub fn other(self) -> Self {
        match self {
            Container::Left => Container::Right,
            Container::Right => Container::Left,
        }
    }
}

/// The single focused row: which container it is in and its position there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Focus {
    pub container: Container,
    pub index: usize,
}

/// A completed move. `index` is the moved item's final position in `to`;
/// for a reorder `from` and `to` name the same container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change {
    pub from: Container,
    pub to: Container,
    pub index: usize,
}

/// Borrowed view of a completed move, handed to the change callback together
/// with both resulting sequences.
pub struct ChangeEvent<'a, T> {
    pub moved: &'a T,
    pub from: Container,
    pub to: Container,
    pub left: &'a [T],
    pub right: &'a [T],
}

/// Ephemeral description of the row being dragged, valid for one gesture.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DragPayload {
    pub source: Container,
    pub index: usize,
}

#[derive(Default)]
pub(crate) struct DragState {
    pub payload: Option<DragPayload>,
    /// Pointer offset from the dragged row's origin when the drag began
    pub delta: Option<Vec2>,
    /// Insertion slot under the pointer, recomputed every frame of a drag
    pub hover: Option<(Container, usize)>,
}

/// Two-pane multi-select list editor.
///
/// Owns the left and right sequences and the focus pointer. All mutation goes
/// through the move/reorder operations below (or the gestures that call them
/// from [`MultiSelect::show`]); each mutation ends by reporting the result to
/// the optional change callback.
pub struct MultiSelect<T> {
    pub(crate) left: Vec<T>,
    pub(crate) right: Vec<T>,
    focus: Option<Focus>,
    pub(crate) drag: DragState,
    pub(crate) scroll_pending: bool,

    pub(crate) id_salt: Id,
    pub(crate) left_heading: Option<String>,
    pub(crate) right_heading: Option<String>,
    pub(crate) empty_left_text: Option<String>,
    pub(crate) empty_right_text: Option<String>,
    pub(crate) move_on_arrow_click: bool,
    pub(crate) auto_scroll: bool,
    pub(crate) keyboard_navigation: bool,
    on_change: Option<Box<dyn FnMut(ChangeEvent<T>)>>,
}

impl<T> MultiSelect<T> {
    /// Seeds the two sequences. Initial focus lands on the first row of the
    /// right container, falling back to the left one; with both sequences
    /// empty there is nothing to focus.
    pub fn new(left: Vec<T>, right: Vec<T>) -> Self {
        let focus = if !right.is_empty() {
            Some(Focus {
                container: Container::Right,
                index: 0,
            })
        } else if !left.is_empty() {
            Some(Focus {
                container: Container::Left,
                index: 0,
            })
        } else {
            None
        };

        Self {
            left,
            right,
            focus,
            drag: DragState::default(),
            scroll_pending: false,
            id_salt: Id::new("multi_select"),
            left_heading: None,
            right_heading: None,
            empty_left_text: None,
            empty_right_text: None,
            move_on_arrow_click: false,
            auto_scroll: false,
            keyboard_navigation: true,
            on_change: None,
        }
    }

    /// Distinguishes multiple widget instances in the same ui scope.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    pub fn left_heading(mut self, heading: impl Into<String>) -> Self {
        self.left_heading = Some(heading.into());
        self
    }

    pub fn right_heading(mut self, heading: impl Into<String>) -> Self {
        self.right_heading = Some(heading.into());
        self
    }

    /// Placeholder text shown when the left sequence is empty.
    pub fn empty_left_text(mut self, text: impl Into<String>) -> Self {
        self.empty_left_text = Some(text.into());
        self
    }

    /// Placeholder text shown when the right sequence is empty.
    pub fn empty_right_text(mut self, text: impl Into<String>) -> Self {
        self.empty_right_text = Some(text.into());
        self
    }

    /// When set, the ↑/↓ buttons reorder the focused row of the left
    /// container in place instead of only moving focus.
    pub fn move_on_arrow_click(mut self, enabled: bool) -> Self {
        self.move_on_arrow_click = enabled;
        self
    }

    /// When set, a focus change scrolls the focused row into view on the
    /// next frame.
    pub fn auto_scroll(mut self, enabled: bool) -> Self {
        self.auto_scroll = enabled;
        self
    }

    /// Arrow-key handling while the widget has keyboard focus. On by default;
    /// the listener is scoped to the widget, never to the whole window.
    pub fn keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = enabled;
        self
    }

    /// Called after every mutating operation with the moved item, the source
    /// and destination containers and both resulting sequences.
    pub fn on_change(mut self, callback: impl FnMut(ChangeEvent<T>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn items(&self, container: Container) -> &[T] {
        match container {
            Container::Left => &self.left,
            Container::Right => &self.right,
        }
    }

    pub fn left_items(&self) -> &[T] {
        &self.left
    }

    pub fn right_items(&self) -> &[T] {
        &self.right
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Returns ownership of both sequences, consuming the widget.
    pub fn into_items(self) -> (Vec<T>, Vec<T>) {
        (self.left, self.right)
    }

    fn items_mut(&mut self, container: Container) -> &mut Vec<T> {
        match container {
            Container::Left => &mut self.left,
            Container::Right => &mut self.right,
        }
    }

    /// Moves the item at `from_index` out of `from` and inserts it into `to`
    /// immediately after `to_index` (appending when `to_index` points at or
    /// past the last row). A stale `from_index` or an empty source makes this
    /// a no-op.
    pub fn move_across(
        &mut self,
        from: Container,
        to: Container,
        from_index: usize,
        to_index: usize,
    ) -> Option<Change> {
        self.transfer_at(from, to, from_index, to_index.saturating_add(1))
    }

    /// Transfer with an explicit insertion slot (`0..=len` of the
    /// destination). The drop handler calls this with the slot under the
    /// pointer; [`MultiSelect::move_across`] derives the slot from its
    /// insert-after contract.
    pub(crate) fn transfer_at(
        &mut self,
        from: Container,
        to: Container,
        from_index: usize,
        insert_at: usize,
    ) -> Option<Change> {
        debug_assert_ne!(from, to);

        let source = self.items_mut(from);
        if from_index >= source.len() {
            return None;
        }
        let item = source.remove(from_index);
        let source_len = source.len();

        let dest = self.items_mut(to);
        let insert_at = insert_at.min(dest.len());
        dest.insert(insert_at, item);

        // focus stays next to the hole the move left behind, or follows the
        // item when the source ran empty
        if source_len == 0 {
            self.focus_item(to, insert_at);
        } else {
            self.focus_item(from, from_index.min(source_len - 1));
        }

        debug!(?from, ?to, from_index, insert_at, "transfer");
        let change = Change {
            from,
            to,
            index: insert_at,
        };
        self.emit(change);
        Some(change)
    }

    /// Reorders within one container: the item at `from_index` is removed and
    /// reinserted at `to_index`, interpreted against the already-shortened
    /// sequence. Out-of-range `to_index` clamps to append. Focus is left
    /// untouched.
    pub fn move_within(
        &mut self,
        container: Container,
        from_index: usize,
        to_index: usize,
    ) -> Option<Change> {
        let items = self.items_mut(container);
        let to_index = splice_move(items, from_index, to_index)?;

        debug!(?container, from_index, to_index, "reorder");
        let change = Change {
            from: container,
            to: container,
            index: to_index,
        };
        self.emit(change);
        Some(change)
    }

    /// Unconditionally points focus at `(container, index)`, clamped back
    /// into bounds. No sequence mutation happens here.
    pub fn focus_item(&mut self, container: Container, index: usize) {
        self.focus = Some(Focus { container, index });
        if self.auto_scroll {
            self.scroll_pending = true;
        }
        self.normalize_focus();
    }

    /// Arrow-key state machine over the focus pointer. Up/down clamp within
    /// the focused container, left/right hop to the matching row of the other
    /// container. Hopping toward an empty container is rejected; anything
    /// that is not an arrow key is ignored.
    pub fn handle_key(&mut self, key: Key) {
        let focus = match self.focus {
            Some(focus) => focus,
            None => return,
        };

        match key {
            Key::ArrowUp => self.focus_item(focus.container, focus.index.saturating_sub(1)),
            Key::ArrowDown => {
                let len = self.items(focus.container).len();
                self.focus_item(focus.container, (focus.index + 1).min(len.saturating_sub(1)));
            }
            Key::ArrowLeft if focus.container == Container::Right => {
                if self.left.is_empty() {
                    return;
                }
                self.focus_item(Container::Left, focus.index.min(self.left.len() - 1));
            }
            Key::ArrowRight if focus.container == Container::Left => {
                if self.right.is_empty() {
                    return;
                }
                self.focus_item(Container::Right, focus.index.min(self.right.len() - 1));
            }
            _ => {}
        }
    }

    /// ↑ button: reorders the focused left row upward when
    /// `move_on_arrow_click` is set, then shifts focus like the key handler.
    pub fn button_up(&mut self) -> Option<Change> {
        let focus = self.focus?;
        let mut change = None;
        if self.move_on_arrow_click && focus.container == Container::Left {
            change = self.move_within(Container::Left, focus.index, focus.index.saturating_sub(1));
        }
        self.handle_key(Key::ArrowUp);
        change
    }

    /// ↓ button: counterpart of [`MultiSelect::button_up`].
    pub fn button_down(&mut self) -> Option<Change> {
        let focus = self.focus?;
        let mut change = None;
        if self.move_on_arrow_click && focus.container == Container::Left {
            let to = (focus.index + 1).min(self.left.len().saturating_sub(1));
            change = self.move_within(Container::Left, focus.index, to);
        }
        self.handle_key(Key::ArrowDown);
        change
    }

    /// ⇆ button: appends the focused row to the end of the other container.
    pub fn button_toggle(&mut self) -> Option<Change> {
        let focus = self.focus?;
        let dest = focus.container.other();
        let insert_at = self.items(dest).len();
        self.transfer_at(focus.container, dest, focus.index, insert_at)
    }

    pub(crate) fn buttons_enabled(&self) -> bool {
        self.focus.is_some() && !(self.left.is_empty() && self.right.is_empty())
    }

    /// Keeps the focus invariant: `None` exactly when both sequences are
    /// empty, otherwise a valid in-bounds position.
    fn normalize_focus(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            self.focus = None;
            return;
        }
        if let Some(focus) = &mut self.focus {
            if match focus.container {
                Container::Left => self.left.is_empty(),
                Container::Right => self.right.is_empty(),
            } {
                focus.container = focus.container.other();
                focus.index = 0;
            }
            let len = match focus.container {
                Container::Left => self.left.len(),
                Container::Right => self.right.len(),
            };
            focus.index = focus.index.min(len - 1);
        }
    }

    fn emit(&mut self, change: Change) {
        if let Some(on_change) = &mut self.on_change {
            let moved = match change.to {
                Container::Left => &self.left[change.index],
                Container::Right => &self.right[change.index],
            };
            on_change(ChangeEvent {
                moved,
                from: change.from,
                to: change.to,
                left: &self.left,
                right: &self.right,
            });
        }
    }
}
