//! A two-pane multi-select list editor for egui.
//!
//! [`MultiSelect`] owns a left and a right sequence of items and renders them
//! as two columns with a center button cluster (↑, ⇆, ↓). Rows can be moved
//! between the columns and reordered within a column by drag & drop, by the
//! buttons, or with the arrow keys while the widget has keyboard focus. A
//! single row is focused at a time; every mutation reports the moved item and
//! both resulting sequences through the optional change callback and the
//! returned [`MultiSelectResponse`].
//!
//! # Example
//! ```no_run
//! use eframe::egui::{CentralPanel, Context};
//! use eframe::{App, Frame, NativeOptions};
//! use egui_multiselect::MultiSelect;
//!
//! struct PickerApp {
//!     picker: MultiSelect<String>,
//! }
//!
//! impl App for PickerApp {
//!     fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
//!         CentralPanel::default().show(ctx, |ui| {
//!             let response = self.picker.show(ui);
//!             if let Some(change) = response.change {
//!                 println!("moved a row: {:?} -> {:?}", change.from, change.to);
//!             }
//!         });
//!     }
//! }
//!
//! pub fn main() {
//!     eframe::run_native(
//!         "MultiSelect Example",
//!         NativeOptions::default(),
//!         Box::new(|_| {
//!             Box::new(PickerApp {
//!                 picker: MultiSelect::new(
//!                     vec!["Apple".to_string(), "Pear".to_string()],
//!                     vec!["Orange".to_string()],
//!                 )
//!                 .left_heading("Available")
//!                 .right_heading("Chosen"),
//!             })
//!         }),
//!     );
//! }
//! ```

pub use item::MultiSelectItem;
pub use state::{Change, ChangeEvent, Container, Focus, MultiSelect};
pub use widget::MultiSelectResponse;

mod item;
mod state;
mod widget;

pub mod utils {
    /// Removes the value at `from` and reinserts it at `to`, with `to`
    /// interpreted against the already-shortened vec and clamped to append
    /// when past the end. Returns the final index of the moved value, or
    /// `None` when `from` is out of bounds.
    pub fn splice_move<T>(vec: &mut Vec<T>, from: usize, to: usize) -> Option<usize> {
        if from >= vec.len() {
            return None;
        }

        let item = vec.remove(from);
        let to = to.min(vec.len());
        vec.insert(to, item);
        Some(to)
    }

    #[cfg(test)]
    mod tests {
        use super::splice_move;

        #[test]
        fn moves_forward_against_shortened_vec() {
            let mut v = vec![1, 2, 3, 4];
            assert_eq!(splice_move(&mut v, 0, 2), Some(2));
            assert_eq!(v, [2, 3, 1, 4]);
        }

        #[test]
        fn clamps_to_append_and_rejects_bad_source() {
            let mut v = vec![1, 2, 3];
            assert_eq!(splice_move(&mut v, 0, 99), Some(2));
            assert_eq!(v, [2, 3, 1]);
            assert_eq!(splice_move(&mut v, 3, 0), None);
        }
    }
}
