use egui::{
    self, vec2, Align, Button, Color32, CursorIcon, Id, Key, Layout, Order, Pos2, Rect, RichText,
    ScrollArea, Sense, Shape, Ui, Vec2,
};
use tracing::debug;

use crate::state::{DragPayload, DragState};
use crate::{Change, Container, Focus, MultiSelect, MultiSelectItem};

/// What [`MultiSelect::show`] hands back: the completed move of this frame,
/// if any, and the response covering the whole widget.
pub struct MultiSelectResponse {
    pub change: Option<Change>,
    pub response: egui::Response,
}

/// Gestures picked up while drawing, applied once drawing is done so a
/// mid-frame read never sees a half-applied move.
enum UiAction {
    Focus(Container, usize),
    Key(Key),
    Up,
    Down,
    Toggle,
}

struct ColumnOutput {
    list_rect: Rect,
    rows: Vec<Rect>,
}

impl<T: MultiSelectItem> MultiSelect<T> {
    /// Renders the widget with the default row template (the item's name).
    pub fn show(&mut self, ui: &mut Ui) -> MultiSelectResponse {
        self.show_with(ui, |ui, item: &T, _index, _container, _focused| {
            ui.label(item.name());
        })
    }

    /// Renders the widget with a caller template. The closure draws one row
    /// and receives the item, its index, its container and the focus flag;
    /// the focused-row background is painted regardless.
    pub fn show_with(
        &mut self,
        ui: &mut Ui,
        mut item_ui: impl FnMut(&mut Ui, &T, usize, Container, bool),
    ) -> MultiSelectResponse {
        let base_id = ui.make_persistent_id(self.id_salt);
        let focus = self.focus();
        let buttons_enabled = self.buttons_enabled();
        let mut actions: Vec<UiAction> = Vec::new();

        let spacing = ui.spacing().item_spacing.x;
        let buttons_width = 32.0;
        let column_width = ((ui.available_width() - buttons_width - spacing * 2.0) / 2.0).max(0.0);

        // field-level borrows so the drawing closure can read the sequences
        // while mutating the drag state
        let MultiSelect {
            left,
            right,
            drag,
            scroll_pending,
            left_heading,
            right_heading,
            empty_left_text,
            empty_right_text,
            ..
        } = self;

        let outer = ui.horizontal(|ui| {
            let left_out = draw_column(
                ui,
                base_id,
                Container::Left,
                left,
                left_heading.as_deref(),
                empty_left_text.as_deref(),
                focus,
                drag,
                scroll_pending,
                column_width,
                &mut actions,
                &mut item_ui,
            );

            draw_buttons(ui, buttons_width, buttons_enabled, &mut actions);

            let right_out = draw_column(
                ui,
                base_id,
                Container::Right,
                right,
                right_heading.as_deref(),
                empty_right_text.as_deref(),
                focus,
                drag,
                scroll_pending,
                column_width,
                &mut actions,
                &mut item_ui,
            );

            (left_out, right_out)
        });
        let (left_out, right_out) = outer.inner;

        let mut change = None;

        // drop bookkeeping: track the insertion slot under the pointer while
        // a drag is live, complete the move when the pointer is released
        if let Some(payload) = self.drag.payload {
            self.drag.hover = hover_slot(ui, self.drag.delta, &left_out, &right_out);
            if ui.input().pointer.any_released() {
                if let Some((target, slot)) = self.drag.hover {
                    debug!(?payload, ?target, slot, "drop");
                    change = if payload.source == target {
                        let to = if slot > payload.index { slot - 1 } else { slot };
                        self.move_within(target, payload.index, to)
                    } else {
                        self.transfer_at(payload.source, target, payload.index, slot)
                    };
                }
                self.drag = DragState::default();
            }
        }

        // arrow keys act on the focus pointer, but only while this widget
        // holds egui's keyboard focus
        if self.keyboard_navigation && ui.memory().has_focus(base_id) {
            for key in [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight] {
                if ui.input().key_pressed(key) {
                    actions.push(UiAction::Key(key));
                }
            }
        }

        for action in actions {
            match action {
                UiAction::Focus(container, index) => self.focus_item(container, index),
                UiAction::Key(key) => self.handle_key(key),
                UiAction::Up => {
                    if let Some(c) = self.button_up() {
                        change = Some(c);
                    }
                }
                UiAction::Down => {
                    if let Some(c) = self.button_down() {
                        change = Some(c);
                    }
                }
                UiAction::Toggle => {
                    if let Some(c) = self.button_toggle() {
                        change = Some(c);
                    }
                }
            }
        }

        // rows claimed their clicks while drawing, this picks up the rest of
        // the widget area and makes it keyboard-focusable
        let response = ui.interact(outer.response.rect, base_id, Sense::click());
        if response.clicked() {
            response.request_focus();
        }

        MultiSelectResponse { change, response }
    }
}

fn draw_column<T: MultiSelectItem>(
    ui: &mut Ui,
    base_id: Id,
    container: Container,
    items: &[T],
    heading: Option<&str>,
    empty_text: Option<&str>,
    focus: Option<Focus>,
    drag: &mut DragState,
    scroll_pending: &mut bool,
    width: f32,
    actions: &mut Vec<UiAction>,
    item_ui: &mut dyn FnMut(&mut Ui, &T, usize, Container, bool),
) -> ColumnOutput {
    ui.allocate_ui_with_layout(
        vec2(width, ui.available_height()),
        Layout::top_down(Align::Min),
        |ui| {
            ui.set_width(width);
            if let Some(heading) = heading {
                ui.label(RichText::new(heading).strong());
            }

            ScrollArea::vertical()
                .id_source(base_id.with(container).with("scroll"))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut rows = Vec::with_capacity(items.len());
                    let dragging = drag.payload.is_some();
                    let list_response = draw_list(ui, dragging, |ui| {
                        if items.is_empty() {
                            match empty_text {
                                Some(text) => {
                                    ui.label(RichText::new(text).weak());
                                }
                                None => {
                                    // keep an empty list droppable
                                    ui.allocate_space(vec2(
                                        ui.available_width(),
                                        ui.spacing().interact_size.y,
                                    ));
                                }
                            }
                        }
                        for (index, item) in items.iter().enumerate() {
                            let rect = draw_row(
                                ui,
                                base_id,
                                container,
                                index,
                                item,
                                focus,
                                drag,
                                scroll_pending,
                                actions,
                                item_ui,
                            );
                            rows.push(rect);
                        }
                    });

                    ColumnOutput {
                        list_rect: list_response.rect,
                        rows,
                    }
                })
                .inner
        },
    )
    .inner
}

/// Draws one row either inline or, while it is being dragged, hovering at the
/// pointer with a greyed placeholder keeping its slot in the list. Returns
/// the row's list rect.
fn draw_row<T: MultiSelectItem>(
    ui: &mut Ui,
    base_id: Id,
    container: Container,
    index: usize,
    item: &T,
    focus: Option<Focus>,
    drag: &mut DragState,
    scroll_pending: &mut bool,
    actions: &mut Vec<UiAction>,
    item_ui: &mut dyn FnMut(&mut Ui, &T, usize, Container, bool),
) -> Rect {
    let row_id = base_id.with(container).with(item.id());
    let is_focused = focus
        == Some(Focus {
            container,
            index,
        });
    let is_being_dragged = ui.memory().is_being_dragged(row_id);

    if !is_being_dragged {
        let scope = ui.scope(|ui| row_body(ui, item, index, container, is_focused, item_ui));
        let rect = scope.response.rect;
        let response = ui.interact(rect, row_id, Sense::click_and_drag());

        if response.hovered() {
            ui.output().cursor_icon = CursorIcon::Grab;
        }
        // a click only moves focus, the sequences stay untouched
        if response.clicked() {
            actions.push(UiAction::Focus(container, index));
            ui.memory().request_focus(base_id);
        }
        if response.drag_started() {
            drag.payload = Some(DragPayload {
                source: container,
                index,
            });
            let pointer = response.interact_pointer_pos().unwrap_or(Pos2::default());
            drag.delta = Some(rect.min.to_vec2() - pointer.to_vec2());
        }
        if *scroll_pending && is_focused {
            ui.scroll_to_rect(rect, None);
            *scroll_pending = false;
        }
        return rect;
    }

    ui.output().cursor_icon = CursorIcon::Grabbing;

    // Paint the dragged row at the pointer on the tooltip layer. Anything on
    // that layer gets an empty response, so it cannot swallow the drop.
    let pointer_pos = ui
        .ctx()
        .pointer_interact_pos()
        .unwrap_or(ui.next_widget_position());
    egui::Area::new(base_id.with("dragged_row"))
        .order(Order::Tooltip)
        .interactable(false)
        .fixed_pos(pointer_pos + drag.delta.unwrap_or(Vec2::ZERO))
        .show(ui.ctx(), |ui| {
            row_body(ui, item, index, container, is_focused, item_ui);
        });

    let scope = ui.scope(|ui| {
        // disabled style for the placeholder
        ui.add_enabled_ui(false, |ui| {
            row_body(ui, item, index, container, is_focused, item_ui);
        });
    });
    scope.response.rect
}

fn row_body<T: MultiSelectItem>(
    ui: &mut Ui,
    item: &T,
    index: usize,
    container: Container,
    is_focused: bool,
    item_ui: &mut dyn FnMut(&mut Ui, &T, usize, Container, bool),
) {
    let fill = if is_focused {
        ui.visuals().selection.bg_fill
    } else {
        Color32::TRANSPARENT
    };
    egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::style::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            item_ui(ui, item, index, container, is_focused);
        });
}

/// Draws the list background and body; the background lights up with the
/// active widget style while it is hovered during a drag.
fn draw_list(ui: &mut Ui, is_drop_target: bool, list_body: impl FnOnce(&mut Ui)) -> egui::Response {
    let margin = Vec2::splat(4.0);

    let outer_rect_bounds = ui.available_rect_before_wrap();
    let inner_rect = outer_rect_bounds.shrink2(margin);
    let where_to_put_background = ui.painter().add(Shape::Noop);

    let mut content_ui = ui.child_ui(inner_rect, *ui.layout());
    list_body(&mut content_ui);

    let outer_rect = Rect::from_min_max(outer_rect_bounds.min, content_ui.min_rect().max + margin);
    let (rect, response) = ui.allocate_at_least(outer_rect.size(), Sense::hover());

    let style = if is_drop_target && response.hovered() {
        ui.visuals().widgets.active
    } else {
        ui.visuals().widgets.inactive
    };

    ui.painter().set(
        where_to_put_background,
        epaint::RectShape {
            rounding: style.rounding,
            fill: style.bg_fill,
            stroke: style.bg_stroke,
            rect,
        },
    );

    response
}

fn draw_buttons(ui: &mut Ui, width: f32, enabled: bool, actions: &mut Vec<UiAction>) {
    ui.allocate_ui_with_layout(
        vec2(width, ui.available_height()),
        Layout::top_down(Align::Center),
        |ui| {
            ui.add_space((ui.available_height() / 2.0 - 40.0).max(0.0));
            if ui
                .add_enabled(enabled, Button::new("↑"))
                .on_hover_text("Move the item upwards")
                .clicked()
            {
                actions.push(UiAction::Up);
            }
            if ui
                .add_enabled(enabled, Button::new("⇆"))
                .on_hover_text("Toggle the item")
                .clicked()
            {
                actions.push(UiAction::Toggle);
            }
            if ui
                .add_enabled(enabled, Button::new("↓"))
                .on_hover_text("Move the item downwards")
                .clicked()
            {
                actions.push(UiAction::Down);
            }
        },
    );
}

/// Insertion slot under the pointer: the position of the first row whose
/// vertical center lies below it, in whichever list the pointer is over.
fn hover_slot(
    ui: &Ui,
    delta: Option<Vec2>,
    left: &ColumnOutput,
    right: &ColumnOutput,
) -> Option<(Container, usize)> {
    let pointer_pos = ui.input().pointer.hover_pos()?;
    let pointer_pos = pointer_pos + delta.unwrap_or(Vec2::ZERO);

    for (container, out) in [(Container::Left, left), (Container::Right, right)] {
        if !out.list_rect.contains(pointer_pos) {
            continue;
        }
        let mut slot = out.rows.len();
        for (index, rect) in out.rows.iter().enumerate() {
            if pointer_pos.y < rect.center().y {
                slot = index;
                break;
            }
        }
        return Some((container, slot));
    }
    None
}
