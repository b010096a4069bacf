use egui::Id;

/// A record that can live in one of the two lists.
///
/// `id` must be unique across *both* lists and stable across frames; it is what
/// drag state and focus highlighting are keyed on. Any extra fields on the
/// implementing type ride along untouched, the widget only ever looks at these
/// two accessors.
pub trait MultiSelectItem {
    fn id(&self) -> Id;

    /// Display name used by the default row template.
    fn name(&self) -> &str;
}

impl MultiSelectItem for String {
    fn id(&self) -> Id {
        Id::new(self)
    }

    fn name(&self) -> &str {
        self
    }
}

impl MultiSelectItem for &'static str {
    fn id(&self) -> Id {
        Id::new(self)
    }

    fn name(&self) -> &str {
        self
    }
}
