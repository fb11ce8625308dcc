use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use gpui::SharedString;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Read-only view of the form engine's state. Error entries exist only for
/// currently invalid fields; their content is opaque to this crate.
#[derive(Clone, Debug)]
pub struct FormView<T> {
    pub model: T,
    pub field_errors: BTreeMap<FieldKey, SharedString>,
    pub is_valid: bool,
    pub is_submitting: bool,
}

impl<T> FormView<T> {
    pub fn new(model: T) -> Self {
        Self {
            model,
            field_errors: BTreeMap::new(),
            is_valid: true,
            is_submitting: false,
        }
    }

    pub fn field_error(mut self, key: FieldKey, message: impl Into<SharedString>) -> Self {
        self.field_errors.insert(key, message.into());
        self
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}
