use std::sync::Arc;

use gpui::SharedString;

use crate::status::{StatusReport, SubmitStatus};
use crate::view::FormView;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

pub type TranslateFn = Arc<dyn Fn(&str) -> SharedString + Send + Sync>;

/// Derives the transient error message shown near a submit control.
///
/// Visibility is trailing state driven by two change triggers, evaluated in
/// this order on every [`observe`](Self::observe) call: a model edit hides a
/// previously shown message, then a status change shows it exactly when the
/// new status is [`SubmitStatus::Rejected`]. When both change in the same
/// update the status trigger wins.
pub struct ErrorMessageState<T> {
    visible: bool,
    last_model: Option<T>,
    last_status: Option<SubmitStatus>,
    translate: TranslateFn,
}

impl<T> Default for ErrorMessageState<T>
where
    T: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ErrorMessageState<T>
where
    T: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::with_translator(|text| text.to_string().into())
    }

    pub fn with_translator(
        translate: impl Fn(&str) -> SharedString + Send + Sync + 'static,
    ) -> Self {
        Self {
            visible: false,
            last_model: None,
            last_status: None,
            translate: Arc::new(translate),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, view: &FormView<T>, report: &StatusReport) -> Option<SharedString> {
        if self.last_model.as_ref() != Some(&view.model) {
            self.visible = false;
            self.last_model = Some(view.model.clone());
        }
        if self.last_status != Some(report.status) {
            self.visible = report.status == SubmitStatus::Rejected;
            self.last_status = Some(report.status);
        }

        if !self.visible {
            return None;
        }
        if let Some(message) = &report.message {
            return Some(message.clone());
        }
        if !view.has_field_errors() {
            return Some((self.translate)(GENERIC_ERROR_MESSAGE));
        }
        // Field-level error UI carries the explanation.
        None
    }
}
