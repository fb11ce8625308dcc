use gpui::SharedString;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

impl SubmitStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Fulfilled | Self::Rejected)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusReport {
    pub status: SubmitStatus,
    pub message: Option<SharedString>,
}

impl StatusReport {
    pub fn new(status: SubmitStatus) -> Self {
        Self {
            status,
            message: None,
        }
    }

    pub fn message(mut self, value: impl Into<SharedString>) -> Self {
        self.message = Some(value.into());
        self
    }
}
