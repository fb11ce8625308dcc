use std::time::Duration;

use crate::recency::{FeedbackResult, RecencyTimeout, RecencyTracker};
use crate::status::SubmitStatus;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubmitButtonInput {
    pub is_valid: bool,
    pub is_submitting: bool,
    pub status: SubmitStatus,
    pub disabled: bool,
}

impl SubmitButtonInput {
    pub fn new(status: SubmitStatus) -> Self {
        Self {
            is_valid: true,
            is_submitting: false,
            status,
            disabled: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubmitButtonValue {
    pub status: SubmitStatus,
    pub disabled: bool,
}

impl SubmitButtonValue {
    pub fn resolve(input: SubmitButtonInput, is_recent: bool) -> Self {
        Self {
            status: display_status(input.status, is_recent),
            disabled: !input.is_valid || input.is_submitting || input.disabled,
        }
    }
}

pub struct SubmitButtonUpdate {
    pub value: SubmitButtonValue,
    pub timeout: Option<RecencyTimeout<SubmitStatus>>,
}

/// Derives a submit button's disabled flag and display status. Terminal
/// statuses decay back to [`SubmitStatus::Idle`] once their recency window
/// elapses, so a success or error indicator does not persist indefinitely.
#[derive(Clone)]
pub struct SubmitButtonState {
    recency: RecencyTracker<SubmitStatus>,
}

impl Default for SubmitButtonState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitButtonState {
    pub fn new() -> Self {
        Self {
            recency: RecencyTracker::new(),
        }
    }

    pub fn with_status_window(window: Duration) -> Self {
        Self {
            recency: RecencyTracker::with_window(window),
        }
    }

    /// The returned timeout, present when the status changed, is the decay
    /// for the new status epoch and must be spawned on the host executor.
    pub fn observe(&self, input: SubmitButtonInput) -> FeedbackResult<SubmitButtonUpdate> {
        let timeout = self.recency.observe(input.status)?;
        let is_recent = self.recency.is_recent()?;
        Ok(SubmitButtonUpdate {
            value: SubmitButtonValue::resolve(input, is_recent),
            timeout,
        })
    }
}

fn display_status(status: SubmitStatus, is_recent: bool) -> SubmitStatus {
    if status.is_terminal() && !is_recent {
        return SubmitStatus::Idle;
    }
    status
}
