pub mod error_message;
pub mod recency;
pub mod status;
pub mod submit_button;
pub mod view;

pub use error_message::{ErrorMessageState, GENERIC_ERROR_MESSAGE, TranslateFn};
pub use recency::{
    DEFAULT_RECENCY_WINDOW, FeedbackError, FeedbackResult, RecencyEpoch, RecencyTimeout,
    RecencyTracker,
};
pub use status::{StatusReport, SubmitStatus};
pub use submit_button::{
    SubmitButtonInput, SubmitButtonState, SubmitButtonUpdate, SubmitButtonValue,
};
pub use view::{FieldKey, FormView};
