use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use std::time::Duration;

use futures_timer::Delay;

pub const DEFAULT_RECENCY_WINDOW: Duration = Duration::from_millis(5_000);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedbackError {
    StatePoisoned(&'static str),
}

impl Display for FeedbackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackError::StatePoisoned(context) => {
                write!(f, "feedback state lock poisoned while {context}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

pub type FeedbackResult<T> = Result<T, FeedbackError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecencyEpoch(pub u64);

struct RecencyState<V> {
    window: Duration,
    tracked: Option<V>,
    epoch: RecencyEpoch,
    is_recent: bool,
}

/// Tracks whether the most recently observed value is still within its
/// freshness window. Each observed change starts a new epoch with recency
/// `true`; the matching [`RecencyTimeout`] flips it to `false` once the
/// window elapses, unless a newer epoch superseded it first.
pub struct RecencyTracker<V> {
    state: Arc<RwLock<RecencyState<V>>>,
}

impl<V> Clone for RecencyTracker<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<V> Default for RecencyTracker<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecencyTracker<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_window(DEFAULT_RECENCY_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(RecencyState {
                window,
                tracked: None,
                epoch: RecencyEpoch(0),
                is_recent: true,
            })),
        }
    }

    pub fn is_recent(&self) -> FeedbackResult<bool> {
        Ok(read_lock(&self.state, "reading recency flag")?.is_recent)
    }

    pub fn window(&self) -> FeedbackResult<Duration> {
        Ok(read_lock(&self.state, "reading recency window")?.window)
    }

    /// Returns `None` when the value is unchanged; otherwise resets recency
    /// to `true` synchronously and returns the deferred expiry for the new
    /// epoch, which the caller spawns on its executor.
    pub fn observe(&self, value: V) -> FeedbackResult<Option<RecencyTimeout<V>>> {
        let mut state = write_lock(&self.state, "observing tracked value")?;
        if state.tracked.as_ref() == Some(&value) {
            return Ok(None);
        }
        state.tracked = Some(value);
        Ok(Some(arm(&self.state, &mut state)))
    }

    // A changed window begins a new epoch, exactly like a changed value.
    pub fn set_window(&self, window: Duration) -> FeedbackResult<Option<RecencyTimeout<V>>> {
        let mut state = write_lock(&self.state, "updating recency window")?;
        if state.window == window {
            return Ok(None);
        }
        state.window = window;
        Ok(Some(arm(&self.state, &mut state)))
    }
}

fn arm<V>(
    shared: &Arc<RwLock<RecencyState<V>>>,
    state: &mut RecencyState<V>,
) -> RecencyTimeout<V> {
    state.epoch = RecencyEpoch(state.epoch.0 + 1);
    state.is_recent = true;
    RecencyTimeout {
        state: Arc::downgrade(shared),
        epoch: state.epoch,
        window: state.window,
    }
}

/// Deferred expiry for one tracker epoch. A superseded or torn-down epoch
/// makes the expiry a no-op.
pub struct RecencyTimeout<V> {
    state: Weak<RwLock<RecencyState<V>>>,
    epoch: RecencyEpoch,
    window: Duration,
}

impl<V> RecencyTimeout<V> {
    pub fn epoch(&self) -> RecencyEpoch {
        self.epoch
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub async fn elapse(self) -> FeedbackResult<()> {
        Delay::new(self.window).await;
        let Some(shared) = self.state.upgrade() else {
            return Ok(());
        };
        let mut state = write_lock(&shared, "expiring recency window")?;
        if state.epoch == self.epoch {
            state.is_recent = false;
        }
        Ok(())
    }
}

pub(crate) fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FeedbackResult<RwLockReadGuard<'a, T>> {
    lock.read()
        .map_err(|_| FeedbackError::StatePoisoned(context))
}

pub(crate) fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FeedbackResult<RwLockWriteGuard<'a, T>> {
    lock.write()
        .map_err(|_| FeedbackError::StatePoisoned(context))
}
