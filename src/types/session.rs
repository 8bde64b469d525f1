use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;

/// A poll scheduled through the shell timer, cancellable by id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledPoll {
    pub timer: TimerId,
    pub delay_ms: u64,
}

/// One continuous run of status polling, from modal open to modal close.
///
/// The `epoch` ties every outstanding request to the session that issued it:
/// `start()` bumps it, so a completion from an earlier session run compares
/// unequal and is dropped without rendering or rescheduling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollingSession {
    pub active: bool,
    pub hydrated: bool,
    pub epoch: u32,
    pub pending_poll: Option<ScheduledPoll>,
}

impl PollingSession {
    /// True when a completion issued under `epoch` should still be applied.
    pub fn accepts(&self, epoch: u32) -> bool {
        self.active && epoch == self.epoch
    }
}
