//! Timer command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! one-shot timers. The Core mints a fresh [`TimerId`] per timer, so a
//! cancel can name exactly the schedule it is tearing down.
//!
//! Shell contract: a `Start` request resolves with `Fired` once the deadline
//! passes, or with `Cancelled` if a `Cancel` for the same id arrived first;
//! the `Cancel` request itself also resolves with `Cancelled`. Handlers in
//! the Core act only on `Fired` with a matching recorded id, so either
//! resolution order is safe.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Handle for one scheduled timer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u32);

// Operations the Shell needs to perform for timers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    Start { id: TimerId, millis: u64 },
    Cancel { id: TimerId },
}

// The output from timer operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Fired { id: TimerId },
    Cancelled { id: TimerId },
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    /// Arm a one-shot timer that fires after `millis` milliseconds
    pub fn start(id: TimerId, millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::Start { id, millis })
    }

    /// Cancel a previously armed timer
    pub fn cancel(id: TimerId) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(TimerOperation::Cancel { id })
    }
}

/// Request builder for timer operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: TimerOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: TimerOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = TimerOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
