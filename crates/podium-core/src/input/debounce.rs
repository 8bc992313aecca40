//! Coalescing of rapid repeated input, applied before events reach a session.

use log::trace;

use super::{InputEvent, InputProvider};

pub const DEFAULT_DEBOUNCE_MS: u64 = 120;

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_ms(&self) -> u64 {
        self()
    }
}

/// Drops an event equal to the last accepted one when it arrives less than
/// `window_ms` later. Different events always pass.
#[derive(Debug)]
pub struct DebouncedInput<IN, C> {
    inner: IN,
    clock: C,
    window_ms: u64,
    last_accepted: Option<(InputEvent, u64)>,
}

impl<IN, C> DebouncedInput<IN, C>
where
    IN: InputProvider,
    C: Clock,
{
    pub fn new(inner: IN, clock: C, window_ms: u64) -> Self {
        Self {
            inner,
            clock,
            window_ms,
            last_accepted: None,
        }
    }

    pub fn inner_mut(&mut self) -> &mut IN {
        &mut self.inner
    }

    fn is_repeat(&self, event: InputEvent, now_ms: u64) -> bool {
        self.last_accepted.is_some_and(|(last, at_ms)| {
            last == event && now_ms.saturating_sub(at_ms) < self.window_ms
        })
    }
}

impl<IN, C> InputProvider for DebouncedInput<IN, C>
where
    IN: InputProvider,
    C: Clock,
{
    type Error = IN::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while let Some(event) = self.inner.poll_event()? {
            let now_ms = self.clock.now_ms();
            if self.is_repeat(event, now_ms) {
                trace!("input: coalesced event={event:?} at={now_ms}");
                continue;
            }

            self.last_accepted = Some((event, now_ms));
            return Ok(Some(event));
        }

        Ok(None)
    }
}
