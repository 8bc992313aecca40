use std::{collections::VecDeque, convert::Infallible, time::Instant};

use podium_core::input::{InputEvent, InputProvider, debounce::Clock};

/// Key events parsed from stdin, waiting for the next session tick.
#[derive(Debug, Default)]
pub(super) struct KeyQueue {
    pending: VecDeque<InputEvent>,
}

impl KeyQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }
}

impl InputProvider for KeyQueue {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

/// Milliseconds since the reader started.
#[derive(Clone, Copy, Debug)]
pub(super) struct MonotonicClock {
    started: Instant,
}

impl MonotonicClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut queue = KeyQueue::default();
        queue.push(InputEvent::Next);
        queue.push(InputEvent::NextTheme);

        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::Next)));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::NextTheme)));
        assert_eq!(queue.poll_event(), Ok(None));
    }

    #[test]
    fn clock_does_not_go_backwards() {
        let clock = MonotonicClock::start();
        let first = clock.now_ms();
        assert!(clock.now_ms() >= first);
    }
}
