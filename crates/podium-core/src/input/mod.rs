//! Input abstraction layer.

pub mod debounce;
pub mod mock;

/// Discrete user intents consumed by the reader session.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InputEvent {
    Previous,
    Next,
    ToggleFocus,
    FontLarger,
    FontSmaller,
    SpeedUp,
    SpeedDown,
    NextTheme,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
