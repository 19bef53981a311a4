//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

/// Logical actions consumed by the board app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Up,
    Down,
    LongUp,
    LongDown,
    Select,
    Back,
    Shake,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
