//! Outbound effects requested from the host shell.
//!
//! The engine never touches the address bar, timers, or scroll position
//! itself. Each update returns the effects the host must perform, keeping
//! state changes synchronous and the engine testable without a browser.

use std::time::Duration;

use crate::navigation::TransitionToken;

/// An action the host shell must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push a new path onto the history stack.
    ///
    /// Emitted when the engine initiates navigation — never for inbound
    /// history events, where the browser has already moved.
    PushUrl(String),

    /// Arrange for [`crate::message::Message::TransitionElapsed`] to be
    /// delivered with this token after the delay.
    ScheduleTransition {
        token: TransitionToken,
        delay: Duration,
    },

    /// Reset the scroll position; a transition just landed.
    ResetScroll,
}
