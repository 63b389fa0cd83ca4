use crate::config::constants::{SCREEN_LOCKED_NOTIFICATION, SCREEN_UNLOCKED_NOTIFICATION};
use crate::enums::lock_state::LockState;

/// A payload-less signal delivered by the OS event feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    ScreenLocked,
    ScreenUnlocked,
}

impl LockEvent {
    pub fn notification_name(&self) -> &'static str {
        match self {
            LockEvent::ScreenLocked => SCREEN_LOCKED_NOTIFICATION,
            LockEvent::ScreenUnlocked => SCREEN_UNLOCKED_NOTIFICATION,
        }
    }

    pub fn resulting_state(&self) -> LockState {
        match self {
            LockEvent::ScreenLocked => LockState::Locked,
            LockEvent::ScreenUnlocked => LockState::Unlocked,
        }
    }
}
