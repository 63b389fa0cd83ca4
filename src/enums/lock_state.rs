#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    Locked,
    #[default]
    Unlocked,
}

impl LockState {
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            LockState::Locked => "🔒",
            LockState::Unlocked => "🔓",
        }
    }
}
