use crate::enums::lock_state::LockState;
use crate::enums::value_format::ValueFormat;

pub struct LockStatusFormatter;

impl LockStatusFormatter {
    pub fn format(state: LockState, format: ValueFormat) -> &'static str {
        match (format, state) {
            (ValueFormat::Boolean, LockState::Locked) => "true",
            (ValueFormat::Boolean, LockState::Unlocked) => "false",
            (ValueFormat::Numeric, LockState::Locked) => "1",
            (ValueFormat::Numeric, LockState::Unlocked) => "0",
        }
    }
}
