use tokio::sync::mpsc::UnboundedSender;
use crate::enums::lock_event::LockEvent;
use crate::errors::LockSnitchResult;

/// An external feed of screen lock/unlock signals.
pub trait LockEventSource {
    /// Registers handlers that push every delivered signal into `sender`.
    fn subscribe(&mut self, sender: UnboundedSender<LockEvent>) -> LockSnitchResult<()>;
}
