use tokio::sync::mpsc::UnboundedSender;
use crate::enums::lock_event::LockEvent;
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::traits::lock_event_source::LockEventSource;

/// A feed driven by hand, for tests and for replaying notifications.
#[derive(Default)]
pub struct ChannelEventSource {
    sender: Option<UnboundedSender<LockEvent>>,
}

impl ChannelEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: LockEvent) -> LockSnitchResult<()> {
        let sender = self.sender
            .as_ref()
            .ok_or_else(|| LockSnitchError::system_error("emit lock event", "source has no subscriber"))?;

        sender
            .send(event)
            .map_err(|_| LockSnitchError::system_error("emit lock event", "watcher has stopped"))
    }

    /// Drops the subscriber's channel so its watcher loop can finish.
    pub fn close(&mut self) {
        self.sender = None;
    }
}

impl LockEventSource for ChannelEventSource {
    fn subscribe(&mut self, sender: UnboundedSender<LockEvent>) -> LockSnitchResult<()> {
        if self.sender.is_some() {
            return Err(LockSnitchError::AlreadySubscribed);
        }
        self.sender = Some(sender);
        Ok(())
    }
}
