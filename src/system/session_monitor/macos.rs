#![allow(unsafe_code)]

use std::ptr::NonNull;

use block2::StackBlock;
use objc2::rc::Retained;
use objc2::runtime::{NSObjectProtocol, ProtocolObject};
use objc2_foundation::{
    NSDistributedNotificationCenter, NSNotification, NSOperationQueue, NSRunLoop, NSString,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::enums::lock_event::LockEvent;
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::traits::lock_event_source::LockEventSource;

/// `com.apple.screenIsLocked` / `com.apple.screenIsUnlocked` observers on the
/// distributed notification center. Observers stay registered for the life
/// of the process.
#[derive(Default)]
pub struct DistributedNotificationSource {
    observers: Vec<Retained<ProtocolObject<dyn NSObjectProtocol>>>,
}

impl DistributedNotificationSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn observe(&mut self, event: LockEvent, sender: UnboundedSender<LockEvent>) {
        unsafe {
            let center = NSDistributedNotificationCenter::defaultCenter();

            // The center keeps the block after this frame returns, so it has to live on the heap.
            let block = StackBlock::new(move |_notification: NonNull<NSNotification>| {
                if sender.send(event).is_err() {
                    log::warn!("⚠️ Lock event dropped, watcher has stopped");
                }
            })
            .copy();

            let name = NSString::from_str(event.notification_name());
            let observer = center.addObserverForName_object_queue_usingBlock(
                Some(&name),
                None,
                None::<&NSOperationQueue>,
                &block,
            );
            self.observers.push(observer);
        }
    }
}

impl LockEventSource for DistributedNotificationSource {
    fn subscribe(&mut self, sender: UnboundedSender<LockEvent>) -> LockSnitchResult<()> {
        if !self.observers.is_empty() {
            return Err(LockSnitchError::AlreadySubscribed);
        }

        self.observe(LockEvent::ScreenLocked, sender.clone());
        self.observe(LockEvent::ScreenUnlocked, sender);
        Ok(())
    }
}

/// Runs the main run loop; distributed notifications are only delivered
/// while it spins.
pub fn run_main_loop() {
    unsafe {
        NSRunLoop::mainRunLoop().run();
    }
}
