use crate::errors::LockSnitchResult;
use crate::traits::lock_event_source::LockEventSource;

pub mod channel;

#[cfg(target_os = "macos")]
pub mod macos;

/// The screen lock feed of the current platform.
pub fn platform_source() -> LockSnitchResult<Box<dyn LockEventSource>> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(macos::DistributedNotificationSource::new()))
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(crate::errors::LockSnitchError::UnsupportedPlatform {
            feature: "Screen lock monitoring".to_string(),
        })
    }
}

/// Blocks the calling thread delivering OS notifications. Must be called on
/// the thread that subscribed the platform source.
pub fn run_platform_loop() -> LockSnitchResult<()> {
    #[cfg(target_os = "macos")]
    {
        macos::run_main_loop();
        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(crate::errors::LockSnitchError::UnsupportedPlatform {
            feature: "Screen lock monitoring".to_string(),
        })
    }
}
