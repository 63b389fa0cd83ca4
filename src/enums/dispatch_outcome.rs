use std::fmt;

/// Result of one webhook request.
///
/// `Failure` carries the status code text for out-of-range responses
/// (e.g. `"500"`) and the transport error text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Success(u16),
    Failure(String),
}

impl DispatchOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..=299).contains(&status) {
            DispatchOutcome::Success(status)
        } else {
            DispatchOutcome::Failure(status.to_string())
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Success(status) => write!(f, "Success! Status: {}", status),
            DispatchOutcome::Failure(reason) if reason.parse::<u16>().is_ok() => write!(f, "HTTP {}", reason),
            DispatchOutcome::Failure(reason) => write!(f, "Error: {}", reason),
        }
    }
}
