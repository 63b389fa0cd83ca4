use std::fmt;
use std::error::Error as StdError;
use crate::enums::build_error::BuildError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockSnitchError {
    // Configuration errors
    ConfigUnreadable {
        key: String,
        reason: String,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // URL building errors
    InvalidBaseUrl {
        url: String,
        reason: String,
    },
    UrlConstructionFailed {
        url: String,
    },

    // Network errors
    TransportFailure {
        url: Option<String>,
        reason: String,
    },
    HttpError {
        url: Option<String>,
        status_code: u16,
    },

    // Lifecycle errors
    AlreadySubscribed,
    TestInProgress,
    UnsupportedPlatform {
        feature: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl LockSnitchError {
    pub fn config_unreadable(key: &str, reason: &str) -> Self {
        Self::ConfigUnreadable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigUnreadable { .. } => true,
            Self::TransportFailure { .. } => true,
            Self::HttpError { .. } => true,
            Self::TestInProgress => true,
            Self::ValidationError { .. } => true,
            Self::InvalidBaseUrl { .. } => true,
            Self::UrlConstructionFailed { .. } => true,
            Self::AlreadySubscribed => false,
            Self::UnsupportedPlatform { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::UnsupportedPlatform { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::AlreadySubscribed => ErrorSeverity::High,
            Self::InvalidBaseUrl { .. } => ErrorSeverity::Medium,
            Self::UrlConstructionFailed { .. } => ErrorSeverity::Medium,
            Self::TransportFailure { .. } => ErrorSeverity::Medium,
            Self::HttpError { .. } => ErrorSeverity::Medium,
            Self::ConfigUnreadable { .. } => ErrorSeverity::Low,
            Self::TestInProgress => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigUnreadable { key, reason } => {
                format!("Stored value for '{}' could not be read: {}\n💡 Falling back to defaults", key, reason)
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::InvalidBaseUrl { url, reason } => {
                format!("Invalid webhook URL '{}': {}\n💡 Use a full URL such as http://homebridge-ip:51828", url, reason)
            }
            Self::UrlConstructionFailed { url } => {
                format!("Failed to construct webhook URL from '{}'", url)
            }
            Self::TransportFailure { url, reason } => {
                let mut msg = format!("Webhook request failed: {}", reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg.push_str("\n💡 Check that the webhook host is reachable");
                msg
            }
            Self::HttpError { url, status_code } => {
                let mut msg = format!("Webhook responded with HTTP {}", status_code);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg
            }
            Self::AlreadySubscribed => {
                "Lock event watcher is already subscribed to an event source".to_string()
            }
            Self::TestInProgress => {
                "A webhook test is already running\n💡 Wait for it to finish before starting another".to_string()
            }
            Self::UnsupportedPlatform { feature } => {
                format!("{} is only available on macOS", feature)
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for LockSnitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for LockSnitchError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for lock-snitch operations
pub type LockSnitchResult<T> = Result<T, LockSnitchError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print a user-facing message
    pub fn handle_error(error: &LockSnitchError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<BuildError> for LockSnitchError {
    fn from(error: BuildError) -> Self {
        match error {
            BuildError::InvalidBaseUrl { url, reason } => Self::InvalidBaseUrl { url, reason },
            BuildError::UrlConstructionFailed { url } => Self::UrlConstructionFailed { url },
        }
    }
}

impl From<serde_json::Error> for LockSnitchError {
    fn from(error: serde_json::Error) -> Self {
        LockSnitchError::ConfigUnreadable {
            key: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::ser::Error> for LockSnitchError {
    fn from(error: toml::ser::Error) -> Self {
        LockSnitchError::ConfigurationFileError {
            path: "TOML".to_string(),
            reason: error.to_string(),
        }
    }
}
