//! Policy knobs for the edit session.

use crate::config::Config;

/// What Apply does with a working copy that has validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyPolicy {
    /// Commit regardless of validation state.
    #[default]
    AllowInvalid,

    /// Refuse with [`crate::error::SessionError::InvalidContact`].
    RequireValid,
}

/// Options for [`crate::services::EditSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub apply_policy: ApplyPolicy,

    /// Match search text case-sensitively
    pub case_sensitive_search: bool,

    /// Buffer size of the change stream; lagging subscribers skip old events
    pub event_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            apply_policy: ApplyPolicy::AllowInvalid,
            case_sensitive_search: true,
            event_capacity: 64,
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            apply_policy: if config.require_valid_apply {
                ApplyPolicy::RequireValid
            } else {
                ApplyPolicy::AllowInvalid
            },
            case_sensitive_search: config.search_case_sensitive,
            event_capacity: config.event_capacity,
        }
    }
}
