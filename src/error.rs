//! Error taxonomy for the calendar header core.
//!
//! None of these reach the end user. Date resolution failures self-heal by
//! keeping the previous state, configuration errors are rejected before a
//! header is built, and invalid scope transitions are logged and ignored.

use thiserror::Error;

use crate::models::scope::Scope;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    /// The calendar arithmetic could not produce a date (out of chrono's range).
    #[error("could not resolve a calendar date while {context}")]
    DateResolution { context: String },

    /// A geometry or behaviour constant is unusable.
    #[error("invalid setting `{field}`: {reason}")]
    Configuration { field: &'static str, reason: String },

    /// A scope change was requested while a drag gesture owns the scope, or
    /// Transition was requested outside a gesture.
    #[error("invalid scope change from {from:?} to {to:?}")]
    InvalidStateTransition { from: Scope, to: Scope },
}

impl CalendarError {
    pub fn date_resolution(context: impl Into<String>) -> Self {
        Self::DateResolution {
            context: context.into(),
        }
    }

    pub fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            reason: reason.into(),
        }
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_field() {
        let err = CalendarError::configuration("row_height", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid setting `row_height`: must be greater than zero"
        );
    }

    #[test]
    fn test_date_resolution_message() {
        let err = CalendarError::date_resolution("adding 1 month to +262142-12-01");
        assert!(err.to_string().starts_with("could not resolve a calendar date"));
    }
}
