//! Diagnostic events and the result shape shared by build, validation and runs.
//!
//! Every layer reports findings as data: a list of [`Event`]s next to an
//! optional payload. Only a payload-carrying result counts as successful.

use core::fmt;

/// Severity of a diagnostic event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Warning,
    Error,
}

/// A single diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub kind: EventKind,
    pub message: String,
}

impl Event {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == EventKind::Error
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Warning => write!(f, "WARNING: {}", self.message),
            EventKind::Error => write!(f, "ERROR: {}", self.message),
        }
    }
}

/// Count the error events in a slice.
pub fn error_count(events: &[Event]) -> usize {
    events.iter().filter(|e| e.is_error()).count()
}

/// Outcome carrying a payload on success.
///
/// `successful` is true exactly when `data` is present.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataResult<T> {
    data: Option<T>,
    events: Vec<Event>,
}

impl<T> DataResult<T> {
    pub fn success(data: T, events: Vec<Event>) -> Self {
        Self {
            data: Some(data),
            events,
        }
    }

    pub fn failure(events: Vec<Event>) -> Self {
        Self { data: None, events }
    }

    pub fn successful(&self) -> bool {
        self.data.is_some()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn has_errors(&self) -> bool {
        self.events.iter().any(Event::is_error)
    }

    pub fn into_parts(self) -> (Option<T>, Vec<Event>) {
        (self.data, self.events)
    }

    /// Payload on success, events otherwise.
    pub fn into_result(self) -> Result<T, Vec<Event>> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(self.events),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_has_no_payload() {
        let result: DataResult<u32> = DataResult::failure(vec![Event::error("broken")]);
        assert!(!result.successful());
        assert!(result.has_errors());
        assert_eq!(result.data(), None);
        assert_eq!(result.into_result(), Err(vec![Event::error("broken")]));
    }

    #[test]
    fn success_may_carry_warnings() {
        let result = DataResult::success(3, vec![Event::warning("check this")]);
        assert!(result.successful());
        assert!(!result.has_errors());
        assert_eq!(result.data(), Some(&3));
    }

    #[test]
    fn display_prefixes_severity() {
        assert_eq!(Event::error("x").to_string(), "ERROR: x");
        assert_eq!(Event::warning("y").to_string(), "WARNING: y");
        assert_eq!(
            error_count(&[Event::error("a"), Event::warning("b"), Event::error("c")]),
            2
        );
    }
}
