//! Row classification against the reference instant.

use crate::core::duration::format_hms;
use crate::models::{EXPIRED, WITHIN_TIME};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Deadline still ahead of `now`.
    Pending { remaining: Duration },
    /// Deadline reached or passed.
    Expired { exceeded: Duration },
    /// Row has no deadline value.
    Unscheduled,
}

/// Decide a row's status. A tie is already due.
pub fn classify(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Status {
    if deadline > now {
        Status::Pending {
            remaining: deadline - now,
        }
    } else {
        Status::Expired {
            exceeded: now - deadline,
        }
    }
}

impl Status {
    /// Values for (`Tempo restante`, `Tempo excedente`).
    pub fn derived_fields(&self) -> (String, String) {
        match self {
            Status::Pending { remaining } => (format_hms(*remaining), WITHIN_TIME.to_string()),
            Status::Expired { exceeded } => (EXPIRED.to_string(), format_hms(*exceeded)),
            Status::Unscheduled => (String::new(), String::new()),
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Status::Expired { .. })
    }
}
