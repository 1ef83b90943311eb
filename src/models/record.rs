use serde::Serialize;

/// Sentinel written in `Tempo restante` when the deadline has passed.
pub const EXPIRED: &str = "Expired";
/// Sentinel written in `Tempo excedente` while the deadline is ahead.
pub const WITHIN_TIME: &str = "Within time";

/// One row of the monitored table.
///
/// `remaining` and `exceeded` are either both empty, or populated as
/// `(duration, "Within time")` / `("Expired", duration)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub item: String,
    pub operator: String,
    pub deadline: Option<String>,
    pub remaining: String,
    pub exceeded: String,
    /// Values of columns outside the fixed schema, aligned with
    /// `Table::extra_headers`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl Record {
    pub fn new(item: &str, operator: &str, deadline: Option<&str>) -> Self {
        Self {
            item: item.to_string(),
            operator: operator.to_string(),
            deadline: deadline.map(str::to_string),
            ..Default::default()
        }
    }

    /// Deadline text with surrounding blanks removed, `None` if absent or blank.
    pub fn deadline_text(&self) -> Option<&str> {
        self.deadline
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn set_derived(&mut self, remaining: String, exceeded: String) {
        self.remaining = remaining;
        self.exceeded = exceeded;
    }

    pub fn clear_derived(&mut self) {
        self.remaining.clear();
        self.exceeded.clear();
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == EXPIRED
    }
}
