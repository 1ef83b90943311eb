use serde::Serialize;

/// The five fixed columns of a monitored table, in their persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Item,      // Item
    Operator,  // Operador
    Deadline,  // Termino
    Remaining, // Tempo restante
    Exceeded,  // Tempo excedente
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Item,
        Column::Operator,
        Column::Deadline,
        Column::Remaining,
        Column::Exceeded,
    ];

    /// Header text as written in the spreadsheet.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Item => "Item",
            Column::Operator => "Operador",
            Column::Deadline => "Termino",
            Column::Remaining => "Tempo restante",
            Column::Exceeded => "Tempo excedente",
        }
    }

    /// Zero-based position in the persisted table.
    pub fn index(&self) -> usize {
        match self {
            Column::Item => 0,
            Column::Operator => 1,
            Column::Deadline => 2,
            Column::Remaining => 3,
            Column::Exceeded => 4,
        }
    }

    /// Match a header cell (trimmed, case-insensitive, BOM tolerated).
    pub fn from_header(h: &str) -> Option<Self> {
        let h = h.trim_start_matches('\u{feff}').trim();
        Column::ALL
            .into_iter()
            .find(|c| c.header().eq_ignore_ascii_case(h))
    }
}
