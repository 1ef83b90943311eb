use crate::models::column::Column;
use crate::models::record::Record;

/// Ordered rows sharing the fixed schema, plus any foreign columns the
/// operator's file carried (kept after the fixed five).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub records: Vec<Record>,
    pub extra_headers: Vec<String>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            extra_headers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full header row as persisted.
    pub fn headers(&self) -> Vec<String> {
        Column::ALL
            .iter()
            .map(|c| c.header().to_string())
            .chain(self.extra_headers.iter().cloned())
            .collect()
    }

    /// Number of persisted columns.
    pub fn width(&self) -> usize {
        Column::ALL.len() + self.extra_headers.len()
    }

    /// Record flattened into cells, in header order.
    pub fn row_cells(&self, r: &Record) -> Vec<String> {
        let mut cells = vec![
            r.item.clone(),
            r.operator.clone(),
            r.deadline.clone().unwrap_or_default(),
            r.remaining.clone(),
            r.exceeded.clone(),
        ];
        // rows read from ragged files may be short
        for i in 0..self.extra_headers.len() {
            cells.push(r.extra.get(i).cloned().unwrap_or_default());
        }
        cells
    }

    pub fn expired_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_expired()).count()
    }
}
