pub mod column;
pub mod record;
pub mod table;

pub use column::Column;
pub use record::{EXPIRED, Record, WITHIN_TIME};
pub use table::Table;
