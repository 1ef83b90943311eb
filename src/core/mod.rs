//! The time-computation engine. Pure with respect to time and zone: both
//! come in through `CycleConfig`.

pub mod annotate;
pub mod cycle;
pub mod deadline;
pub mod duration;
pub mod highlight;
pub mod status;

pub use annotate::{Annotation, Notice, RowError, Summary, annotate};
pub use cycle::{CycleConfig, CycleReport, run_cycle};
pub use highlight::{HighlightRule, HighlightScope, apply_highlight};
pub use status::{Status, classify};
