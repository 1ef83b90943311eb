//! A single monitoring cycle:
//! `Load → SchemaCheck → [ParseRow → Classify → Format]* → Persist →
//! AttachHighlight → Done`, or a fatal store error.
//!
//! Everything the cycle depends on is in `CycleConfig`; nothing is read
//! from ambient clocks or zones here.

use crate::core::annotate::{Annotation, annotate};
use crate::core::highlight::{HighlightRule, HighlightScope, apply_highlight};
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// Reference instant, sampled once for the whole pass.
    pub now: DateTime<Utc>,
    pub table_location: PathBuf,
    /// Civil zone deadlines are written in.
    pub timezone: Tz,
    pub highlight: HighlightScope,
}

#[derive(Debug, Clone)]
pub struct CycleReport {
    pub now: DateTime<Utc>,
    pub annotation: Annotation,
    pub highlight: Option<HighlightRule>,
}

pub fn run_cycle(cfg: &CycleConfig) -> AppResult<CycleReport> {
    let annotation = annotate(cfg)?;
    let highlight = apply_highlight(&cfg.table_location, &annotation.table, cfg.highlight)?;

    let s = annotation.summary();
    info!(
        path = %cfg.table_location.display(),
        rows = s.total(),
        expired = s.expired,
        invalid = s.invalid,
        "cycle completed"
    );

    Ok(CycleReport {
        now: cfg.now,
        annotation,
        highlight,
    })
}
