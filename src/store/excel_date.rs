// src/store/excel_date.rs

use crate::core::deadline::{DATE_TIME_FORMAT, TIME_FORMAT};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Excel serial → text in one of the accepted deadline shapes.
///
/// Serials below 1 carry only a time of day and become `HH:MM:SS`;
/// everything else becomes `dd/mm/YYYY HH:MM:SS`. Rounded to the second.
pub(crate) fn serial_to_text(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (serial * 86400.0).round() as i64;
    let dt = excel_epoch.checked_add_signed(Duration::seconds(secs))?;

    if serial < 1.0 {
        Some(dt.time().format(TIME_FORMAT).to_string())
    } else {
        Some(dt.format(DATE_TIME_FORMAT).to_string())
    }
}

/// ISO 8601 date-time or time (as some writers store typed cells) → same
/// text shapes as `serial_to_text`.
pub(crate) fn iso_to_text(s: &str) -> Option<String> {
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt.format(DATE_TIME_FORMAT).to_string());
    }
    if let Ok(t) = s.parse::<NaiveTime>() {
        return Some(t.format(TIME_FORMAT).to_string());
    }
    None
}
