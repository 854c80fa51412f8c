use crate::config::{TIMESTAMP_PATTERN, TIMEZONE};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::OnceLock;
use std::time::Instant;

/// Marks the start of the hook run; uptime is measured from the first call.
pub(crate) fn mark_start() {
    started_at();
}

pub(crate) fn get_uptime_string() -> String {
    let micros = started_at().elapsed().as_micros();
    let seconds = micros / 1_000_000;
    let millis = (micros % 1_000_000) / 1_000;
    format!("[{:>4}.{:03}s]", seconds, millis)
}

pub(crate) fn get_formatted_timestamp() -> String {
    let now = get_current_time_in_timezone();
    now.format(TIMESTAMP_PATTERN).to_string()
}

fn get_current_time_in_timezone() -> DateTime<Tz> {
    Utc::now().with_timezone(cached_timezone())
}

fn cached_timezone() -> &'static Tz {
    static TZ: OnceLock<Tz> = OnceLock::new();
    TZ.get_or_init(|| TIMEZONE.parse().unwrap_or(chrono_tz::UTC))
}

fn started_at() -> &'static Instant {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now)
}
