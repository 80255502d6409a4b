//! Timezone correction of timestamp fields
//!
//! Columns without zone information (Oracle TIMESTAMP, MySQL DATETIME) come
//! back stamped with whatever zone the driver assumes, and SQL Server
//! values come back as UTC. Those values have to be brought in line with
//! the zone configured for the database server.
//!
//! Two operations are provided and they are easy to confuse:
//!
//! - [`reanchor`] keeps the wall-clock digits and attaches the target zone.
//!   The absolute instant moves by the offset difference. This is a one-way,
//!   lossy transform: sub-second precision is dropped and the original
//!   instant cannot be recovered from the result.
//! - [`relabel`] keeps the instant and shows it in the target zone. The
//!   digits change, the instant does not.

use crate::record::{FieldKind, RecordFields, Timestamp, check_field};
use crate::{DbDialError, FieldAccessReason, Result};
use chrono::{FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Layout used to exchange zone-less timestamps with the databases
pub const DB_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MAX_GAP_HOURS: i64 = 25;

/// Resolve an IANA zone identifier. An empty identifier resolves to UTC.
///
/// `Local` is rejected: the database server zone must be named explicitly
/// and must not depend on the host running this process.
pub fn resolve_zone(id: &str) -> Result<Tz> {
    match id {
        "" => return Ok(chrono_tz::UTC),
        "Local" => {
            return Err(DbDialError::Configuration(
                "Timezone [Local] is not supported, name the server zone (e.g. Asia/Tokyo)"
                    .to_string(),
            ));
        }
        _ => {}
    }
    id.parse::<Tz>()
        .map_err(|_| DbDialError::Configuration(format!("Unknown timezone [{}]", id)))
}

/// Parse a zone-less timestamp. The result is interpreted as UTC.
pub fn parse_db_time(text: &str) -> Result<Timestamp> {
    let naive = parse_naive(text)?;
    Ok(chrono_tz::UTC.from_utc_datetime(&naive))
}

/// Format a timestamp without its zone. Sub-second precision is dropped.
pub fn format_db_time(ts: &Timestamp) -> String {
    ts.format(DB_TIME_FORMAT).to_string()
}

fn parse_naive(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DB_TIME_FORMAT).map_err(|e| {
        DbDialError::Parse(format!(
            "`{}` does not match layout {}: {}",
            text, DB_TIME_FORMAT, e
        ))
    })
}

/// Keep the wall-clock digits of `ts` and attach `zone`.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant. Local
/// times skipped by a DST gap are read with the offset in force before the
/// transition, which moves them forward by the size of the gap.
fn reanchor_one(ts: &Timestamp, zone: Tz) -> Result<Timestamp> {
    let text = format_db_time(ts);
    let naive = parse_naive(&text)?;
    match zone.from_local_datetime(&naive).earliest() {
        Some(anchored) => Ok(anchored),
        None => {
            let offset = offset_before_gap(&naive, zone).ok_or_else(|| {
                DbDialError::Parse(format!("no UTC offset found for {} in {}", text, zone))
            })?;
            let utc = naive - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            tracing::trace!(local = %text, zone = %zone, "local time falls in a DST gap");
            Ok(zone.from_utc_datetime(&utc))
        }
    }
}

/// Offset of the latest valid local time before `naive`. Real-world gaps
/// are at most one day long.
fn offset_before_gap(naive: &NaiveDateTime, zone: Tz) -> Option<FixedOffset> {
    (1..=MAX_GAP_HOURS)
        .filter_map(|hours| {
            zone.from_local_datetime(&(*naive - TimeDelta::hours(hours)))
                .latest()
        })
        .map(|dt| dt.offset().fix())
        .next()
}

fn read_timestamps<R: RecordFields>(record: &mut R, fields: &[&str]) -> Result<Vec<Timestamp>> {
    fields
        .iter()
        .map(|name| {
            check_field::<R>(name, FieldKind::Timestamp)?;
            record
                .timestamp_mut(name)
                .map(|ts| *ts)
                .ok_or_else(|| DbDialError::field(name, FieldAccessReason::NotTimestamp))
        })
        .collect()
}

fn write_timestamps<R: RecordFields>(record: &mut R, fields: &[&str], values: Vec<Timestamp>) {
    for (name, value) in fields.iter().zip(values) {
        if let Some(slot) = record.timestamp_mut(name) {
            *slot = value;
        }
    }
}

/// Rewrite the zone of the named fields while keeping their wall-clock digits.
///
/// Used when a driver stamped values with the wrong zone and the true
/// source zone is known. Either every field is rewritten or, on error,
/// none is.
pub fn reanchor<R: RecordFields>(record: &mut R, fields: &[&str], zone: Tz) -> Result<()> {
    let anchored = read_timestamps(record, fields)?
        .iter()
        .map(|ts| reanchor_one(ts, zone))
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(fields = ?fields, zone = %zone, "re-anchored timestamp fields");
    write_timestamps(record, fields, anchored);
    Ok(())
}

/// Show the named fields in `zone` while keeping their instants.
pub fn relabel<R: RecordFields>(record: &mut R, fields: &[&str], zone: Tz) -> Result<()> {
    let relabeled = read_timestamps(record, fields)?
        .iter()
        .map(|ts| ts.with_timezone(&zone))
        .collect();

    tracing::trace!(fields = ?fields, zone = %zone, "re-labeled timestamp fields");
    write_timestamps(record, fields, relabeled);
    Ok(())
}
