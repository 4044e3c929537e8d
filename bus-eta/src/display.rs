//! Plain-text rendering of lookup results.

use std::error::Error;
use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::citybus::{EtaRecord, EtaResponse, PLACEHOLDER, RouteInfo, RouteStops};
use crate::lookup::LookupError;

/// Printed when there are no records to show.
pub const NO_DATA: &str = "No ETA data available.";

/// Printed when a route listing has no stops to show.
pub const NO_STOPS: &str = "No stops found for this route.";

/// Hong Kong is UTC+8 with no daylight saving.
const HK_OFFSET_SECS: i32 = 8 * 60 * 60;

const SEPARATOR_WIDTH: usize = 30;

/// Write the outcome of a lookup.
///
/// Failures are reported on one line followed by the no-data notice.
/// `now` is used to annotate each ETA with the minutes remaining.
pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &Result<EtaResponse, LookupError>,
    now: DateTime<Utc>,
) -> io::Result<()> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            write_error(out, err)?;
            return writeln!(out, "{NO_DATA}");
        }
    };

    let records = response.records();
    if records.is_empty() {
        return writeln!(out, "{NO_DATA}");
    }

    for record in records {
        write_record(out, record, now)?;
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &EtaRecord, now: DateTime<Utc>) -> io::Result<()> {
    writeln!(out, "Route: {}", record.route())?;
    writeln!(out, "Stop: {}", record.stop())?;

    match direction_label(record.dir()) {
        Some(label) => writeln!(out, "Direction: {} ({label})", record.dir())?,
        None => writeln!(out, "Direction: {}", record.dir())?,
    }

    if let Some(dest) = bilingual(record.destination(), record.destination_tc()) {
        writeln!(out, "Destination: {dest}")?;
    }

    match record.eta.as_deref().and_then(|eta| minutes_until(eta, now)) {
        Some(mins) if mins <= 0 => writeln!(out, "ETA: {} (Arriving)", record.eta())?,
        Some(1) => writeln!(out, "ETA: {} (1 min)", record.eta())?,
        Some(mins) => writeln!(out, "ETA: {} ({mins} mins)", record.eta())?,
        None => writeln!(out, "ETA: {}", record.eta())?,
    }

    if let Some(remark) = bilingual(record.remark(), record.remark_tc()) {
        writeln!(out, "Remark: {remark}")?;
    }

    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// Write the stops of a route, one per line, with their stop IDs.
///
/// Failures are reported on one line followed by the no-stops notice.
pub fn write_stop_list<W: Write>(
    out: &mut W,
    outcome: &Result<RouteStops, LookupError>,
) -> io::Result<()> {
    let listing = match outcome {
        Ok(listing) => listing,
        Err(err) => {
            write_error(out, err)?;
            return writeln!(out, "{NO_STOPS}");
        }
    };

    writeln!(out, "{}", route_heading(&listing.route))?;

    if listing.stops.is_empty() {
        return writeln!(out, "{NO_STOPS}");
    }

    for stop in &listing.stops {
        let direction = direction_label(stop.dir()).unwrap_or(stop.dir());
        writeln!(
            out,
            "{}. {} ({}) - {direction} [stop ID {}]",
            stop.seq(),
            stop.name_tc(),
            stop.name_en(),
            stop.stop()
        )?;
    }
    Ok(())
}

fn route_heading(info: &RouteInfo) -> String {
    let route = info.route.as_deref().unwrap_or(PLACEHOLDER);
    let orig = bilingual(non_blank(&info.orig_en), non_blank(&info.orig_tc));
    let dest = bilingual(non_blank(&info.dest_en), non_blank(&info.dest_tc));
    match (orig, dest) {
        (Some(orig), Some(dest)) => format!("Route {route}: {orig} to {dest}"),
        _ => format!("Route {route}"),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// "English (中文)", or whichever of the two is present.
fn bilingual(en: Option<&str>, tc: Option<&str>) -> Option<String> {
    match (en, tc) {
        (Some(en), Some(tc)) => Some(format!("{en} ({tc})")),
        (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
        (None, None) => None,
    }
}

fn write_error<W: Write>(out: &mut W, err: &LookupError) -> io::Result<()> {
    match err {
        LookupError::Usage(e) => writeln!(out, "Error: {e}"),
        LookupError::Api(e) => writeln!(out, "API Error: {}", with_causes(e)),
    }
}

/// The error's message followed by each underlying cause not already in it.
fn with_causes(err: &(dyn Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

fn direction_label(dir: &str) -> Option<&'static str> {
    match dir {
        "I" => Some("Inbound"),
        "O" => Some("Outbound"),
        _ => None,
    }
}

/// Whole minutes from `now` until `eta`, rounded down.
///
/// Timestamps without an offset are taken as Hong Kong local time.
fn minutes_until(eta: &str, now: DateTime<Utc>) -> Option<i64> {
    let eta = parse_eta(eta)?;
    let secs = (eta.with_timezone(&Utc) - now).num_seconds();
    Some(secs.div_euclid(60))
}

fn parse_eta(eta: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(eta) {
        return Some(dt);
    }
    let naive = NaiveDateTime::parse_from_str(eta, "%Y-%m-%dT%H:%M:%S").ok()?;
    let hk = FixedOffset::east_opt(HK_OFFSET_SECS)?;
    naive.and_local_timezone(hk).single()
}
