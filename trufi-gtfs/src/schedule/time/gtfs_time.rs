//! GTFS clock times: `HH:MM:SS` counted from the start of the service day.
//! hours may exceed 24 for trips running past midnight.

/// formats elapsed seconds as a zero-padded `HH:MM:SS` string.
pub fn seconds_to_time(seconds: u32) -> String {
    let hh = seconds / 3600;
    let mm = (seconds % 3600) / 60;
    let ss = seconds % 60;
    format!("{hh:02}:{mm:02}:{ss:02}")
}

/// parses `HH:MM:SS` into elapsed seconds. minutes and seconds must be
/// below 60.
pub fn time_to_seconds(time: &str) -> Option<u32> {
    let mut parts = time.split(':');
    let hh: u32 = parts.next()?.parse().ok()?;
    let mm: u32 = parts.next()?.parse().ok()?;
    let ss: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || mm >= 60 || ss >= 60 {
        return None;
    }
    Some(hh * 3600 + mm * 60 + ss)
}
