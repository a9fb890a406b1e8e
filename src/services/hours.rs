// src/services/hours.rs
// DOCUMENTATION: Opening-hours compaction
// PURPOSE: Collapse a 7-entry weekday hours list into one short display line

/// Day abbreviations, Monday-first, matching upstream weekday_text order
const DAY_ABBREVS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const FALLBACK: &str = "🕒 Hours vary";

/// Compact a weekday hours list into a single human-readable line.
///
/// Consecutive days sharing identical hours text are grouped into runs;
/// one-day runs render as "Mon: 9:00 AM – 5:00 PM", longer runs as
/// "Mon–Fri: ...". A single run collapses to "Daily: ..." (or "Open 24/7"
/// when the hours say so), and at most 3 runs are shown otherwise.
///
/// This function never fails its caller: unusable input degrades to a
/// fixed "Hours vary" string.
pub fn compact(weekday_text: &[String]) -> String {
    if weekday_text.is_empty() {
        return FALLBACK.to_string();
    }

    // Zip against the day table so inputs shorter (or longer) than 7
    // entries never index out of range.
    let parsed: Vec<(&str, &str)> = DAY_ABBREVS
        .iter()
        .zip(weekday_text.iter())
        .map(|(day, entry)| {
            let hours = entry
                .split_once(": ")
                .map(|(_, hrs)| hrs)
                .unwrap_or(entry.as_str());
            (*day, hours)
        })
        .collect();

    // Group consecutive days with the same hours
    let mut runs: Vec<(&str, &str, &str)> = Vec::new(); // (first, last, hours)
    for (day, hours) in parsed {
        match runs.last_mut() {
            Some((_, last, run_hours)) if *run_hours == hours => *last = day,
            _ => runs.push((day, day, hours)),
        }
    }

    if runs.len() == 1 {
        let hours = runs[0].2;
        if hours.contains("Open 24 hours") {
            return "🕒 Open 24/7".to_string();
        }
        return format!("🕒 Daily: {}", hours);
    }

    let parts: Vec<String> = runs
        .iter()
        .take(3)
        .map(|(first, last, hours)| {
            if first == last {
                format!("{}: {}", first, hours)
            } else {
                format!("{}–{}: {}", first, last, hours)
            }
        })
        .collect();

    format!("🕒 {}", parts.join(" | "))
}
