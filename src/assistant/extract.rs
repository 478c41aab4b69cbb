//! Best-effort field extraction from a scheduling request
//!
//! Every extractor is independent. A field that doesn't match stays `None`;
//! defaults are only applied when the partial record is turned into a call.

use crate::calls::{CallStatus, NewCall, Priority};
use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_PHONE: &str = "+1-555-XXXX";
pub const DEFAULT_NOTES: &str = "No notes provided";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Hour of day that "tomorrow" and "next week" resolve to
const RELATIVE_DAY_HOUR: u32 = 14;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)with\s+([a-z\s]+?)(?:\s+at|\s+on|\s+tomorrow|\s*,|$)")
        .expect("name pattern is valid")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[0-9]-?[0-9]{3}-?[0-9]{4}|\+?[0-9]{10,}").expect("phone pattern is valid")
});

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(min|minute|hour)").expect("duration pattern is valid")
});

static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)category\s+([a-z]+)").expect("category pattern is valid")
});

static NOTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:discuss|about|regarding)\s+(.+?)\s*$").expect("notes pattern is valid")
});

/// Fields pulled out of one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallDetails {
    pub client_name: Option<String>,
    pub phone_number: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl CallDetails {
    /// Fill in defaults for everything but the client name.
    ///
    /// Returns `None` when no client name was found.
    pub fn into_new_call(self, now: DateTime<Utc>) -> Option<NewCall> {
        let client_name = self.client_name?;
        Some(NewCall {
            client_name,
            phone_number: self
                .phone_number
                .unwrap_or_else(|| DEFAULT_PHONE.to_string()),
            scheduled_time: self
                .scheduled_time
                .unwrap_or_else(|| now + Duration::hours(24)),
            duration: self.duration.unwrap_or(DEFAULT_DURATION_MINUTES),
            status: CallStatus::Scheduled,
            notes: self.notes.unwrap_or_else(|| DEFAULT_NOTES.to_string()),
            priority: self.priority.unwrap_or_default(),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        })
    }
}

/// Run every extractor over `message`.
///
/// Relative days are resolved against `now` in its own time zone.
pub fn extract_call_details<Tz: TimeZone>(message: &str, now: &DateTime<Tz>) -> CallDetails {
    let lowered = message.to_lowercase();
    CallDetails {
        client_name: client_name(message),
        phone_number: phone_number(message),
        scheduled_time: scheduled_time(&lowered, now),
        duration: duration_minutes(message),
        priority: priority(&lowered),
        category: first_capture(&CATEGORY_RE, message),
        notes: notes(message),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn client_name(message: &str) -> Option<String> {
    first_capture(&NAME_RE, message)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn phone_number(message: &str) -> Option<String> {
    PHONE_RE.find(message).map(|m| m.as_str().to_string())
}

/// Zero counts as absent. Values past `u32::MAX` minutes saturate.
fn duration_minutes(message: &str) -> Option<u32> {
    let caps = DURATION_RE.captures(message)?;
    // Only ASCII digits reach here, so a parse failure means overflow
    let value = caps.get(1)?.as_str().parse::<u32>().unwrap_or(u32::MAX);
    let unit = caps.get(2)?.as_str().to_lowercase();
    let minutes = if unit.starts_with("hour") {
        value.saturating_mul(60)
    } else {
        value
    };
    Some(minutes).filter(|m| *m > 0)
}

/// "high" wins over "low" over "medium" when several are present
fn priority(lowered: &str) -> Option<Priority> {
    if lowered.contains("high priority") {
        Some(Priority::High)
    } else if lowered.contains("low priority") {
        Some(Priority::Low)
    } else if lowered.contains("medium priority") {
        Some(Priority::Medium)
    } else {
        None
    }
}

fn notes(message: &str) -> Option<String> {
    first_capture(&NOTES_RE, message)
        .map(|notes| notes.trim().to_string())
        .filter(|notes| !notes.is_empty())
}

// An explicit time of day ("at 2 PM") is not parsed; only the day moves.
fn scheduled_time<Tz: TimeZone>(lowered: &str, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    if lowered.contains("tomorrow") {
        afternoon_after(now, 1)
    } else if lowered.contains("next week") {
        afternoon_after(now, 7)
    } else {
        None
    }
}

/// 14:00 wall-clock time `days` calendar days after `now`
fn afternoon_after<Tz: TimeZone>(now: &DateTime<Tz>, days: u64) -> Option<DateTime<Utc>> {
    let date = now.date_naive().checked_add_days(Days::new(days))?;
    let local = date.and_hms_opt(RELATIVE_DAY_HOUR, 0, 0)?;
    now.timezone()
        .from_local_datetime(&local)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const FULL_REQUEST: &str = "Schedule a call with Sarah Johnson at +1-555-0199 tomorrow at 2 PM for 45 minutes, high priority, category Sales, discuss new contract";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_full_request() {
        let details = extract_call_details(FULL_REQUEST, &now());
        assert_eq!(details.client_name.as_deref(), Some("Sarah Johnson"));
        assert_eq!(details.phone_number.as_deref(), Some("+1-555-0199"));
        assert_eq!(details.duration, Some(45));
        assert_eq!(details.priority, Some(Priority::High));
        assert_eq!(details.category.as_deref(), Some("Sales"));
        assert_eq!(details.notes.as_deref(), Some("new contract"));
        // "2 PM" is ignored; tomorrow is pinned to 14:00
        assert_eq!(
            details.scheduled_time,
            Some(Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_name_stops_at_terminators() {
        for (message, expected) in [
            ("call with Bob Lee on Monday", "Bob Lee"),
            ("call with Bob Lee tomorrow", "Bob Lee"),
            ("call with Bob Lee, about rates", "Bob Lee"),
            ("call with  Bob Lee  ", "Bob Lee"),
            ("CALL WITH ALICE AT noon", "ALICE"),
        ] {
            assert_eq!(
                client_name(message).as_deref(),
                Some(expected),
                "message: {message}"
            );
        }
    }

    #[test]
    fn test_name_requires_letters() {
        assert_eq!(client_name("call with 555-0100"), None);
        assert_eq!(client_name("show my calls"), None);
    }

    #[test]
    fn test_phone_shapes() {
        assert_eq!(
            phone_number("reach me at 15550199").as_deref(),
            Some("15550199")
        );
        assert_eq!(
            phone_number("dial 1-555-0100 now").as_deref(),
            Some("1-555-0100")
        );
        // The grouped shape is tried first, so long numbers are cut short
        assert_eq!(
            phone_number("number +442071838750 please").as_deref(),
            Some("+44207183")
        );
        assert_eq!(phone_number("room 42"), None);
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(duration_minutes("for 20 min"), Some(20));
        assert_eq!(duration_minutes("for 2 Hours"), Some(120));
        assert_eq!(duration_minutes("for 90minutes"), Some(90));
        assert_eq!(duration_minutes("for a while"), None);
    }

    #[test]
    fn test_zero_duration_is_absent() {
        assert_eq!(duration_minutes("for 0 minutes"), None);
        assert_eq!(duration_minutes("for 0 hours"), None);
    }

    #[test]
    fn test_huge_duration_saturates() {
        assert_eq!(duration_minutes("for 5000000000 minutes"), Some(u32::MAX));
        assert_eq!(duration_minutes("for 100000000 hours"), Some(u32::MAX));
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        let message = "call with Ann, \u{663} min, 45 minutes at \u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}\u{669}\u{660}";
        assert_eq!(duration_minutes(message), Some(45));
        assert_eq!(phone_number(message), None);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(priority("low priority, not high priority"), Some(Priority::High));
        assert_eq!(priority("medium priority or low priority"), Some(Priority::Low));
        assert_eq!(priority("medium priority"), Some(Priority::Medium));
        assert_eq!(priority("top priority"), None);
    }

    #[test]
    fn test_notes_run_to_end() {
        assert_eq!(
            notes("call with Ann regarding the renewal terms  ").as_deref(),
            Some("the renewal terms")
        );
        assert_eq!(notes("call with Ann"), None);
        assert_eq!(notes("call with Ann about   "), None);
    }

    #[test]
    fn test_next_week_in_local_zone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        // 22:00 on the 18th in UTC-5 is already the 19th in UTC
        let now = tz.with_ymd_and_hms(2026, 10, 18, 22, 0, 0).unwrap();
        let details = extract_call_details("call with Ann next week", &now);
        assert_eq!(
            details.scheduled_time,
            Some(tz.with_ymd_and_hms(2026, 10, 25, 14, 0, 0).unwrap().with_timezone(&Utc))
        );
    }

    #[test]
    fn test_tomorrow_wins_over_next_week() {
        let details = extract_call_details("tomorrow, or next week", &now());
        assert_eq!(
            details.scheduled_time,
            Some(Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_defaults_applied() {
        let call = CallDetails {
            client_name: Some("Ann".to_string()),
            ..CallDetails::default()
        }
        .into_new_call(now())
        .unwrap();

        assert_eq!(call.phone_number, DEFAULT_PHONE);
        assert_eq!(call.scheduled_time, now() + Duration::hours(24));
        assert_eq!(call.duration, 30);
        assert_eq!(call.status, CallStatus::Scheduled);
        assert_eq!(call.notes, DEFAULT_NOTES);
        assert_eq!(call.priority, Priority::Medium);
        assert_eq!(call.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_empty_fields_take_defaults() {
        let call = extract_call_details("call with Ann, 0 minutes about   ", &now())
            .into_new_call(now())
            .unwrap();
        assert_eq!(call.client_name, "Ann");
        assert_eq!(call.duration, DEFAULT_DURATION_MINUTES);
        assert_eq!(call.notes, DEFAULT_NOTES);
    }

    #[test]
    fn test_no_name_no_call() {
        assert!(CallDetails::default().into_new_call(now()).is_none());
    }
}
