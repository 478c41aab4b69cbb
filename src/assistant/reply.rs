//! Reply texts

use crate::calls::{Call, CallSummary, NewCall};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Write;

pub const SCHEDULE_HELP: &str = "I'll help you schedule a call. Here's what I need:\n\n1. Client name\n2. Phone number\n3. Date and time\n4. Duration\n5. Priority (high/medium/low)\n6. Category\n7. Any notes\n\nFor example: 'Schedule a call with Sarah Johnson at +1-555-0199 tomorrow at 2 PM for 45 minutes, high priority, category Sales, discuss new contract'";

pub const NO_UPCOMING_CALLS: &str = "You don't have any upcoming calls scheduled.";

pub const NO_HIGH_PRIORITY_CALLS: &str = "You don't have any high priority calls at the moment.";

pub const NOTHING_TO_COMPLETE: &str = "No scheduled calls to mark as completed.";

pub const HELP: &str = "I can help you with:\n\n📅 Schedule new calls\n📊 View your call schedule\n✅ Mark calls as completed\n🔥 Check high priority calls\n📝 Generate summaries and reports\n\nWhat would you like to do?";

/// Format like an en-US locale string, e.g. `10/19/2026, 2:00:00 PM`
pub fn locale_time<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String {
    at.with_timezone(tz)
        .naive_local()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

pub fn scheduled<Tz: TimeZone>(call: &NewCall, tz: &Tz) -> String {
    format!(
        "✅ Call scheduled successfully!\n\nClient: {}\nPhone: {}\nTime: {}\nDuration: {} minutes\nPriority: {}\nCategory: {}\nNotes: {}",
        call.client_name,
        call.phone_number,
        locale_time(&call.scheduled_time, tz),
        call.duration,
        call.priority,
        call.category,
        call.notes,
    )
}

pub fn upcoming<Tz: TimeZone>(calls: &[&Call], tz: &Tz) -> String {
    let lines = numbered(calls, |call| {
        format!(
            "{} - {} ({} priority)",
            call.client_name,
            locale_time(&call.scheduled_time, tz),
            call.priority
        )
    });
    format!("📅 You have {} upcoming call(s):\n\n{lines}", calls.len())
}

pub fn high_priority<Tz: TimeZone>(calls: &[&Call], tz: &Tz) -> String {
    let lines = numbered(calls, |call| {
        format!(
            "{} - {} [{}]",
            call.client_name,
            locale_time(&call.scheduled_time, tz),
            call.status
        )
    });
    format!("🔥 You have {} high priority call(s):\n\n{lines}", calls.len())
}

pub fn summary(counts: &CallSummary) -> String {
    format!(
        "📊 Calls Summary:\n\n✅ Completed: {}\n📅 Scheduled: {}\n❌ Missed: {}\n🔥 High Priority: {}\n\nTotal Calls: {}",
        counts.completed, counts.scheduled, counts.missed, counts.high_priority, counts.total
    )
}

pub fn completed(call: &Call) -> String {
    format!(
        "✅ Marked call with {} as completed. Great job!",
        call.client_name
    )
}

fn numbered(calls: &[&Call], line: impl Fn(&Call) -> String) -> String {
    let mut out = String::new();
    for (idx, call) in calls.iter().copied().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}. {}", idx + 1, line(call));
    }
    out
}
