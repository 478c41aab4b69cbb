//! Intent classification as an ordered decision list
//!
//! Rules are checked top to bottom and the first rule that answers wins.
//! Several rules share trigger words ("schedule" appears in rules 1 to 3),
//! so the order is part of the behavior.

use super::extract::extract_call_details;
use super::reply;
use super::{AssistantError, Reply};
use crate::calls::{
    first_with_status, summarize, with_priority, with_status, Call, CallAction, CallStatus,
    CallUpdate, Priority,
};
use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static SCHEDULE_WITH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"schedule.*with|call with").expect("pattern is valid"));

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Generic "schedule a call" without details
    ScheduleHelp,
    /// "call with <name> ..." with extractable details
    ScheduleCall,
    ListUpcoming,
    HighPriority,
    Summary,
    CompleteNext,
    /// Nothing else matched
    Help,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::ScheduleHelp => "schedule_help",
            Intent::ScheduleCall => "schedule_call",
            Intent::ListUpcoming => "list_upcoming",
            Intent::HighPriority => "high_priority",
            Intent::Summary => "summary",
            Intent::CompleteNext => "complete_next",
            Intent::Help => "help",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One incoming message with everything a responder may read
pub(super) struct Turn<'a, Tz: TimeZone> {
    pub text: &'a str,
    pub lowered: String,
    pub now: DateTime<Tz>,
    calls: Option<&'a [Call]>,
}

impl<'a, Tz: TimeZone> Turn<'a, Tz> {
    pub fn new(text: &'a str, calls: Option<&'a [Call]>, now: DateTime<Tz>) -> Self {
        Self {
            text,
            lowered: text.to_lowercase(),
            now,
            calls,
        }
    }

    /// The caller's call list; only some rules need it
    fn calls(&self, intent: Intent) -> Result<&'a [Call], AssistantError> {
        self.calls.ok_or(AssistantError::MissingCalls(intent))
    }
}

type Responder<Tz> = for<'t, 'a> fn(&'t Turn<'a, Tz>) -> Result<Option<Reply>, AssistantError>;

/// Trigger predicate over the lower-cased message plus its responder.
///
/// A responder returning `Ok(None)` declines and evaluation continues.
pub(super) struct Rule<Tz: TimeZone> {
    pub intent: Intent,
    pub triggered: fn(&str) -> bool,
    pub respond: Responder<Tz>,
}

/// The decision list. [`Intent::Help`] is the fallback when nothing answers.
pub(super) fn rules<Tz: TimeZone>() -> [Rule<Tz>; 6] {
    [
        Rule {
            intent: Intent::ScheduleHelp,
            triggered: asks_to_schedule,
            respond: schedule_help,
        },
        Rule {
            intent: Intent::ScheduleCall,
            triggered: names_a_call,
            respond: schedule_call,
        },
        Rule {
            intent: Intent::ListUpcoming,
            triggered: asks_to_show,
            respond: list_upcoming,
        },
        Rule {
            intent: Intent::HighPriority,
            triggered: asks_about_priority,
            respond: high_priority,
        },
        Rule {
            intent: Intent::Summary,
            triggered: asks_for_summary,
            respond: summary,
        },
        Rule {
            intent: Intent::CompleteNext,
            triggered: asks_to_complete,
            respond: complete_next,
        },
    ]
}

fn contains_any(lowered: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| lowered.contains(needle))
}

// ============================================================
// Triggers
// ============================================================

fn asks_to_schedule(lowered: &str) -> bool {
    contains_any(lowered, &["schedule", "add a call", "new call"])
}

fn names_a_call(lowered: &str) -> bool {
    SCHEDULE_WITH_RE.is_match(lowered)
}

fn asks_to_show(lowered: &str) -> bool {
    lowered.contains("show") && contains_any(lowered, &["call", "schedule"])
}

fn asks_about_priority(lowered: &str) -> bool {
    contains_any(lowered, &["priority", "urgent", "important"])
}

fn asks_for_summary(lowered: &str) -> bool {
    contains_any(lowered, &["summar", "report", "overview"])
}

fn asks_to_complete(lowered: &str) -> bool {
    contains_any(lowered, &["complete", "finished"])
}

// ============================================================
// Responders
// ============================================================

#[allow(clippy::unnecessary_wraps)]
fn schedule_help<Tz: TimeZone>(_turn: &Turn<'_, Tz>) -> Result<Option<Reply>, AssistantError> {
    Ok(Some(Reply::text(Intent::ScheduleHelp, reply::SCHEDULE_HELP)))
}

/// Declines when no client name can be extracted
#[allow(clippy::unnecessary_wraps)]
fn schedule_call<Tz: TimeZone>(turn: &Turn<'_, Tz>) -> Result<Option<Reply>, AssistantError> {
    let details = extract_call_details(turn.text, &turn.now);
    let Some(call) = details.into_new_call(turn.now.with_timezone(&Utc)) else {
        return Ok(None);
    };

    let message = reply::scheduled(&call, &turn.now.timezone());
    Ok(Some(Reply::with_action(
        Intent::ScheduleCall,
        message,
        CallAction::Schedule(call),
    )))
}

fn list_upcoming<Tz: TimeZone>(turn: &Turn<'_, Tz>) -> Result<Option<Reply>, AssistantError> {
    let upcoming = with_status(turn.calls(Intent::ListUpcoming)?, CallStatus::Scheduled);
    let message = if upcoming.is_empty() {
        reply::NO_UPCOMING_CALLS.to_string()
    } else {
        reply::upcoming(&upcoming, &turn.now.timezone())
    };
    Ok(Some(Reply::text(Intent::ListUpcoming, message)))
}

fn high_priority<Tz: TimeZone>(turn: &Turn<'_, Tz>) -> Result<Option<Reply>, AssistantError> {
    let urgent = with_priority(turn.calls(Intent::HighPriority)?, Priority::High);
    let message = if urgent.is_empty() {
        reply::NO_HIGH_PRIORITY_CALLS.to_string()
    } else {
        reply::high_priority(&urgent, &turn.now.timezone())
    };
    Ok(Some(Reply::text(Intent::HighPriority, message)))
}

fn summary<Tz: TimeZone>(turn: &Turn<'_, Tz>) -> Result<Option<Reply>, AssistantError> {
    let counts = summarize(turn.calls(Intent::Summary)?);
    Ok(Some(Reply::text(Intent::Summary, reply::summary(&counts))))
}

/// Always answers, whether or not anything was left to complete
fn complete_next<Tz: TimeZone>(turn: &Turn<'_, Tz>) -> Result<Option<Reply>, AssistantError> {
    let calls = turn.calls(Intent::CompleteNext)?;
    let answer = match first_with_status(calls, CallStatus::Scheduled) {
        Some(call) => Reply::with_action(
            Intent::CompleteNext,
            reply::completed(call),
            CallAction::Update(CallUpdate {
                id: call.id.clone(),
                status: CallStatus::Completed,
            }),
        ),
        None => Reply::text(Intent::CompleteNext, reply::NOTHING_TO_COMPLETE),
    };
    Ok(Some(answer))
}
