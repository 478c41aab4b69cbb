//! Chat assistant for managing a list of business calls
//!
//! Keyword rules pick an intent, regex extractors pull call details out of
//! scheduling requests. There is no language model behind this.

mod extract;
mod intent;
mod reply;

#[cfg(test)]
mod proptests;

pub use extract::{extract_call_details, CallDetails};
pub use intent::Intent;
pub use reply::locale_time;

use crate::calls::{Call, CallAction};
use chrono::{DateTime, TimeZone, Utc};
use intent::{rules, Turn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("request has no call list, which {0} needs")]
    MissingCalls(Intent),
}

/// Answer to one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub message: String,
    pub action: Option<CallAction>,
}

impl Reply {
    pub fn text(intent: Intent, message: impl Into<String>) -> Self {
        Self {
            intent,
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(intent: Intent, message: impl Into<String>, action: CallAction) -> Self {
        Self {
            intent,
            message: message.into(),
            action: Some(action),
        }
    }
}

/// Stateless message handler.
///
/// `tz` is the zone "tomorrow" is counted in and reply times are shown in.
#[derive(Debug, Clone)]
pub struct Assistant<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> Assistant<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Classify `message` and answer it against the caller's `calls`.
    ///
    /// `calls` is only required by the rules that read the list; a missing
    /// list fails those with [`AssistantError::MissingCalls`].
    pub fn respond(
        &self,
        message: &str,
        calls: Option<&[Call]>,
        now: DateTime<Utc>,
    ) -> Result<Reply, AssistantError> {
        let turn = Turn::new(message, calls, now.with_timezone(&self.tz));

        for rule in rules::<Tz>() {
            if !(rule.triggered)(&turn.lowered) {
                continue;
            }
            match (rule.respond)(&turn)? {
                Some(reply) => return Ok(reply),
                None => tracing::debug!(intent = %rule.intent, "Rule declined, continuing"),
            }
        }

        Ok(Reply::text(Intent::Help, reply::HELP))
    }
}
