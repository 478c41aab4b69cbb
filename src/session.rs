//! Client-side session state
//!
//! The server keeps nothing between requests. A client holds a [`CallBook`]
//! for the length of a session, sends it with every message, and applies
//! the returned action to it.

use crate::calls::{Call, CallAction, CallStatus, NewCall, Priority};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello! I'm your AI business calls assistant. I can help you schedule calls, manage your call list, take notes, and provide insights. Try asking me to \"schedule a call\" or \"show my upcoming calls\".";

pub const APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Call list plus chat transcript for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBook {
    pub calls: Vec<Call>,
    pub chat_history: Vec<ChatMessage>,
}

impl CallBook {
    /// A fresh session: one demo call an hour from `now` and the greeting
    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        let demo = NewCall {
            client_name: "John Smith".to_string(),
            phone_number: "+1-555-0123".to_string(),
            scheduled_time: now + Duration::hours(1),
            duration: 30,
            status: CallStatus::Scheduled,
            notes: "Discuss Q4 sales report".to_string(),
            priority: Priority::High,
            category: "Sales".to_string(),
        };

        Self {
            calls: vec![demo.with_id("1")],
            chat_history: vec![ChatMessage::assistant(GREETING)],
        }
    }

    /// Apply an action from the assistant.
    ///
    /// New calls get an id derived from `now`. Returns whether the list
    /// changed; an update or delete for an unknown id does nothing.
    pub fn apply(&mut self, action: CallAction, now: DateTime<Utc>) -> bool {
        match action {
            CallAction::Schedule(call) => {
                let id = self.next_id(now);
                tracing::debug!(%id, client = %call.client_name, "Adding call");
                self.calls.push(call.with_id(id));
                true
            }
            CallAction::Update(update) => {
                match self.calls.iter_mut().find(|c| c.id == update.id) {
                    Some(call) => {
                        call.status = update.status;
                        true
                    }
                    None => {
                        tracing::warn!(id = %update.id, "Update for unknown call");
                        false
                    }
                }
            }
            CallAction::Delete(target) => {
                let before = self.calls.len();
                self.calls.retain(|c| c.id != target.id);
                self.calls.len() != before
            }
        }
    }

    /// Record a completed exchange in the transcript
    pub fn record_exchange(&mut self, user: impl Into<String>, reply: impl Into<String>) {
        self.chat_history.push(ChatMessage::user(user));
        self.chat_history.push(ChatMessage::assistant(reply));
    }

    /// Record a message whose request failed; the cause is never shown
    pub fn record_failure(&mut self, user: impl Into<String>) {
        self.record_exchange(user, APOLOGY);
    }

    /// Millisecond timestamp, bumped past any id already in use
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        loop {
            let id = candidate.to_string();
            if !self.calls.iter().any(|c| c.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}
