//! Call records and the actions that mutate a call list
//!
//! The handler never owns a call list. It reads the one the client sends and
//! answers with at most one [`CallAction`] for the client to apply.

mod filters;

pub use filters::{first_with_status, summarize, with_priority, with_status, CallSummary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Scheduled,
    Completed,
    Missed,
    InProgress,
}

impl CallStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CallStatus::Scheduled => "scheduled",
            CallStatus::Completed => "completed",
            CallStatus::Missed => "missed",
            CallStatus::InProgress => "in-progress",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled business call as held by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub client_name: String,
    pub phone_number: String,
    pub scheduled_time: DateTime<Utc>,
    /// Minutes
    pub duration: u32,
    pub status: CallStatus,
    pub notes: String,
    pub priority: Priority,
    pub category: String,
}

/// A call the handler wants created. The client assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCall {
    pub client_name: String,
    pub phone_number: String,
    pub scheduled_time: DateTime<Utc>,
    pub duration: u32,
    pub status: CallStatus,
    pub notes: String,
    pub priority: Priority,
    pub category: String,
}

impl NewCall {
    pub fn with_id(self, id: impl Into<String>) -> Call {
        Call {
            id: id.into(),
            client_name: self.client_name,
            phone_number: self.phone_number,
            scheduled_time: self.scheduled_time,
            duration: self.duration,
            status: self.status,
            notes: self.notes,
            priority: self.priority,
            category: self.category,
        }
    }
}

/// Status change for an existing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallUpdate {
    pub id: String,
    pub status: CallStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRef {
    pub id: String,
}

/// Structured instruction returned alongside a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallAction {
    Schedule(NewCall),
    Update(CallUpdate),
    /// Understood by clients but never produced by the assistant.
    Delete(CallRef),
}

/// Wire tag of a [`CallAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ScheduleCall,
    UpdateCall,
    DeleteCall,
}

impl CallAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            CallAction::Schedule(_) => ActionKind::ScheduleCall,
            CallAction::Update(_) => ActionKind::UpdateCall,
            CallAction::Delete(_) => ActionKind::DeleteCall,
        }
    }
}
