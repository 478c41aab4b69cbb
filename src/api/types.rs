//! API request and response types

use crate::assistant::Reply;
use crate::calls::{ActionKind, Call, CallAction, CallRef, CallUpdate, NewCall};
use crate::session::ChatMessage;
use serde::{Deserialize, Serialize};

/// Message shown when a request can't be processed
pub const FAILURE_MESSAGE: &str = "An error occurred processing your request.";

/// Request to the chat handler
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Absent lists only fail the rules that read them
    #[serde(default)]
    pub calls: Option<Vec<Call>>,
    /// Accepted for the client's convenience, not read by any rule
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

/// Payload of an action, shaped by its [`ActionKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionData {
    Schedule(NewCall),
    Update(CallUpdate),
    Delete(CallRef),
}

/// Response from the chat handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub action: Option<ActionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
}

impl ChatResponse {
    pub fn failure() -> Self {
        Self {
            message: FAILURE_MESSAGE.to_string(),
            action: None,
            data: None,
        }
    }

    /// Recover the typed action. A tag without a matching payload is dropped.
    pub fn into_action(self) -> Option<CallAction> {
        match (self.action?, self.data?) {
            (ActionKind::ScheduleCall, ActionData::Schedule(call)) => {
                Some(CallAction::Schedule(call))
            }
            (ActionKind::UpdateCall, ActionData::Update(update)) => {
                Some(CallAction::Update(update))
            }
            (ActionKind::DeleteCall, ActionData::Delete(target)) => {
                Some(CallAction::Delete(target))
            }
            // A delete payload that carries extra fields parses as an update
            (ActionKind::DeleteCall, ActionData::Update(CallUpdate { id, .. })) => {
                Some(CallAction::Delete(CallRef { id }))
            }
            _ => None,
        }
    }
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        let (action, data) = match reply.action {
            Some(action) => {
                let kind = action.kind();
                let data = match action {
                    CallAction::Schedule(call) => ActionData::Schedule(call),
                    CallAction::Update(update) => ActionData::Update(update),
                    CallAction::Delete(target) => ActionData::Delete(target),
                };
                (Some(kind), Some(data))
            }
            None => (None, None),
        };

        Self {
            message: reply.message,
            action,
            data,
        }
    }
}
