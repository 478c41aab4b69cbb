//! Stateless views over a call list

use super::{Call, CallStatus, Priority};
use serde::Serialize;

/// Calls with the given status, in input order
pub fn with_status(calls: &[Call], status: CallStatus) -> Vec<&Call> {
    calls.iter().filter(|c| c.status == status).collect()
}

/// Calls with the given priority, in input order
pub fn with_priority(calls: &[Call], priority: Priority) -> Vec<&Call> {
    calls.iter().filter(|c| c.priority == priority).collect()
}

pub fn first_with_status(calls: &[Call], status: CallStatus) -> Option<&Call> {
    calls.iter().find(|c| c.status == status)
}

/// Per-status and high-priority counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CallSummary {
    pub scheduled: usize,
    pub completed: usize,
    pub missed: usize,
    pub high_priority: usize,
    pub total: usize,
}

pub fn summarize(calls: &[Call]) -> CallSummary {
    calls.iter().fold(
        CallSummary {
            total: calls.len(),
            ..CallSummary::default()
        },
        |mut summary, call| {
            match call.status {
                CallStatus::Scheduled => summary.scheduled += 1,
                CallStatus::Completed => summary.completed += 1,
                CallStatus::Missed => summary.missed += 1,
                CallStatus::InProgress => {}
            }
            if call.priority == Priority::High {
                summary.high_priority += 1;
            }
            summary
        },
    )
}
