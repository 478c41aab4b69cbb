//! Property-based tests for intent dispatch
//!
//! These check invariants of the decision list across arbitrary messages
//! and call lists.

use super::*;
use crate::calls::{CallStatus, Priority};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_status() -> impl Strategy<Value = CallStatus> {
    prop_oneof![
        Just(CallStatus::Scheduled),
        Just(CallStatus::Completed),
        Just(CallStatus::Missed),
        Just(CallStatus::InProgress),
    ]
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

fn arb_call() -> impl Strategy<Value = Call> {
    (
        "[0-9]{1,6}",
        "[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}",
        arb_status(),
        arb_priority(),
        1u32..240,
        0i64..2_000_000_000,
    )
        .prop_map(|(id, client_name, status, priority, duration, secs)| Call {
            id,
            client_name,
            phone_number: "+1-555-0100".to_string(),
            scheduled_time: DateTime::from_timestamp(secs, 0).unwrap_or_default(),
            duration,
            status,
            notes: String::new(),
            priority,
            category: "General".to_string(),
        })
}

fn arb_calls() -> impl Strategy<Value = Vec<Call>> {
    prop::collection::vec(arb_call(), 0..8)
}

fn arb_message() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("schedule".to_string()),
        Just("show".to_string()),
        Just("call".to_string()),
        Just("with".to_string()),
        Just("urgent".to_string()),
        Just("summary".to_string()),
        Just("complete".to_string()),
        Just("tomorrow".to_string()),
        Just("30 minutes".to_string()),
        "[a-zA-Z0-9+-]{1,10}",
    ];
    prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "))
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
}

proptest! {
    #[test]
    fn prop_schedule_keyword_always_prompts(
        prefix in arb_message(),
        suffix in arb_message(),
        calls in arb_calls(),
    ) {
        let message = format!("{prefix} Schedule {suffix}");
        let reply = Assistant::new(Utc).respond(&message, Some(calls.as_slice()), now()).unwrap();
        prop_assert_eq!(reply.intent, Intent::ScheduleHelp);
        prop_assert!(reply.action.is_none());
    }

    #[test]
    fn prop_every_message_gets_a_reply(message in arb_message(), calls in arb_calls()) {
        let reply = Assistant::new(Utc).respond(&message, Some(calls.as_slice()), now()).unwrap();
        prop_assert!(!reply.message.is_empty());
    }

    #[test]
    fn prop_actions_match_intent(message in arb_message(), calls in arb_calls()) {
        let reply = Assistant::new(Utc).respond(&message, Some(calls.as_slice()), now()).unwrap();
        match &reply.action {
            None => {}
            Some(CallAction::Schedule(call)) => {
                prop_assert_eq!(reply.intent, Intent::ScheduleCall);
                prop_assert_eq!(call.status, CallStatus::Scheduled);
                prop_assert!(!call.client_name.is_empty());
            }
            Some(CallAction::Update(update)) => {
                prop_assert_eq!(reply.intent, Intent::CompleteNext);
                prop_assert_eq!(update.status, CallStatus::Completed);
                let target = calls.iter().find(|c| c.status == CallStatus::Scheduled);
                prop_assert_eq!(target.map(|c| c.id.as_str()), Some(update.id.as_str()));
            }
            Some(CallAction::Delete(_)) => prop_assert!(false, "delete is never produced"),
        }
    }

    #[test]
    fn prop_summary_totals(calls in arb_calls()) {
        let reply = Assistant::new(Utc).respond("overview", Some(calls.as_slice()), now()).unwrap();
        let total_line = format!("Total Calls: {}", calls.len());
        prop_assert!(reply.message.ends_with(&total_line));
    }

    #[test]
    fn prop_respond_is_pure(message in arb_message(), calls in arb_calls()) {
        let assistant = Assistant::new(Utc);
        let first = assistant.respond(&message, Some(calls.as_slice()), now()).unwrap();
        let second = assistant.respond(&message, Some(calls.as_slice()), now()).unwrap();
        prop_assert_eq!(first, second);
    }
}
