//! Callbook - a chat-driven business call scheduler
//!
//! A stateless message handler that turns free-text requests into replies
//! and call-list actions, plus the HTTP surface and client-side session
//! state around it.

pub mod api;
pub mod assistant;
pub mod calls;
pub mod config;
pub mod session;
