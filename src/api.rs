//! HTTP API for the call assistant

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::assistant::Assistant;
use chrono::Local;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant<Local>>,
}

impl AppState {
    pub fn new(assistant: Assistant<Local>) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}
