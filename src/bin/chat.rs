//! Terminal client for the callbook server
//!
//! Holds the session's call list locally, sends it with every message and
//! applies the returned actions, the same way the web UI does.

use callbook::api::{ChatRequest, ChatResponse};
use callbook::assistant::locale_time;
use callbook::config::server_url;
use callbook::session::CallBook;
use chrono::{Local, Utc};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("unreadable response: {0}")]
    Decode(#[from] io::Error),
}

struct Client {
    chat_url: String,
    session_url: String,
}

impl Client {
    fn new(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            chat_url: format!("{base}/api/chat"),
            session_url: format!("{base}/api/session"),
        }
    }

    fn new_session(&self) -> Result<CallBook, ClientError> {
        let response = ureq::get(&self.session_url).call().map_err(Box::new)?;
        Ok(response.into_json()?)
    }

    fn send(&self, book: &CallBook, message: &str) -> Result<ChatResponse, ClientError> {
        let request = ChatRequest {
            message: message.to_string(),
            calls: Some(book.calls.clone()),
            chat_history: book.chat_history.clone(),
        };
        let response = ureq::post(&self.chat_url)
            .send_json(&request)
            .map_err(Box::new)?;
        Ok(response.into_json()?)
    }
}

fn print_calls(book: &CallBook) {
    if book.calls.is_empty() {
        println!("  (no calls)");
        return;
    }
    for call in &book.calls {
        println!(
            "  [{}] {} - {} ({} min, {}, {}) {}",
            call.status,
            call.client_name,
            locale_time(&call.scheduled_time, &Local),
            call.duration,
            call.priority,
            call.category,
            call.phone_number,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(&server_url());

    let mut book = match client.new_session() {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Could not load demo session ({e}), starting empty");
            CallBook::default()
        }
    };

    for entry in &book.chat_history {
        println!("assistant> {}\n", entry.content);
    }
    println!("Type a message, /calls to list calls, or /quit.");

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        match message {
            "" => continue,
            "/quit" | "/exit" => break,
            "/calls" => {
                print_calls(&book);
                continue;
            }
            _ => {}
        }

        match client.send(&book, message) {
            Ok(response) => {
                let reply = response.message.clone();
                if let Some(action) = response.into_action() {
                    if book.apply(action, Utc::now()) {
                        print_calls(&book);
                    }
                }
                println!("assistant> {reply}\n");
                book.record_exchange(message, reply);
            }
            Err(e) => {
                eprintln!("{e}");
                book.record_failure(message);
                if let Some(last) = book.chat_history.last() {
                    println!("assistant> {}\n", last.content);
                }
            }
        }
    }

    Ok(())
}
