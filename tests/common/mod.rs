#![allow(dead_code, clippy::unwrap_used)]
//! Shared helpers for backend integration tests.

use std::net::TcpListener;
use std::time::Duration;

use docqa_cli::api::{QaClient, RetryPolicy};

/// A policy that fails fast so unreachable-backend tests finish quickly.
pub fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::from_millis(10))
}

/// A base URL on which nothing is listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn client_for(uri: &str) -> QaClient {
    QaClient::new(uri, fast_policy(3))
}
