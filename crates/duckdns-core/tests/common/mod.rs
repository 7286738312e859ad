//! Test doubles and common utilities for contract tests
//!
//! This module provides minimal test doubles that record how the core
//! interacts with its collaborators.

#![allow(dead_code)]

use duckdns_core::error::{Error, Result};
use duckdns_core::resolver::RequestSource;
use duckdns_core::traits::UpdateTransport;
use duckdns_core::UpdateRequest;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted reply for one transport call
#[derive(Debug, Clone)]
pub enum Reply {
    /// Response body
    Body(String),
    /// Transport failure with this message
    Fail(String),
}

impl Reply {
    pub fn ok() -> Self {
        Reply::Body("OK".to_string())
    }

    pub fn ko() -> Self {
        Reply::Body("KO".to_string())
    }
}

/// A transport that records requested URLs and replays scripted replies
///
/// Once the script is exhausted every call answers `OK`.
pub struct RecordingTransport {
    /// URLs passed to get(), in call order
    urls: Arc<Mutex<Vec<String>>>,
    /// Replies still to hand out
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl RecordingTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            urls: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(replies.into())),
        }
    }

    /// Create a transport that shares recorded state with an existing one
    pub fn sharing_state_with(other: &Self) -> Self {
        Self {
            urls: Arc::clone(&other.urls),
            replies: Arc::clone(&other.replies),
        }
    }

    /// Number of get() calls made
    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    /// URLs requested so far
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// `domains` query value of every requested URL
    pub fn requested_names(&self) -> Vec<String> {
        self.urls()
            .iter()
            .filter_map(|url| {
                url.split(['?', '&'])
                    .find_map(|pair| pair.strip_prefix("domains="))
                    .map(str::to_string)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl UpdateTransport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.urls.lock().unwrap().push(url.to_string());

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(Error::http(message)),
            None => Ok("OK".to_string()),
        }
    }

    fn transport_name(&self) -> &'static str {
        "recording"
    }
}

/// A resolution source with fixed values that counts how often it is consulted
pub struct CountingSource {
    request: UpdateRequest,
    fill_count: AtomicUsize,
}

impl CountingSource {
    pub fn new(token: &str, names: &[&str]) -> Self {
        Self {
            request: UpdateRequest::new(token, names.iter().map(|s| s.to_string()).collect()),
            fill_count: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new("", &[])
    }

    /// Get the number of times fill() was called
    pub fn fill_count(&self) -> usize {
        self.fill_count.load(Ordering::SeqCst)
    }
}

impl RequestSource for CountingSource {
    fn fill(&self, mut partial: UpdateRequest) -> UpdateRequest {
        self.fill_count.fetch_add(1, Ordering::SeqCst);
        if !partial.has_token() {
            partial.token = self.request.token.clone();
        }
        if !partial.has_names() {
            partial.names = self.request.names.clone();
        }
        partial
    }

    fn source_name(&self) -> &'static str {
        "counting"
    }
}

/// Helper to build a name list
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
