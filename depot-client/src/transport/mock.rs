//! In-memory transport for tests
//!
//! Replies with canned responses keyed by method and path, and records every
//! request it receives so tests can assert on what would have been sent.
//! One-shot responses queued for a route are served first, oldest first;
//! once they run out the route's standing response applies.

use async_trait::async_trait;
use reqwest::Method;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use super::{Transport, TransportRequest};
use crate::error::{ClientError, Result};

#[derive(Debug, Clone)]
enum MockResponse {
    Body(Vec<u8>),
    Error { status: u16, message: String },
}

/// Number of requests seen, per verb
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestCounts {
    pub gets: usize,
    pub puts: usize,
    pub posts: usize,
    pub other: usize,
}

impl RequestCounts {
    pub fn total(&self) -> usize {
        self.gets + self.puts + self.posts + self.other
    }
}

/// Scriptable transport that never touches the network
///
/// Clones share the same routes and request log, so a test can keep one
/// handle while the client owns another.
///
/// # Example
/// ```
/// use depot_client::{DepotClient, Method, MockTransport};
///
/// # async fn example() -> depot_client::Result<()> {
/// let transport = MockTransport::new().respond(
///     Method::GET,
///     "/api/repositories/libs",
///     r#"{"key":"libs","rclass":"virtual","repositories":["a","b"]}"#,
/// );
/// let client = DepotClient::new(transport.clone());
///
/// let config = client.get_repository("libs").await?;
/// assert_eq!(config.key(), "libs");
/// assert_eq!(transport.request_counts().gets, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: Arc<RwLock<HashMap<(Method, String), MockResponse>>>,
    queued: Arc<RwLock<HashMap<(Method, String), VecDeque<MockResponse>>>>,
    requests: Arc<RwLock<Vec<TransportRequest>>>,
}

impl MockTransport {
    /// Create a transport with no routes
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method path` with `body`
    pub fn respond(self, method: Method, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(method, path.into(), MockResponse::Body(body.into()));
        self
    }

    /// Reply to `method path` with an API error
    pub fn fail(
        self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.insert(
            method,
            path.into(),
            MockResponse::Error {
                status,
                message: message.into(),
            },
        );
        self
    }

    /// Reply to the next unanswered `method path` request with `body`
    pub fn respond_once(
        self,
        method: Method,
        path: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.enqueue(method, path.into(), MockResponse::Body(body.into()));
        self
    }

    /// Reply to the next unanswered `method path` request with an API error
    pub fn fail_once(
        self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.enqueue(
            method,
            path.into(),
            MockResponse::Error {
                status,
                message: message.into(),
            },
        );
        self
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Get request counts for assertions
    pub fn request_counts(&self) -> RequestCounts {
        let requests = self.requests.read().unwrap_or_else(PoisonError::into_inner);
        let mut counts = RequestCounts::default();
        for request in requests.iter() {
            match request.method {
                Method::GET => counts.gets += 1,
                Method::PUT => counts.puts += 1,
                Method::POST => counts.posts += 1,
                _ => counts.other += 1,
            }
        }
        counts
    }

    /// Forget recorded requests, keeping the routes
    pub fn reset_requests(&self) {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn insert(&self, method: Method, path: String, response: MockResponse) {
        self.routes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, path), response);
    }

    fn enqueue(&self, method: Method, path: String, response: MockResponse) {
        self.queued
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, path))
            .or_default()
            .push_back(response);
    }

    fn next_response(&self, route: &(Method, String)) -> Option<MockResponse> {
        let queued = self
            .queued
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(route)
            .and_then(VecDeque::pop_front);

        queued.or_else(|| {
            self.routes
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(route)
                .cloned()
        })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>> {
        let route = (request.method.clone(), request.path.clone());
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match self.next_response(&route) {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Error { status, message }) => {
                Err(ClientError::api_error(status, message))
            }
            None => Err(ClientError::api_error(
                404,
                format!("no mock response for {} {}", route.0, route.1),
            )),
        }
    }
}
