//! Transport layer
//!
//! The client never talks HTTP itself. Every operation is turned into a
//! [`TransportRequest`] and handed to a [`Transport`], which returns the raw
//! response body. Swapping the transport is how the client is tested.

mod http;
mod mock;

pub use http::{Credentials, HttpTransport, TransportConfig};
pub use mock::{MockTransport, RequestCounts};

use async_trait::async_trait;
use reqwest::Method;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::Result;

/// Query parameters, kept sorted so requests are reproducible
pub type QueryParams = BTreeMap<String, String>;

/// A single HTTP request as seen by a transport
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP verb
    pub method: Method,
    /// Path below the API base URL, starting with `/`
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Vec<u8>>,
    /// Value for the `Content-Type` header when a body is present
    pub content_type: Option<&'static str>,
}

impl TransportRequest {
    /// Create a request without query parameters or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
            content_type: None,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Vec<u8>, content_type: &'static str) -> Self {
        self.body = Some(body);
        self.content_type = Some(content_type);
        self
    }
}

/// Executes HTTP requests on behalf of the client
///
/// Implementations return the response body on a successful status and an
/// error otherwise. They decide on timeouts, authentication and TLS.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one round-trip
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>> {
        (**self).execute(request).await
    }
}
