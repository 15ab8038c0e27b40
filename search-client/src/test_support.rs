//! Mock transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Error;
use crate::interfaces::{Method, Transport};

/// One request observed by the mock.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport mock with scripted responses.
///
/// Responses are served in push order; the last one repeats once the queue
/// is down to a single entry, so pollers can be fed an endless non-terminal
/// status. Every request is recorded for assertions.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, Error>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful response.
    pub fn push_ok(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    /// Queue an error response.
    pub fn push_err(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Handle onto the recorded requests, usable after the mock moved into
    /// a client.
    pub fn requests(&self) -> Arc<Mutex<Vec<RecordedRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Err(Error::connection("no mock response queued")),
            1 => responses.front().cloned().unwrap(),
            _ => responses.pop_front().unwrap(),
        }
    }
}
