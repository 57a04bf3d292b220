// Scripted transport for unit tests
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::transport::{ApiRequest, RawResponse, Transport};
use crate::error::{ApiError, ApiResult};

/// Replays queued outcomes in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<ApiResult<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for {}", url))
    }
}

/// Never answers.
pub struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn send(&self, _request: ApiRequest) -> ApiResult<RawResponse> {
        std::future::pending().await
    }
}
