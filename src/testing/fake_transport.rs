use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ApiResponse, GitHubTransport, HttpMethod};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
enum Reply {
    Status { status: u16, body: Vec<u8> },
    Fail(String),
}

/// Transport returning one fixed reply and recording every request.
pub struct FakeTransport {
    reply: Reply,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn with_status(status: u16) -> Self {
        Self::with_body(status, "")
    }

    pub fn with_body(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Status { status, body: body.as_bytes().to_vec() },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self { reply: Reply::Fail(message.to_string()), requests: Mutex::new(Vec::new()) }
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GitHubTransport for FakeTransport {
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<ApiResponse, AppError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.map(<[u8]>::to_vec),
        });

        match &self.reply {
            Reply::Status { status, body } => {
                Ok(ApiResponse { status: *status, body: body.clone() })
            }
            Reply::Fail(message) => Err(AppError::Http(message.clone())),
        }
    }
}
