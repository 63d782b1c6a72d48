//! The I/O seam between the manager and the host.
//!
//! Implementations execute one `HttpRequest` and hand back the raw
//! `HttpResponse`. Non-2xx statuses are data, not errors; only a failure to
//! obtain any response should surface as `ApiError::Transport`.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
