use serde::{Deserialize, Serialize};

use crate::domain::models::status::ResponseStatus;

/// Uniform response envelope returned by every endpoint.
///
/// `data` is left out of the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    code: u16,
    msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    fn new(code: u16, msg: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data,
        }
    }

    pub fn success() -> Self {
        let status = ResponseStatus::Success;
        Self::new(status.code(), status.message(), None)
    }

    pub fn success_with_data(data: T) -> Self {
        let status = ResponseStatus::Success;
        Self::new(status.code(), status.message(), Some(data))
    }

    pub fn success_with_data_and_msg(data: T, msg: impl Into<String>) -> Self {
        Self::new(ResponseStatus::Success.code(), msg, Some(data))
    }

    pub fn failure() -> Self {
        let status = ResponseStatus::Fail;
        Self::new(status.code(), status.message(), None)
    }

    pub fn failure_with(code: u16, msg: impl Into<String>) -> Self {
        Self::new(code, msg, None)
    }

    /// Failure carrying a detail payload, e.g. per-field validation errors
    pub fn failure_with_data(code: u16, msg: impl Into<String>, data: T) -> Self {
        Self::new(code, msg, Some(data))
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
