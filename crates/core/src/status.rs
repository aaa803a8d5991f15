//! JSend status tags and the HTTP status code classification.

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// The three JSend status tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The request was handled; `data` carries the result.
    Success,
    /// The request was rejected because of the caller's input.
    Fail,
    /// The server failed to handle the request; `message` explains why.
    Error,
}

impl Status {
    /// The wire representation of this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Fail => "fail",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusCode> for Status {
    fn from(code: StatusCode) -> Self {
        classify(code.as_u16())
    }
}

/// Map a numeric HTTP status code to its JSend tag.
///
/// `5xx` and above is `error`, `4xx` is `fail`, everything else (including
/// `1xx` and `3xx`) is `success`.
///
/// ```
/// use jsend_core::{classify, Status};
///
/// assert_eq!(classify(200), Status::Success);
/// assert_eq!(classify(404), Status::Fail);
/// assert_eq!(classify(503), Status::Error);
/// ```
pub const fn classify(code: u16) -> Status {
    match code {
        500..=u16::MAX => Status::Error,
        400..=499 => Status::Fail,
        _ => Status::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_classify_as_error() {
        for code in [500, 502, 503, 599, 999] {
            assert_eq!(classify(code), Status::Error, "code {code}");
        }
    }

    #[test]
    fn client_errors_classify_as_fail() {
        for code in [400, 401, 404, 422, 499] {
            assert_eq!(classify(code), Status::Fail, "code {code}");
        }
    }

    #[test]
    fn everything_else_classifies_as_success() {
        for code in [0, 100, 101, 200, 201, 204, 301, 304, 399] {
            assert_eq!(classify(code), Status::Success, "code {code}");
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(classify(399), Status::Success);
        assert_eq!(classify(400), Status::Fail);
        assert_eq!(classify(499), Status::Fail);
        assert_eq!(classify(500), Status::Error);
    }

    #[test]
    fn from_status_code() {
        assert_eq!(Status::from(StatusCode::CREATED), Status::Success);
        assert_eq!(Status::from(StatusCode::CONFLICT), Status::Fail);
        assert_eq!(Status::from(StatusCode::BAD_GATEWAY), Status::Error);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Fail).unwrap(), "\"fail\"");
        let parsed: Status = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Status::Error);
        assert_eq!(Status::Success.to_string(), "success");
    }
}
