use crate::constants::*;
use bgsign_core::{Error, Result};
use http::StatusCode;
use serde_json::Value;

/// Body returned by the upload endpoint.
///
/// Fields are looked up by path so that a reply of unexpected shape is still
/// classified instead of failing as a whole.
#[derive(Debug)]
pub(crate) struct UploadResponse {
    body: Value,
}

impl UploadResponse {
    /// Parse the raw response body.
    ///
    /// Bodies that are not JSON yield an unclassified error.
    pub(crate) fn parse(body: &[u8]) -> Result<Self> {
        let body = serde_json::from_slice(body)
            .map_err(|e| Error::unexpected("failed to parse upload response").with_source(e))?;
        Ok(Self { body })
    }

    /// `error` is present and not null.
    fn has_error(&self) -> bool {
        self.body.get("error").is_some_and(|v| !v.is_null())
    }

    /// `error.message` if it is a string.
    fn error_message(&self) -> Option<&str> {
        self.body.pointer("/error/message").and_then(Value::as_str)
    }

    /// `eager[0].secure_url` if it is a non-empty string.
    ///
    /// Exactly one eager transformation is requested, only the first entry matters.
    fn secure_url(&self) -> Option<&str> {
        self.body
            .pointer("/eager/0/secure_url")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Turn the response into the url of the transformed image.
    pub(crate) fn into_result(self, status: StatusCode) -> Result<String> {
        if !status.is_success() || self.has_error() {
            let message = self.error_message();
            log::debug!("upload rejected with status {status}: {message:?}");
            return Err(classify(message));
        }

        self.secure_url()
            .map(str::to_string)
            .ok_or_else(|| Error::response_shape(RESPONSE_SHAPE_MESSAGE))
    }
}

/// Classify an error message reported by the service.
pub(crate) fn classify(message: Option<&str>) -> Error {
    match message {
        Some(m) if m.contains("Invalid signature") => Error::authentication(AUTHENTICATION_MESSAGE),
        Some(m) if m.contains("add-on") => Error::feature_unavailable(FEATURE_UNAVAILABLE_MESSAGE),
        Some(m) if !m.is_empty() => Error::upload_failed(m),
        _ => Error::upload_failed(UPLOAD_FAILED_MESSAGE),
    }
}
