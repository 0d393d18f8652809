//! `multipart/form-data` body encoding.
//!
//! Forms are encoded with [`reqwest::multipart`] and collected in memory so
//! that they can travel through [`HttpSend`](crate::HttpSend) as plain `Bytes`.

use crate::{Error, Result, UploadFile};
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::multipart::{Form as ReqwestForm, Part};
use reqwest::{Body, Client};

/// Form is a `multipart/form-data` body under construction.
///
/// ```
/// use bgsign_core::multipart::Form;
///
/// let form = Form::new().text("timestamp", "1700000000");
/// assert_eq!(
///     form.content_type(),
///     format!("multipart/form-data; boundary={}", form.boundary())
/// );
/// ```
#[derive(Debug, Default)]
pub struct Form {
    inner: ReqwestForm,
}

impl Form {
    /// Create a new form with a random boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The boundary separating the parts.
    pub fn boundary(&self) -> &str {
        self.inner.boundary()
    }

    /// Append a text field.
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inner: self.inner.text(name.into(), value.into()),
        }
    }

    /// Append a file field carrying the file name and content type.
    ///
    /// Fails if the content type of `file` is not a valid mime type.
    pub fn file(self, name: impl Into<String>, file: &UploadFile) -> Result<Self> {
        // Cloning `Bytes` only bumps a reference count.
        let part = Part::stream_with_length(Body::from(file.content().clone()), file.len() as u64)
            .file_name(file.name().to_string())
            .mime_str(file.content_type())
            .map_err(|e| {
                Error::unexpected(format!("invalid content type {}", file.content_type()))
                    .with_source(e)
            })?;

        Ok(Self {
            inner: self.inner.part(name.into(), part),
        })
    }

    /// Value of the `Content-Type` header for this body.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary())
    }

    /// Build a request to `uri` carrying the encoded form.
    ///
    /// The `Content-Type` header is set, the body is fully collected.
    pub async fn into_request(
        self,
        method: http::Method,
        uri: &str,
    ) -> Result<http::Request<Bytes>> {
        // The client is only used to assemble the request, nothing is sent.
        let client = Client::builder()
            .build()
            .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;
        let req = client
            .request(method, uri)
            .multipart(self.inner)
            .build()
            .map_err(|e| Error::unexpected("failed to build multipart request").with_source(e))?;
        let req = http::Request::<Body>::try_from(req)
            .map_err(|e| Error::unexpected("failed to convert request").with_source(e))?;

        let (parts, body) = req.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to encode multipart body").with_source(e))?;
        Ok(http::Request::from_parts(parts, bs))
    }
}
