use crate::{Context, Result};
use bytes::Bytes;
use std::fmt::{Debug, Formatter};
use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// UploadFile is the binary blob handed over by the caller for uploading.
///
/// Size and type are not validated here, that is up to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    name: String,
    content_type: String,
    content: Bytes,
}

impl Debug for UploadFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.content.len())
            .finish()
    }
}

impl UploadFile {
    /// Create a new upload file from in-memory content.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    /// Read the file at `path` through the context's file reader.
    ///
    /// The file name is the last path component and the content type is
    /// guessed from the extension.
    pub async fn from_path(ctx: &Context, path: &str) -> Result<Self> {
        let content = ctx.file_read(path).await?;
        let name = Path::new(path)
            .file_name()
            .map(|v| v.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string());
        let content_type = guess_content_type(&name);

        log::debug!(
            "loaded upload file {name} ({content_type}, {} bytes)",
            content.len()
        );
        Ok(Self::new(name, content_type, content))
    }

    /// File name sent along with the content.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type of the content.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw content.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Guess the MIME type of an image from its file name.
pub fn guess_content_type(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|v| v.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
