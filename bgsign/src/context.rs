use bgsign_core::{Context, OsEnv};
use bgsign_file_read_tokio::TokioFileRead;
use bgsign_http_send_reqwest::ReqwestHttpSend;

/// Create a context with the default implementations:
///
/// - files are read with tokio
/// - http requests are sent with a default reqwest client
/// - environment variables come from the current process
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a default context that sends requests through `client`.
///
/// Use this to set timeouts or proxies on the http client.
pub fn default_context_with_client(client: reqwest::Client) -> Context {
    default_context().with_http_send(ReqwestHttpSend::new(client))
}
