use crate::constants::*;
use crate::Credential;
use bgsign_core::{Error, Result};

/// Parses a cloudinary connection string.
///
/// The accepted format is `cloudinary://<api_key>:<api_secret>@<cloud_name>`:
///
/// - `api_key` and `cloud_name` are ASCII word characters (`[A-Za-z0-9_]+`).
/// - `api_key` ends at the first `:`.
/// - `cloud_name` is everything after the last `@`, so the secret may itself
///   contain `:` or `@`.
/// - `api_secret` is non-empty and has no line terminators.
pub(crate) fn parse(conn_str: &str) -> Result<Credential> {
    let malformed = || Error::malformed_credentials(MALFORMED_CREDENTIALS_MESSAGE);

    let rest = conn_str
        .strip_prefix(CONNECTION_STRING_SCHEME)
        .ok_or_else(malformed)?;
    let (api_key, rest) = rest.split_once(':').ok_or_else(malformed)?;
    let (api_secret, cloud_name) = rest.rsplit_once('@').ok_or_else(malformed)?;

    if !is_word(api_key) || !is_word(cloud_name) || !is_secret(api_secret) {
        return Err(malformed());
    }

    if api_secret.contains('@') {
        // Ambiguous: the secret ends at the last '@' followed by a valid cloud name.
        log::warn!(
            "api secret contains '@', using the last '@' to split off cloud name {cloud_name}"
        );
    }

    Ok(Credential {
        api_key: api_key.to_string(),
        api_secret: api_secret.to_string(),
        cloud_name: cloud_name.to_string(),
    })
}

fn is_word(v: &str) -> bool {
    !v.is_empty() && v.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_secret(v: &str) -> bool {
    !v.is_empty()
        && !v
            .chars()
            .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}
