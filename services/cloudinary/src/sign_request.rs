use crate::constants::*;
use crate::Credential;
use bgsign_core::hash::hex_sha1;
use bgsign_core::multipart::Form;
use bgsign_core::time::{now, DateTime};
use bgsign_core::utils::Redact;
use bgsign_core::{Result, UploadFile};
use std::fmt::{Debug, Formatter, Write};

/// Parameters that are sent along but never signed.
const UNSIGNED_PARAMS: [&str; 3] = [FIELD_API_KEY, FIELD_FILE, FIELD_SIGNATURE];

/// RequestSigner for cloudinary upload signature.
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for cloudinary uploads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Sign `params` together with the current timestamp.
    ///
    /// `api_key`, `file` and `signature` are dropped from `params` since the
    /// service never includes them in the signature.
    pub fn sign<K, V>(
        &self,
        cred: &Credential,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> SignedParams
    where
        K: Into<String>,
        V: Into<String>,
    {
        // Truncated to whole seconds, the service tolerates clock skew.
        let timestamp = self.get_time().timestamp();

        let mut params: Vec<(String, String)> = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !UNSIGNED_PARAMS.contains(&k.as_str()))
            .collect();
        params.push((FIELD_TIMESTAMP.to_string(), timestamp.to_string()));
        sort_params(&mut params);

        let signature = sign(&params, &cred.api_secret);

        SignedParams {
            api_key: cred.api_key.clone(),
            timestamp,
            params,
            signature,
        }
    }
}

/// Build the canonical string to sign.
///
/// Params are sorted by name and joined as `name=value` with `&`, then the
/// secret is appended without any separator:
///
/// ```text
/// eager=e_background_removal&timestamp=1700000000<secret>
/// ```
pub fn string_to_sign(params: &[(String, String)], secret: &str) -> String {
    let mut params = params.to_vec();
    sort_params(&mut params);

    let mut s = String::new();
    for (idx, (k, v)) in params.iter().enumerate() {
        if idx > 0 {
            s.push('&');
        }
        // Writing into a String never fails.
        let _ = write!(s, "{k}={v}");
    }
    s.push_str(secret);
    s
}

/// Compute the signature of `params`: lowercase hex SHA-1 of [`string_to_sign`].
pub fn sign(params: &[(String, String)], secret: &str) -> String {
    hex_sha1(string_to_sign(params, secret).as_bytes())
}

fn sort_params(params: &mut [(String, String)]) {
    // Stable sort keeps the given order for duplicated names.
    params.sort_by(|a, b| a.0.cmp(&b.0));
}

/// SignedParams carries everything needed to build a signed upload body.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedParams {
    /// Api key sent in plaintext.
    pub api_key: String,
    /// Unix timestamp in seconds used for signing.
    pub timestamp: i64,
    /// Signed params sorted by name, `timestamp` included.
    pub params: Vec<(String, String)>,
    /// Lowercase hex signature over `params`.
    pub signature: String,
}

impl Debug for SignedParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedParams")
            .field("api_key", &Redact::from(&self.api_key))
            .field("timestamp", &self.timestamp)
            .field("params", &self.params)
            .field("signature", &self.signature)
            .finish()
    }
}

impl SignedParams {
    /// Build the `multipart/form-data` body uploading `file`.
    ///
    /// Fields are ordered as `file`, `api_key`, the signed params, then `signature`.
    pub fn into_form(self, file: &UploadFile) -> Result<Form> {
        let form = Form::new()
            .file(FIELD_FILE, file)?
            .text(FIELD_API_KEY, self.api_key);
        let form = self
            .params
            .into_iter()
            .fold(form, |form, (k, v)| form.text(k, v));
        Ok(form.text(FIELD_SIGNATURE, self.signature))
    }
}
