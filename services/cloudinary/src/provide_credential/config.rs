use crate::{Config, Credential};
use async_trait::async_trait;
use bgsign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider loads the credential from [`Config::cloudinary_url`].
///
/// Call [`Config::from_env`] beforehand to pick up `CLOUDINARY_URL`.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match &self.config.cloudinary_url {
            Some(url) => Credential::from_connection_string(url).map(Some),
            None => Ok(None),
        }
    }
}
