use async_trait::async_trait;
use bgsign_core::hash::hex_sha1;
use bgsign_core::multipart::Form;
use bgsign_core::{
    Context, Error, OsEnv, ProvideCredential, ProvideCredentialChain, Result, SigningCredential,
    UploadFile,
};

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Implement a credential provider that loads from environment
#[derive(Debug)]
struct EnvProvider;

#[async_trait]
impl ProvideCredential for EnvProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) =
            (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET"))
        else {
            return Ok(None);
        };

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Fallback used when nothing is configured
#[derive(Debug)]
struct DemoProvider;

#[async_trait]
impl ProvideCredential for DemoProvider {
    type Credential = MyCredential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        println!("No credentials found in environment, using demo credentials");
        Ok(Some(MyCredential {
            api_key: "demo-api-key".to_string(),
            api_secret: "demo-api-secret".to_string(),
        }))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);

    let chain = ProvideCredentialChain::new()
        .push(EnvProvider)
        .push(DemoProvider);
    let cred = chain
        .provide_credential(&ctx)
        .await?
        .filter(|v| v.is_valid())
        .ok_or_else(|| Error::malformed_credentials("no valid credential"))?;

    // Sign the params the way a simple upload api would expect.
    let timestamp = bgsign_core::time::now().timestamp().to_string();
    let signature = hex_sha1(format!("timestamp={timestamp}{}", cred.api_secret).as_bytes());

    let file = UploadFile::new("hello.png", "image/png", &b"\x89PNG\r\n\x1a\n"[..]);
    let form = Form::new()
        .file("file", &file)?
        .text("api_key", &cred.api_key)
        .text("timestamp", timestamp)
        .text("signature", signature);

    println!("Content-Type: {}", form.content_type());
    let req = form
        .into_request(http::Method::POST, "https://upload.example.com/image")
        .await?;
    println!("Encoded {} bytes for {}", req.body().len(), req.uri());
    println!("{}", String::from_utf8_lossy(req.body()));

    Ok(())
}
