use bgsign_core::{Context, UploadFile};
use bgsign_file_read_tokio::TokioFileRead;
use std::env;

#[tokio::main]
async fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: read_image <path>");
        return;
    };

    let ctx = Context::new().with_file_read(TokioFileRead);
    match UploadFile::from_path(&ctx, &path).await {
        Ok(file) => println!("{file:?}"),
        Err(e) => eprintln!("Failed to read file: {e}"),
    }
}
