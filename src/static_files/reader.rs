use std::io;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Reads a whole resource into memory.
///
/// The buffer is sized from the file's metadata up front; nothing is
/// streamed, so this is only meant for small static files.
pub async fn read_resource(path: &str) -> io::Result<Vec<u8>> {
    let mut file = File::open(path).await?;
    let len = file.metadata().await?.len();

    let mut body = Vec::new();
    body.try_reserve_exact(len as usize)
        .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
    file.read_to_end(&mut body).await?;

    Ok(body)
}
