use std::path::Path;

use tokio::{fs, io};

/// Read a file from the given path into a string. Invalid UTF-8 is dropped rather than
/// treated as an error.
pub async fn read_lossy(path: impl AsRef<Path>) -> io::Result<String> {
    let bytes = fs::read(path).await?;

    Ok(decode_lossy(&bytes))
}

/// Decode bytes as UTF-8, discarding invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
