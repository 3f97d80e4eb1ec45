use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to append to capture log {path}: {source}")]
    Append {
        path: String,
        source: std::io::Error,
    },
}

/// Appends recorded retrieval paths to the capture log, one per line, in
/// request order. No header, no delimiter between sessions: the file is a
/// plain list of what clients asked for.
pub async fn append_paths(path: &str, paths: &[String]) -> Result<(), CaptureError> {
    let wrap = |source: std::io::Error| CaptureError::Append {
        path: path.to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(wrap)?;

    for recorded in paths {
        file.write_all(recorded.as_bytes()).await.map_err(wrap)?;
        file.write_all(b"\n").await.map_err(wrap)?;
    }
    file.flush().await.map_err(wrap)?;
    Ok(())
}
