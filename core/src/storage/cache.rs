use std::future::Future;
use std::path::Path;

/// Read-through cache keyed by a file path.
///
/// A regular file at `path` is returned as is. Otherwise `generate` is awaited and its
/// value is written to `path` before being returned. The write is best effort: a failure
/// is logged and the generated value is still returned. A failed `generate` leaves no file.
pub async fn read_through<F, Fut, E>(path: impl AsRef<Path>, generate: F) -> Result<String, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, E>>,
    E: From<fsutil::Error>,
{
    let path = path.as_ref();

    if let Some(cached) = fsutil::read_regular_file(path)? {
        log::debug!("Cache hit: {}", path.display());
        return Ok(cached);
    }

    log::debug!("Cache miss: {}", path.display());
    let value = generate().await?;

    if let Err(e) = fsutil::write_with_mkdir(path, &value) {
        log::warn!("Failed to write cache: {}", e);
    }
    Ok(value)
}
