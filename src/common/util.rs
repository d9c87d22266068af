use std::{
    env,
    fs::{create_dir_all, File},
    future::Future,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD, Engine};

// ===============================================================================================
// Destinations
// ===============================================================================================
pub(crate) const HTTP_SCHEME: &str = "http";
pub(crate) const HTTPS_SCHEME: &str = "https";

/// Splits a service destination into its scheme and host.
///
/// `https://` and `http://` prefixes are stripped and decide the scheme. Any other input is taken
/// as a bare host and defaults to `http`. The host itself is not validated.
pub fn parse_destination(destination: &str) -> (String, String) {
    if let Some(host) = destination.strip_prefix("https://") {
        return (HTTPS_SCHEME.to_string(), host.to_string());
    }

    if let Some(host) = destination.strip_prefix("http://") {
        return (HTTP_SCHEME.to_string(), host.to_string());
    }

    (HTTP_SCHEME.to_string(), destination.to_string())
}

// ===============================================================================================
// Encoding
// ===============================================================================================
pub(crate) fn encode_base64<T: AsRef<[u8]>>(bytes: T) -> String {
    STANDARD.encode(bytes)
}

// ===============================================================================================
// Retry
// ===============================================================================================
#[doc(hidden)]
pub(crate) async fn with_retry<T, U, F, Fut>(retries: usize, f: F) -> Result<T, U>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, U>>,
{
    let mut result = (f)().await;
    for i in 1..=retries {
        if result.is_ok() {
            return result;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100 * i as u64)).await;
        result = (f)().await;
    }
    result
}

// ===============================================================================================
// Environment
// ===============================================================================================
#[doc(hidden)]
pub(crate) fn read_env(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) => value,
        Err(_) => default.to_string(),
    }
}

// ===============================================================================================
// Files
// ===============================================================================================
pub fn write_file<P: AsRef<Path>>(
    resource_path: P,
    content: &[u8],
    create_dir: bool,
) -> Result<PathBuf, std::io::Error> {
    let mut path = resource_path.as_ref().to_path_buf();

    if path.is_relative() {
        let current_dir = env::current_dir()?;
        path = current_dir.join(path);
    }

    if create_dir {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&path)?;
    file.write_all(content)?;
    file.flush()?;

    Ok(path)
}

pub fn read_file<P: AsRef<Path>>(resource_path: P) -> Result<Vec<u8>, std::io::Error> {
    let mut vec = Vec::new();
    let mut file = File::open(resource_path)?;
    file.read_to_end(&mut vec)?;
    Ok(vec)
}
