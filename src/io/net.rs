use crate::{error::Result, io::progress::ProgressReporter};
use reqwest::blocking::{Client, Response};
use std::{
    fs::{self, File},
    io::{Read, Write},
    path::Path,
};
use tracing::debug;

/// Blocking client with no request or connect timeout; large archives take
/// as long as they take.
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(None)
        .user_agent(concat!("esc50-data/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Streams an already status-checked response body into `dest`.
///
/// Bytes land in `<dest>.part` first and are renamed over `dest` once the
/// body is complete. Returns the number of bytes written. The last event
/// reported is always complete (`downloaded == total`), and only once.
pub fn download_with_progress(
    mut resp: Response,
    dest: &Path,
    progress: Option<&ProgressReporter>,
) -> Result<u64> {
    let tmp = dest.with_extension("zip.part");
    let total = resp.content_length();
    let emit = |done: u64, total: Option<u64>| {
        if let Some(p) = progress {
            p.emit(done, total);
        }
    };

    emit(0, total);

    let mut file = File::create(&tmp)?;
    let mut downloaded: u64 = 0;
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = resp.read(&mut buf)?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])?;
        downloaded += n as u64;
        emit(downloaded, total);
    }
    file.flush()?;
    drop(file);

    if dest.exists() {
        fs::remove_file(dest).ok();
    }

    fs::rename(&tmp, dest)?;
    debug!(dest = %dest.display(), bytes = downloaded, "archive written");

    if total != Some(downloaded) {
        emit(downloaded, Some(downloaded));
    }

    Ok(downloaded)
}
