//! Audio extraction via yt-dlp
//!
//! The downloader is an external executable (yt-dlp by default, overridable
//! with YTDL_BIN). We shell out once per selected track, bounded by a
//! timeout, and hand the resulting file path back to the sender.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tokio::time::timeout;

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Downloads the audio track for a video id into the configured download
/// folder and returns the path of the resulting file.
///
/// Runs `{YTDL_BIN} -x --audio-format m4a -o {folder}/{id}.m4a {url}` with
/// a timeout. On any failure the partial file is removed before the error
/// is returned.
///
/// # Errors
/// * `AppError::Download` - yt-dlp exited non-zero, timed out, produced no
///   file, or could not be spawned
/// * `AppError::Io` - the download folder could not be created
pub async fn download_track(video_id: &str) -> AppResult<PathBuf> {
    let folder = Path::new(config::DOWNLOAD_FOLDER.as_str());
    tokio::fs::create_dir_all(folder).await?;

    let output_path = folder.join(format!("{}.{}", video_id, config::download::AUDIO_FORMAT));
    let watch_url = format!("https://youtu.be/{}", video_id);

    log::info!("Starting yt-dlp for {} -> {}", watch_url, output_path.display());

    let output_arg = output_path.to_string_lossy().to_string();
    let mut command = Command::new(config::YTDL_BIN.as_str());
    command
        .args([
            "-x",
            "--audio-format",
            config::download::AUDIO_FORMAT,
            "--no-playlist",
            "-o",
            &output_arg,
            &watch_url,
        ])
        // A dropped future (timeout) must not leave yt-dlp running
        .kill_on_drop(true);

    let result = timeout(config::download::ytdlp_timeout(), command.output()).await;

    let output = match result {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            cleanup_file(&output_path).await;
            return Err(AppError::Download(format!("failed to spawn {}: {}", *config::YTDL_BIN, e)));
        }
        Err(_) => {
            cleanup_file(&output_path).await;
            return Err(AppError::Download(format!(
                "yt-dlp timed out after {}s for {}",
                config::download::YTDLP_TIMEOUT_SECS,
                watch_url
            )));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::error!("yt-dlp failed for {}: {}", watch_url, stderr.trim());
        cleanup_file(&output_path).await;
        return Err(AppError::Download(format!(
            "yt-dlp exited with {}: {}",
            output.status,
            stderr_excerpt(&stderr)
        )));
    }

    if !tokio::fs::try_exists(&output_path).await.unwrap_or(false) {
        return Err(AppError::Download(format!(
            "yt-dlp reported success but produced no file at {}",
            output_path.display()
        )));
    }

    log::info!("Download finished: {}", output_path.display());
    Ok(output_path)
}

/// Removes a downloaded file, logging (but otherwise ignoring) failures.
pub async fn cleanup_file(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => log::debug!("Removed {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Failed to remove {}: {}", path.display(), e),
    }
}

/// Last line of yt-dlp's stderr, which is where it puts the actual error.
fn stderr_excerpt(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no stderr output")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stderr_excerpt_picks_last_nonempty_line() {
        let stderr = "[youtube] extracting\nWARNING: throttled\nERROR: Video unavailable\n\n";
        assert_eq!(stderr_excerpt(stderr), "ERROR: Video unavailable");
    }

    #[test]
    fn stderr_excerpt_handles_empty_output() {
        assert_eq!(stderr_excerpt(""), "no stderr output");
    }
}
