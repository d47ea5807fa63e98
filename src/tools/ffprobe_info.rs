use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub total_frames: u64,
    pub duration_seconds: f64,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    nb_frames: Option<String>,
    duration: Option<String>,
}

/// 使用 ffprobe 取得影片總幀數與長度
pub fn get_video_info(path: &Path) -> Result<VideoInfo> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .with_context(|| format!("failed to run ffprobe: {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("ffprobe exited with an error: {}", stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_probe_output(&stdout, path)
}

/// 解析 ffprobe 的 JSON 輸出
///
/// 需要至少一個視訊串流，且該串流必須提供 `nb_frames`。
/// 影片長度優先從 format 取得，其次從視訊串流。
pub fn parse_probe_output(json: &str, path: &Path) -> Result<VideoInfo> {
    let probe: FfprobeOutput =
        serde_json::from_str(json).with_context(|| "failed to parse ffprobe output")?;

    // 找到視訊串流
    let video_stream = probe
        .streams
        .as_ref()
        .and_then(|streams| {
            streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
        })
        .ok_or_else(|| anyhow!("no video stream found: {}", path.display()))?;

    let total_frames = video_stream
        .nb_frames
        .as_deref()
        .and_then(|n| n.trim().parse::<u64>().ok())
        .ok_or_else(|| anyhow!("could not retrieve frame count from video: {}", path.display()))?;

    let duration_seconds = probe
        .format
        .as_ref()
        .and_then(|f| f.duration.as_ref())
        .or(video_stream.duration.as_ref())
        .and_then(|d| d.trim().parse::<f64>().ok())
        .ok_or_else(|| anyhow!("could not retrieve duration from video: {}", path.display()))?;

    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        bail!("invalid video duration ({duration_seconds}): {}", path.display());
    }

    Ok(VideoInfo {
        total_frames,
        duration_seconds,
        width: video_stream.width,
        height: video_stream.height,
    })
}
