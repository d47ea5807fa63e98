use super::error::SpriteError;
use super::output_naming::source_basename;
use super::sprite_plan::plan_sprite_sheet;
use super::sprite_renderer::{SpriteRenderCommand, render_sprite_sheet};
use crate::config::Config;
use crate::tools::{
    VideoFileInfo, ensure_directory_exists, get_video_info, scan_video_files,
    validate_directory_exists, validate_file_exists,
};
use anyhow::Result;
use console::style;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 預覽圖生成結果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub total_videos: usize,
    pub successful: usize,
    /// 讀取或規劃階段失敗
    pub probe_failed: usize,
    /// ffmpeg 渲染失敗
    pub render_failed: usize,
}

impl GenerationResult {
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.probe_failed + self.render_failed
    }
}

/// 預覽圖生成器
///
/// 每個影片依序經過：
/// A. 取得影片資訊（ffprobe）
/// B. 選擇品質、計算網格與取樣幀率
/// C. ffmpeg 產生預覽圖
pub struct SpriteSheetGenerator {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl SpriteSheetGenerator {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    /// 處理資料夾內所有影片
    pub fn run_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<GenerationResult> {
        validate_directory_exists(input_dir)?;
        ensure_directory_exists(output_dir)?;

        let video_files = scan_video_files(input_dir, &self.config.file_type_table)?;

        if video_files.is_empty() {
            println!(
                "{}",
                style(format!("No video files found in {}", input_dir.display())).yellow()
            );
            return Ok(GenerationResult::default());
        }

        println!(
            "{}",
            style(format!("Found {} video files", video_files.len())).green()
        );

        let result = self.process_videos(&video_files, output_dir);
        self.print_summary(&result);

        Ok(result)
    }

    /// 處理單一指定影片
    pub fn run_file(&self, video_path: &Path, output_dir: &Path) -> Result<GenerationResult> {
        validate_file_exists(video_path)?;
        ensure_directory_exists(output_dir)?;

        let video = VideoFileInfo {
            path: video_path.to_path_buf(),
        };

        Ok(self.process_videos(std::slice::from_ref(&video), output_dir))
    }

    fn process_videos(&self, videos: &[VideoFileInfo], output_dir: &Path) -> GenerationResult {
        let mut result = GenerationResult {
            total_videos: videos.len(),
            ..GenerationResult::default()
        };

        for (index, video) in videos.iter().enumerate() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("shutdown requested, stopping after {index} videos");
                break;
            }

            let video_name = video.path.file_name().map_or_else(
                || format!("video_{index}"),
                |s| s.to_string_lossy().to_string(),
            );

            println!(
                "\n{} [{}/{}] {}",
                style("Processing").cyan(),
                index + 1,
                videos.len(),
                style(&video_name).bold()
            );

            match self.process_single_video(&video.path, output_dir) {
                Ok(output_path) => {
                    println!("Sprite sheet saved to {}", output_path.display());
                    result.successful += 1;
                }
                Err(e) => {
                    println!("{}", style(&e).red());
                    if e.is_probe_failure() {
                        error!("{video_name} probe_failed: {e}");
                        result.probe_failed += 1;
                    } else {
                        error!("{video_name} render_failed: {e}");
                        result.render_failed += 1;
                    }
                }
            }
        }

        result
    }

    /// 處理單一影片，回傳輸出的預覽圖路徑
    pub fn process_single_video(
        &self,
        video_path: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf, SpriteError> {
        // Stage A: 取得影片資訊
        let video_info =
            get_video_info(video_path).map_err(|e| SpriteError::Probe(format!("{e:#}")))?;

        match (video_info.width, video_info.height) {
            (Some(width), Some(height)) => println!(
                "  {} {} frames, {:.1}s, {width}x{height}",
                style("A").dim(),
                video_info.total_frames,
                video_info.duration_seconds
            ),
            _ => println!(
                "  {} {} frames, {:.1}s",
                style("A").dim(),
                video_info.total_frames,
                video_info.duration_seconds
            ),
        }

        // Stage B: 規劃網格
        let plan = plan_sprite_sheet(&source_basename(video_path), &video_info)?;
        println!(
            "  {} {} tier, {}x{} tiles @ {}px, {} fps",
            style("B").dim(),
            plan.preset.tier,
            plan.grid.columns,
            plan.grid.rows,
            plan.preset.tile_size,
            plan.grid.sample_rate
        );

        // Stage C: 產生預覽圖
        let command = SpriteRenderCommand::new(video_path, output_dir, &plan);
        render_sprite_sheet(&command)?;

        info!("sprite sheet created: {}", command.destination_path().display());

        Ok(command.destination_path().to_path_buf())
    }

    fn print_summary(&self, result: &GenerationResult) {
        println!();
        println!("{}", style("=== Sprite sheet summary ===").cyan().bold());
        println!("  Total: {}", result.total_videos);
        println!("  Succeeded: {}", style(result.successful).green());

        if result.probe_failed > 0 {
            println!(
                "  Failed (video information): {}",
                style(result.probe_failed).red()
            );
        }

        if result.render_failed > 0 {
            println!(
                "  Failed (rendering): {}",
                style(result.render_failed).red()
            );
        }

        info!(
            "sprite sheet generation finished - succeeded: {}, probe failed: {}, render failed: {}",
            result.successful, result.probe_failed, result.render_failed
        );
    }
}
