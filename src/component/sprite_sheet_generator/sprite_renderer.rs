use super::error::SpriteError;
use super::sprite_plan::SpritePlan;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 產生預覽圖的 ffmpeg 命令
///
/// 解碼 → fps 重新取樣 → 縮放為正方形 → tile 拼成網格 → 輸出一張 PNG
pub struct SpriteRenderCommand {
    source_path: PathBuf,
    destination_path: PathBuf,
    sample_rate: u32,
    tile_size: u32,
    columns: u32,
    rows: u32,
}

impl SpriteRenderCommand {
    #[must_use]
    pub fn new(source_path: &Path, output_dir: &Path, plan: &SpritePlan) -> Self {
        Self {
            source_path: source_path.to_path_buf(),
            destination_path: output_dir.join(&plan.file_name),
            sample_rate: plan.grid.sample_rate,
            tile_size: plan.preset.tile_size,
            columns: plan.grid.columns,
            rows: plan.grid.rows,
        }
    }

    #[must_use]
    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    #[must_use]
    pub fn filter(&self) -> String {
        format!(
            "fps={},scale={size}:{size},tile={}x{}",
            self.sample_rate,
            self.columns,
            self.rows,
            size = self.tile_size,
        )
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new("ffmpeg");

        cmd.args(["-hide_banner", "-nostdin", "-loglevel", "error", "-y"]);
        cmd.arg("-i").arg(&self.source_path);
        cmd.args(["-vf", &self.filter(), "-frames:v", "1", "-an"]);
        cmd.arg(&self.destination_path);

        cmd
    }
}

/// 執行 ffmpeg 產生預覽圖（阻塞至 ffmpeg 結束，不設逾時）
pub fn render_sprite_sheet(command: &SpriteRenderCommand) -> Result<(), SpriteError> {
    debug!(
        "render {} -> {} ({})",
        command.source_path.display(),
        command.destination_path.display(),
        command.filter()
    );

    let output = command
        .build_command()
        .output()
        .map_err(|e| SpriteError::Render(format!("failed to run ffmpeg: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SpriteError::Render(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    if !command.destination_path.exists() {
        return Err(SpriteError::Render(format!(
            "sprite sheet was not created: {}",
            command.destination_path.display()
        )));
    }

    Ok(())
}
