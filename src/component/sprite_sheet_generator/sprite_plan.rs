use super::error::SpriteError;
use super::grid_planner::{GridPlan, plan_grid};
use super::output_naming::output_file_name;
use super::quality_selector::{QualityPreset, select_quality};
use crate::tools::VideoInfo;

/// 單一影片的預覽圖規劃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePlan {
    pub preset: QualityPreset,
    pub grid: GridPlan,
    pub file_name: String,
}

/// 由影片資訊推導品質、網格、幀率與輸出檔名
pub fn plan_sprite_sheet(basename: &str, info: &VideoInfo) -> Result<SpritePlan, SpriteError> {
    let preset = select_quality(info.total_frames);
    let grid = plan_grid(preset.sample_frames, info.duration_seconds)?;
    let file_name = output_file_name(basename, grid.sample_rate, grid.tile_count());

    Ok(SpritePlan {
        preset,
        grid,
        file_name,
    })
}
