//! 影片預覽圖（sprite sheet）生成元件
//!
//! 三階段流程：
//! A. 取得影片資訊（ffprobe）
//! B. 選擇品質等級，計算網格、取樣幀率與檔名
//! C. ffmpeg 取樣、縮放並拼成單張 PNG

mod error;
mod grid_planner;
mod main;
mod output_naming;
mod quality_selector;
mod sprite_plan;
mod sprite_renderer;

pub use error::SpriteError;
pub use grid_planner::{GridPlan, plan_grid};
pub use main::{GenerationResult, SpriteSheetGenerator};
pub use output_naming::{output_file_name, source_basename};
pub use quality_selector::{QUALITY_PRESETS, QualityPreset, QualityTier, select_quality};
pub use sprite_plan::{SpritePlan, plan_sprite_sheet};
pub use sprite_renderer::{SpriteRenderCommand, render_sprite_sheet};
