use thiserror::Error;

/// 單一影片處理失敗的原因
///
/// 任何一種錯誤都只會中止當前影片，批次處理會繼續下一個檔案。
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("Error getting video information: {0}")]
    Probe(String),

    #[error("Error planning sprite sheet: invalid video duration {0}")]
    InvalidDuration(f64),

    #[error(
        "Error planning sprite sheet: {sample_frames} frames over {duration_seconds:.2}s rounds to 0 fps"
    )]
    SampleRateTooLow {
        sample_frames: u32,
        duration_seconds: f64,
    },

    #[error("Error generating sprite sheet: {0}")]
    Render(String),
}

impl SpriteError {
    /// 是否在渲染前（讀取或規劃階段）就失敗
    #[must_use]
    pub const fn is_probe_failure(&self) -> bool {
        !matches!(self, Self::Render(_))
    }
}
