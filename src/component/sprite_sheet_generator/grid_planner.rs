use super::error::SpriteError;

/// 網格配置與取樣幀率
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    pub columns: u32,
    pub rows: u32,
    /// 輸出取樣幀率（fps）
    pub sample_rate: u32,
}

impl GridPlan {
    /// 網格總格數
    #[must_use]
    pub const fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }
}

/// 計算網格欄列數與取樣幀率
///
/// 欄數為取樣幀數的整數平方根（至少 1），列數為無條件進位的
/// `sample_frames / columns`，幀率為 `sample_frames / duration` 取最近整數，
/// 恰好一半時取偶數（2.5 → 2，0.5 → 0）。
pub fn plan_grid(sample_frames: u32, duration_seconds: f64) -> Result<GridPlan, SpriteError> {
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(SpriteError::InvalidDuration(duration_seconds));
    }

    let columns = sample_frames.isqrt().max(1);
    let rows = sample_frames.div_ceil(columns);

    let rate = (f64::from(sample_frames) / duration_seconds).round_ties_even();
    if rate < 1.0 {
        return Err(SpriteError::SampleRateTooLow {
            sample_frames,
            duration_seconds,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sample_rate = rate as u32;

    Ok(GridPlan {
        columns,
        rows,
        sample_rate,
    })
}
