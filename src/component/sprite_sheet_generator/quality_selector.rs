use std::fmt;

/// 預覽圖品質等級
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    /// 少量大圖
    Quality,
    Balance,
    /// 大量小圖
    Fluidity,
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quality => "Quality",
            Self::Balance => "Balance",
            Self::Fluidity => "Fluidity",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPreset {
    pub tier: QualityTier,
    /// 適用的影片總幀數上限（含），`None` 代表無上限
    pub max_total_frames: Option<u64>,
    /// 取樣幀數
    pub sample_frames: u32,
    /// 每格縮圖邊長（像素）
    pub tile_size: u32,
}

/// 依上限由小到大排列，最後一項沒有上限
pub const QUALITY_PRESETS: [QualityPreset; 3] = [
    QualityPreset {
        tier: QualityTier::Quality,
        max_total_frames: Some(10),
        sample_frames: 4,
        tile_size: 512,
    },
    QualityPreset {
        tier: QualityTier::Balance,
        max_total_frames: Some(50),
        sample_frames: 16,
        tile_size: 256,
    },
    QualityPreset {
        tier: QualityTier::Fluidity,
        max_total_frames: None,
        sample_frames: 64,
        tile_size: 128,
    },
];

/// 依影片總幀數選擇品質等級，第一個符合上限的等級勝出
#[must_use]
pub fn select_quality(total_frames: u64) -> QualityPreset {
    QUALITY_PRESETS
        .iter()
        .find(|preset| {
            preset
                .max_total_frames
                .is_none_or(|bound| total_frames <= bound)
        })
        .copied()
        .unwrap_or(QUALITY_PRESETS[QUALITY_PRESETS.len() - 1])
}
