use std::path::Path;

/// 預覽圖檔名：`<basename>_<rate>fps_<tile_count>.png`
///
/// 相同輸入永遠得到相同檔名，重複執行會覆寫舊檔。
#[must_use]
pub fn output_file_name(basename: &str, sample_rate: u32, tile_count: u32) -> String {
    format!("{basename}_{sample_rate}fps_{tile_count}.png")
}

/// 取得來源影片去除副檔名後的名稱
#[must_use]
pub fn source_basename(video_path: &Path) -> String {
    video_path
        .file_stem()
        .map_or_else(|| "video".to_string(), |s| s.to_string_lossy().to_string())
}
