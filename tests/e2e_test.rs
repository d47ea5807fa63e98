//! E2E 測試 - 需要系統安裝 ffmpeg 與 ffprobe，否則自動跳過

use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use sprite_sheet_generator::component::SpriteSheetGenerator;
use sprite_sheet_generator::config::Config;
use sprite_sheet_generator::tools::get_video_info;

fn tool_available(name: &str) -> bool {
    Command::new(name)
        .arg("-version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// 以 lavfi 產生測試影片
fn create_test_video(path: &Path, rate: u32, duration: f64) -> bool {
    Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-y", "-f", "lavfi", "-i"])
        .arg(format!("testsrc=size=64x64:rate={rate}:duration={duration}"))
        .args(["-c:v", "mpeg4", "-pix_fmt", "yuv420p"])
        .arg(path)
        .output()
        .is_ok_and(|output| output.status.success())
}

/// 讀取 PNG IHDR 中的寬高
fn png_dimensions(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG", "輸出應該是 PNG");
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

/// 5 幀、2.5 秒 → Quality 等級、2x2、2 fps
#[test]
fn test_short_clip_e2e() {
    if !tool_available("ffmpeg") || !tool_available("ffprobe") {
        println!("跳過測試：找不到 ffmpeg / ffprobe");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("input");
    let output_dir = dir.path().join("output");
    fs::create_dir(&input_dir).unwrap();

    let video = input_dir.join("clip.mp4");
    if !create_test_video(&video, 2, 2.5) {
        println!("跳過測試：無法產生測試影片");
        return;
    }

    let info = get_video_info(&video).unwrap();
    assert_eq!(info.total_frames, 5);
    assert!((info.duration_seconds - 2.5).abs() < 0.1);

    let config = Config::new().unwrap();
    let generator = SpriteSheetGenerator::new(config, Arc::new(AtomicBool::new(false)));
    let result = generator.run_directory(&input_dir, &output_dir).unwrap();

    assert_eq!(result.successful, 1);
    assert_eq!(result.failed(), 0);

    let sprite = output_dir.join("clip_2fps_4.png");
    assert!(sprite.exists(), "預覽圖應該存在: {}", sprite.display());
    assert_eq!(png_dimensions(&sprite), (1024, 1024));

    // 重複執行會覆寫同名檔案
    let result = generator.run_directory(&input_dir, &output_dir).unwrap();
    assert_eq!(result.successful, 1);
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 1);
}

/// 渲染失敗只影響該影片，批次繼續處理下一個
#[test]
fn test_render_failure_does_not_stop_batch() {
    if !tool_available("ffmpeg") || !tool_available("ffprobe") {
        println!("跳過測試：找不到 ffmpeg / ffprobe");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("input");
    let output_dir = dir.path().join("output");
    fs::create_dir(&input_dir).unwrap();

    let blocked = input_dir.join("a_blocked.mp4");
    let good = input_dir.join("b_good.mp4");
    if !create_test_video(&blocked, 2, 2.5) || !create_test_video(&good, 2, 2.5) {
        println!("跳過測試：無法產生測試影片");
        return;
    }

    // 同名資料夾佔住輸出路徑，ffmpeg 無法寫入
    let blocked_output = output_dir.join("a_blocked_2fps_4.png");
    fs::create_dir_all(&blocked_output).unwrap();

    let config = Config::new().unwrap();
    let generator = SpriteSheetGenerator::new(config, Arc::new(AtomicBool::new(false)));
    let result = generator.run_directory(&input_dir, &output_dir).unwrap();

    assert_eq!(result.total_videos, 2);
    assert_eq!(result.probe_failed, 0);
    assert_eq!(result.render_failed, 1);
    assert_eq!(result.successful, 1);

    assert!(blocked_output.is_dir());
    let sprite = output_dir.join("b_good_2fps_4.png");
    assert!(sprite.is_file(), "預覽圖應該存在: {}", sprite.display());
    assert_eq!(png_dimensions(&sprite), (1024, 1024));
}
