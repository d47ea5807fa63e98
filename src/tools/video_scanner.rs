use crate::config::FileTypeTable;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct VideoFileInfo {
    pub path: PathBuf,
}

/// 掃描資料夾第一層的影片檔案，依路徑排序
pub fn scan_video_files(
    directory: &Path,
    file_type_table: &FileTypeTable,
) -> Result<Vec<VideoFileInfo>> {
    let mut video_files: Vec<VideoFileInfo> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| file_type_table.is_video_file(entry.path()))
        .map(|entry| VideoFileInfo {
            path: entry.into_path(),
        })
        .collect();

    video_files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(video_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn table() -> FileTypeTable {
        FileTypeTable {
            video_file: vec![".mp4".to_string(), ".webm".to_string()],
        }
    }

    #[test]
    fn test_scan_video_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.webm"), b"bb").unwrap();
        fs::write(dir.path().join("a.mp4"), b"aaaa").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("archive.mkv"), b"x").unwrap();

        let files = scan_video_files(dir.path(), &table()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.mp4", "b.webm"]);
    }

    #[test]
    fn test_scan_video_files_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.mp4"), b"x").unwrap();
        fs::create_dir(dir.path().join("folder.mp4")).unwrap();

        let files = scan_video_files(dir.path(), &table()).unwrap();
        assert!(files.is_empty());
    }
}
