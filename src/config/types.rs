use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FileTypeTable {
        FileTypeTable {
            video_file: vec![".mp4".to_string(), ".WEBM".to_string()],
        }
    }

    #[test]
    fn test_is_video_file_case_insensitive() {
        let table = table();
        assert!(table.is_video_file(Path::new("clip.mp4")));
        assert!(table.is_video_file(Path::new("clip.MP4")));
        assert!(table.is_video_file(Path::new("/videos/clip.webm")));
    }

    #[test]
    fn test_is_video_file_rejects_other_extensions() {
        let table = table();
        assert!(!table.is_video_file(Path::new("clip.mkv")));
        assert!(!table.is_video_file(Path::new("clip.mp4.png")));
        assert!(!table.is_video_file(Path::new("mp4")));
    }
}
