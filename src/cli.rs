use crate::component::SpriteSheetGenerator;
use crate::component::sprite_sheet_generator::GenerationResult;
use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use console::style;
use dialoguer::Input;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Debug, Parser)]
#[command(about = "Generate a tiled preview sprite sheet from videos", long_about = None)]
pub struct Cli {
    #[arg(help = "single video to process; when omitted every mp4/webm in the input directory is processed")]
    pub video: Option<PathBuf>,
    #[arg(short, long, default_value = "input", help = "directory scanned for videos")]
    pub input_dir: PathBuf,
    #[arg(short, long, default_value = "output", help = "directory the sprite sheets are written to")]
    pub output_dir: PathBuf,
    #[arg(long, conflicts_with = "video", help = "prompt for the input and output directories")]
    pub interactive: bool,
}

/// 執行模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    File(PathBuf),
    Directory(PathBuf),
}

impl Cli {
    #[must_use]
    pub fn mode(&self) -> RunMode {
        self.video.as_ref().map_or_else(
            || RunMode::Directory(self.input_dir.clone()),
            |video| RunMode::File(video.clone()),
        )
    }

    /// 互動模式下詢問路徑，預設值為命令列參數
    fn prompt_directories(&mut self) -> Result<()> {
        let input: String = Input::new()
            .with_prompt("Video directory")
            .default(self.input_dir.to_string_lossy().to_string())
            .interact_text()?;
        let output: String = Input::new()
            .with_prompt("Sprite sheet output directory")
            .default(self.output_dir.to_string_lossy().to_string())
            .interact_text()?;

        self.input_dir = PathBuf::from(input.trim());
        self.output_dir = PathBuf::from(output.trim());
        Ok(())
    }
}

pub fn run(mut cli: Cli, shutdown_signal: Arc<AtomicBool>) -> Result<GenerationResult> {
    if cli.interactive {
        cli.prompt_directories()?;
    }

    println!("{}", style("=== Sprite sheet generator ===").cyan().bold());

    let config = Config::new()?;
    let generator = SpriteSheetGenerator::new(config, shutdown_signal);

    match cli.mode() {
        RunMode::File(video) => generator.run_file(&video, &cli.output_dir),
        RunMode::Directory(input_dir) => generator.run_directory(&input_dir, &cli.output_dir),
    }
}
