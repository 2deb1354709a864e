//! 程序入口：初始化日志，按命令合并语言文件并导出或展示统一表格

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use fanyi_merge::model::table_view::{apply_filter, render};
use fanyi_merge::{AppState, Settings};

#[derive(Parser)]
#[command(name = "fanyi_merge")]
#[command(about = "合并多语言JSON翻译文件为统一表格，并重新导出各语言文件")]
struct Cli {
    /// 输出调试日志
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    /// 设置文件（TOML）
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 合并文件，并重新导出每个文件（保留全部分类，省略缺失的键）
    Merge {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// 导出文件的输出目录
        #[arg(long = "out-dir", short = 'o')]
        out_dir: PathBuf,
    },
    /// 打印统一的键值表格
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// 只显示键名或路径包含该文本的行
        #[arg(long)]
        filter: Option<String>,
    },
}

fn load_all(state: &mut AppState, files: &[PathBuf]) -> Result<()> {
    for path in files {
        let added = state
            .load_file(path)
            .with_context(|| format!("无法加载 {}", path.display()))?;
        if !added {
            tracing::warn!("同名文件已加载，跳过: {}", path.display());
        }
    }
    Ok(())
}

fn run_merge(state: &mut AppState, files: &[PathBuf], out_dir: &Path) -> Result<()> {
    load_all(state, files)?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("无法创建输出目录 {}", out_dir.display()))?;
    for name in &state.files {
        let target = out_dir.join(name);
        state
            .save_file(name, &target)
            .with_context(|| format!("无法写入 {}", target.display()))?;
    }
    Ok(())
}

fn run_show(state: &mut AppState, files: &[PathBuf], filter: Option<&str>) -> Result<()> {
    load_all(state, files)?;
    let mut rows = state.table();
    if let Some(filter) = filter {
        apply_filter(&mut rows, filter);
    }
    print!("{}", render(&rows, state.files.as_slice()));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志输出
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = SubscriberBuilder::default()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("无法读取设置 {}", path.display()))?,
        None => Settings::default(),
    };
    let mut state = AppState::new(settings);

    match cli.command {
        Commands::Merge { files, out_dir } => run_merge(&mut state, &files, &out_dir),
        Commands::Show { files, filter } => run_show(&mut state, &files, filter.as_deref()),
    }
}
