use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "quatray")]
#[command(about = "Renders the demo sphere scene to numbered PNG frames")]
pub struct Args {
    /// Output base name; frames are written to <OUTPUT>-<index>.png
    #[arg(short, long, default_value = "balls/balls")]
    pub output: String,

    #[arg(short, long, default_value_t = 1)]
    pub frames: usize,

    /// Maximum number of mirror bounces
    #[arg(short, long, default_value_t = 100)]
    pub depth: i32,

    #[arg(long, default_value_t = 2000)]
    pub width: u32,

    #[arg(long, default_value_t = 2000)]
    pub height: u32,

    /// Worker threads per frame (defaults to the number of logical CPUs)
    #[arg(long)]
    pub threads: Option<usize>,

    #[arg(long)]
    pub no_progress: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
