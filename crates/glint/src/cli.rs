use clap::{Parser, ValueEnum};
use glint_tracer::{RenderConfig, DEFAULT_SEED, MAX_DEPTH};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line.
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

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Ground plane covered in small random spheres plus three large ones
    Cover,
    /// Five spheres, including a hollow glass shell
    Showcase,
}

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "An offline Monte Carlo path tracer for sphere scenes")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 100)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: u32,

    /// Sampler seed; the same seed renders the same image
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Scene to render
    #[arg(long, value_enum, default_value = "cover")]
    pub scene: SceneKind,

    /// Output file path (.ppm for plain-text P3, otherwise any format the image crate knows)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings described by the flags.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_quality(self.samples, self.max_depth)
    }
}
