use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "cellplot",
    about = "Terminal line charts rendered into character cells"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot series from a CSV file (one column per series)
    Csv(CsvArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Animated Brownian motion demo
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// `cellplot csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Chart title
    #[arg(short, long, default_value = "CSV Data")]
    pub title: String,

    /// Render mode: braille packs two samples per column, dot one
    #[arg(short, long, default_value = "braille")]
    pub mode: String,

    /// Line color (name or `#RRGGBB`); multi-series input cycles a palette
    #[arg(long, default_value = "green")]
    pub color: String,

    /// Axis and label color
    #[arg(long, default_value = "white")]
    pub axes_color: String,

    /// Y-axis hard lower bound (none if omitted)
    #[arg(long)]
    pub y_floor: Option<f64>,
    /// Y-axis hard upper bound (none if omitted)
    #[arg(long)]
    pub y_ceil: Option<f64>,

    /// Fraction of the data span padded beyond new extrema
    #[arg(long, default_value_t = 0.2)]
    pub y_padding: f64,

    /// Marker glyph for dot mode
    #[arg(long, default_value_t = '•')]
    pub dot_glyph: char,

    /// Comma-separated x-axis labels (sample indices if omitted)
    #[arg(long)]
    pub labels: Option<String>,

    /// Write layout/render trace lines to stderr
    #[arg(long)]
    pub debug: bool,
}

/// `cellplot demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 600)]
    pub steps: usize,
    #[arg(long, default_value_t = 0.05)]
    pub dt: f64,
    #[arg(long, default_value_t = 0.0)]
    pub mu: f64,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    #[arg(long, default_value_t = 30)]
    pub fps: u64,
    /// Render mode: braille | dot
    #[arg(long, default_value = "braille")]
    pub mode: String,
    #[arg(long, default_value_t = false, help = "Write layout trace to stderr")]
    pub debug: bool,
}
