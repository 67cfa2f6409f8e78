// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "bezier-demo")]
#[command(about = "Interactive cubic Bézier curve", long_about = None)]
pub struct Cli {
    /// Window title
    #[arg(long, default_value = "Bézier Curve")]
    pub title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Seconds for the marker to travel along the curve and back
    #[arg(long, default_value_t = crate::core::DEFAULT_DURATION)]
    pub duration: f32,
}
