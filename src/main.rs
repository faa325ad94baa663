use clap::Parser;
use log::{error, info};
use softshade::app;
use softshade::io::config::Config;

/// Software rasterizer rendering a tessellated sphere with flat, Gouraud or
/// Phong shading.
#[derive(Parser, Debug)]
#[command(name = "softshade")]
#[command(about = "Renders a shaded sphere with a software rasterizer")]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Shading model: flat, gouraud or phong (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    mode: Option<String>,

    /// Render one frame to a PNG instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Output path for headless rendering (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config from '{path}'");
            match Config::load(path) {
                Ok(config) => config,
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            }
        }
        None => Config::default(),
    };

    if let Some(mode) = cli.mode {
        config.render.shading = mode;
    }
    if let Some(output) = cli.output {
        config.render.output = output;
    }

    let result = if cli.headless {
        app::run_headless(&config)
    } else {
        app::run_window(&config)
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
