use anyhow::{anyhow, Context};
use config::{Config, File};
use hexcanvas::{HexConfig, HexDimensions, HexTransform};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};
use strum::{Display, EnumString};

/// CLI for converting between pixel coordinates and hex grid coordinates.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexcanvas")]
struct Opt {
    /// Path to a config file that defines the grid layout. Supported formats:
    /// JSON, TOML. Any field left out takes its default value.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Length of one hexagon side, in pixels. Overrides the config file.
    #[structopt(short, long)]
    edge_size: Option<i32>,

    /// Vertical scale factor of the grid. Overrides the config file.
    #[structopt(short, long)]
    v_scale: Option<f64>,

    /// The format to print results in. Supported formats:
    ///
    /// text - Human readable
    ///
    /// json - A single JSON value
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Get the pixel coordinates of the center of a hexagon
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Pixel { u: f64, v: f64 },
    /// Get the hexagon that contains a pixel coordinate
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Hex { x: f64, y: f64 },
    /// Print the grid config and all the layout constants derived from it
    Dimensions,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    Text,
    Json,
}

fn load_config(config_path: &Path) -> anyhow::Result<HexConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Load the config file (if any), then apply overrides from the command line
fn build_config(opt: &Opt) -> anyhow::Result<HexConfig> {
    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => HexConfig::default(),
    };
    if let Some(edge_size) = opt.edge_size {
        config.edge_size = edge_size;
    }
    if let Some(v_scale) = opt.v_scale {
        config.v_scale = v_scale;
    }
    Ok(config)
}

/// Write a value to stdout in the requested format
fn print_output(
    format: OutputFormat,
    text: String,
    value: &impl Serialize,
) -> anyhow::Result<()> {
    let output = match format {
        OutputFormat::Text => text,
        OutputFormat::Json => serde_json::to_string(value)
            // Panics only if an output type isn't serializable (a bug)
            .expect("error serializing output"),
    };
    writeln!(io::stdout(), "{}", output).context("error writing output")
}

#[derive(Serialize)]
struct DimensionsOutput<'a> {
    config: &'a HexConfig,
    dimensions: &'a HexDimensions,
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = build_config(&opt)?;
    info!("Using grid config {:?}", config);
    let transform = HexTransform::new(config).context("invalid grid config")?;

    match opt.command {
        Command::Pixel { u, v } => {
            let point = transform.hex_to_pixel(u, v);
            print_output(opt.format, point.to_string(), &point)
        }
        Command::Hex { x, y } => {
            let coord = transform.pixel_to_hex(x, y);
            print_output(opt.format, coord.to_string(), &coord)
        }
        Command::Dimensions => {
            let output = DimensionsOutput {
                config: transform.config(),
                dimensions: transform.dimensions(),
            };
            let text = format!("{:#?}", output.dimensions);
            print_output(opt.format, text, &output)
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
