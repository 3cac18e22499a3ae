//! Waterfall layout - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use waterfall::config::ConfigOverrides;
use waterfall::layout::{AspectRatioOracle, LayoutEngine};
use waterfall::model::{AppError, Gallery};
use waterfall::report::{LayoutReport, OutputFormat};

/// Waterfall layout - compute masonry frames for a photo gallery
#[derive(Parser, Debug)]
#[command(name = "waterfall")]
#[command(version)]
#[command(about = "Compute a waterfall (masonry) layout for a photo gallery")]
pub struct Args {
    /// Path to gallery JSON (array of {"width", "height"}); uses the demo gallery if omitted
    pub gallery: Option<PathBuf>,

    /// Number of columns
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// Viewport width
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Gap between columns
    #[arg(long)]
    pub hspacing: Option<f64>,

    /// Gap between items in a column
    #[arg(long)]
    pub vspacing: Option<f64>,

    /// Lay out only the first N items
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            columns: self.columns.map(|c| c as usize),
            viewport_width: self.width,
            horizontal_spacing: self.hspacing,
            vertical_spacing: self.vspacing,
        }
    }
}

/// Number of items to lay out: `--count` if given, capped at the gallery size.
fn items_to_lay_out(requested: Option<usize>, available: usize) -> usize {
    match requested {
        Some(count) if count > available => {
            warn!(requested = count, available, "Requested count exceeds gallery; laying out all photos");
            available
        }
        Some(count) => count,
        None => available,
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = waterfall::config::load_config_with_precedence(args.config.clone())?;
        let merged = waterfall::config::merge_config(config_file);
        let with_env = waterfall::config::apply_env_overrides(merged);
        waterfall::config::apply_cli_overrides(with_env, args.overrides())
    };

    waterfall::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let gallery = match &args.gallery {
        Some(path) => Gallery::load(path)?,
        None => Gallery::demo(),
    };
    let item_count = items_to_lay_out(args.count, gallery.len());

    info!(photos = gallery.len(), item_count, "Gallery loaded");

    let mut engine = LayoutEngine::new(config.layout_params())?;
    engine.ensure_laid_out(item_count, &mut AspectRatioOracle::new(&gallery.photos))?;

    let rendered = LayoutReport::from_engine(&engine).render(args.format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["waterfall", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["waterfall"]);
        assert_eq!(args.gallery, None);
        assert_eq!(args.columns, None);
        assert_eq!(args.width, None);
        assert_eq!(args.count, None);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_layout_flags_populate_overrides() {
        let args = Args::parse_from([
            "waterfall",
            "photos.json",
            "--columns",
            "3",
            "--width",
            "414",
            "--hspacing",
            "2",
            "--vspacing",
            "4.5",
        ]);
        assert_eq!(args.gallery, Some(PathBuf::from("photos.json")));
        assert_eq!(
            args.overrides(),
            ConfigOverrides {
                columns: Some(3),
                viewport_width: Some(414.0),
                horizontal_spacing: Some(2.0),
                vertical_spacing: Some(4.5),
            }
        );
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = Args::try_parse_from(["waterfall", "--columns", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_count_is_capped_at_gallery_size() {
        assert_eq!(items_to_lay_out(Some(25), 20), 20);
        assert_eq!(items_to_lay_out(Some(3), 20), 3);
        assert_eq!(items_to_lay_out(Some(0), 20), 0);
        assert_eq!(items_to_lay_out(None, 20), 20);
    }

    #[test]
    fn test_json_format_and_count() {
        let args = Args::parse_from(["waterfall", "--format", "json", "-n", "5"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.count, Some(5));
    }
}
