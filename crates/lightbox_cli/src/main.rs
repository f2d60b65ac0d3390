//! Lightbox CLI
//!
//! Drive the gallery transition headlessly: simulate a full present and
//! dismiss cycle, print a paged layout, or show the effective configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbox_core::Size;
use lightbox_layout::PagedLayout;
use lightbox_transition::{TransitionConfig, TransitionOutcome};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod grid;
mod simulate;

use simulate::{Report, Scenario};

#[derive(Parser)]
#[command(name = "lightbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lightbox gallery transition driver", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a simulated grid in the gallery and dismiss it again
    Simulate {
        /// Number of thumbnails in the grid
        #[arg(short, long, default_value = "6")]
        images: usize,

        /// Thumbnail that was tapped
        #[arg(short, long, default_value = "0")]
        selected: usize,

        /// Page to swipe to before dismissing
        #[arg(short, long)]
        page: Option<usize>,

        /// Dismiss by dragging this many points vertically
        #[arg(short, long, allow_hyphen_values = true)]
        drag: Option<f32>,

        /// Seconds the drag takes
        #[arg(long, default_value = "0.3")]
        drag_secs: f32,

        /// Scroll the grid by this many points while the gallery is up
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        grid_scroll: f32,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: f32,

        /// Viewport width
        #[arg(long, default_value = "390")]
        width: f32,

        /// Viewport height
        #[arg(long, default_value = "844")]
        height: f32,

        /// Transition config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the paged layout for a list of image ratios (width / height)
    Layout {
        /// Image ratios in page order
        #[arg(required = true)]
        ratios: Vec<f32>,

        /// Viewport width
        #[arg(long, default_value = "390")]
        width: f32,

        /// Viewport height
        #[arg(long, default_value = "844")]
        height: f32,
    },

    /// Print the effective transition configuration
    Config {
        /// Transition config file (TOML); defaults are shown without one
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            images,
            selected,
            page,
            drag,
            drag_secs,
            grid_scroll,
            fps,
            width,
            height,
            config,
        } => {
            let scenario = Scenario {
                images,
                selected,
                page,
                drag,
                drag_secs,
                grid_scroll,
                fps,
                viewport: Size::new(width, height),
            };
            cmd_simulate(config.as_deref(), &scenario)
        }

        Commands::Layout {
            ratios,
            width,
            height,
        } => cmd_layout(&ratios, Size::new(width, height)),

        Commands::Config { path } => cmd_config(path.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<TransitionConfig> {
    match path {
        Some(path) => TransitionConfig::load(path)
            .with_context(|| format!("Failed to load transition config from {}", path.display())),
        None => Ok(TransitionConfig::default()),
    }
}

fn cmd_simulate(config_path: Option<&Path>, scenario: &Scenario) -> Result<()> {
    let config = load_config(config_path)?;
    info!(
        "Simulating {} images at {}x{}, {:.2}s transitions",
        scenario.images, scenario.viewport.width, scenario.viewport.height, config.duration_secs
    );

    let report = simulate::run(config, scenario)?;
    print_report(&report);

    anyhow::ensure!(
        report.surfaces_home == report.images,
        "{} of {} image surfaces were not returned to the grid",
        report.images - report.surfaces_home,
        report.images
    );
    Ok(())
}

fn outcome_label(outcome: Option<TransitionOutcome>) -> &'static str {
    match outcome {
        Some(TransitionOutcome::Completed) => "completed",
        Some(TransitionOutcome::Cancelled) => "cancelled",
        None => "no completion",
    }
}

fn print_report(report: &Report) {
    println!("present:   {} frames, {}", report.present_frames, outcome_label(report.present_outcome));
    match report.committed {
        Some(committed) => println!(
            "dismiss:   {} frames, {} (drag {})",
            report.dismiss_frames,
            outcome_label(report.dismiss_outcome),
            if committed { "committed" } else { "cancelled" }
        ),
        None => println!(
            "dismiss:   {} frames, {}",
            report.dismiss_frames,
            outcome_label(report.dismiss_outcome)
        ),
    }
    println!("state:     {}", report.final_state.name());
    println!("surfaces:  {}/{} back in the grid", report.surfaces_home, report.images);
}

fn cmd_layout(ratios: &[f32], viewport: Size) -> Result<()> {
    anyhow::ensure!(
        viewport.width > 0.0 && viewport.height > 0.0,
        "Viewport must have a positive size (got {}x{})",
        viewport.width,
        viewport.height
    );

    let layout = PagedLayout::from_ratios(ratios.iter().copied(), viewport);
    for (index, slot) in layout.pages().iter().enumerate() {
        let image = slot.image_frame;
        println!(
            "page {index}: x={:.1}  image {:.1}x{:.1} at ({:.1}, {:.1})",
            slot.page_frame.x(),
            image.width(),
            image.height(),
            image.x(),
            image.y()
        );
    }
    let content = layout.content_size();
    println!("content: {:.1}x{:.1}", content.width, content.height);
    Ok(())
}

fn cmd_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{rendered}");
    Ok(())
}
