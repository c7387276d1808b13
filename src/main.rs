//! Gomoku endgame trainer GUI
//!
//! Opens the training window, or lists/validates a pattern catalogue.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gomoku_trainer::ui::TrainerApp;
use gomoku_trainer::{Catalogue, ColorAssignment, Trainer, TrainerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    /// Play the side that answers the script's first move
    Auto,
    Black,
    White,
}

impl From<HumanSide> for ColorAssignment {
    fn from(side: HumanSide) -> Self {
        match side {
            HumanSide::Auto => ColorAssignment::OppositeOfFirstMover,
            HumanSide::Black => ColorAssignment::AlwaysBlack,
            HumanSide::White => ColorAssignment::AlwaysWhite,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Practice scripted Gomoku endgames", long_about = None)]
struct Args {
    /// Pattern catalogue JSON; the built-in catalogue when omitted
    #[arg(long, value_name = "FILE")]
    patterns: Option<PathBuf>,

    /// Pattern to open first
    #[arg(long)]
    start: Option<String>,

    #[arg(long, default_value_t = gomoku_trainer::BOARD_SIZE)]
    board_size: usize,

    /// Wrong moves allowed before the answer is shown
    #[arg(long, default_value_t = 3)]
    max_errors: u32,

    #[arg(long, value_enum, default_value_t = HumanSide::Auto)]
    human: HumanSide,

    /// Start with sound cues off
    #[arg(long)]
    mute: bool,

    /// Print the catalogue and exit
    #[arg(long)]
    list: bool,

    /// Validate the catalogue and exit
    #[arg(long)]
    check: bool,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_catalogue(args: &Args, size: usize) -> Result<Catalogue> {
    match &args.patterns {
        Some(path) => Catalogue::from_path(path, size)
            .with_context(|| format!("loading patterns from {}", path.display())),
        None => Catalogue::builtin(size).context("loading built-in patterns"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = TrainerConfig {
        board_size: args.board_size,
        max_errors: args.max_errors,
        color_assignment: args.human.into(),
        sound_enabled: !args.mute,
        ..Default::default()
    };
    config.validate().context("invalid configuration")?;

    let catalogue = load_catalogue(&args, config.board_size)?;

    if args.check {
        catalogue.validate().context("catalogue failed validation")?;
        println!("{} patterns OK", catalogue.len());
        return Ok(());
    }

    if args.list {
        for pattern in catalogue.patterns() {
            println!(
                "{:<24} {:<12} {:>3} moves  {}",
                pattern.id,
                pattern.difficulty.label(),
                pattern.script.len(),
                pattern.name
            );
        }
        return Ok(());
    }

    if let Some(id) = &args.start {
        if catalogue.get(id).is_none() {
            bail!("unknown pattern id: {id}");
        }
    }

    let trainer = Trainer::new(config, catalogue);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku Endgame Trainer"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku Trainer",
        options,
        Box::new(move |cc| Ok(Box::new(TrainerApp::new(cc, trainer, args.start)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
