use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "identity-cli", version, about = "Identity Dashboard CLI")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Profile JSON file (overrides --fixture)
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Built-in sample profile: paid or free
    #[arg(long, global = true, default_value = "paid")]
    pub fixture: String,

    /// Config file (defaults to ~/.config/identity-dashboard/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference "today" as YYYY-MM-DD (overrides calendar.reference_date)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Every dashboard card
    Dashboard,
    /// Today's effort zone and the weekly chart
    Effort,
    /// Per-feature effort breakdown
    Breakdown,
    /// Week strip or month grid
    Calendar {
        #[command(subcommand)]
        view: commands::calendar::CalendarView,
    },
    /// Highlight collection, details and history
    Highlights {
        #[command(subcommand)]
        action: commands::highlights::HighlightsAction,
    },
    /// Yearly journey milestones
    Journey,
    /// Membership tiers
    Membership {
        /// Carousel card to show benefits for (0 = Honor)
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Carousel scroll offset in pixels (overrides --index)
        #[arg(long)]
        scroll: Option<f64>,
    },
    /// Explainer sheet contents
    Sheet {
        #[command(subcommand)]
        sheet: commands::sheet::SheetArg,
    },
    /// Check a profile against the data model invariants
    Validate,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "identity_core=debug,identity_cli=debug",
        _ => "identity_core=trace,identity_cli=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Commands::Dashboard => commands::dashboard::run(global),
        Commands::Effort => commands::effort::run(global),
        Commands::Breakdown => commands::effort::run_breakdown(global),
        Commands::Calendar { view } => commands::calendar::run(global, view),
        Commands::Highlights { action } => commands::highlights::run(global, action),
        Commands::Journey => commands::progression::run_journey(global),
        Commands::Membership { index, scroll } => {
            commands::progression::run_membership(global, index, scroll)
        }
        Commands::Sheet { sheet } => commands::sheet::run(global, sheet),
        Commands::Validate => commands::validate::run(global),
        Commands::Config { action } => commands::config::run(global, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
