use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tmuber::commands::{cmd_rides, cmd_stats, cmd_tickets, cmd_view};
use tmuber::types::{Screen, StatusFilter, VALID_SCREENS, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "tmuber")]
#[command(about = "Ride-hailing demo with passenger, support, and admin views")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List support tickets
    Tickets {
        /// Filter by status (all, open, in-progress, resolved)
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        status: StatusFilter,

        /// Search titles and descriptions
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List ride history
    Rides {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show dashboard stats and service health
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive app (default)
    View {
        /// Initial screen (passenger, support, admin)
        #[arg(long, default_value = "passenger", value_parser = parse_screen)]
        screen: Screen,
    },
}

fn parse_filter(s: &str) -> Result<StatusFilter, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be 'all' or one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

fn parse_screen(s: &str) -> Result<Screen, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid screen. Must be one of: {}",
            VALID_SCREENS.join(", ")
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Tickets {
            status,
            search,
            json,
        }) => cmd_tickets(status, search.as_deref(), json),
        Some(Commands::Rides { json }) => cmd_rides(json),
        Some(Commands::Stats { json }) => cmd_stats(json),
        Some(Commands::View { screen }) => cmd_view(screen),
        None => cmd_view(Screen::Passenger),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
