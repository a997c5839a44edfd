use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobtrack_core::{Status, StatusFilter};

/// Track job applications from the command line.
#[derive(Debug, Parser)]
#[command(name = "jobtrack", version, about)]
pub struct Cli {
    /// Configuration file (RON). Defaults to ./jobtrack.ron when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding stored applications and the log file.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Record a new application with status Applied.
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        title: String,
        /// Submission date, YYYY-MM-DD.
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        link: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Change the status of an application.
    Status { id: String, status: Status },
    /// Delete an application after confirmation.
    Remove {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// List applications, newest first.
    List {
        /// All, Applied, Interviewing, Offer or Rejected.
        #[arg(long, default_value = "All")]
        status: StatusFilter,
    },
    /// Show every field of one application.
    Show { id: String },
    /// Count applications per status.
    Summary,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use jobtrack_core::{Status, StatusFilter};

    use super::{Cli, Command};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_status_and_filter_values() {
        let cli = Cli::parse_from(["jobtrack", "status", "17", "offer"]);
        assert_eq!(
            cli.command,
            Command::Status {
                id: "17".to_string(),
                status: Status::Offer
            }
        );

        let cli = Cli::parse_from(["jobtrack", "list", "--status", "Interviewing"]);
        assert_eq!(
            cli.command,
            Command::List {
                status: StatusFilter::Only(Status::Interviewing)
            }
        );
    }
}
