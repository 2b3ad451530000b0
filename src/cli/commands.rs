use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `Rendezvous` - a step-by-step date invitation with an email relay.
#[derive(Parser, Debug)]
#[command(name = "rendezvous")]
#[command(version)]
#[command(about = "Ask someone out, one question at a time.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the invitation and send the answers
    Ask {
        /// Gateway base URL (default: [wizard] gateway_url or RENDEZVOUS_GATEWAY_URL)
        #[arg(long)]
        gateway_url: Option<String>,
    },

    /// Start the submission gateway that emails each response
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Show a response JSON file (defaults to the answers saved by `ask`)
    View {
        /// Path to a `date-response-*.json` attachment
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::parse_from(["rendezvous", "serve", "--port", "0"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(0));
                assert!(host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn view_takes_optional_path() {
        let cli = Cli::parse_from(["rendezvous", "view"]);
        assert!(matches!(cli.command, Commands::View { file: None }));
    }
}
