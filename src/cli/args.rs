//! Command-line argument parsing for todokit
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todokit - In-memory todo store and the tool gateway in front of it
#[derive(Parser, Debug)]
#[command(name = "todokit")]
#[command(version)]
#[command(about = "In-memory todo store over HTTP plus a tool-calling gateway", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ~/.todokit/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the store service (HTTP API)
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Serve the todo tools over stdio JSON-RPC
    Gateway {
        /// Store service base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Invoke a single tool and print its JSON output
    Call {
        /// Tool name (add_todo, get_todo_list, get_overdue_todos)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(value_name = "ARGS_JSON")]
        args: Option<String>,

        /// Store service base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// List available tools
    Tools,

    /// Check that the store service is reachable
    Doctor {
        /// Store service base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default log filter directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::VeryVerbose => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_verbosity_quiet() {
        let args = Args {
            config: None,
            verbose: 0,
            quiet: true,
            command: Commands::Tools,
        };
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["todokit", "tools"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["todokit", "-v", "tools"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["todokit", "tools", "-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_serve_overrides() {
        let args = parse(&["todokit", "serve", "--port", "9000"]);
        assert_eq!(
            args.command,
            Commands::Serve {
                host: None,
                port: Some(9000)
            }
        );
    }

    #[test]
    fn test_call_with_json_args() {
        let args = parse(&["todokit", "call", "add_todo", r#"{"name":"x"}"#]);
        match args.command {
            Commands::Call { tool, args, base_url } => {
                assert_eq!(tool, "add_todo");
                assert_eq!(args.as_deref(), Some(r#"{"name":"x"}"#));
                assert!(base_url.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["todokit"]).is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert_eq!(Verbosity::Quiet.log_directive(), "error");
        assert_eq!(Verbosity::Normal.log_directive(), "info");
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
    }
}
