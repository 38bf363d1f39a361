//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::BuildMode;

/// Shape virtual collections into feeds and paginated listings
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: hooks.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "hooks.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Build mode; overrides config and environment
    #[arg(short, long, global = true, value_enum)]
    pub mode: Option<BuildMode>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Attach localized titles and descriptions to items
    #[command(visible_alias = "e")]
    Expand {
        #[command(flatten)]
        io: IoArgs,

        /// Language code (default: site default locale)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Items to syndicate (empty outside production mode)
    #[command(visible_alias = "f")]
    Feed {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Paginated index of items sorted by title
    #[command(visible_alias = "x")]
    Index {
        #[command(flatten)]
        io: IoArgs,

        /// URL of the first index page (e.g. /tags/)
        #[arg(long, value_hint = clap::ValueHint::Url)]
        href: String,
    },

    /// Paginated pages of each item's elements in one language
    #[command(visible_alias = "i")]
    Individual {
        #[command(flatten)]
        io: IoArgs,

        /// Language code of the elements to list
        #[arg(short, long)]
        lang: String,
    },
}

/// Input/output arguments shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    /// Items JSON file. Use `-` to read from stdin.
    #[arg(short, long, default_value = "-", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Translation key prefix (e.g. `authors` for `authors.<key>.title`)
    #[arg(short, long)]
    pub path: String,

    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Commands {
    pub const fn io(&self) -> &IoArgs {
        match self {
            Self::Expand { io, .. }
            | Self::Feed { io }
            | Self::Index { io, .. }
            | Self::Individual { io, .. } => io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        let cli = Cli::parse_from([
            "collection-hooks",
            "--mode",
            "test-capture",
            "index",
            "--path",
            "tags",
            "--href",
            "/tags/",
            "-i",
            "tags.json",
        ]);
        assert_eq!(cli.mode, Some(BuildMode::TestCapture));
        match &cli.command {
            Commands::Index { io, href } => {
                assert_eq!(href, "/tags/");
                assert_eq!(io.path, "tags");
                assert_eq!(io.input, PathBuf::from("tags.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["collection-hooks", "feed", "--path", "authors"]);
        assert_eq!(cli.mode, None);
        assert_eq!(cli.config, PathBuf::from("hooks.toml"));
        assert_eq!(cli.command.io().input, PathBuf::from("-"));
        assert!(!cli.command.io().pretty);
    }

    #[test]
    fn test_individual_requires_lang() {
        let result = Cli::try_parse_from(["collection-hooks", "individual", "--path", "tags"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "collection-hooks",
            "expand",
            "--path",
            "authors",
            "--lang",
            "es",
            "-v",
            "-m",
            "production",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.mode, Some(BuildMode::Production));
    }
}
