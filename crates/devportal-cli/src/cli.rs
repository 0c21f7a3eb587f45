//! CLI argument definitions for the developer portal tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use devportal_model::FlowNetwork;

#[derive(Parser)]
#[command(
    name = "devportal",
    version,
    about = "Flow developer portal data tools",
    long_about = "Inspect the data behind the Flow developer portal.\n\n\
                  Normalizes the spork history feed, reads forum topics from Discourse,\n\
                  and checks the inputs the portal validates (video links, emails)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Flow network selecting access node and contract addresses.
    #[arg(long = "network", value_name = "NETWORK", default_value = "testnet")]
    pub network: FlowNetwork,

    /// TOML file overriding network settings and contract addresses.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a sporks feed and print the spork history as JSON.
    Sporks(SporksArgs),

    /// Read topics from the community forum.
    #[command(subcommand)]
    Forum(ForumCommand),

    /// Extract the video id from a YouTube URL.
    Youtube {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Check an email address the way the sign-up form does.
    Email {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },

    /// List the networks tracked on the status page.
    Networks,

    /// List contract addresses for the selected network.
    Contracts,

    /// Print the avatar URL of a GitHub user.
    GithubAvatar(GithubArgs),

    /// Latest forum topics next to a contributor's avatar.
    ///
    /// Sections whose data cannot be fetched are left out.
    Home(HomeArgs),
}

#[derive(Parser)]
pub struct GithubArgs {
    /// GitHub login.
    #[arg(value_name = "USER")]
    pub user: String,

    #[command(flatten)]
    pub cache: AvatarCacheArgs,
}

#[derive(Parser)]
pub struct HomeArgs {
    /// GitHub login whose avatar is shown.
    #[arg(long = "github", value_name = "USER")]
    pub github: Option<String>,

    #[command(flatten)]
    pub cache: AvatarCacheArgs,
}

#[derive(Parser)]
pub struct AvatarCacheArgs {
    /// Directory holding the avatar cache (defaults to the user cache dir).
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SporksArgs {
    /// Path to the sporks JSON feed.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only print sporks of this network key (e.g. `mainnet`).
    #[arg(long = "network", value_name = "NAME")]
    pub network: Option<String>,
}

#[derive(Subcommand)]
pub enum ForumCommand {
    /// Latest topics with their categories.
    Latest,

    /// Breaking change announcements.
    BreakingChanges(ListArgs),

    /// Mainnet spork announcements.
    Sporks(ListArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Page to show, starting at 1.
    #[arg(long = "page", value_name = "N", default_value = "1")]
    pub page: String,

    /// Topics per page.
    #[arg(long = "page-size", value_name = "N", default_value_t = 10)]
    pub page_size: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
