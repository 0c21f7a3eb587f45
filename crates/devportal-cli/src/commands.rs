use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use devportal_client::github::GITHUB_API_URL;
use devportal_client::{DiscourseClient, GithubClient, NetworkConfig, Resource};
use directories::ProjectDirs;
use devportal_model::{FlowNetwork, STATUS_NETWORKS, SporksFeed, Topic};
use devportal_nav::Paginator;
use tracing::{debug, info, warn};

use crate::cli::{AvatarCacheArgs, ForumCommand, GithubArgs, HomeArgs, ListArgs, SporksArgs};
use devportal_cli::output::{
    contracts_table, forum_summaries_table, networks_table, sporks_json, topics_table,
};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "onflow";
const APP_NAME: &str = "devportal";
const AVATAR_CACHE_FILE: &str = "avatar-cache.json";

/// Built-in defaults for `network`, overridden by `path` when given.
pub fn load_config(network: FlowNetwork, path: Option<&Path>) -> Result<NetworkConfig> {
    match path {
        Some(path) => NetworkConfig::load(path, network)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(NetworkConfig::for_network(network)),
    }
}

pub fn run_sporks(args: &SporksArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let feed: SporksFeed = serde_json::from_str(&contents).context("parse sporks feed")?;
    let sporks = devportal_transform::normalize_sporks(&feed);
    debug!(networks = sporks.len(), "normalized sporks feed");
    println!("{}", sporks_json(&sporks, args.network.as_deref())?);
    Ok(())
}

pub fn run_forum(command: &ForumCommand, config: &NetworkConfig) -> Result<()> {
    let runtime = current_thread_runtime()?;
    let client = DiscourseClient::new(config.discourse_url.as_str())?;
    info!(forum = client.base_url(), "reading forum");

    runtime.block_on(async {
        match command {
            ForumCommand::Latest => {
                let summaries = client.latest_summaries().await?;
                println!("{}", forum_summaries_table(&summaries));
            }
            ForumCommand::BreakingChanges(args) => {
                let topics = client.breaking_changes_topics().await?;
                print_topic_page(&topics, args, client.base_url())?;
            }
            ForumCommand::Sporks(args) => {
                let topics = client.mainnet_spork_topics().await?;
                print_topic_page(&topics, args, client.base_url())?;
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

/// `--cache-dir` when given, else the per-user cache directory.
pub fn avatar_cache_path(args: &AvatarCacheArgs) -> PathBuf {
    if let Some(dir) = &args.cache_dir {
        return dir.join(AVATAR_CACHE_FILE);
    }
    match ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME) {
        Some(dirs) => dirs.cache_dir().join(AVATAR_CACHE_FILE),
        None => {
            warn!("no home directory; keeping the avatar cache in the temp dir");
            std::env::temp_dir().join(APP_NAME).join(AVATAR_CACHE_FILE)
        }
    }
}

fn current_thread_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")
}

pub fn run_github_avatar(args: &GithubArgs) -> Result<()> {
    let runtime = current_thread_runtime()?;
    let client = GithubClient::new(GITHUB_API_URL, avatar_cache_path(&args.cache))?;
    let avatar = runtime
        .block_on(client.avatar(Some(&args.user)))
        .with_context(|| format!("look up GitHub user {}", args.user))?;
    match avatar {
        Some(url) => println!("{url}"),
        None => bail!("GitHub user must not be empty"),
    }
    Ok(())
}

/// Forum and avatar are fetched together; a failing source only hides its
/// own section.
pub fn run_home(args: &HomeArgs, config: &NetworkConfig) -> Result<()> {
    let runtime = current_thread_runtime()?;
    let forum = DiscourseClient::new(config.discourse_url.as_str())?;
    let github = GithubClient::new(GITHUB_API_URL, avatar_cache_path(&args.cache))?;

    let (summaries, avatar) = runtime.block_on(async {
        tokio::join!(
            Resource::resolve(forum.latest_summaries()),
            Resource::resolve(github.avatar(args.github.as_deref())),
        )
    });

    if let Some(Some(url)) = avatar.into_data_or_log("github avatar") {
        println!("Avatar: {url}");
    }
    if let Some(summaries) = summaries.into_data_or_log("latest forum topics") {
        println!("{}", forum_summaries_table(&summaries));
    }
    Ok(())
}

fn print_topic_page(topics: &[Topic], args: &ListArgs, base_url: &str) -> Result<()> {
    let mut paginator = Paginator::new(topics.len(), args.page_size);
    if !paginator.set_page_from_input(&args.page) {
        bail!(
            "page must be a whole number between 1 and {}",
            paginator.page_count()
        );
    }
    println!("{}", topics_table(paginator.page_items(topics), base_url));
    println!("Page {} of {}", paginator.page(), paginator.page_count());
    Ok(())
}

pub fn run_youtube(url: &str) -> Result<()> {
    let id = devportal_transform::extract_youtube_video_id(url)?;
    println!("{id}");
    Ok(())
}

/// Prints the verdict; returns whether the address is valid.
pub fn run_email(address: &str) -> bool {
    match devportal_transform::email_error_message(address) {
        Some(message) => {
            println!("{message}");
            false
        }
        None => {
            println!("valid");
            true
        }
    }
}

pub fn run_networks() {
    println!("{}", networks_table(STATUS_NETWORKS));
}

pub fn run_contracts(config: &NetworkConfig) {
    println!("Network: {}", config.network);
    println!("Access node: {}", config.access_node);
    println!("{}", contracts_table(config));
}
