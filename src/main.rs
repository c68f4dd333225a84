//! `shortcut` command line tool
//!
//! Thin wrapper over the library for quick lookups from a terminal. Output is
//! pretty printed JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use shortcut_api::types::{CreateStoryInput, SearchDetail, StoryType};
use shortcut_api::{ClientConfig, SearchQuery, Settings, ShortcutClient};

/// Shortcut CLI
#[derive(Parser)]
#[command(name = "shortcut", version, about = "Command line access to the Shortcut API", long_about = None)]
struct Cli {
    /// API token (or set SHORTCUT_API_TOKEN)
    #[arg(short = 't', long, env = "SHORTCUT_API_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "SHORTCUT_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows the member owning the token
    Me,

    /// Lists workflows and their states
    Workflows,

    /// Story operations
    Stories {
        #[command(subcommand)]
        command: StoryCommands,
    },
}

#[derive(Subcommand)]
enum StoryCommands {
    /// Searches stories, following every result page
    Search {
        #[arg(short = 'q', long)]
        query: String,

        /// Hits per request (1-250)
        #[arg(long)]
        page_size: Option<u32>,

        /// Stop after this many stories
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Creates a story
    Create {
        #[arg(short = 'n', long)]
        name: String,

        #[arg(short = 's', long)]
        workflow_state_id: i64,

        #[arg(short = 'd', long)]
        description: Option<String>,

        /// feature, bug or chore
        #[arg(long, default_value = "feature")]
        story_type: String,
    },

    /// Shows one story
    Get { id: i64 },

    /// Deletes a story
    Delete { id: i64 },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    match cli.command {
        Commands::Me => print_json(&client.get_current_member().context("Failed to fetch current member")?),
        Commands::Workflows => print_json(&client.list_workflows().context("Failed to list workflows")?),
        Commands::Stories { command } => run_story_command(&client, command),
    }
}

fn build_client(cli: &Cli) -> Result<ShortcutClient> {
    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(token) = &cli.token {
        settings.api_token = Some(token.clone());
    }
    if let Some(base_url) = &cli.base_url {
        settings.base_url = Some(base_url.clone());
    }

    let config = ClientConfig::try_from(settings).context("Invalid Shortcut configuration")?;
    tracing::debug!("Using {:?}", config);
    ShortcutClient::with_config(config).context("Failed to create Shortcut client")
}

fn run_story_command(client: &ShortcutClient, command: StoryCommands) -> Result<()> {
    match command {
        StoryCommands::Search { query, page_size, limit } => {
            let mut search = SearchQuery::new(query).with_detail(SearchDetail::Slim);
            if let Some(size) = page_size {
                search = search.with_page_size(size);
            }

            let hits = client.search_stories_iter(search).context("Invalid search")?;
            let mut stories = Vec::new();
            for hit in hits.take(limit.unwrap_or(usize::MAX)) {
                stories.push(hit.context("Search failed")?);
            }
            tracing::info!("{} stories found", stories.len());
            print_json(&stories)
        }
        StoryCommands::Create {
            name,
            workflow_state_id,
            description,
            story_type,
        } => {
            let mut input = CreateStoryInput::new(name)
                .with_workflow_state_id(workflow_state_id)
                .with_story_type(StoryType::from(story_type.as_str()));
            if let Some(description) = description {
                input = input.with_description(description);
            }

            let story = client.create_story(&input).context("Failed to create story")?;
            tracing::info!("Created story {}", story.id);
            print_json(&story)
        }
        StoryCommands::Get { id } => {
            print_json(&client.get_story(id).with_context(|| format!("Failed to fetch story {}", id))?)
        }
        StoryCommands::Delete { id } => {
            client.delete_story(id).with_context(|| format!("Failed to delete story {}", id))?;
            tracing::info!("Deleted story {}", id);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
