use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use repolist::app::AppContainer;
use repolist::config::{Config, ConfigOverrides};
use repolist::logging::init_tracing;
use repolist::ui::mvi::{StateUpdates, Store};
use repolist::ui::repo_list::{render_lines, RepoListAction, RepoListState};

/// Fetch a repository list and print every state the list screen goes through.
#[derive(Debug, Parser)]
#[command(name = "repolist", version, about)]
struct Cli {
    /// Config file (default: ~/.config/repolist/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// List repositories of this account instead of the public listing
    #[arg(long)]
    owner: Option<String>,

    /// Base URL of a GitHub-compatible API
    #[arg(long)]
    base_url: Option<String>,

    /// Extra reloads issued after the initial load
    #[arg(long, default_value_t = 0)]
    reloads: u32,

    /// Print each state as a JSON line
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.logging.level);

    let container =
        AppContainer::from_config(&config).context("Failed to build repository service")?;
    let (handle, updates) = Store::launch_with_updates(container.repo_list_reactor());

    for _ in 0..cli.reloads {
        handle
            .send(RepoListAction::GetRepos)
            .context("Failed to queue reload")?;
    }

    // Shutting down right after queueing lets the store finish once
    // every action has been handled, which also closes the update stream.
    let run = async {
        let (final_state, ()) = tokio::try_join!(
            async {
                handle
                    .shutdown()
                    .await
                    .context("Reactor stopped abnormally")
            },
            print_updates(updates, cli.json),
        )?;
        Ok::<_, anyhow::Error>(final_state)
    };

    tokio::select! {
        result = run => {
            let final_state = result?;
            tracing::debug!(
                repositories = final_state.repositories.len(),
                is_error = final_state.error.is_error,
                "Done"
            );
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let overrides = ConfigOverrides {
        owner: cli.owner.clone(),
        base_url: cli.base_url.clone(),
    };
    config
        .with_overrides(&overrides)
        .context("Invalid configuration")
}

async fn print_updates(mut updates: StateUpdates<RepoListState>, json: bool) -> Result<()> {
    while let Some(state) = updates.next().await {
        print_state(&state, json)?;
    }
    Ok(())
}

fn print_state(state: &RepoListState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(state).context("Failed to encode state")?);
    } else {
        for line in render_lines(state) {
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}
