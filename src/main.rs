//! sociograph CLI: load the two CSV feeds and run structural queries

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use sociograph::{ingest, SocialGraph, Username};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sociograph", version, about = "Social-following graph queries")]
struct Cli {
    /// User feed CSV (`name,username` rows)
    #[arg(long, default_value = "data/usuarios.csv", global = true)]
    users: PathBuf,

    /// Connection feed CSV (`origin,destiny,weight` rows)
    #[arg(long, default_value = "data/conexoes.csv", global = true)]
    connections: PathBuf,

    /// Output format
    #[arg(long, default_value = "plain", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Follower and following counts for a user
    Stats { username: String },
    /// Stories order for a user (best friends first)
    Stories { username: String },
    /// Most-followed users
    Top {
        /// How many users to return
        #[arg(short, default_value_t = 5)]
        k: usize,
    },
    /// Shortest path between two users
    Path { from: String, to: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut graph = SocialGraph::new();
    ingest::load_users(&mut graph, &cli.users)
        .with_context(|| format!("loading user feed {}", cli.users.display()))?;
    ingest::load_connections(&mut graph, &cli.connections)
        .with_context(|| format!("loading connection feed {}", cli.connections.display()))?;

    match cli.command {
        Commands::Stats { username } => run_stats(&graph, &username.into(), &cli.format)?,
        Commands::Stories { username } => run_stories(&graph, &username.into(), &cli.format)?,
        Commands::Top { k } => run_top(&graph, k, &cli.format),
        Commands::Path { from, to } => run_path(&graph, &from.into(), &to.into(), &cli.format),
    }

    Ok(())
}

fn run_stats(graph: &SocialGraph, username: &Username, format: &OutputFormat) -> anyhow::Result<()> {
    let followers = graph.followers_count(username)?;
    let following = graph.following_count(username)?;

    match format {
        OutputFormat::Plain => {
            println!("followers: {followers}");
            println!("following: {following}");
        }
        OutputFormat::Json => {
            let stats = json!({
                "username": username,
                "followers": followers,
                "following": following,
            });
            println!("{stats}");
        }
    }
    Ok(())
}

fn run_stories(
    graph: &SocialGraph,
    username: &Username,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let stories = graph.ranked_following(username)?;

    match format {
        OutputFormat::Plain => {
            for followee in &stories {
                println!("{followee}");
            }
        }
        OutputFormat::Json => println!("{}", json!(stories)),
    }
    Ok(())
}

fn run_top(graph: &SocialGraph, k: usize, format: &OutputFormat) {
    let influencers = graph.top_influencers(k);

    match format {
        OutputFormat::Plain => {
            for (username, followers) in &influencers {
                println!("{username}: {followers}");
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = influencers
                .iter()
                .map(|(username, followers)| {
                    json!({ "username": username, "followers": followers })
                })
                .collect();
            println!("{}", json!(entries));
        }
    }
}

fn run_path(graph: &SocialGraph, from: &Username, to: &Username, format: &OutputFormat) {
    let path = graph.shortest_path(from, to);

    match format {
        OutputFormat::Plain => match path {
            Some(path) => println!("{path}"),
            None => println!("no path from {from} to {to}"),
        },
        OutputFormat::Json => {
            let rendered = json!({
                "path": path.as_ref().map(sociograph::Path::hops),
                "rendered": path.as_ref().map(ToString::to_string),
            });
            println!("{rendered}");
        }
    }
}
