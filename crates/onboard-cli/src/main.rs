mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "onboard",
    about = "CNCF Sandbox onboarding automation — create onboarding issues and escalate stalled ones",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./onboard.yaml)
    #[arg(long, global = true, env = "ONBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check open onboarding issues and apply age-based labels, comments, and escalations
    Monitor {
        /// GitHub token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Repository to monitor as owner/repo (overrides config)
        #[arg(long)]
        repo: Option<String>,

        /// Process every issue regardless of existing labels (initial rollout)
        #[arg(long)]
        check_all: bool,
    },

    /// Create the onboarding issue for a project after a completed community vote
    Create {
        /// Project name
        project: String,

        /// Vote issue number to congratulate and close
        #[arg(long)]
        vote_issue: u64,

        /// GitHub token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Repository as owner/repo (overrides config)
        #[arg(long)]
        repo: Option<String>,
    },

    /// Create synthetic onboarding issues at the ages the monitor reacts to
    Seed {
        /// Repository as owner/repo
        #[arg(long)]
        repo: String,

        /// GitHub token (not needed with --dry-run)
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Print the plan without creating anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show what the monitor would do to an issue of a given age
    Classify {
        /// Issue age in days
        #[arg(long)]
        days: i64,

        /// Project name used in the rendered comment
        #[arg(long, default_value = "example-project")]
        project: String,

        /// Print the full comment that would be posted
        #[arg(long)]
        comment: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Classify { .. } => tracing::Level::WARN,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Monitor {
            token,
            repo,
            check_all,
        } => cmd::monitor::run(config_path, &token, repo.as_deref(), check_all, cli.json),
        Commands::Create {
            project,
            vote_issue,
            token,
            repo,
        } => cmd::create::run(
            config_path,
            &project,
            vote_issue,
            &token,
            repo.as_deref(),
            cli.json,
        ),
        Commands::Seed {
            repo,
            token,
            dry_run,
        } => cmd::seed::run(&repo, token.as_deref(), dry_run, cli.json),
        Commands::Classify {
            days,
            project,
            comment,
        } => cmd::classify::run(days, &project, comment, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
