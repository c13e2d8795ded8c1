use anyhow::Result;
use clap::Parser;

use tagmaker::config;
use tagmaker::domain::Environment;
use tagmaker::git::SystemGit;
use tagmaker::publish::{self, PublishOptions};
use tagmaker::ui;

#[derive(clap::Parser)]
#[command(
    name = "tagmaker",
    about = "Create and push timestamped git tags per deployment environment"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Fetch from the remote first and resolve the branch as <remote>/<branch>"
    )]
    origin: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Tag and push for the development environment
    Dev { branch: String },

    /// Tag and push for the staging environment
    Stg { branch: String },

    /// Tag and push for the regression environment
    Rgr { branch: String },

    /// Tag and push for every environment, in order
    All { branch: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Open the surrounding git repository
    let repo = match SystemGit::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let options = PublishOptions::from_config(&config, args.origin);

    let result = match &args.command {
        Command::Dev { branch } => publish::publish_environment(
            &repo,
            &config,
            &options,
            Environment::Development,
            branch,
        )
        .map(|outcome| vec![outcome]),
        Command::Stg { branch } => {
            publish::publish_environment(&repo, &config, &options, Environment::Staging, branch)
                .map(|outcome| vec![outcome])
        }
        Command::Rgr { branch } => {
            publish::publish_environment(&repo, &config, &options, Environment::Regression, branch)
                .map(|outcome| vec![outcome])
        }
        Command::All { branch } => publish::publish_all(&repo, &config, &options, branch),
    };

    match result {
        Ok(outcomes) => {
            if outcomes.len() > 1 {
                ui::display_success(&format!(
                    "Published {} tags for branch {}",
                    outcomes.len(),
                    outcomes[0].branch
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
