//! Publish workflow orchestration
//!
//! The core tag-and-push sequence, decoupled from CLI argument parsing so
//! it can be driven programmatically and tested against a mock repository.

use chrono::Local;

use crate::config::Config;
use crate::domain::{BranchRef, Environment, Tag};
use crate::error::Result;
use crate::git::Repository;
use crate::ui;

/// Options threaded into every publish operation
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOptions {
    /// Remote used for fetch and push
    pub remote: String,

    /// Resolve the branch against its remote-tracking reference,
    /// fetching first
    pub use_origin: bool,
}

impl PublishOptions {
    /// Build options from configuration and the origin-mode flag
    pub fn from_config(config: &Config, use_origin: bool) -> Self {
        PublishOptions {
            remote: config.remote.clone(),
            use_origin,
        }
    }
}

/// Result of one environment's successful publish sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    /// The environment that was published
    pub environment: Environment,

    /// The branch that was checked out
    pub branch: String,

    /// The tag that was created and pushed
    pub tag: Tag,
}

/// Run the publish sequence for a single environment:
/// fetch (origin mode only), checkout, tag, push.
///
/// Each step must succeed before the next one runs; the first failure
/// aborts the sequence. A created tag whose push fails stays local and is
/// not rolled back.
pub fn publish_environment(
    repo: &dyn Repository,
    config: &Config,
    options: &PublishOptions,
    environment: Environment,
    branch_name: &str,
) -> Result<PublishOutcome> {
    let branch = if options.use_origin {
        BranchRef::remote_tracking(branch_name, options.remote.as_str())?
    } else {
        BranchRef::local(branch_name)?
    };

    ui::display_status(&format!(
        "Publishing '{}' to {}",
        branch.name, environment
    ));

    if options.use_origin {
        ui::display_status(&format!("Fetching from remote '{}'", options.remote));
        repo.fetch(&options.remote)?;
    }

    let target = branch.checkout_target();
    ui::display_status(&format!("Checking out '{}'", target));
    repo.checkout(&target)?;

    let tag = Tag::timestamped(config.prefix_for(environment), Local::now());
    ui::display_status(&format!("Creating tag '{}'", tag.name));
    repo.create_tag(&tag.name)?;

    ui::display_status(&format!(
        "Pushing tag '{}' to remote '{}'",
        tag.name, options.remote
    ));
    repo.push_tag(&options.remote, &tag.name)?;

    ui::display_success(&format!("Tag pushed successfully: {}", tag.name));

    Ok(PublishOutcome {
        environment,
        branch: branch.name,
        tag,
    })
}

/// Run the full publish sequence for every environment, in publish order.
/// A failed environment also stops the environments after it.
pub fn publish_all(
    repo: &dyn Repository,
    config: &Config,
    options: &PublishOptions,
    branch_name: &str,
) -> Result<Vec<PublishOutcome>> {
    let mut outcomes = Vec::with_capacity(Environment::ALL.len());

    for environment in Environment::ALL {
        outcomes.push(publish_environment(
            repo,
            config,
            options,
            environment,
            branch_name,
        )?);
    }

    Ok(outcomes)
}
