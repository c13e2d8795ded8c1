// tests/publish_test.rs
//
// Workflow sequencing tests against the mock repository: which git
// operations run, in which order, and which are never attempted after a
// failure.

use tagmaker::config::Config;
use tagmaker::domain::{Environment, TagPattern};
use tagmaker::git::mock::{MockRepository, RecordedOp, Step};
use tagmaker::publish::{publish_all, publish_environment, PublishOptions};
use tagmaker::TagmakerError;

fn options(use_origin: bool) -> PublishOptions {
    PublishOptions::from_config(&Config::default(), use_origin)
}

fn tag_names(ops: &[RecordedOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            RecordedOp::CreateTag { name } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_single_environment_sequence_without_origin() {
    let repo = MockRepository::new();
    let config = Config::default();

    let outcome = publish_environment(
        &repo,
        &config,
        &options(false),
        Environment::Development,
        "release-1",
    )
    .unwrap();

    let ops = repo.recorded();
    assert_eq!(ops.len(), 3);
    assert_eq!(
        ops[0],
        RecordedOp::Checkout {
            reference: "release-1".to_string()
        }
    );
    assert!(matches!(&ops[1], RecordedOp::CreateTag { name } if name.starts_with("develop_")));
    assert!(
        matches!(&ops[2], RecordedOp::PushTag { remote, name } if remote == "origin" && *name == outcome.tag.name)
    );

    // No fetch occurs when origin mode is off
    assert!(!ops
        .iter()
        .any(|op| matches!(op, RecordedOp::Fetch { .. })));
}

#[test]
fn test_origin_mode_fetches_before_checkout() {
    let repo = MockRepository::new();
    let config = Config::default();

    publish_environment(
        &repo,
        &config,
        &options(true),
        Environment::Staging,
        "release-1",
    )
    .unwrap();

    let ops = repo.recorded();
    assert_eq!(ops.len(), 4);
    assert_eq!(
        ops[0],
        RecordedOp::Fetch {
            remote: "origin".to_string()
        }
    );
    assert_eq!(
        ops[1],
        RecordedOp::Checkout {
            reference: "origin/release-1".to_string()
        }
    );
}

#[test]
fn test_configured_remote_is_used_everywhere() {
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.remote = "upstream".to_string();
    let options = PublishOptions::from_config(&config, true);

    publish_environment(&repo, &config, &options, Environment::Development, "main").unwrap();

    let ops = repo.recorded();
    assert_eq!(
        ops[0],
        RecordedOp::Fetch {
            remote: "upstream".to_string()
        }
    );
    assert_eq!(
        ops[1],
        RecordedOp::Checkout {
            reference: "upstream/main".to_string()
        }
    );
    assert!(matches!(&ops[3], RecordedOp::PushTag { remote, .. } if remote == "upstream"));
}

#[test]
fn test_generated_tag_matches_pattern() {
    let repo = MockRepository::new();
    let config = Config::default();
    let pattern = TagPattern::for_prefixes(["develop", "staging", "regress"]).unwrap();

    let outcome = publish_environment(
        &repo,
        &config,
        &options(false),
        Environment::Regression,
        "main",
    )
    .unwrap();

    assert!(pattern.matches(&outcome.tag.name));
    assert!(outcome.tag.name.starts_with("regress_"));
    assert_eq!(outcome.environment, Environment::Regression);
    assert_eq!(outcome.branch, "main");
}

#[test]
fn test_fetch_failure_aborts_before_checkout() {
    let repo = MockRepository::failing_at(Step::Fetch);
    let config = Config::default();

    let result = publish_environment(
        &repo,
        &config,
        &options(true),
        Environment::Development,
        "main",
    );

    assert!(matches!(result, Err(TagmakerError::Fetch(_))));
    let ops = repo.recorded();
    assert!(!ops
        .iter()
        .any(|op| matches!(op, RecordedOp::Checkout { .. })));
}

#[test]
fn test_checkout_failure_aborts_before_tag_and_push() {
    let repo = MockRepository::failing_at(Step::Checkout);
    let config = Config::default();

    let result = publish_environment(
        &repo,
        &config,
        &options(false),
        Environment::Development,
        "main",
    );

    assert!(matches!(result, Err(TagmakerError::Checkout(_))));
    let ops = repo.recorded();
    assert!(!ops
        .iter()
        .any(|op| matches!(op, RecordedOp::CreateTag { .. })));
    assert!(!ops
        .iter()
        .any(|op| matches!(op, RecordedOp::PushTag { .. })));
}

#[test]
fn test_tag_failure_aborts_before_push() {
    let repo = MockRepository::failing_at(Step::CreateTag);
    let config = Config::default();

    let result = publish_environment(
        &repo,
        &config,
        &options(false),
        Environment::Development,
        "main",
    );

    assert!(matches!(result, Err(TagmakerError::Tag(_))));
    let ops = repo.recorded();
    assert!(!ops
        .iter()
        .any(|op| matches!(op, RecordedOp::PushTag { .. })));
}

#[test]
fn test_invalid_branch_name_runs_nothing() {
    let repo = MockRepository::new();
    let config = Config::default();

    let result = publish_environment(
        &repo,
        &config,
        &options(false),
        Environment::Development,
        "",
    );

    assert!(matches!(result, Err(TagmakerError::Branch(_))));
    assert!(repo.recorded().is_empty());
}

#[test]
fn test_all_runs_three_sequences_in_order() {
    let repo = MockRepository::new();
    let config = Config::default();

    let outcomes = publish_all(&repo, &config, &options(false), "main").unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes.iter().map(|o| o.environment).collect::<Vec<_>>(),
        Environment::ALL.to_vec()
    );

    let ops = repo.recorded();
    // Three full checkout/tag/push sequences, no fetches
    assert_eq!(ops.len(), 9);
    let names = tag_names(&ops);
    assert_eq!(names.len(), 3);
    assert!(names[0].starts_with("develop_"));
    assert!(names[1].starts_with("staging_"));
    assert!(names[2].starts_with("regress_"));
}

#[test]
fn test_all_with_origin_fetches_each_time() {
    let repo = MockRepository::new();
    let config = Config::default();

    publish_all(&repo, &config, &options(true), "main").unwrap();

    let ops = repo.recorded();
    assert_eq!(ops.len(), 12);
    let fetches = ops
        .iter()
        .filter(|op| matches!(op, RecordedOp::Fetch { .. }))
        .count();
    assert_eq!(fetches, 3);
    // Every fetch is immediately followed by a checkout
    for (i, op) in ops.iter().enumerate() {
        if matches!(op, RecordedOp::Fetch { .. }) {
            assert!(matches!(ops[i + 1], RecordedOp::Checkout { .. }));
        }
    }
}

#[test]
fn test_all_aborts_remaining_environments_on_failure() {
    // The second tag creation (staging) fails
    let repo = MockRepository::failing_at_occurrence(Step::CreateTag, 1);
    let config = Config::default();

    let result = publish_all(&repo, &config, &options(false), "main");
    assert!(matches!(result, Err(TagmakerError::Tag(_))));

    let ops = repo.recorded();
    // development: checkout, tag, push; staging: checkout, failed tag
    assert_eq!(ops.len(), 5);
    let names = tag_names(&ops);
    assert!(names[0].starts_with("develop_"));
    assert!(names[1].starts_with("staging_"));

    // Only the development tag was pushed, and regression never started
    let pushes = ops
        .iter()
        .filter(|op| matches!(op, RecordedOp::PushTag { .. }))
        .count();
    assert_eq!(pushes, 1);
    assert!(!names.iter().any(|name| name.starts_with("regress_")));
}
