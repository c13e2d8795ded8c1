use std::sync::Mutex;

use crate::error::{Result, TagmakerError};
use crate::git::Repository;

/// Kinds of git operations, used to plan mock failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fetch,
    Checkout,
    CreateTag,
    PushTag,
}

/// One recorded git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedOp {
    Fetch { remote: String },
    Checkout { reference: String },
    CreateTag { name: String },
    PushTag { remote: String, name: String },
}

impl RecordedOp {
    fn step(&self) -> Step {
        match self {
            RecordedOp::Fetch { .. } => Step::Fetch,
            RecordedOp::Checkout { .. } => Step::Checkout,
            RecordedOp::CreateTag { .. } => Step::CreateTag,
            RecordedOp::PushTag { .. } => Step::PushTag,
        }
    }
}

/// Mock repository for testing without actual git operations
///
/// Records every invocation in order. A planned failure makes the Nth
/// occurrence of a step fail after being recorded, so tests can assert
/// which operations were attempted and which never ran.
pub struct MockRepository {
    ops: Mutex<Vec<RecordedOp>>,
    failure: Option<PlannedFailure>,
}

#[derive(Debug, Clone, Copy)]
struct PlannedFailure {
    step: Step,
    /// Number of successful occurrences of `step` before the failing one
    after: usize,
}

impl MockRepository {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        MockRepository {
            ops: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create a mock whose first occurrence of `step` fails
    pub fn failing_at(step: Step) -> Self {
        Self::failing_at_occurrence(step, 0)
    }

    /// Create a mock whose occurrence number `after` (0-based) of `step`
    /// fails; earlier occurrences succeed
    pub fn failing_at_occurrence(step: Step, after: usize) -> Self {
        MockRepository {
            ops: Mutex::new(Vec::new()),
            failure: Some(PlannedFailure { step, after }),
        }
    }

    /// All invocations recorded so far, in call order
    pub fn recorded(&self) -> Vec<RecordedOp> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: RecordedOp) -> Result<()> {
        let step = op.step();
        let mut ops = self.ops.lock().unwrap();
        let prior = ops.iter().filter(|o| o.step() == step).count();
        ops.push(op);

        if let Some(failure) = self.failure {
            if failure.step == step && failure.after == prior {
                return Err(match step {
                    Step::Fetch => TagmakerError::fetch("planned mock failure"),
                    Step::Checkout => TagmakerError::checkout("planned mock failure"),
                    Step::CreateTag => TagmakerError::tag("planned mock failure"),
                    Step::PushTag => TagmakerError::push("planned mock failure"),
                });
            }
        }
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn fetch(&self, remote: &str) -> Result<()> {
        self.record(RecordedOp::Fetch {
            remote: remote.to_string(),
        })
    }

    fn checkout(&self, reference: &str) -> Result<()> {
        self.record(RecordedOp::Checkout {
            reference: reference.to_string(),
        })
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record(RecordedOp::CreateTag {
            name: name.to_string(),
        })
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        self.record(RecordedOp::PushTag {
            remote: remote.to_string(),
            name: tag_name.to_string(),
        })
    }
}
