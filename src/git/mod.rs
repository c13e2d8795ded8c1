//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the four git
//! operations the publish workflow consumes, allowing for multiple
//! implementations including the system git binary and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [system::SystemGit]: runs the system `git` binary as a subprocess
//! - [mock::MockRepository]: a recording implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod system;

pub use mock::MockRepository;
pub use system::SystemGit;

use crate::error::Result;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads. All methods return [crate::error::Result<T>]; implementations
/// map underlying failures to the per-step
/// [crate::error::TagmakerError] variants.
pub trait Repository: Send + Sync {
    /// Fetch updates from a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the remote doesn't exist or the fetch fails
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Switch the working tree to a reference
    ///
    /// The reference may be a local branch name ("main") or a
    /// remote-tracking reference ("origin/main").
    ///
    /// # Arguments
    /// * `reference` - The reference to check out
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the reference doesn't exist or the checkout fails
    fn checkout(&self, reference: &str) -> Result<()>;

    /// Create a lightweight tag at the current checked-out position
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists or cannot be created
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a tag to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `tag_name` - Name of the tag to push
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the remote doesn't exist, the tag doesn't exist, or the
    ///   push fails
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}
