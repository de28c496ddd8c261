//! Gantry Git - Git object-store access for commit linting
//!
//! This crate reads raw commit messages and signatures out of a git
//! repository. It is the only I/O boundary of the system; everything
//! downstream operates on the returned values.

mod commits;
mod repository;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{RawCommit, Signature};
