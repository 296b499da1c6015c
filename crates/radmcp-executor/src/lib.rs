//! # radmcp-executor
//!
//! Turns a tool name plus caller parameters into one external process
//! invocation and captures what it printed.
//!
//! The process boundary sits behind [`CommandRunner`] so callers (and
//! tests) can swap the spawner without touching binding or parsing.

pub mod binding;
pub mod error;
pub mod executor;
pub mod output;
pub mod runner;

pub use binding::bind_arguments;
pub use error::ExecutorError;
pub use executor::CommandExecutor;
pub use output::{parse_structured, ExecutionOutput};
pub use runner::{CommandOutput, CommandRunner, Invocation, ProcessRunner};
