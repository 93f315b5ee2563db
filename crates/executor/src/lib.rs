//! Command execution layer for vwise
//!
//! This crate sits between callers and a [`WorkspaceRepository`]:
//!
//! - [`Command`] / [`Output`]: serializable requests and results
//! - [`Executor`]: authorizes and dispatches commands, reporting failures
//!   under a generated error id
//! - [`RemoteRepository`]: the repository contract spoken over a
//!   [`Transport`], with [`LoopbackTransport`] for in-process use
//!
//! [`WorkspaceRepository`]: vwise_core::WorkspaceRepository

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod command;
pub mod executor;
pub mod handlers;
pub mod output;

pub use client::{LoopbackTransport, RemoteRepository, Transport};
pub use command::Command;
pub use executor::Executor;
pub use output::Output;
pub use vwise_core::{Error, Result};
