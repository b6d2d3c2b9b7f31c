//! State context shared by the roster business and UI crates.
//!
//! - [`State`]: plain view state, mutated on the UI thread.
//! - [`Compute`]: cached values, derived from dependencies or written by commands.
//! - [`Command`]: explicit side effects (network IO) with task generations.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod state;
mod task;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;
