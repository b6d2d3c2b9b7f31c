use std::any::Any;
use std::fmt::Debug;

use crate::{Dep, Updater};

/// A side effect that is only ever run on explicit dispatch.
///
/// Network IO lives here rather than in a [`crate::Compute`], because computes
/// run implicitly whenever their dependencies change. The `Updater` handed to
/// `run` is bound to the dispatch's task generation, so results published
/// after a newer dispatch of the same command are discarded.
pub trait Command: Any + Debug {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
