use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

use log::error;

use crate::{Dep, Updater};

/// `(state dependencies, compute dependencies)` of a compute.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A cached value derived from states and other computes.
///
/// `compute` runs inside [`crate::StateCtx::run_computed`] whenever one of its
/// dependencies changed. It publishes its new value through the `Updater`.
/// Computes with no dependencies are plain caches written by commands.
pub trait Compute: Any + Debug {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!("Refusing to assign a foreign value to compute {}", type_name::<T>()),
    }
}
