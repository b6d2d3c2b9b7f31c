use std::any::{Any, type_name};
use std::fmt::Debug;

use log::error;

/// Plain view state owned by [`crate::StateCtx`].
///
/// States are mutated directly on the UI thread through `state_mut` / `update`,
/// or replaced wholesale by an [`crate::Updater`] from a background task.
pub trait State: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value sent through an `Updater`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for states.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!("Refusing to assign a foreign value to state {}", type_name::<T>()),
    }
}
