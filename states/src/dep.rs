use std::any::TypeId;
use std::collections::BTreeMap;

use crate::{Compute, Error, State};

/// Read-only view over the registered states and computes.
///
/// Handed to computes and commands while they run; anything that must outlive
/// the call (e.g. an async callback) has to be cloned out of it.
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn try_compute<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .ok_or_else(Error::compute_not_found::<T>)
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if the compute type is not registered.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.try_compute::<T>().unwrap_or_else(|err| panic!("{err}"))
    }
}
