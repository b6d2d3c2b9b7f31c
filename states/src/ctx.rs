use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Debug, Formatter};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, Compute, Dep, Error, Graph, State, TaskHandle, TaskId, TopologyError, Updater,
};

/// Owner of every state, compute and command of one application instance.
///
/// A frame typically looks like:
/// 1. `sync_computes()` applies values published by background tasks,
/// 2. widgets read and mutate states,
/// 3. `flush_commands()` dispatches commands queued by the widgets,
/// 4. `run_computed()` refreshes computes whose dependencies changed.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    // topological order of `computes`, dependencies first
    compute_order: Vec<TypeId>,
    dirty: BTreeSet<TypeId>,
    command_queue: Vec<(TypeId, &'static str)>,
    // latest dispatch per command type
    tasks: BTreeMap<TypeId, TaskHandle>,

    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("dirty", &self.dirty.len())
            .field("queued_commands", &self.command_queue.len())
            .finish_non_exhaustive()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            compute_order: Vec::new(),
            dirty: BTreeSet::new(),
            command_queue: Vec::new(),
            tasks: BTreeMap::new(),
            send,
            recv,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.dirty.insert(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.computes.insert(id, Box::new(compute));
        self.dirty.insert(id);

        match self.verify_deps() {
            Ok(order) => self.compute_order = order,
            Err(err) => error!(
                "Compute {} breaks the dependency graph and will not run: {err}",
                type_name::<T>()
            ),
        }
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Orders the recorded computes so that dependencies run first.
    pub fn verify_deps(&self) -> Result<Vec<TypeId>, TopologyError<TypeId>> {
        let mut graph = Graph::new();
        for (id, compute) in &self.computes {
            graph.add_node(*id);
            let (_, compute_deps) = compute.deps();
            for dep in compute_deps {
                graph.route_to(*dep, *id);
            }
        }

        graph.topology_sort().map(|order| {
            order
                .into_iter()
                .filter(|id| self.computes.contains_key(id))
                .collect()
        })
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        Dep::new(&self.states, &self.computes).try_state::<T>()
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access to a state. Marks it dirty, so dependent computes rerun.
    ///
    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        Dep::new(&self.states, &self.computes).try_compute::<T>().ok()
    }

    /// An updater that is not tied to any command dispatch.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), None)
    }

    /// The latest dispatch of command `T`, if it was ever dispatched.
    pub fn latest_task<T: Command>(&self) -> Option<TaskId> {
        self.tasks.get(&TypeId::of::<T>()).map(TaskHandle::id)
    }

    /// Run command `T` right away.
    ///
    /// The previous dispatch of `T` (if any) is cancelled and its late
    /// updates will be dropped.
    pub fn dispatch<T: Command>(&mut self) {
        self.dispatch_by_id(TypeId::of::<T>(), type_name::<T>());
    }

    /// Queue command `T` to run on the next `flush_commands()`.
    pub fn enqueue_command<T: Command>(&mut self) {
        self.command_queue
            .push((TypeId::of::<T>(), type_name::<T>()));
    }

    pub fn flush_commands(&mut self) {
        for (id, name) in std::mem::take(&mut self.command_queue) {
            self.dispatch_by_id(id, name);
        }
    }

    fn dispatch_by_id(&mut self, id: TypeId, name: &'static str) {
        let Some(command) = self.commands.get(&id) else {
            warn!("{}", Error::CommandNotFound { name });
            return;
        };

        let generation = match self.tasks.get(&id) {
            Some(previous) => {
                previous.cancel();
                previous.id().generation() + 1
            }
            None => 1,
        };
        let handle = TaskHandle::new(TaskId::new(id, generation), CancellationToken::new());
        self.tasks.insert(id, handle.clone());

        debug!("Dispatching {name}, generation {generation}");
        command.run(
            Dep::new(&self.states, &self.computes),
            Updater::new(self.send.clone(), Some(handle)),
        );
    }

    /// Apply every queued update to its state or compute.
    pub fn sync_computes(&mut self) {
        let applied = self.drain_updates();
        self.dirty.extend(applied);
    }

    /// Rerun computes whose dependencies changed since the last run.
    pub fn run_computed(&mut self) {
        let mut dirty = std::mem::take(&mut self.dirty);
        if dirty.is_empty() {
            return;
        }
        let mut late = BTreeSet::new();

        for id in self.compute_order.clone() {
            let Some(compute) = self.computes.get(&id) else {
                continue;
            };
            let (state_deps, compute_deps) = compute.deps();
            if !state_deps
                .iter()
                .chain(compute_deps)
                .any(|dep| dirty.contains(dep))
            {
                continue;
            }

            compute.compute(
                Dep::new(&self.states, &self.computes),
                Updater::new(self.send.clone(), None),
            );

            for applied in self.drain_updates() {
                dirty.insert(applied);
                late.insert(applied);
            }
        }

        // Anything applied mid-run may feed computes ordered before it.
        self.dirty.extend(late);
    }

    fn drain_updates(&mut self) -> Vec<TypeId> {
        let mut applied = Vec::new();

        while let Ok(update) = self.recv.try_recv() {
            if let Some(task) = update.task
                && let Some(latest) = self.tasks.get(&task.type_id())
                && task.is_stale_against(&latest.id())
            {
                debug!(
                    "Dropping update from superseded generation {} (latest {})",
                    task.generation(),
                    latest.id().generation()
                );
                continue;
            }

            if let Some(state) = self.states.get_mut(&update.target) {
                state.assign_box(update.value);
            } else if let Some(compute) = self.computes.get_mut(&update.target) {
                compute.assign_box(update.value);
            } else {
                warn!("Dropping update for an unregistered state or compute");
                continue;
            }
            applied.push(update.target);
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{ComputeDeps, assign_impl, state_assign_impl};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default)]
    struct Doubled {
        value: i32,
    }

    impl Compute for Doubled {
        fn deps(&self) -> ComputeDeps {
            const STATE_IDS: [TypeId; 1] = [TypeId::of::<Counter>()];
            (&STATE_IDS, &[])
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let counter = deps.get_state_ref::<Counter>();
            updater.set(Self {
                value: counter.value * 2,
            });
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default)]
    struct Quadrupled {
        value: i32,
    }

    impl Compute for Quadrupled {
        fn deps(&self) -> ComputeDeps {
            const COMPUTE_IDS: [TypeId; 1] = [TypeId::of::<Doubled>()];
            (&[], &COMPUTE_IDS)
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let doubled = deps.get_compute_ref::<Doubled>();
            updater.set(Self {
                value: doubled.value * 2,
            });
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    /// Parks its updater so the test decides when the "response" arrives.
    #[derive(Debug, Default)]
    struct ParkedCommand {
        parked: Arc<Mutex<Vec<Updater>>>,
    }

    impl Command for ParkedCommand {
        fn run(&self, _deps: Dep<'_>, updater: Updater) {
            self.parked.lock().expect("lock").push(updater);
        }
    }

    #[test]
    fn state_round_trip() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 1 });

        ctx.update::<Counter>(|counter| counter.value += 41);

        assert_eq!(ctx.state::<Counter>().value, 42);
    }

    #[test]
    fn missing_state_is_reported() {
        let ctx = StateCtx::new();

        let err = ctx.try_state::<Counter>().expect_err("nothing registered");
        assert!(err.to_string().contains("Counter"));
    }

    #[test]
    fn computes_follow_their_dependencies() {
        let mut ctx = StateCtx::new();
        // registered out of order on purpose
        ctx.record_compute(Quadrupled::default());
        ctx.record_compute(Doubled::default());
        ctx.add_state(Counter { value: 3 });

        ctx.run_computed();

        assert_eq!(ctx.cached::<Doubled>().map(|c| c.value), Some(6));
        assert_eq!(ctx.cached::<Quadrupled>().map(|c| c.value), Some(12));

        ctx.state_mut::<Counter>().value = 5;
        ctx.run_computed();

        assert_eq!(ctx.cached::<Quadrupled>().map(|c| c.value), Some(20));
    }

    #[test]
    fn untracked_update_survives_clean_run() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 3 });
        ctx.record_compute(Doubled::default());
        ctx.run_computed();

        // value changed behind the context's back through an untracked updater
        ctx.updater().set(Doubled { value: 100 });
        ctx.sync_computes();
        ctx.run_computed();

        assert_eq!(ctx.cached::<Doubled>().map(|c| c.value), Some(100));
    }

    #[test]
    fn updates_wait_for_sync() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        ctx.updater().set(Counter { value: 7 });
        assert_eq!(ctx.state::<Counter>().value, 0);

        ctx.sync_computes();
        assert_eq!(ctx.state::<Counter>().value, 7);
    }

    #[test]
    fn enqueued_commands_run_on_flush() {
        let parked = Arc::new(Mutex::new(Vec::new()));
        let mut ctx = StateCtx::new();
        ctx.record_command(ParkedCommand {
            parked: Arc::clone(&parked),
        });

        ctx.enqueue_command::<ParkedCommand>();
        assert!(parked.lock().expect("lock").is_empty());

        ctx.flush_commands();
        assert_eq!(parked.lock().expect("lock").len(), 1);
        assert_eq!(
            ctx.latest_task::<ParkedCommand>().map(|t| t.generation()),
            Some(1)
        );
    }

    #[test]
    fn superseded_dispatch_cannot_overwrite_newer_result() {
        let _ = env_logger::builder().is_test(true).try_init();
        let parked = Arc::new(Mutex::new(Vec::new()));
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_command(ParkedCommand {
            parked: Arc::clone(&parked),
        });

        ctx.dispatch::<ParkedCommand>();
        ctx.dispatch::<ParkedCommand>();

        let updaters = parked.lock().expect("lock").clone();
        let (first, second) = (&updaters[0], &updaters[1]);
        assert!(first.task().is_some_and(TaskHandle::is_cancelled));
        assert!(second.task().is_some_and(|t| !t.is_cancelled()));

        // newer response lands first, the stale one afterwards
        second.set(Counter { value: 2 });
        first.set(Counter { value: 1 });
        ctx.sync_computes();

        assert_eq!(ctx.state::<Counter>().value, 2);
    }

    #[test]
    fn unregistered_command_is_skipped() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        ctx.dispatch::<ParkedCommand>();
        ctx.enqueue_command::<ParkedCommand>();
        ctx.flush_commands();

        assert!(ctx.latest_task::<ParkedCommand>().is_none());
        assert_eq!(ctx.state::<Counter>().value, 0);
    }

    #[test]
    fn stale_update_queued_before_cancel_is_dropped_on_sync() {
        let parked = Arc::new(Mutex::new(Vec::new()));
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_command(ParkedCommand {
            parked: Arc::clone(&parked),
        });

        ctx.dispatch::<ParkedCommand>();
        let first = parked.lock().expect("lock")[0].clone();
        // already in the channel when the retry happens
        first.set(Counter { value: 1 });

        ctx.dispatch::<ParkedCommand>();
        ctx.sync_computes();

        assert_eq!(ctx.state::<Counter>().value, 0);
    }
}
