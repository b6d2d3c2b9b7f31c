use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::{debug, warn};

use crate::{TaskHandle, TaskId};

/// A boxed replacement value travelling from a task back to the UI thread.
pub(crate) struct Update {
    pub(crate) task: Option<TaskId>,
    pub(crate) target: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Send-side handle used by computes and commands to publish new values.
///
/// Updates are queued and applied by [`crate::StateCtx::sync_computes`].
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
    task: Option<TaskHandle>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>, task: Option<TaskHandle>) -> Self {
        Self { send, task }
    }

    /// The dispatch this updater belongs to, if it was created for a command.
    pub fn task(&self) -> Option<&TaskHandle> {
        self.task.as_ref()
    }

    /// Queue `value` as the new value of the state or compute of type `T`.
    ///
    /// Does nothing once the owning task has been superseded.
    pub fn set<T: Any + Send>(&self, value: T) {
        if let Some(task) = &self.task
            && task.is_cancelled()
        {
            debug!(
                "Dropping {} from cancelled task generation {}",
                type_name::<T>(),
                task.id().generation()
            );
            return;
        }

        let update = Update {
            task: self.task.as_ref().map(TaskHandle::id),
            target: TypeId::of::<T>(),
            value: Box::new(value),
        };
        if self.send.send(update).is_err() {
            warn!("State context dropped before {} was delivered", type_name::<T>());
        }
    }
}
