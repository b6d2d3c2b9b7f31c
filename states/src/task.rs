//! Dispatch bookkeeping for commands.
//!
//! Every dispatch of a command gets a [`TaskHandle`]: a [`TaskId`] made of the
//! command's `TypeId` plus a generation counter, and a `CancellationToken`.
//! Dispatching the same command again cancels the previous handle, and
//! [`crate::StateCtx::sync_computes`] drops updates from older generations.
//! A slow response from a superseded request can therefore never overwrite the
//! result of a newer one.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a dispatched task.
///
/// Higher generations of the same `type_id` were dispatched later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self { type_id, generation }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `self` was superseded by `latest` (same command, newer generation).
    pub fn is_stale_against(&self, latest: &Self) -> bool {
        self.type_id == latest.type_id && self.generation < latest.generation
    }
}

/// Handle to a dispatched task with cooperative cancellation.
///
/// Cancellation does not abort in-flight IO. It makes the task's `Updater`
/// stop publishing, and long-running work may poll `is_cancelled()` to bail
/// out early.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
