use std::{future::Future, pin::Pin};
use tokio::task::{JoinError, JoinHandle};
use tracing::{Instrument, info_span};
use uuid::Uuid;

pub type BoxTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Runs background units of work. Implementations decide where and how.
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, name: &'static str, task: BoxTask) -> TaskHandle;
}

/// Handle to a spawned task. Dropping it detaches the task.
#[derive(Debug)]
pub struct TaskHandle {
    id: Uuid,
    inner: JoinHandle<()>,
}

impl TaskHandle {
    pub fn new(id: Uuid, inner: JoinHandle<()>) -> Self {
        Self { id, inner }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    pub fn abort(&self) {
        self.inner.abort();
    }

    pub async fn join(self) -> Result<(), JoinError> {
        self.inner.await
    }
}

/// Spawns onto the ambient tokio runtime, unbounded.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSpawner;

impl TaskSpawner for TokioSpawner {
    fn spawn(&self, name: &'static str, task: BoxTask) -> TaskHandle {
        let id = Uuid::new_v4();
        let span = info_span!("task", task_name = name, task_id = %id);
        TaskHandle::new(id, tokio::spawn(task.instrument(span)))
    }
}
