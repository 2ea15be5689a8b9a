use async_trait::async_trait;
use birth_relay::{
    Error, Result,
    relay::{
        BoxTask, InferenceClient, InferenceResult, Notifier, TaskHandle, TaskSpawner,
        TokioSpawner, WorkflowRequest,
    },
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Mock workflow client for testing
#[derive(Debug, Default)]
pub struct MockInferenceClient {
    pub response: Option<InferenceResult>,
    pub delay: Option<Duration>,
    pub requests: Arc<Mutex<Vec<WorkflowRequest>>>,
    calls: AtomicUsize,
}

impl MockInferenceClient {
    pub fn succeeding(message: &str) -> Self {
        Self {
            response: Some(InferenceResult {
                message: message.to_string(),
                contact: String::new(),
            }),
            ..Self::default()
        }
    }

    /// Every call fails as if the API answered 500.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get_requests(&self) -> Vec<WorkflowRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn call(&self, request: &WorkflowRequest) -> Result<InferenceResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.response.clone().ok_or(Error::Protocol {
            status: 500,
            body: "internal error".to_string(),
        })
    }
}

/// Mock notifier that forwards every send over a channel
pub struct MockNotifier {
    sender: mpsc::UnboundedSender<(String, InferenceResult)>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(String, InferenceResult)>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender,
                fail: false,
            },
            receiver,
        )
    }

    /// Reports the attempt on the channel, then fails like a refused dial.
    pub fn failing() -> (Self, mpsc::UnboundedReceiver<(String, InferenceResult)>) {
        let (mut notifier, receiver) = Self::new();
        notifier.fail = true;
        (notifier, receiver)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, to: &str, result: &InferenceResult) -> Result<()> {
        let _ = self.sender.send((to.to_string(), result.clone()));
        if self.fail {
            return Err(Error::smtp("dial tcp: connection refused"));
        }
        Ok(())
    }
}

/// Tokio spawner that counts how many tasks were scheduled
#[derive(Debug, Default)]
pub struct CountingSpawner {
    spawned: AtomicUsize,
}

impl CountingSpawner {
    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::SeqCst)
    }
}

impl TaskSpawner for CountingSpawner {
    fn spawn(&self, name: &'static str, task: BoxTask) -> TaskHandle {
        self.spawned.fetch_add(1, Ordering::SeqCst);
        TokioSpawner.spawn(name, task)
    }
}
