use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::api::ApiClient;

/// Runs API calls off the UI thread and funnels their results back over a
/// channel the app drains once per frame. Each spawn gets a clone of the
/// client and the sender; the runtime is shared.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn login(&self, api: ApiClient, email: String, password: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { api.login(&email, &password).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::LoggedIn(result));
        });
    }

    pub fn sign_up(&self, api: ApiClient, name: String, email: String, password: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api.sign_up(&name, &email, &password).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::SignedUp(result));
        });
    }

    pub fn load_profile(&self, api: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result =
                runtime.block_on(async { api.profile().await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::ProfileLoaded(result));
        });
    }

    pub fn load_sessions(&self, api: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result =
                runtime.block_on(async { api.my_sessions().await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::SessionsLoaded(result));
        });
    }

    pub fn open_session(&self, api: ApiClient, session_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { api.session(&session_id).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::SessionOpened(result));
        });
    }

    pub fn toggle_pin(&self, api: ApiClient, question_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { api.toggle_pin(&question_id).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::PinToggled { question_id, result });
        });
    }

    pub fn fetch_elaboration(&self, api: ApiClient, question_id: String, question_text: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api.generate_explanation(&question_text).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::Elaboration { question_id, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
