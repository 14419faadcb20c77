/*
[INPUT]:  Effects from AppState transitions, task API and session store handles
[OUTPUT]: Background requests whose completions flow back into AppState
[POS]:    Runtime - effect execution shared by the TUI and headless callers
[UPDATE]: When adding effects or changing how requests are scheduled
*/

use std::future::Future;
use std::sync::Arc;

use task_app_adapter::{SessionStore, TaskApi, TaskId};
use tokio::sync::mpsc;
use tracing::debug;

use crate::session::SessionManager;
use crate::state::{AppState, Completion, Effect};
use crate::sync::TaskListSynchronizer;

/// Runs effects on the tokio runtime and reports back over a channel
#[derive(Clone)]
pub struct Dispatcher {
    sessions: SessionManager,
    synchronizer: TaskListSynchronizer,
    completions: mpsc::UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn new(
        api: Arc<dyn TaskApi>,
        store: Arc<dyn SessionStore>,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            sessions: SessionManager::new(api.clone(), store),
            synchronizer: TaskListSynchronizer::new(api),
            completions: tx,
        };
        (dispatcher, rx)
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Start an effect. Returns `true` when a [`Completion`] will follow.
    pub fn dispatch(&self, effect: Effect) -> bool {
        debug!(?effect, "dispatching effect");
        match effect {
            Effect::ClearSession => {
                self.sessions.logout();
                false
            }
            Effect::Login { email, password } => {
                let sessions = self.sessions.clone();
                self.spawn(async move {
                    let outcome = sessions
                        .login(&email, &password)
                        .await
                        .map(|_| ())
                        .map_err(|err| err.to_string());
                    Completion::Login { email, outcome }
                })
            }
            Effect::LoadTasks { epoch } => {
                let synchronizer = self.synchronizer.clone();
                self.spawn(async move {
                    let outcome = synchronizer.load().await.map_err(|err| err.to_string());
                    Completion::TasksLoaded { epoch, outcome }
                })
            }
            Effect::CreateTask { epoch, title } => {
                let synchronizer = self.synchronizer.clone();
                self.spawn(async move {
                    let outcome = synchronizer
                        .create(&title)
                        .await
                        .map_err(|err| err.to_string());
                    Completion::TaskCreated { epoch, outcome }
                })
            }
            Effect::ToggleTask { epoch, task } => {
                let synchronizer = self.synchronizer.clone();
                self.spawn(async move {
                    let outcome = synchronizer
                        .toggle_status(&task)
                        .await
                        .map_err(|err| err.to_string());
                    Completion::TaskToggled {
                        epoch,
                        id: task.id,
                        outcome,
                    }
                })
            }
            Effect::DeleteTask { epoch, id } => {
                let synchronizer = self.synchronizer.clone();
                self.spawn(async move {
                    let outcome = synchronizer.delete(id).await.map_err(|err| err.to_string());
                    Completion::TaskDeleted { epoch, id, outcome }
                })
            }
        }
    }

    fn spawn<F>(&self, request: F) -> bool
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let completion = request.await;
            if completions.send(completion).is_err() {
                debug!("completion receiver dropped");
            }
        });
        true
    }
}

/// State plus the machinery that executes its effects
pub struct App {
    state: AppState,
    dispatcher: Dispatcher,
    completions: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl App {
    pub fn new(state: AppState, api: Arc<dyn TaskApi>, store: Arc<dyn SessionStore>) -> Self {
        let (dispatcher, completions) = Dispatcher::new(api, store);
        Self {
            state,
            dispatcher,
            completions,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Requests started but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn perform(&mut self, effect: Option<Effect>) {
        let Some(effect) = effect else {
            return;
        };
        if self.dispatcher.dispatch(effect) {
            self.in_flight += 1;
        }
    }

    /// Wait for the next finished request
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions.recv().await
    }

    pub fn handle_completion(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let follow_up = self.state.apply(completion);
        self.perform(follow_up);
    }

    /// Apply completions until nothing is in flight
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.completions.recv().await {
                Some(completion) => self.handle_completion(completion),
                None => break,
            }
        }
    }

    /// Enter the task screen from a persisted marker; `false` when none exists
    pub fn restore_session(&mut self) -> bool {
        match self.dispatcher.sessions().restore() {
            Some(session) => {
                let effect = self.state.restore(session);
                self.perform(Some(effect));
                true
            }
            None => false,
        }
    }

    /// Log in and, on success, load the task list. Returns whether the task screen is shown.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.state.set_credentials(email, password);
        let effect = self.state.submit_login();
        self.perform(effect);
        self.settle().await;
        self.state.session().is_some()
    }

    pub async fn load(&mut self) {
        let effect = self.state.refresh();
        self.perform(effect);
        self.settle().await;
    }

    pub async fn create(&mut self, title: &str) {
        self.state.set_new_task(title);
        let effect = self.state.add_task();
        self.perform(effect);
        self.settle().await;
    }

    pub async fn toggle_status(&mut self, id: TaskId) {
        let effect = self.state.toggle(id);
        self.perform(effect);
        self.settle().await;
    }

    pub async fn delete(&mut self, id: TaskId) {
        let effect = self.state.delete(id);
        self.perform(effect);
        self.settle().await;
    }

    pub fn logout(&mut self) {
        let effect = self.state.logout();
        self.perform(effect);
    }
}
