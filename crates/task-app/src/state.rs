/*
[INPUT]:  User intents from the views, completions from background requests
[OUTPUT]: Screen state plus the side effects to run next
[POS]:    Application state - single owner of the task list and session
[UPDATE]: When adding screens, intents, or changing how results are applied
*/

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Local};
use task_app_adapter::{Session, Task, TaskId};
use tracing::{debug, info, warn};
use tui_input::{Input, InputRequest};

use crate::sync::TaskList;

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOAD_FAILED: &str = "Error loading tasks";
pub const CREATE_FAILED: &str = "Failed to add task";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Tasks,
}

/// Sections of the authenticated screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tasks,
    Profile,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Tasks, Tab::Profile, Tab::Logs];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Profile => "Profile",
            Tab::Logs => "Logs",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Tasks => 0,
            Tab::Profile => 1,
            Tab::Logs => 2,
        }
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

/// Element receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Email,
    Password,
    NewTask,
    List,
}

/// Generation of the authenticated screen; bumps on every entry and logout
pub type Epoch = u64;

/// Blocking error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Work requested by a state transition
#[derive(Clone, PartialEq, Eq)]
pub enum Effect {
    Login { email: String, password: String },
    ClearSession,
    LoadTasks { epoch: Epoch },
    CreateTask { epoch: Epoch, title: String },
    ToggleTask { epoch: Epoch, task: Task },
    DeleteTask { epoch: Epoch, id: TaskId },
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Effect::ClearSession => f.write_str("ClearSession"),
            Effect::LoadTasks { epoch } => f.debug_struct("LoadTasks").field("epoch", epoch).finish(),
            Effect::CreateTask { epoch, title } => f
                .debug_struct("CreateTask")
                .field("epoch", epoch)
                .field("title", title)
                .finish(),
            Effect::ToggleTask { epoch, task } => f
                .debug_struct("ToggleTask")
                .field("epoch", epoch)
                .field("task", task)
                .finish(),
            Effect::DeleteTask { epoch, id } => f
                .debug_struct("DeleteTask")
                .field("epoch", epoch)
                .field("id", id)
                .finish(),
        }
    }
}

/// Result of a background request, error rendered as text
pub type Outcome<T> = Result<T, String>;

/// Finished background request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Login { email: String, outcome: Outcome<()> },
    TasksLoaded { epoch: Epoch, outcome: Outcome<Vec<Task>> },
    TaskCreated { epoch: Epoch, outcome: Outcome<Task> },
    TaskToggled { epoch: Epoch, id: TaskId, outcome: Outcome<Task> },
    TaskDeleted { epoch: Epoch, id: TaskId, outcome: Outcome<()> },
}

/// Everything the views render, mutated only through intents and [`AppState::apply`]
#[derive(Debug)]
pub struct AppState {
    screen: Screen,
    pub tab: Tab,
    pub focus: Focus,
    session: Option<Session>,
    pub email: Input,
    pub password: Input,
    pub new_task: Input,
    tasks: TaskList,
    selected: usize,
    loading: bool,
    login_pending: bool,
    notice: Option<Notice>,
    pub status_message: String,
    epoch: Epoch,
    busy: HashSet<TaskId>,
    last_synced: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new(default_email: Option<String>) -> Self {
        Self {
            screen: Screen::Login,
            tab: Tab::Tasks,
            focus: Focus::Email,
            session: None,
            email: Input::new(default_email.unwrap_or_default()),
            password: Input::default(),
            new_task: Input::default(),
            tasks: TaskList::new(),
            selected: 0,
            loading: false,
            login_pending: false,
            notice: None,
            status_message: String::from("Enter your credentials"),
            epoch: 0,
            busy: HashSet::new(),
            last_synced: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_busy(&self, id: TaskId) -> bool {
        self.busy.contains(&id)
    }

    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.at(self.selected)
    }

    pub fn set_credentials(&mut self, email: &str, password: &str) {
        self.email = Input::new(email.to_string());
        self.password = Input::new(password.to_string());
    }

    pub fn set_new_task(&mut self, title: &str) {
        self.new_task = Input::new(title.to_string());
    }

    /// Apply an editing request to the focused text field
    pub fn edit_focused(&mut self, request: InputRequest) {
        let field = match self.focus {
            Focus::Email => &mut self.email,
            Focus::Password => &mut self.password,
            Focus::NewTask => &mut self.new_task,
            Focus::List => return,
        };
        field.handle(request);
    }

    pub fn focus_next(&mut self) {
        self.focus = match (self.screen, self.focus) {
            (Screen::Login, Focus::Email) => Focus::Password,
            (Screen::Login, _) => Focus::Email,
            (Screen::Tasks, Focus::List) => Focus::NewTask,
            (Screen::Tasks, _) => Focus::List,
        };
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        if tab != Tab::Tasks {
            self.focus = Focus::List;
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.tasks.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Enter the task screen with a session read from the marker store
    pub fn restore(&mut self, session: Session) -> Effect {
        info!(email = %session.email, "restoring session");
        self.enter_tasks(session)
    }

    pub fn submit_login(&mut self) -> Option<Effect> {
        if self.screen != Screen::Login {
            return None;
        }
        if self.login_pending {
            self.status_message = String::from("Login already in progress");
            return None;
        }
        self.login_pending = true;
        self.loading = true;
        self.status_message = String::from("Signing in...");
        Some(Effect::Login {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })
    }

    pub fn refresh(&mut self) -> Option<Effect> {
        if self.screen != Screen::Tasks {
            return None;
        }
        Some(self.begin_load())
    }

    /// Submit the new-task field; blank titles do nothing
    pub fn add_task(&mut self) -> Option<Effect> {
        if self.screen != Screen::Tasks {
            return None;
        }
        let title = self.new_task.value();
        if title.trim().is_empty() {
            return None;
        }
        let title = title.to_string();
        self.loading = true;
        self.status_message = format!("Adding \"{}\"", title.trim());
        Some(Effect::CreateTask {
            epoch: self.epoch,
            title,
        })
    }

    pub fn toggle(&mut self, id: TaskId) -> Option<Effect> {
        let task = self.claim(id)?.clone();
        self.status_message = format!("Updating task {id}");
        Some(Effect::ToggleTask {
            epoch: self.epoch,
            task,
        })
    }

    pub fn toggle_selected(&mut self) -> Option<Effect> {
        let id = self.selected_task()?.id;
        self.toggle(id)
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Effect> {
        self.claim(id)?;
        self.status_message = format!("Deleting task {id}");
        Some(Effect::DeleteTask {
            epoch: self.epoch,
            id,
        })
    }

    pub fn delete_selected(&mut self) -> Option<Effect> {
        let id = self.selected_task()?.id;
        self.delete(id)
    }

    pub fn logout(&mut self) -> Option<Effect> {
        if self.screen != Screen::Tasks {
            return None;
        }
        let email = self.session.take().map(|session| session.email);
        info!(email = ?email, "logging out");
        self.epoch += 1;
        self.screen = Screen::Login;
        self.tab = Tab::Tasks;
        self.focus = Focus::Email;
        self.tasks.clear();
        self.selected = 0;
        self.busy.clear();
        self.loading = false;
        self.notice = None;
        self.new_task.reset();
        self.last_synced = None;
        self.status_message = String::from("Logged out");
        Some(Effect::ClearSession)
    }

    /// Fold a finished request into the state, possibly requesting follow-up work
    pub fn apply(&mut self, completion: Completion) -> Option<Effect> {
        match completion {
            Completion::Login { email, outcome } => {
                self.login_pending = false;
                if self.screen != Screen::Login {
                    debug!(%email, "ignoring login result outside the login screen");
                    return None;
                }
                self.loading = false;
                match outcome {
                    Ok(()) => Some(self.enter_tasks(Session::new(email))),
                    Err(err) => {
                        warn!(%email, error = %err, "login failed");
                        self.raise(LOGIN_FAILED);
                        None
                    }
                }
            }
            Completion::TasksLoaded { epoch, outcome } => {
                if !self.is_current(epoch) {
                    return None;
                }
                self.loading = false;
                match outcome {
                    Ok(tasks) => {
                        self.tasks.replace_all(tasks);
                        self.clamp_selection();
                        self.last_synced = Some(Local::now());
                        self.status_message = format!("{} tasks", self.tasks.len());
                    }
                    Err(err) => {
                        warn!(error = %err, "loading tasks failed");
                        self.raise(LOAD_FAILED);
                    }
                }
                None
            }
            Completion::TaskCreated { epoch, outcome } => {
                if !self.is_current(epoch) {
                    return None;
                }
                self.loading = false;
                match outcome {
                    Ok(task) => {
                        self.status_message = format!("Added \"{}\"", task.title);
                        self.tasks.append(task);
                        self.new_task.reset();
                    }
                    Err(err) => {
                        warn!(error = %err, "creating task failed");
                        self.raise(CREATE_FAILED);
                    }
                }
                None
            }
            Completion::TaskToggled { epoch, id, outcome } => {
                if !self.is_current(epoch) {
                    return None;
                }
                self.busy.remove(&id);
                match outcome {
                    Ok(task) => {
                        if self.tasks.replace(&task) == 0 {
                            debug!(task_id = id, "updated task no longer listed");
                        }
                        self.status_message = format!("Task {id} is {}", task.status);
                    }
                    Err(err) => {
                        warn!(task_id = id, error = %err, "updating task failed");
                        self.raise(UPDATE_FAILED);
                    }
                }
                None
            }
            Completion::TaskDeleted { epoch, id, outcome } => {
                if !self.is_current(epoch) {
                    return None;
                }
                self.busy.remove(&id);
                match outcome {
                    Ok(()) => {
                        self.tasks.remove(id);
                        self.clamp_selection();
                        self.status_message = format!("Deleted task {id}");
                    }
                    Err(err) => {
                        warn!(task_id = id, error = %err, "deleting task failed");
                        self.raise(DELETE_FAILED);
                    }
                }
                None
            }
        }
    }

    fn enter_tasks(&mut self, session: Session) -> Effect {
        self.session = Some(session);
        self.screen = Screen::Tasks;
        self.tab = Tab::Tasks;
        self.focus = Focus::List;
        self.epoch += 1;
        self.busy.clear();
        self.selected = 0;
        self.begin_load()
    }

    fn begin_load(&mut self) -> Effect {
        self.loading = true;
        self.status_message = String::from("Loading tasks...");
        Effect::LoadTasks { epoch: self.epoch }
    }

    /// Mark a listed task as in flight, refusing one that already is
    fn claim(&mut self, id: TaskId) -> Option<&Task> {
        if self.screen != Screen::Tasks {
            return None;
        }
        if self.tasks.get(id).is_none() {
            debug!(task_id = id, "ignoring request for unknown task");
            return None;
        }
        if !self.busy.insert(id) {
            self.status_message = format!("Task {id} is busy");
            return None;
        }
        self.tasks.get(id)
    }

    fn is_current(&self, epoch: Epoch) -> bool {
        let current = self.screen == Screen::Tasks && epoch == self.epoch;
        if !current {
            debug!(epoch, current = self.epoch, "discarding stale completion");
        }
        current
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }

    fn raise(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.notice = Some(Notice {
            message: message.to_string(),
        });
    }
}
