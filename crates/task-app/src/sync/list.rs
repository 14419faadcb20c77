/*
[INPUT]:  Server task records
[OUTPUT]: Ordered local mirror of the task collection
[POS]:    Task synchronization - local list
[UPDATE]: When list mutation rules change
*/

use task_app_adapter::{Task, TaskId};

/// Local mirror of the server's task collection, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a server snapshot, keeping server order
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace every record carrying `task.id`, returns how many matched
    pub fn replace(&mut self, task: &Task) -> usize {
        let mut replaced = 0;
        for slot in self.tasks.iter_mut().filter(|slot| slot.id == task.id) {
            *slot = task.clone();
            replaced += 1;
        }
        replaced
    }

    /// Remove every record with `id`, returns how many were removed
    pub fn remove(&mut self, id: TaskId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        before - self.tasks.len()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.status.is_done()).count()
    }
}
