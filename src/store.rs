//! Core task operations
//!
//! Business logic layer for the task list: the store owns the ordered
//! collection and exposes typed outcomes for the menu loop to render.
//! Prompts and user-facing messages are the caller's responsibility.

use tracing::debug;

use crate::model::Task;

/// Result of a complete operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// Task was pending and is now completed
    Completed,
    /// Task was already completed; no state change
    AlreadyCompleted,
    /// No task with the given id
    NotFound,
}

/// Result of a delete operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Task removed; carries it so the caller can report the description
    Deleted(Task),
    /// No task with the given id
    NotFound,
}

/// In-memory task collection. Insertion order is display order.
///
/// Ids come from a counter of tasks ever added, so a deleted id is never
/// reissued within a session and the k-th add always receives id k.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    created: u32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pending task. Non-empty validation is the caller's job.
    pub fn add(&mut self, description: &str) -> &Task {
        self.created += 1;
        let task = Task::new(self.created, description);
        debug!(id = task.id, description, "task added");
        let idx = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[idx]
    }

    /// 按插入顺序返回全部任务
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mark the first task matching `id` as completed. Mutates at most one
    /// task; completing twice is a no-op reported as `AlreadyCompleted`.
    pub fn complete(&mut self, id: u32) -> CompleteOutcome {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.completed => CompleteOutcome::AlreadyCompleted,
            Some(task) => {
                task.completed = true;
                debug!(id, "task completed");
                CompleteOutcome::Completed
            }
            None => CompleteOutcome::NotFound,
        }
    }

    /// Remove the first task matching `id`. Remaining ids are untouched.
    pub fn delete(&mut self, id: u32) -> DeleteOutcome {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                let task = self.tasks.remove(idx);
                debug!(id, "task deleted");
                DeleteOutcome::Deleted(task)
            }
            None => DeleteOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("first").id, 1);
        assert_eq!(store.add("second").id, 2);
        assert_eq!(store.add("third").id, 3);
    }

    #[test]
    fn test_kth_add_gets_id_k_despite_deletes() {
        let mut store = TaskStore::new();
        store.add("first");
        store.add("second");
        store.delete(1);
        // 第 3 次 add 仍然拿到 id 3，不与存活的 id 2 冲突
        assert_eq!(store.add("third").id, 3);
        store.delete(2);
        store.delete(3);
        assert_eq!(store.add("fourth").id, 4);
    }

    #[test]
    fn test_complete_marks_pending_task() {
        let mut store = TaskStore::new();
        store.add("first");
        assert_eq!(store.complete(1), CompleteOutcome::Completed);
        assert!(store.tasks()[0].completed);
    }

    #[test]
    fn test_complete_twice_is_idempotent() {
        let mut store = TaskStore::new();
        store.add("first");
        assert_eq!(store.complete(1), CompleteOutcome::Completed);
        assert_eq!(store.complete(1), CompleteOutcome::AlreadyCompleted);
        assert_eq!(store.tasks().len(), 1);
        assert!(store.tasks()[0].completed);
    }

    #[test]
    fn test_complete_unknown_id_leaves_store_unchanged() {
        let mut store = TaskStore::new();
        store.add("first");
        assert_eq!(store.complete(99), CompleteOutcome::NotFound);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_complete_on_empty_store() {
        let mut store = TaskStore::new();
        assert_eq!(store.complete(99), CompleteOutcome::NotFound);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = TaskStore::new();
        store.add("first");
        store.add("second");
        store.add("third");
        match store.delete(2) {
            DeleteOutcome::Deleted(task) => assert_eq!(task.description, "second"),
            DeleteOutcome::NotFound => panic!("task 2 should exist"),
        }
        // 其余任务的 id 不变
        let ids: Vec<u32> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_store_unchanged() {
        let mut store = TaskStore::new();
        store.add("first");
        assert_eq!(store.delete(99), DeleteOutcome::NotFound);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_session_scenario() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("Buy milk").id, 1);
        assert_eq!(store.add("Write report").id, 2);
        assert_eq!(store.complete(1), CompleteOutcome::Completed);
        assert_eq!(store.complete(1), CompleteOutcome::AlreadyCompleted);
        assert!(matches!(store.delete(2), DeleteOutcome::Deleted(_)));

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].description, "Buy milk");
        assert!(tasks[0].completed);
    }
}
