//! 应用状态与菜单主循环

use tracing::debug;

use crate::error::Result;
use crate::input::{self, Input};
use crate::store::{CompleteOutcome, DeleteOutcome, TaskStore};
use crate::ui;

/// 应用状态
pub struct App {
    /// 任务集合（会话内存，无持久化）
    store: TaskStore,
    /// 是否退出主循环
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// 创建新应用
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            should_quit: false,
        }
    }

    /// 标记退出
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 运行主循环，直到用户选择退出或中断
    pub fn run(&mut self) {
        while !self.should_quit {
            println!("{}", ui::menu());
            match input::prompt("Enter your choice (1-5): ") {
                Ok(Input::Line(choice)) => {
                    // 单次迭代的错误在此捕获，循环继续
                    if let Err(e) = self.dispatch(choice.trim()) {
                        println!("An error occurred: {e}");
                    }
                }
                Ok(Input::Interrupted) | Ok(Input::Eof) => self.farewell_interrupt(),
                Err(e) => println!("An error occurred: {e}"),
            }
        }
    }

    /// 根据菜单选项分发
    fn dispatch(&mut self, choice: &str) -> Result<()> {
        debug!(choice, "menu choice");
        match choice {
            "1" => self.handle_add(),
            "2" => {
                println!("{}", ui::task_list(self.store.tasks()));
                Ok(())
            }
            "3" => self.handle_complete(),
            "4" => self.handle_delete(),
            "5" => {
                println!("Thanks for using Task Manager! Goodbye!");
                self.quit();
                Ok(())
            }
            _ => {
                println!("Invalid choice! Please enter 1-5.");
                Ok(())
            }
        }
    }

    /// 处理添加任务
    fn handle_add(&mut self) -> Result<()> {
        let line = match input::prompt("Enter task description: ")? {
            Input::Line(line) => line,
            Input::Interrupted | Input::Eof => {
                self.farewell_interrupt();
                return Ok(());
            }
        };

        let description = line.trim();
        if description.is_empty() {
            println!("Task description cannot be empty!");
            return Ok(());
        }

        let task = self.store.add(description);
        println!("✓ Task added: {}", task.description);
        Ok(())
    }

    /// 处理完成任务
    fn handle_complete(&mut self) -> Result<()> {
        let id = match self.prompt_task_id("Enter task ID to complete: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        match self.store.complete(id) {
            CompleteOutcome::Completed => println!("✓ Task {id} marked as completed!"),
            CompleteOutcome::AlreadyCompleted => println!("Task {id} is already completed!"),
            CompleteOutcome::NotFound => println!("Task with ID {id} not found!"),
        }
        Ok(())
    }

    /// 处理删除任务
    fn handle_delete(&mut self) -> Result<()> {
        let id = match self.prompt_task_id("Enter task ID to delete: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        match self.store.delete(id) {
            DeleteOutcome::Deleted(task) => println!("✓ Task deleted: {}", task.description),
            DeleteOutcome::NotFound => println!("Task with ID {id} not found!"),
        }
        Ok(())
    }

    /// 读取并解析任务 ID；解析失败就地报告并返回 None，不触发 store 调用
    fn prompt_task_id(&mut self, text: &str) -> Result<Option<u32>> {
        match input::prompt(text)? {
            Input::Line(line) => match input::parse_task_id(&line) {
                Ok(id) => Ok(Some(id)),
                Err(e) => {
                    debug!(error = %e, "task id parse failed");
                    println!("Please enter a valid task ID (number)!");
                    Ok(None)
                }
            },
            Input::Interrupted | Input::Eof => {
                self.farewell_interrupt();
                Ok(None)
            }
        }
    }

    /// 中断/EOF：打印告别语并退出循环
    fn farewell_interrupt(&mut self) {
        println!("\n\nGoodbye!");
        self.quit();
    }
}
