//! 文本渲染
//!
//! 菜单与任务列表的纯文本构建，由菜单循环负责打印。

use crate::model::Task;

/// 菜单分隔线宽度
const MENU_RULE_WIDTH: usize = 30;
/// 任务列表分隔线宽度
const LIST_RULE_WIDTH: usize = 50;

/// 构建主菜单文本块
pub fn menu() -> String {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    format!(
        "\n{rule}\nTASK MANAGER\n{rule}\n\
         1. Add Task\n\
         2. View Tasks\n\
         3. Complete Task\n\
         4. Delete Task\n\
         5. Exit\n{rule}"
    )
}

/// 构建任务列表文本；列表为空时返回 "No tasks found!"
pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found!".to_string();
    }

    let rule = "=".repeat(LIST_RULE_WIDTH);
    let mut out = format!("\n{rule}\nYOUR TASKS\n{rule}\n");
    for task in tasks {
        out.push_str(&format!(
            "{} [{}] {}\n",
            task.status_icon(),
            task.id,
            task.description
        ));
    }
    out.push_str(&rule);
    out
}
