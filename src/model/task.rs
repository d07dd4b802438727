/// 单个任务的数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务 ID（创建时分配，删除后不复用）
    pub id: u32,
    /// 任务描述（用户输入）
    pub description: String,
    /// 是否已完成
    pub completed: bool,
}

impl Task {
    /// 创建新任务，初始为未完成
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    /// 返回状态对应的图标
    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}
