//! Taskman 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;

use thiserror::Error;

/// Taskman 错误类型
#[derive(Debug, Error)]
pub enum TaskError {
    /// I/O 错误（终端读写）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 无效输入（非数字 ID 等）
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Taskman Result 类型别名
pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    /// 创建 InvalidInput 错误
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
