//! 控制台输入处理
//!
//! 提示符打印 + 单行读取。TTY 上使用 crossterm raw mode 键盘事件循环，
//! 将 Ctrl-C 作为中断事件交给调用方处理；非 TTY（管道/重定向）退回逐行读取。

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use crossterm::tty::IsTty;

use crate::error::{Result, TaskError};

/// 单次读取的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// 一行文本（未 trim）
    Line(String),
    /// 用户中断（Ctrl-C）
    Interrupted,
    /// 输入流结束（Ctrl-D / EOF）
    Eof,
}

/// Raw mode 守卫，Drop 时恢复终端
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// 打印提示符并读取一行输入
pub fn prompt(text: &str) -> io::Result<Input> {
    let mut stdout = io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()?;

    if io::stdin().is_tty() {
        read_line_raw()
    } else {
        read_line_buffered()
    }
}

/// 非 TTY：逐行读取
fn read_line_buffered() -> io::Result<Input> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line)? {
        0 => Ok(Input::Eof),
        _ => {
            // 去掉行尾换行
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Ok(Input::Line(line))
        }
    }
}

/// TTY：raw mode 键盘事件循环，手动回显
fn read_line_raw() -> io::Result<Input> {
    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    loop {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                // Ctrl-C → 中断
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(Input::Interrupted);
                }

                // 空行上的 Ctrl-D → EOF
                KeyCode::Char('d')
                    if key.modifiers.contains(KeyModifiers::CONTROL) && buffer.is_empty() =>
                {
                    return Ok(Input::Eof);
                }

                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Input::Line(buffer));
                }

                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        write!(stdout, "\x08 \x08")?;
                        stdout.flush()?;
                    }
                }

                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buffer.push(c);
                    write!(stdout, "{c}")?;
                    stdout.flush()?;
                }

                _ => {}
            }
        }
    }
}

/// 解析任务 ID 输入
pub fn parse_task_id(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| TaskError::invalid_input(format!("not a task id: {trimmed:?}")))
}
