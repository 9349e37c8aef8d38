//! 命令行界面
//!
//! 交互式 shell 的命令解析、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{Command, CommandResult, Shell};
pub use completer::CommandCompleter;
pub use printer::Printer;
