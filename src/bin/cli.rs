//! FlowGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use flowgraph::cli::{CommandCompleter, CommandResult, Shell};
use flowgraph::GraphConfig;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowgraph-cli")]
#[command(about = "FlowGraph 命令行工具", version)]
struct Args {
    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<String>,

    /// 以无向图启动
    #[arg(short, long)]
    undirected: bool,

    /// 顶点名称最大长度
    #[arg(long)]
    max_name_len: Option<usize>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 执行以分号分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

impl Args {
    fn graph_config(&self) -> anyhow::Result<GraphConfig> {
        let mut config = match &self.config {
            Some(path) => GraphConfig::from_json_file(path)
                .with_context(|| format!("无法加载配置文件 {}", path))?,
            None => GraphConfig::default(),
        };
        if self.undirected {
            config.directed = false;
        }
        if let Some(len) = self.max_name_len {
            config.max_name_len = len;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 打印结果，返回是否退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(text) => {
            println!("{}", text);
            false
        }
        CommandResult::Error(text) => {
            println!("{} {}", "错误:".red().bold(), text);
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = args.graph_config()?;
    let mut shell = Shell::new(config);

    // 脚本模式
    if let Some(script) = &args.execute {
        for line in script.split(';') {
            if report(shell.execute(line)) {
                break;
            }
        }
        return Ok(());
    }

    println!("{}", "FlowGraph CLI - 内存流网络图".bold());
    println!("=============================");
    println!(
        "版本 {}, {}图。输入 'help' 查看命令列表，'quit' 退出\n",
        flowgraph::VERSION,
        if shell.graph().is_directed() { "有向" } else { "无向" }
    );

    let mut editor: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(CommandCompleter::new()));

    loop {
        match editor.readline("flowgraph> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                if report(shell.execute(&line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("{}", "再见！".green());
    Ok(())
}
