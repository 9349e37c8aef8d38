//! 交互命令解析与执行
//!
//! 每行一条命令，参数以空白分隔，因此命令行中的顶点名不能包含空格。

use crate::cli::printer::Printer;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeProperties, Graph};

/// 命令执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 解析后的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    Clear,
    Vertices,
    Edges,
    AddVertex(String),
    RemoveVertex(String),
    ShowVertex(String),
    AddEdge {
        source: String,
        sink: String,
        props: EdgeProperties,
    },
    RemoveEdge {
        source: String,
        sink: String,
    },
    ShowEdge {
        source: String,
        sink: String,
    },
    Directed(bool),
    Bfs(String),
    Dfs(String),
    Prim(String),
    Bipartite,
}

fn usage(text: &str) -> Error {
    Error::InvalidCommand(format!("用法: {}", text))
}

fn one_name(args: &[&str], text: &str) -> Result<String> {
    match args {
        [name] => Ok((*name).to_string()),
        _ => Err(usage(text)),
    }
}

fn two_names(args: &[&str], text: &str) -> Result<(String, String)> {
    match args {
        [source, sink] => Ok(((*source).to_string(), (*sink).to_string())),
        _ => Err(usage(text)),
    }
}

impl Command {
    /// 解析一行输入
    pub fn parse(input: &str) -> Result<Self> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some((head, rest)) = words.split_first() else {
            return Err(Error::InvalidCommand("空命令".to_string()));
        };

        let command = match head.to_lowercase().as_str() {
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "stats" | "info" => Command::Stats,
            "clear" => Command::Clear,
            "vertices" => Command::Vertices,
            "edges" => Command::Edges,
            "bipartite" => Command::Bipartite,
            "bfs" => Command::Bfs(one_name(rest, "bfs <起点>")?),
            "dfs" => Command::Dfs(one_name(rest, "dfs <起点>")?),
            "prim" | "mst" => Command::Prim(one_name(rest, "prim <起点>")?),
            "directed" => match rest {
                ["on"] | ["true"] | ["yes"] => Command::Directed(true),
                ["off"] | ["false"] | ["no"] => Command::Directed(false),
                _ => return Err(usage("directed on|off")),
            },
            "vertex" | "v" => Self::parse_vertex(rest)?,
            "edge" | "e" => Self::parse_edge(rest)?,
            other => {
                return Err(Error::InvalidCommand(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    other
                )))
            }
        };
        Ok(command)
    }

    fn parse_vertex(args: &[&str]) -> Result<Self> {
        const TEXT: &str = "vertex add|rm|show <名称>";
        let Some((sub, rest)) = args.split_first() else {
            return Err(usage(TEXT));
        };
        let name = one_name(rest, TEXT)?;
        match *sub {
            "add" => Ok(Command::AddVertex(name)),
            "rm" | "remove" | "del" => Ok(Command::RemoveVertex(name)),
            "show" => Ok(Command::ShowVertex(name)),
            _ => Err(usage(TEXT)),
        }
    }

    fn parse_edge(args: &[&str]) -> Result<Self> {
        const TEXT: &str = "edge add <源> <汇> [cost=..] [min=..] [max=..] [flow=..] | edge rm|show <源> <汇>";
        let Some((sub, rest)) = args.split_first() else {
            return Err(usage(TEXT));
        };
        match *sub {
            "add" => {
                if rest.len() < 2 {
                    return Err(usage(TEXT));
                }
                let (ends, assignments) = rest.split_at(2);
                let mut pairs = Vec::with_capacity(assignments.len());
                for assignment in assignments {
                    let (key, value) = assignment
                        .split_once('=')
                        .ok_or_else(|| usage(TEXT))?;
                    pairs.push((key, value));
                }
                Ok(Command::AddEdge {
                    source: ends[0].to_string(),
                    sink: ends[1].to_string(),
                    props: EdgeProperties::from_pairs(pairs),
                })
            }
            "rm" | "remove" | "del" => {
                let (source, sink) = two_names(rest, TEXT)?;
                Ok(Command::RemoveEdge { source, sink })
            }
            "show" => {
                let (source, sink) = two_names(rest, TEXT)?;
                Ok(Command::ShowEdge { source, sink })
            }
            _ => Err(usage(TEXT)),
        }
    }
}

/// 交互会话：持有一张内存图
pub struct Shell {
    graph: Graph,
    printer: Printer,
}

impl Shell {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
            printer: Printer::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 解析并执行一行输入
    pub fn execute(&mut self, input: &str) -> CommandResult {
        if input.trim().is_empty() {
            return CommandResult::Continue;
        }
        match Command::parse(input).and_then(|cmd| self.run(cmd)) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    fn run(&mut self, command: Command) -> Result<CommandResult> {
        let p = &self.printer;
        let result = match command {
            Command::Help => CommandResult::Message(Printer::help()),
            Command::Quit => CommandResult::Exit,
            Command::Stats => CommandResult::Message(p.stats(&self.graph)),
            Command::Clear => {
                self.graph.clear();
                CommandResult::Message("图已清空".to_string())
            }
            Command::Vertices => CommandResult::Message(p.vertices(&self.graph)),
            Command::Edges => CommandResult::Message(p.edges(&self.graph)),
            Command::AddVertex(name) => {
                let id = self.graph.add_vertex(&name)?;
                let stored = self.graph.vertex(id).map(|v| v.name()).unwrap_or_default();
                CommandResult::Message(format!("顶点 {} ({})", stored, id))
            }
            Command::RemoveVertex(name) => {
                self.graph.remove_vertex(&name)?;
                CommandResult::Message(format!("已删除顶点 {}", name))
            }
            Command::ShowVertex(name) => {
                let vertex = self
                    .graph
                    .find_vertex(&name)
                    .ok_or_else(|| Error::VertexNotFound(name.clone()))?;
                CommandResult::Message(p.vertex(&self.graph, vertex))
            }
            Command::AddEdge {
                source,
                sink,
                props,
            } => {
                let id = self.graph.add_edge(&source, &sink, props)?;
                match self.graph.edge(id) {
                    Some(edge) => CommandResult::Message(p.edge(&self.graph, edge)),
                    None => CommandResult::Continue,
                }
            }
            Command::RemoveEdge { source, sink } => {
                self.graph.remove_edge(&source, &sink)?;
                CommandResult::Message(format!("已删除边 {} -> {}", source, sink))
            }
            Command::ShowEdge { source, sink } => {
                let edge = self
                    .graph
                    .find_edge(&source, &sink)
                    .ok_or_else(|| Error::edge_not_found(&source, &sink))?;
                CommandResult::Message(p.edge(&self.graph, edge))
            }
            Command::Directed(directed) => {
                self.graph.set_directed(directed);
                CommandResult::Message(format!(
                    "当前为{}图",
                    if directed { "有向" } else { "无向" }
                ))
            }
            Command::Bfs(start) => {
                let tree = self.graph.bfs(&start)?;
                CommandResult::Message(p.search_tree(&self.graph, "BFS", &tree))
            }
            Command::Dfs(start) => {
                let tree = self.graph.dfs(&start)?;
                CommandResult::Message(p.search_tree(&self.graph, "DFS", &tree))
            }
            Command::Prim(start) => {
                let mst = self.graph.prim(&start)?;
                CommandResult::Message(p.spanning_tree(&self.graph, &mst))
            }
            Command::Bipartite => {
                let result = self.graph.bipartition();
                CommandResult::Message(p.bipartition(&self.graph, &result))
            }
        };
        Ok(result)
    }
}
