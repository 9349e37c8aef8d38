//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 顶层命令列表
const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "stats", "info", "clear", "vertex", "vertices", "edge", "edges",
    "directed", "bfs", "dfs", "prim", "bipartite",
];

/// 子命令映射
fn sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "vertex" | "v" => Some(&["add", "rm", "show"]),
        "edge" | "e" => Some(&["add", "rm", "show"]),
        "directed" => Some(&["on", "off"]),
        _ => None,
    }
}

/// 边属性键，用于 `edge add` 之后的参数
const EDGE_KEYS: &[&str] = &["cost=", "min=", "max=", "flow="];

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'a str>, prefix: &str) -> Vec<Pair> {
    candidates
        .filter(|c| c.starts_with(prefix))
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// FlowGraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 计算补全候选：返回替换起点和候选列表
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        // 正在输入的单词及其之前的完整单词
        let (current, previous): (&str, &[&str]) = match words.split_last() {
            Some((last, rest)) if at_word_end => (*last, rest),
            _ => ("", &words[..]),
        };
        let start = pos - current.len();

        let found = match previous {
            [] => pairs(COMMANDS.iter(), &current.to_lowercase()),
            [cmd] => match sub_commands(&cmd.to_lowercase()) {
                Some(subs) => pairs(subs.iter(), current),
                None => Vec::new(),
            },
            [cmd, sub, _, _, ..] if matches!(*cmd, "edge" | "e") && *sub == "add" => {
                pairs(EDGE_KEYS.iter(), current)
            }
            _ => Vec::new(),
        };
        (start, found)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> Vec<String> {
        let (_, found) = CommandCompleter::new().candidates(line, line.len());
        found.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn test_top_level() {
        assert_eq!(replacements("bi"), vec!["bipartite"]);
        assert_eq!(replacements("ed"), vec!["edge", "edges"]);
        assert_eq!(replacements("").len(), COMMANDS.len());
    }

    #[test]
    fn test_sub_commands() {
        assert_eq!(replacements("vertex "), vec!["add", "rm", "show"]);
        assert_eq!(replacements("directed o"), vec!["on", "off"]);
        assert!(replacements("bfs ").is_empty());
    }

    #[test]
    fn test_edge_keys() {
        assert_eq!(replacements("edge add a b c"), vec!["cost="]);
        assert_eq!(replacements("edge add a b ").len(), EDGE_KEYS.len());
        assert!(replacements("edge add a ").is_empty());
    }

    #[test]
    fn test_replacement_start() {
        let (start, _) = CommandCompleter::new().candidates("edge sh", 7);
        assert_eq!(start, 5);
    }
}
