//! 结果打印器
//!
//! 以表格形式输出顶点、边和算法结果

use crate::algorithm::{Bipartition, SearchTree, SpanningTree};
use crate::graph::{Edge, Graph, Vertex, VertexId};
use prettytable::{format, row, Cell, Row, Table};

/// 结果打印器
#[derive(Debug, Default, Clone)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    fn table(titles: &[&str]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t)).collect()));
        table
    }

    fn name(graph: &Graph, id: VertexId) -> String {
        graph
            .vertex(id)
            .map(|v| v.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    /// 打印统计信息
    pub fn stats(&self, graph: &Graph) -> String {
        let mut table = Self::table(&["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count()]);
        table.add_row(row!["Edge Count", graph.edge_count()]);
        table.add_row(row!["Residual Edges", graph.all_edges().count() - graph.edge_count()]);
        table.add_row(row!["Directed", graph.is_directed()]);
        table.to_string()
    }

    /// 顶点列表
    pub fn vertices(&self, graph: &Graph) -> String {
        if graph.vertex_count() == 0 {
            return "Empty set\n".to_string();
        }
        let mut table = Self::table(&["Name", "ID", "Out", "In"]);
        for v in graph.vertices() {
            table.add_row(row![
                v.name(),
                v.id(),
                graph.out_degree(v.id()),
                graph.in_degree(v.id())
            ]);
        }
        format!("{}{} vertex(es)\n", table, graph.vertex_count())
    }

    /// 实边列表
    pub fn edges(&self, graph: &Graph) -> String {
        if graph.edge_count() == 0 {
            return "Empty set\n".to_string();
        }
        let mut table = Self::table(&["Source", "Sink", "Cost", "Min", "Max", "Flow"]);
        for e in graph.edges() {
            table.add_row(Self::edge_row(graph, e));
        }
        format!("{}{} edge(s)\n", table, graph.edge_count())
    }

    fn edge_row(graph: &Graph, e: &Edge) -> Row {
        row![
            Self::name(graph, e.source()),
            Self::name(graph, e.sink()),
            e.cost(),
            e.min_flow(),
            e.max_flow(),
            e.flow()
        ]
    }

    /// 单个顶点详情
    pub fn vertex(&self, graph: &Graph, vertex: &Vertex) -> String {
        let mut table = Self::table(&["Edge", "Kind", "Sink", "Cost"]);
        for e in graph.adjacents(vertex.id()) {
            let kind = if e.is_fake() { "residual" } else { "real" };
            table.add_row(row![e.id(), kind, Self::name(graph, e.sink()), e.cost()]);
        }
        format!(
            "顶点 {} ({}): 出边 {} 条, 入边 {} 条\n{}",
            vertex.name(),
            vertex.id(),
            graph.out_degree(vertex.id()),
            graph.in_degree(vertex.id()),
            table
        )
    }

    /// 单条边详情
    pub fn edge(&self, graph: &Graph, edge: &Edge) -> String {
        let mut table = Self::table(&["Source", "Sink", "Cost", "Min", "Max", "Flow"]);
        table.add_row(Self::edge_row(graph, edge));
        if let Some(residual) = graph.residual(edge.id()) {
            table.add_row(Self::edge_row(graph, residual));
        }
        format!("边 {} (残余边 {})\n{}", edge.id(), edge.redge(), table)
    }

    /// BFS/DFS 结果
    pub fn search_tree(&self, graph: &Graph, kind: &str, tree: &SearchTree) -> String {
        let mut table = Self::table(&["Vertex", "Color", "Distance"]);
        for v in graph.vertices() {
            table.add_row(row![v.name(), tree.color(v.id()), tree.distance(v.id())]);
        }
        let edges: Vec<String> = tree
            .tree_edges()
            .filter_map(|id| graph.edge(id))
            .map(|e| format!("{} -> {}", Self::name(graph, e.source()), Self::name(graph, e.sink())))
            .collect();
        format!(
            "{} from {}: {} visited\n{}tree edges: [{}]\n",
            kind,
            Self::name(graph, tree.root()),
            tree.visited_count(),
            table,
            edges.join(", ")
        )
    }

    /// Prim 结果
    pub fn spanning_tree(&self, graph: &Graph, mst: &SpanningTree) -> String {
        let mut table = Self::table(&["Source", "Sink", "Cost"]);
        for e in mst.tree_edges().filter_map(|id| graph.edge(id)) {
            table.add_row(row![
                Self::name(graph, e.source()),
                Self::name(graph, e.sink()),
                e.cost()
            ]);
        }
        format!(
            "MST from {}: {} edge(s)\n{}total cost: {}\n",
            Self::name(graph, mst.root()),
            mst.edge_count(),
            table,
            mst.total_cost()
        )
    }

    /// 二分图判定结果
    pub fn bipartition(&self, graph: &Graph, result: &Bipartition) -> String {
        if !result.is_bipartite() {
            return "不是二分图\n".to_string();
        }
        let mut table = Self::table(&["Vertex", "Side"]);
        for v in graph.vertices() {
            let side = result
                .side(v.id())
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![v.name(), side]);
        }
        format!("是二分图\n{}", table)
    }

    /// 帮助信息
    pub fn help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   FlowGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  stats, info                显示图统计信息
  clear                      清空图

顶点:
  vertex add <名称>          添加顶点（去空白，截断到 10 个字符）
  vertex rm <名称>           删除顶点及其所有关联边
  vertex show <名称>         查看顶点邻接表
  vertices                   列出所有顶点

边:
  edge add <源> <汇> [cost=N] [min=N] [max=N] [flow=N]
                             添加边（自动创建残余边）
                             示例: edge add a b cost=3 max=10
  edge rm <源> <汇>          删除边
  edge show <源> <汇>        查看边及其残余边
  edges                      列出所有实边

算法:
  directed on|off            切换有向/无向
  bfs <起点>                 广度优先遍历
  dfs <起点>                 深度优先遍历
  prim <起点>                Prim 最小生成树
  bipartite                  二分图判定

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
