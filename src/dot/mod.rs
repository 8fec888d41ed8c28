//! DOT 导出模块
//!
//! 无论有向还是无向，一律输出 `digraph`，无向图通过 `edge[dir = none]` 表达。
//! 无向图的每条逻辑边在存储中有两条记录，导出时只保留源名称小于目标名称的那条。

use crate::error::Result;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// DOT 输出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// 布局方向
    pub rank_dir: String,
    /// 默认节点形状
    pub node_shape: String,
    /// 默认节点样式
    pub node_style: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            rank_dir: "LR".to_string(),
            node_shape: "oval".to_string(),
            node_style: "filled".to_string(),
        }
    }
}

impl DotOptions {
    /// 从 JSON 解析配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Graph {
    /// 导出为 DOT 文件
    ///
    /// 文件无法创建或写入时返回 false，不会返回错误。
    pub fn to_dot<P: AsRef<Path>>(&self, path: P) -> bool {
        self.to_dot_with(path, &DotOptions::default())
    }

    /// 按指定配置导出为 DOT 文件
    pub fn to_dot_with<P: AsRef<Path>>(&self, path: P, options: &DotOptions) -> bool {
        let path = path.as_ref();
        let result = File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            self.write_dot_with(&mut writer, options)?;
            writer.flush()
        });

        match result {
            Ok(()) => {
                debug!(path = %path.display(), vertices = self.num_vertices(), "DOT 文件已写入");
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "无法写入 DOT 文件");
                false
            }
        }
    }

    /// 以默认配置写出 DOT 文本
    pub fn write_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.write_dot_with(writer, &DotOptions::default())
    }

    /// 写出 DOT 文本
    pub fn write_dot_with<W: Write>(&self, writer: &mut W, options: &DotOptions) -> io::Result<()> {
        writeln!(writer, "digraph g {{")?;
        writeln!(
            writer,
            "\trankdir = {};\tnode[shape={} style={}];",
            options.rank_dir, options.node_shape, options.node_style
        )?;

        for v in self.vertices() {
            write!(writer, "\t{}[name={}", v.name(), quoted(v.name()))?;
            if v.has_label() {
                write!(writer, ", label=\"{}\\n{}\"", v.name(), v.label())?;
            }
            writeln!(writer, ", fillcolor={}];", quoted(v.colour()))?;
        }

        let dir = if self.is_directed() { "forward" } else { "none" };
        writeln!(writer)?;
        writeln!(writer, "\tedge[dir = {}];", dir)?;
        for edge in self.edges() {
            let source = edge.source().name();
            let target = edge.target().name();
            if self.is_directed() || source < target {
                writeln!(writer, "\t{} -> {};", source, target)?;
            }
        }
        writeln!(writer, "}}")
    }

    /// 渲染为 DOT 字符串
    pub fn to_dot_string(&self) -> String {
        let mut buf = Vec::new();
        // 写入 Vec 不会失败
        let _ = self.write_dot(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// 加双引号，并转义其中的 `"` 和 `\`
fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour;
    use tempfile::tempdir;

    #[test]
    fn test_dot_directed() {
        let mut graph = Graph::new(true);
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("b", "a", 1).unwrap();
        graph.colour_vertex("b", colour::RED).unwrap();

        let expected = "digraph g {\n\
            \trankdir = LR;\tnode[shape=oval style=filled];\n\
            \ta[name=\"a\", fillcolor=\"white\"];\n\
            \tb[name=\"b\", fillcolor=\"red\"];\n\
            \n\
            \tedge[dir = forward];\n\
            \ta -> b;\n\
            \tb -> a;\n\
            }\n";
        assert_eq!(graph.to_dot_string(), expected);
    }

    #[test]
    fn test_dot_undirected_emits_each_edge_once() {
        let mut graph = Graph::new(false);
        graph.add_edge("y", "x", 0).unwrap();

        let dot = graph.to_dot_string();
        assert_eq!(dot.matches("x -> y;").count(), 1);
        assert!(!dot.contains("y -> x;"));
        assert!(dot.contains("\tedge[dir = none];\n"));
    }

    #[test]
    fn test_dot_undirected_self_loop_is_suppressed() {
        let mut graph = Graph::new(false);
        graph.add_edge("a", "a", 0).unwrap();

        assert!(!graph.to_dot_string().contains("->"));
    }

    #[test]
    fn test_dot_label() {
        let mut graph = Graph::new(true);
        graph.add_vertex("n").unwrap();
        graph.label_vertex("n", 7).unwrap();

        let dot = graph.to_dot_string();
        assert!(dot.contains("\tn[name=\"n\", label=\"n\\n7\", fillcolor=\"white\"];\n"));
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_dot_options() {
        let options = DotOptions::from_json(r#"{"rank_dir": "TB"}"#).unwrap();
        assert_eq!(options.rank_dir, "TB");
        assert_eq!(options.node_shape, "oval");

        let mut buf = Vec::new();
        Graph::new(true).write_dot_with(&mut buf, &options).unwrap();
        let dot = String::from_utf8(buf).unwrap();
        assert!(dot.contains("rankdir = TB;"));

        assert!(DotOptions::from_json("not json").is_err());
    }

    #[test]
    fn test_to_dot_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.dot");

        let graph = Graph::chain(1);
        assert!(graph.to_dot(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), graph.to_dot_string());
    }

    #[test]
    fn test_to_dot_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("g.dot");

        assert!(!Graph::new(true).to_dot(path));
    }
}
