//! 数据导入模块
//!
//! 文本格式：首行为 `directed` 或 `undirected`，
//! 之后每行为 `<from> <to> [weight]`，以空白分隔。
//! 不足两个字段的行会被跳过。权重取第三个字段开头的整数部分，
//! 缺省或不以整数开头时为 0。

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const DIRECTED: &str = "directed";
const UNDIRECTED: &str = "undirected";

impl Graph {
    /// 从文件加载图
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "加载图文件");
        Self::from_reader(BufReader::new(file))
    }

    /// 从任意输入流解析图
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        let mut graph = Graph::new(parse_header(&header)?);
        debug!(directed = graph.is_directed(), "解析文件头");

        for (line_no, line) in lines.enumerate() {
            let line = line?;
            match parse_edge_line(&line) {
                Some((from, to, weight)) => graph.add_edge(from, to, weight)?,
                None => {
                    if !line.trim().is_empty() {
                        // 行号从 1 开始，首行为文件头
                        debug!(line = line_no + 2, "跳过字段不足的行");
                    }
                }
            }
        }

        Ok(graph)
    }
}

/// 解析首行，允许以 `\r` 结尾
fn parse_header(line: &str) -> Result<bool> {
    match line.strip_suffix('\r').unwrap_or(line) {
        DIRECTED => Ok(true),
        UNDIRECTED => Ok(false),
        other => Err(Error::MalformedHeader(other.to_string())),
    }
}

/// 解析边行，字段不足两个时返回 None
fn parse_edge_line(line: &str) -> Option<(&str, &str, i64)> {
    let mut tokens = line.split_whitespace();
    let from = tokens.next()?;
    let to = tokens.next()?;
    let weight = tokens.next().and_then(leading_integer).unwrap_or(0);
    Some((from, to, weight))
}

/// 解析开头的 `[+-]?数字` 部分，如 `7x` 为 7、`3.9` 为 3
fn leading_integer(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(|c| c == '+' || c == '-'));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}
