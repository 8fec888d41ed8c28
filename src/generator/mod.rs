//! 图生成器
//!
//! 生成链状和网格状的有向测试图，所有边权重为 0。
//! 顶点名称由生成器构造，保证合法且唯一，因此直接按 ID 插入。

use crate::graph::{Graph, VertexId, DEFAULT_VERTEX_CAPACITY};
use tracing::debug;

/// 预分配顶点容量的上限，超出部分按需增长
const MAX_CAPACITY_HINT: usize = DEFAULT_VERTEX_CAPACITY * 1024;

fn capacity_hint(vertices: usize) -> usize {
    vertices.min(MAX_CAPACITY_HINT)
}

impl Graph {
    /// 生成长度为 `length` 的链：`a1 -> a2 -> ... -> a{length+1}`
    pub fn chain(length: usize) -> Graph {
        let mut graph = Graph::with_capacity(true, capacity_hint(length.saturating_add(1)));

        let mut prev = graph.push_vertex(chain_name(1));
        for i in 1..=length {
            let next = graph.push_vertex(chain_name(i + 1));
            graph.link(prev, next, 0);
            prev = next;
        }

        debug!(length, vertices = graph.num_vertices(), "生成链状图");
        graph
    }

    /// 生成 `size × size` 的网格，顶点名为 `a{行}_{列}`（从 1 开始）
    ///
    /// 横向边从左指向右，纵向边从上指向下。
    pub fn grid(size: usize) -> Graph {
        let mut graph = Graph::with_capacity(true, capacity_hint(size.saturating_mul(size)));

        let cells: Vec<Vec<VertexId>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| graph.push_vertex(grid_name(row, col)))
                    .collect()
            })
            .collect();

        // 横向边
        for row in &cells {
            for pair in row.windows(2) {
                graph.link(pair[0], pair[1], 0);
            }
        }

        // 纵向边
        for col in 0..size {
            for row in 1..size {
                graph.link(cells[row - 1][col], cells[row][col], 0);
            }
        }

        debug!(size, vertices = graph.num_vertices(), "生成网格图");
        graph
    }
}

fn chain_name(i: usize) -> String {
    format!("a{}", i)
}

fn grid_name(row: usize, col: usize) -> String {
    format!("a{}_{}", row + 1, col + 1)
}
