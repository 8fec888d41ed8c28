//! dotgraph 演示脚本
//!
//! 生成、加载图并导出 DOT 文件

use anyhow::Context;
use dotgraph::{colour, Graph};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("dotgraph 演示");
    println!("==============\n");

    let out_dir = tempfile::tempdir()?;

    // 1. 生成网格图
    println!("1. 生成 3x3 网格...");
    let mut grid = Graph::grid(3);
    grid.colour_vertices(["a1_1", "a3_3"], colour::LIGHT_BLUE)?;
    grid.label_vertex("a1_1", "start")?;
    grid.label_vertex("a3_3", 9)?;
    let grid_path = out_dir.path().join("grid.dot");
    if !grid.to_dot(&grid_path) {
        anyhow::bail!("无法写入 {}", grid_path.display());
    }
    info!(
        vertices = grid.num_vertices(),
        edges = grid.num_edges(),
        "网格图已导出"
    );

    // 2. 从文件加载无向图
    println!("2. 加载无向图...");
    let input_path = out_dir.path().join("triangle.txt");
    let mut input = std::fs::File::create(&input_path)?;
    writeln!(input, "undirected")?;
    writeln!(input, "x y 5")?;
    writeln!(input, "y z 2")?;
    writeln!(input, "z x")?;
    drop(input);

    let triangle = Graph::load(&input_path)
        .with_context(|| format!("加载 {} 失败", input_path.display()))?;
    for edge in triangle.edges() {
        println!(
            "   {} -> {} (权重 {})",
            edge.source(),
            edge.target(),
            edge.weight()
        );
    }
    println!("\n{}", triangle.to_dot_string());

    // 3. 以 JSON 查看顶点
    println!("3. 链状图顶点:");
    let chain = Graph::chain(2);
    println!("{}", serde_json::to_string_pretty(chain.vertices())?);

    Ok(())
}
