//! CLI command implementations.

use std::io::Write;

use log::info;

use crate::graph::TransitGraph;

use super::{render, CliResult, OutputFormat};

/// Print the adjacency list of every stop.
pub fn cmd_topology(
    graph: &TransitGraph,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    render::topology(graph, out, format)
}

/// Run a depth-first inspection route from `start`.
pub fn cmd_dfs(
    graph: &TransitGraph,
    start: i64,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    let start = graph.resolve_vertex(start)?;
    let result = graph.depth_first(start)?;
    render::traversal(graph, &result, out, format)
}

/// Run a breadth-first service-area analysis from `start`.
pub fn cmd_bfs(
    graph: &TransitGraph,
    start: i64,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    let start = graph.resolve_vertex(start)?;
    let result = graph.breadth_first(start)?;
    render::traversal(graph, &result, out, format)
}

/// Compute shortest travel times from `start`.
pub fn cmd_shortest_path(
    graph: &TransitGraph,
    start: i64,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    let start = graph.resolve_vertex(start)?;
    let result = graph.shortest_paths(start)?;
    render::shortest_paths(graph, &result, out, format)
}

/// Compute the minimum spanning tree grown from `start`.
pub fn cmd_mst(
    graph: &TransitGraph,
    start: i64,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    let start = graph.resolve_vertex(start)?;
    let tree = graph.minimum_spanning_tree_from(start)?;
    render::spanning_tree(graph, &tree, out, format)
}

/// Run every query in turn, the way the demo walks through the network.
///
/// The start stop is validated once up front so nothing is printed for a bad start.
pub fn cmd_all(
    graph: &TransitGraph,
    start: i64,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    graph.resolve_vertex(start)?;
    info!(
        "running all queries from stop {} over {} stops, {} routes",
        start,
        graph.vertex_count(),
        graph.edge_count()
    );

    cmd_topology(graph, out, format)?;
    cmd_dfs(graph, start, out, format)?;
    cmd_bfs(graph, start, out, format)?;
    cmd_shortest_path(graph, start, out, format)?;
    cmd_mst(graph, start, out, format)
}
