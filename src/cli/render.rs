//! Text and JSON rendering of query results.
//!
//! Renderers only consume results; they never run a query themselves.

use std::io::Write;

use serde_json::json;

use crate::graph::{ShortestPaths, SpanningTree, TransitGraph, Traversal, TraversalKind};

use super::{CliResult, OutputFormat};

/// Adjacency list of every stop.
pub fn topology(
    graph: &TransitGraph,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let stops: Vec<serde_json::Value> = (0..graph.vertex_count())
                .map(|stop| {
                    json!({
                        "stop": stop,
                        "label": label(graph, stop),
                        "links": graph.neighbors(stop),
                    })
                })
                .collect();
            write_json(out, &json!({ "stops": stops, "routes": graph.routes() }))
        }
        OutputFormat::Text => {
            writeln!(out, "Bus Stop Network Topology:")?;
            rule(out, 32)?;
            for stop in 0..graph.vertex_count() {
                writeln!(out, "{} connects to:", label(graph, stop))?;
                for link in graph.neighbors(stop) {
                    writeln!(
                        out,
                        "  -> {} ({} mins away)",
                        label(graph, link.to),
                        link.travel_time
                    )?;
                }
            }
            writeln!(out)?;
            Ok(())
        }
    }
}

/// A DFS or BFS result.
pub fn traversal(
    graph: &TransitGraph,
    result: &Traversal,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        let visits: Vec<serde_json::Value> = result
            .visits
            .iter()
            .map(|v| {
                json!({
                    "stop": v.stop,
                    "label": label(graph, v.stop),
                    "depth": v.depth,
                    "via": v.via,
                })
            })
            .collect();
        return write_json(
            out,
            &json!({ "kind": result.kind, "start": result.start, "visits": visits }),
        );
    }

    let start = label(graph, result.start);
    let (visit_verb, discover_verb) = match result.kind {
        TraversalKind::DepthFirst => {
            writeln!(out, "Inspection Route Planner (DFS) starting at {}:", start)?;
            writeln!(out, "Purpose: Ensuring all stops are visited efficiently")?;
            rule(out, 39)?;
            ("Inspecting", "Next potential stop")
        }
        TraversalKind::BreadthFirst => {
            writeln!(out, "Service Area Analysis (BFS) from {}:", start)?;
            writeln!(out, "Purpose: Analyzing stops reachable in layers of distance")?;
            rule(out, 49)?;
            ("Checking service for", "Next layer stop")
        }
    };

    match result.kind {
        // DFS narrates each discovery just before entering the stop.
        TraversalKind::DepthFirst => {
            for visit in &result.visits {
                if let Some(via) = visit.via {
                    writeln!(
                        out,
                        "  -> {}: {} ({} mins away)",
                        discover_verb,
                        label(graph, visit.stop),
                        via.travel_time
                    )?;
                }
                writeln!(out, "{} {}", visit_verb, label(graph, visit.stop))?;
            }
        }
        // BFS narrates the stops enqueued while a stop is being checked.
        TraversalKind::BreadthFirst => {
            for visit in &result.visits {
                writeln!(out, "{} {}", visit_verb, label(graph, visit.stop))?;
                for child in result
                    .visits
                    .iter()
                    .filter(|c| c.via.is_some_and(|d| d.from == visit.stop))
                {
                    let minutes = child.via.map(|d| d.travel_time).unwrap_or_default();
                    writeln!(
                        out,
                        "  -> {}: {} ({} mins away)",
                        discover_verb,
                        label(graph, child.stop),
                        minutes
                    )?;
                }
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Shortest travel times and routes from one stop.
pub fn shortest_paths(
    graph: &TransitGraph,
    result: &ShortestPaths,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        let stops: Vec<serde_json::Value> = (0..graph.vertex_count())
            .map(|stop| {
                json!({
                    "stop": stop,
                    "label": label(graph, stop),
                    "distance": result.distance(stop),
                    "path": result.path_to(stop),
                })
            })
            .collect();
        return write_json(out, &json!({ "start": result.start, "stops": stops }));
    }

    writeln!(
        out,
        "Shortest Path Calculation from {}:",
        label(graph, result.start)
    )?;
    rule(out, 49)?;
    for stop in 0..graph.vertex_count() {
        match result.distance(stop) {
            Some(minutes) => writeln!(
                out,
                "{} -> {} ({}) : {} mins",
                result.start,
                stop,
                label(graph, stop),
                minutes
            )?,
            None => writeln!(
                out,
                "{} -> {} ({}) : unreachable",
                result.start,
                stop,
                label(graph, stop)
            )?,
        }
        if let Some(path) = result.path_to(stop).filter(|p| p.len() > 2) {
            let hops: Vec<&str> = path.iter().map(|&s| label(graph, s)).collect();
            writeln!(out, "    via {}", hops.join(" -> "))?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// A minimum spanning tree.
pub fn spanning_tree(
    graph: &TransitGraph,
    tree: &SpanningTree,
    out: &mut dyn Write,
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, tree);
    }

    writeln!(out, "Minimum Spanning Tree Edges:")?;
    writeln!(
        out,
        "Purpose: Identifying essential infrastructure links to connect all stops with minimum total distance/cost"
    )?;
    rule(out, 55)?;
    for edge in &tree.edges {
        writeln!(
            out,
            "Edge from {} ({}) to {} ({}) with time: {} mins",
            edge.parent,
            label(graph, edge.parent),
            edge.child,
            label(graph, edge.child),
            edge.travel_time
        )?;
    }
    writeln!(
        out,
        "Total: {} mins across {} links",
        tree.total_travel_time,
        tree.edges.len()
    )?;
    writeln!(out)?;
    Ok(())
}

fn label(graph: &TransitGraph, stop: usize) -> &str {
    graph.label(stop).unwrap_or("?")
}

fn rule(out: &mut dyn Write, width: usize) -> CliResult<()> {
    writeln!(out, "{}", "=".repeat(width))?;
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
