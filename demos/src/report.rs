//! Text and JSON rendering of search results.

use std::fmt::{self, Display, Write as _};

use serde::Serialize;
use sssp_core::{Coord, Grid, Weight};
use sssp_paths::{AstarResult, BellmanFordResult, LeeResult, SearchState};

/// Outcome for one vertex of a one-to-all search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexReport<W> {
    pub vertex: usize,
    /// `None` when unreachable or unbounded below.
    pub distance: Option<W>,
    pub path: Option<Vec<usize>>,
    /// Set for vertices behind a negative cycle.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unbounded: bool,
}

/// Outcome of a one-to-all search from `source`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport<W> {
    pub source: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<Vec<usize>>,
    pub vertices: Vec<VertexReport<W>>,
}

impl<W: Weight> GraphReport<W> {
    /// Report for a Dijkstra search.
    pub fn from_search(state: &SearchState<W>) -> Self {
        let vertices = (0..state.len())
            .map(|v| VertexReport {
                vertex: v,
                distance: state.distance(v),
                path: state.path_to(v),
                unbounded: false,
            })
            .collect();
        Self {
            source: state.source(),
            negative_cycle: None,
            vertices,
        }
    }

    /// Report for a Bellman-Ford search, negative cycle included.
    pub fn from_bellman_ford(res: &BellmanFordResult<W>) -> Self {
        let vertices = (0..res.state().len())
            .map(|v| {
                let unbounded = res.is_affected(v);
                VertexReport {
                    vertex: v,
                    distance: if unbounded { None } else { res.distance(v) },
                    path: res.path_to(v),
                    unbounded,
                }
            })
            .collect();
        Self {
            source: res.state().source(),
            negative_cycle: res.negative_cycle().map(<[usize]>::to_vec),
            vertices,
        }
    }
}

/// Render `report` as pretty JSON, or as text through `text`.
pub fn render<T: Serialize>(
    report: &T,
    json: bool,
    text: impl FnOnce(&T) -> String,
) -> Result<String, serde_json::Error> {
    if !json {
        return Ok(text(report));
    }
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

fn join<T: Display>(items: &[T], sep: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{item}");
    }
    out
}

/// Dijkstra output: all distances first, then all roads.
pub fn dijkstra_text<W: Display>(report: &GraphReport<W>) -> String {
    let mut out = String::new();
    let s = report.source;
    for v in &report.vertices {
        let _ = match &v.distance {
            Some(d) => writeln!(out, "Distance from {s} to {} is: {d}", v.vertex),
            None => writeln!(out, "Distance from {s} to {} is: INF", v.vertex),
        };
    }
    for v in &report.vertices {
        let _ = match &v.path {
            Some(p) => writeln!(out, "Shortest road from {s} to {} is: {}", v.vertex, join(p, " ")),
            None => writeln!(out, "Shortest road from {s} to {} is: Unreachable", v.vertex),
        };
    }
    out
}

/// Bellman-Ford output: an optional cycle warning, then one line per vertex.
pub fn bellman_ford_text<W: Display>(report: &GraphReport<W>) -> String {
    let mut out = String::new();
    if let Some(cycle) = &report.negative_cycle {
        let _ = writeln!(
            out,
            "Warning: negative-weight cycle reachable from source {}",
            report.source
        );
        let _ = match cycle.first() {
            Some(first) => writeln!(out, "Cycle: {} -> {first}", join(cycle, " -> ")),
            None => writeln!(out, "Cycle: unknown"),
        };
    }
    for v in &report.vertices {
        let dist = match (&v.distance, v.unbounded) {
            (_, true) => "-INF".to_string(),
            (Some(d), false) => d.to_string(),
            (None, false) => "INF".to_string(),
        };
        let path = v
            .path
            .as_deref()
            .map_or_else(|| "Unreachable".to_string(), |p| join(p, " -> "));
        let _ = writeln!(out, "Vertex {}: dist = {dist}, path = {path}", v.vertex);
    }
    out
}

/// Outcome of a one-to-one A* search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstarReport {
    pub source: usize,
    pub goal: usize,
    pub distance: Option<f64>,
    pub path: Option<Vec<usize>>,
}

impl AstarReport {
    pub fn new(source: usize, goal: usize, res: AstarResult<f64>) -> Self {
        let distance = res.found.then_some(res.distance);
        Self {
            source,
            goal,
            distance,
            path: res.into_path(),
        }
    }
}

impl fmt::Display for AstarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.distance, &self.path) {
            (Some(d), Some(p)) => {
                writeln!(f, "Shortest distance from {} to {} = {d:.3}", self.source, self.goal)?;
                writeln!(f, "Path: {}", join(p, " -> "))
            }
            _ => writeln!(f, "No path found from {} to {}", self.source, self.goal),
        }
    }
}

/// Outcome of a Lee search on a maze.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeeReport {
    pub start: Coord,
    pub goal: Option<Coord>,
    pub distance: Option<i32>,
    pub path: Option<Vec<Coord>>,
    pub reached: usize,
    /// Step counts per cell, `-1` where unvisited; only for floods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_rows: Option<Vec<Vec<i32>>>,
}

impl LeeReport {
    pub fn new(res: &LeeResult, goal: Option<Coord>, flood: bool) -> Self {
        Self {
            start: res.start(),
            goal,
            distance: goal.and_then(|g| res.dist_at(g)),
            path: goal.and_then(|g| res.path_to(g)),
            reached: res.reached(),
            dist_rows: flood.then(|| res.dist_rows()),
        }
    }
}

/// Lee output. Blocked cells of `grid` show as `#` in the distance map,
/// free but unvisited cells as `.`.
pub fn lee_text(report: &LeeReport, grid: &Grid) -> String {
    let mut out = String::new();
    if report.goal.is_some() {
        match (&report.distance, &report.path) {
            (Some(d), Some(p)) => {
                let _ = writeln!(out, "Shortest distance: {d}");
                let _ = writeln!(out, "Path (row, col):");
                for c in p {
                    let _ = writeln!(out, "{c}");
                }
            }
            _ => {
                let _ = writeln!(out, "No path exists.");
            }
        }
    }
    if let Some(rows) = &report.dist_rows {
        let _ = writeln!(out, "Reached {} cells from {}", report.reached, report.start);
        for (r, row) in rows.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, &d)| {
                    let at = Coord::new(r as i32, c as i32);
                    let s = match d {
                        -1 if grid.is_free(at) => ".".to_string(),
                        -1 => "#".to_string(),
                        d => d.to_string(),
                    };
                    format!("{s:>3}")
                })
                .collect();
            let _ = writeln!(out, "{}", line.concat().trim_end());
        }
    }
    out
}
