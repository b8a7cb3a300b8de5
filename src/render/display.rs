use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use super::*;
use crate::{algo::*, ops::*, repr::*, *};

const TRACE_SEPARATOR: &str = " → ";

/// Writes graphs and traversals to a [`RenderSink`].
///
/// All methods fail with [`GraphError::Render`] if the sink fails; traces additionally fail
/// with [`GraphError::VertexNotFound`] (before writing anything) if the start vertex is missing.
pub trait GraphDisplay {
    type V;

    /// Writes a banner depending on the kind of the graph followed by its adjacency list
    fn display<S: RenderSink>(&self, sink: &mut S) -> Result<()>;

    /// Writes the number of vertices/edges, degree bounds, radius, diameter, girth,
    /// circumference and whether the graph is connected.
    ///
    /// Computing the circumference is exponential; avoid this on large graphs.
    fn display_properties<S: RenderSink>(&self, sink: &mut S) -> Result<()>;

    /// Runs a BFS from `start` writing each level, the BFS tree and a summary.
    /// Returns the vertices in BFS order.
    fn bfs_trace<S: RenderSink>(&self, start: &Self::V, sink: &mut S) -> Result<Vec<Self::V>>;

    /// Runs a DFS from `start` writing discovery/finish events with timestamps, the DFS tree
    /// and a summary. Returns the vertices in DFS discovery order.
    fn dfs_trace<S: RenderSink>(&self, start: &Self::V, sink: &mut S) -> Result<Vec<Self::V>>;
}

impl<V: Vertex + Display> GraphDisplay for Graph<V> {
    type V = V;

    fn display<S: RenderSink>(&self, sink: &mut S) -> Result<()> {
        let kind = self.kind();
        match kind {
            GraphKind::Null => {
                sink.bold("Null Graph with ", Style::BrightYellow)?;
                sink.styled(&self.number_of_vertices(), Style::BrightBlue)?;
                sink.styled(" vertices and 0 edges\n", Style::BrightYellow)?;
                write_vertex_list(self, sink)?;
                return Ok(());
            }
            GraphKind::Trivial => {
                sink.bold("Trivial Graph with 1 vertex and 0 edges\n", Style::BrightYellow)?;
                if let Some(u) = self.vertices().next() {
                    sink.bold("Vertex: ", Style::BrightMagenta)?;
                    sink.styled(u, Style::BrightBlue)?;
                    sink.newline()?;
                }
                return Ok(());
            }
            GraphKind::Undirected => sink.bold("Undirected Graph:\n", Style::BrightYellow)?,
            GraphKind::Directed => sink.bold("Directed Graph:\n", Style::BrightGreen)?,
            GraphKind::Connected => {
                write_flag_banner(sink, "Connected Graph (Connected: ", self.is_connected(), Style::BrightCyan)?
            }
            GraphKind::Disconnected => write_flag_banner(
                sink,
                "Disconnected Graph (Connected: ",
                self.is_connected(),
                Style::BrightMagenta,
            )?,
            GraphKind::Complete => {
                sink.bold("Complete Graph K", Style::BrightWhite)?;
                sink.bold(&self.number_of_vertices(), Style::Green)?;
                sink.bold(" (All vertices connected):\n", Style::BrightWhite)?;
            }
            GraphKind::Cyclic { .. } => {
                write_flag_banner(sink, "Cyclic Graph (Has Cycle: ", self.has_cycle(), Style::BrightMagenta)?
            }
            GraphKind::DirectedAcyclic => {
                sink.bold("Directed Acyclic Graph (DAG):\n", Style::BrightGreen)?
            }
            GraphKind::Bipartite => write_flag_banner(
                sink,
                "Bipartite Graph (Is Bipartite: ",
                self.is_bipartite(),
                Style::BrightCyan,
            )?,
            GraphKind::Weighted { .. } => sink.bold("Weighted Graph:\n", Style::BrightMagenta)?,
            GraphKind::Custom { .. } => {}
        }

        write_adjacency_list(self, sink)
    }

    fn display_properties<S: RenderSink>(&self, sink: &mut S) -> Result<()> {
        sink.bold("\n=== Graph Properties ===\n", Style::BrightWhite)?;

        sink.bold("Number of Vertices: ", Style::BrightWhite)?;
        sink.styled(&format_args!("{}\n", self.number_of_vertices()), Style::BrightBlue)?;

        sink.bold("Number of Edges: ", Style::BrightWhite)?;
        sink.styled(&format_args!("{}\n", self.number_of_edges()), Style::BrightBlue)?;

        if !self.is_empty() {
            sink.bold("Minimum Degree (Min vertex connections): ", Style::BrightWhite)?;
            sink.styled(&format_args!("{}\n", self.min_degree()), Style::BrightCyan)?;

            sink.bold("Maximum Degree (Max vertex connections): ", Style::BrightWhite)?;
            sink.styled(&format_args!("{}\n", self.max_degree()), Style::BrightCyan)?;

            sink.bold("Graph Radius (Min eccentricity): ", Style::BrightWhite)?;
            write_distance_metric(sink, self.radius())?;

            sink.bold("Graph Diameter (Max shortest path): ", Style::BrightWhite)?;
            write_distance_metric(sink, self.diameter())?;

            sink.bold("Girth (Shortest cycle): ", Style::BrightWhite)?;
            write_cycle_metric(sink, self.girth())?;

            sink.bold("Circumference (Longest cycle): ", Style::BrightWhite)?;
            write_cycle_metric(sink, self.circumference())?;
        }

        sink.bold("Connected: ", Style::BrightWhite)?;
        if self.is_connected() {
            sink.styled("Yes\n", Style::BrightGreen)?;
        } else {
            sink.styled("No\n", Style::BrightRed)?;
        }

        sink.bold("========================\n", Style::BrightWhite)?;
        sink.newline()?;
        Ok(())
    }

    fn bfs_trace<S: RenderSink>(&self, start: &V, sink: &mut S) -> Result<Vec<V>> {
        let items = self.bfs_search(start)?.collect_vec();
        debug!(start = ?start, reached = items.len(), "bfs trace");

        write_trace_header(sink, "║   BREADTH-FIRST SEARCH TRAVERSAL       ║\n", start)?;

        for (level, chunk) in &items.iter().chunk_by(|item| item.level) {
            sink.bold(&format_args!("Level {level}: "), Style::BrightYellow)?;
            for (i, item) in chunk.enumerate() {
                if i > 0 {
                    sink.styled(TRACE_SEPARATOR, Style::BrightWhite)?;
                }
                write_bracketed(sink, item.vertex, Style::BrightWhite)?;
            }
            sink.newline()?;
        }

        let tree = TraversalTree::from_bfs(items.iter().copied());
        sink.newline()?;
        sink.bold("BFS Tree Structure:\n", Style::BrightGreen)?;
        sink.styled("───────────────────\n", Style::BrightGreen)?;
        write_tree(sink, &tree, |level| format!(" (L{level})\n"))?;

        write_trace_summary(sink, tree.order(), self.number_of_vertices())?;
        Ok(tree.into_order())
    }

    fn dfs_trace<S: RenderSink>(&self, start: &V, sink: &mut S) -> Result<Vec<V>> {
        let events = self.dfs_search(start)?.collect_vec();
        debug!(start = ?start, events = events.len(), "dfs trace");

        write_trace_header(sink, "║   DEPTH-FIRST SEARCH TRAVERSAL         ║\n", start)?;

        let mut discovered: FxHashSet<&V> = FxHashSet::default();
        for event in &events {
            match *event {
                DfsEvent::Discover { vertex, time, .. } => {
                    discovered.insert(vertex);

                    sink.styled("  Discovered: ", Style::BrightWhite)?;
                    write_bracketed(sink, vertex, Style::BrightWhite)?;
                    sink.styled(" at time ", Style::BrightWhite)?;
                    sink.styled(&time, Style::BrightCyan)?;

                    sink.styled(" → Exploring: ", Style::BrightYellow)?;
                    for (i, v) in self.neighbors_of(vertex).enumerate() {
                        if i > 0 {
                            sink.styled(", ", Style::BrightWhite)?;
                        }
                        let style = if discovered.contains(v) {
                            Style::BrightRed
                        } else {
                            Style::BrightGreen
                        };
                        sink.styled(v, style)?;
                    }
                    sink.newline()?;
                }
                DfsEvent::Finish { vertex, time } => {
                    sink.styled("  Finished:   ", Style::BrightWhite)?;
                    write_bracketed(sink, vertex, Style::BrightWhite)?;
                    sink.styled(" at time ", Style::BrightWhite)?;
                    sink.styled(&format_args!("{time}\n"), Style::BrightCyan)?;
                }
            }
        }

        let tree = TraversalTree::from_dfs(events.iter().copied());
        sink.newline()?;
        sink.bold("DFS Tree Structure:\n", Style::BrightGreen)?;
        sink.styled("───────────────────\n", Style::BrightGreen)?;
        write_tree(sink, &tree, |depth| format!(" (depth {depth})\n"))?;

        write_trace_summary(sink, tree.order(), self.number_of_vertices())?;
        Ok(tree.into_order())
    }
}

/// Writes `banner`, a colored Yes/No and the closing `"):"`
fn write_flag_banner<S: RenderSink>(
    sink: &mut S,
    banner: &str,
    flag: bool,
    style: Style,
) -> io::Result<()> {
    sink.bold(banner, style)?;
    if flag {
        sink.styled("Yes", Style::BrightGreen)?;
    } else {
        sink.styled("No", Style::BrightRed)?;
    }
    sink.bold("):\n", style)
}

fn write_vertex_list<V, S>(graph: &Graph<V>, sink: &mut S) -> io::Result<()>
where
    V: Vertex + Display,
    S: RenderSink,
{
    if graph.is_empty() {
        return Ok(());
    }

    sink.bold("Vertices: ", Style::BrightMagenta)?;
    for (i, u) in graph.vertices().enumerate() {
        if i > 0 {
            sink.plain(", ")?;
        }
        sink.styled(u, Style::BrightCyan)?;
    }
    sink.newline()
}

fn write_adjacency_list<V, S>(graph: &Graph<V>, sink: &mut S) -> Result<()>
where
    V: Vertex + Display,
    S: RenderSink,
{
    if graph.is_empty() {
        sink.bold("  Empty Graph\n", Style::BrightWhite)?;
        return Ok(());
    }

    let directed = graph.is_directed();
    let weighted = graph.is_weighted();

    sink.bold("Graph (Adjacency List", Style::BrightWhite)?;
    if directed {
        sink.styled(" for directed", Style::BrightGreen)?;
    }
    if weighted {
        sink.styled(" & weighted", Style::Yellow)?;
    }
    sink.bold(" graph):\n", Style::BrightWhite)?;
    sink.styled("-----------------------\n", Style::BrightWhite)?;

    let arrow_style = if directed {
        Style::BrightGreen
    } else {
        Style::BrightYellow
    };

    for u in graph.vertices() {
        sink.plain("  ")?;
        sink.styled(u, Style::Blue)?;

        let adjacency = graph.adjacency_of(u);
        if adjacency.is_empty() {
            sink.styled(" --> ", arrow_style)?;
            sink.styled("∅\n", Style::BrightRed)?;
            continue;
        }

        sink.styled(if directed { " -->" } else { " ---" }, arrow_style)?;
        for (i, (v, w)) in adjacency.iter().enumerate() {
            if i > 0 {
                sink.styled(",", Style::BrightWhite)?;
            }
            if weighted {
                sink.styled(" (", Style::Yellow)?;
                sink.styled(w, Style::Cyan)?;
                sink.styled(")---> ", Style::Yellow)?;
            } else {
                sink.plain(" ")?;
            }
            sink.styled(v, Style::Blue)?;
        }
        sink.newline()?;
    }

    Ok(())
}

fn write_distance_metric<S: RenderSink>(sink: &mut S, value: Option<NumVertices>) -> io::Result<()> {
    match value {
        Some(x) => sink.styled(&format_args!("{x}\n"), Style::BrightGreen),
        None => sink.styled("Undefined (disconnected)\n", Style::BrightRed),
    }
}

fn write_cycle_metric<S: RenderSink>(sink: &mut S, value: Option<NumVertices>) -> io::Result<()> {
    match value {
        Some(x) => sink.styled(&format_args!("{x}\n"), Style::BrightMagenta),
        None => sink.styled("No cycle (Acyclic)\n", Style::BrightYellow),
    }
}

fn write_bracketed<S: RenderSink, V: Display>(sink: &mut S, u: &V, brackets: Style) -> io::Result<()> {
    sink.styled("[", brackets)?;
    sink.styled(u, Style::BrightBlue)?;
    sink.styled("]", brackets)
}

fn write_trace_header<S: RenderSink, V: Display>(sink: &mut S, title: &str, start: &V) -> io::Result<()> {
    sink.bold("\n╔════════════════════════════════════════╗\n", Style::BrightBlack)?;
    sink.bold(title, Style::BrightBlack)?;
    sink.bold("╚════════════════════════════════════════╝\n", Style::BrightBlack)?;

    sink.bold("Starting from vertex: ", Style::BrightWhite)?;
    sink.styled(start, Style::BrightBlue)?;
    sink.plain("\n\n")
}

fn write_trace_summary<S: RenderSink, V: Display>(
    sink: &mut S,
    order: &[V],
    number_of_vertices: NumVertices,
) -> io::Result<()> {
    sink.newline()?;
    sink.bold("Traversal Order: ", Style::BrightWhite)?;
    for (i, u) in order.iter().enumerate() {
        if i > 0 {
            sink.styled(TRACE_SEPARATOR, Style::BrightYellow)?;
        }
        sink.styled(u, Style::BrightBlue)?;
    }
    sink.newline()?;

    sink.bold("Vertices Visited: ", Style::BrightWhite)?;
    sink.styled(
        &format_args!("{}/{number_of_vertices}\n\n", order.len()),
        Style::BrightCyan,
    )
}

/// Writes the tree top-down with children in ascending order.
/// Uses an explicit stack, so arbitrarily deep trees can be written.
fn write_tree<S, V, F>(sink: &mut S, tree: &TraversalTree<V>, label: F) -> io::Result<()>
where
    S: RenderSink,
    V: Vertex + Display,
    F: Fn(NumVertices) -> String,
{
    let Some(root) = tree.root() else {
        return Ok(());
    };

    let mut stack = vec![(root, String::new(), true)];
    while let Some((u, prefix, is_last)) = stack.pop() {
        sink.styled(&prefix, Style::BrightWhite)?;
        sink.styled(if is_last { "└── " } else { "├── " }, Style::BrightGreen)?;
        write_bracketed(sink, u, Style::Yellow)?;
        sink.styled(&label(tree.depth_of(u).unwrap_or_default()), Style::BrightYellow)?;

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let children = tree.children_of(u).iter().sorted().collect_vec();
        let last = children.len().saturating_sub(1);
        for (i, v) in children.into_iter().enumerate().rev() {
            stack.push((v, child_prefix.clone(), i == last));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut ConsoleWriter<Vec<u8>>) -> Result<()>,
    {
        let mut sink = ConsoleWriter::new(Vec::new());
        f(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    fn diamond() -> Graph<u32> {
        Graph::from_edges(GraphKind::Undirected, [(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn null_banner() {
        let mut g: Graph<u32> = Graph::null();
        g.add_vertices([3, 1]).unwrap();
        assert_eq!(
            render(|s| g.display(s)),
            "Null Graph with 2 vertices and 0 edges\nVertices: 1, 3\n"
        );
        assert_eq!(
            render(|s| Graph::<u32>::null().display(s)),
            "Null Graph with 0 vertices and 0 edges\n"
        );
    }

    #[test]
    fn trivial_banner() {
        let g = Graph::trivial("x");
        assert_eq!(
            render(|s| g.display(s)),
            "Trivial Graph with 1 vertex and 0 edges\nVertex: x\n"
        );
    }

    #[test]
    fn undirected_listing() {
        let mut g: Graph<u32> = Graph::undirected();
        g.add_edges([(1, 2), (1, 3)]).unwrap();
        g.add_vertex(4).unwrap();
        assert_eq!(
            render(|s| g.display(s)),
            "Undirected Graph:\n\
             Graph (Adjacency List graph):\n\
             -----------------------\n  \
             1 --- 2, 3\n  \
             2 --- 1\n  \
             3 --- 1\n  \
             4 --> ∅\n"
        );
    }

    #[test]
    fn weighted_listing() {
        let g: Graph<u32> =
            Graph::from_edges(GraphKind::Weighted { directed: true }, [(1, 2, 5), (1, 3, 7)]).unwrap();
        assert_eq!(
            render(|s| g.display(s)),
            "Weighted Graph:\n\
             Graph (Adjacency List for directed & weighted graph):\n\
             -----------------------\n  \
             1 --> (5)---> 2, (7)---> 3\n  \
             2 --> ∅\n  \
             3 --> ∅\n"
        );
    }

    #[test]
    fn flag_banners() {
        let mut complete: Graph<u32> = Graph::complete();
        complete.add_vertices(0..4).unwrap();
        assert!(render(|s| complete.display(s)).starts_with("Complete Graph K4 (All vertices connected):\n"));

        let mut bipartite: Graph<u32> = Graph::bipartite();
        bipartite.connect_cycle(0..4).unwrap();
        assert!(render(|s| bipartite.display(s)).starts_with("Bipartite Graph (Is Bipartite: Yes):\n"));

        let mut cyclic: Graph<u32> = Graph::cyclic(false);
        cyclic.connect_path(0..3).unwrap();
        assert!(render(|s| cyclic.display(s)).starts_with("Cyclic Graph (Has Cycle: No):\n"));

        let mut disconnected: Graph<u32> = Graph::disconnected();
        disconnected.add_vertices([1, 2]).unwrap();
        assert!(
            render(|s| disconnected.display(s))
                .starts_with("Disconnected Graph (Connected: No):\n")
        );

        let connected: Graph<u32> = Graph::connected();
        assert_eq!(
            render(|s| connected.display(s)),
            "Connected Graph (Connected: Yes):\n  Empty Graph\n"
        );

        let dag: Graph<u32> = Graph::directed_acyclic();
        assert!(render(|s| dag.display(s)).starts_with("Directed Acyclic Graph (DAG):\n"));
    }

    #[test]
    fn properties() {
        let out = render(|s| diamond().display_properties(s));
        assert_eq!(
            out,
            "\n=== Graph Properties ===\n\
             Number of Vertices: 4\n\
             Number of Edges: 4\n\
             Minimum Degree (Min vertex connections): 2\n\
             Maximum Degree (Max vertex connections): 2\n\
             Graph Radius (Min eccentricity): 2\n\
             Graph Diameter (Max shortest path): 2\n\
             Girth (Shortest cycle): 4\n\
             Circumference (Longest cycle): 4\n\
             Connected: Yes\n\
             ========================\n\n"
        );

        let mut forest: Graph<u32> = Graph::undirected();
        forest.add_edges([(1, 2), (3, 4)]).unwrap();
        let out = render(|s| forest.display_properties(s));
        assert!(out.contains("Graph Radius (Min eccentricity): Undefined (disconnected)\n"));
        assert!(out.contains("Girth (Shortest cycle): No cycle (Acyclic)\n"));
        assert!(out.contains("Connected: No\n"));

        let empty = render(|s| Graph::<u32>::undirected().display_properties(s));
        assert!(!empty.contains("Degree"));
        assert!(empty.contains("Connected: Yes\n"));
    }

    #[test]
    fn bfs_trace() {
        let g = diamond();
        let mut order = Vec::new();
        let out = render(|s| {
            order = g.bfs_trace(&1, s)?;
            Ok(())
        });
        assert_eq!(order, vec![1, 2, 3, 4]);
        assert!(out.contains("Starting from vertex: 1\n\n"));
        assert!(out.contains("Level 0: [1]\nLevel 1: [2] → [3]\nLevel 2: [4]\n"));
        assert!(out.contains(
            "BFS Tree Structure:\n───────────────────\n\
             └── [1] (L0)\n    \
             ├── [2] (L1)\n    \
             │   └── [4] (L2)\n    \
             └── [3] (L1)\n"
        ));
        assert!(out.ends_with("Traversal Order: 1 → 2 → 3 → 4\nVertices Visited: 4/4\n\n"));
    }

    #[test]
    fn dfs_trace() {
        let g: Graph<u32> = Graph::from_edges(GraphKind::Undirected, [(1, 2), (1, 3)]).unwrap();
        let mut order = Vec::new();
        let out = render(|s| {
            order = g.dfs_trace(&1, s)?;
            Ok(())
        });
        assert_eq!(order, vec![1, 2, 3]);
        assert!(out.contains(
            "  Discovered: [1] at time 1 → Exploring: 2, 3\n\
             \x20 Discovered: [2] at time 2 → Exploring: 1\n\
             \x20 Finished:   [2] at time 3\n\
             \x20 Discovered: [3] at time 4 → Exploring: 1\n\
             \x20 Finished:   [3] at time 5\n\
             \x20 Finished:   [1] at time 6\n"
        ));
        assert!(out.contains(
            "└── [1] (depth 0)\n    ├── [2] (depth 1)\n    └── [3] (depth 1)\n"
        ));
        assert!(out.ends_with("Vertices Visited: 3/3\n\n"));
    }

    #[test]
    fn trace_of_missing_vertex_writes_nothing() {
        let g = diamond();
        let mut sink = ConsoleWriter::new(Vec::new());
        assert!(g.bfs_trace(&9, &mut sink).unwrap_err().is_not_found());
        assert!(g.dfs_trace(&9, &mut sink).unwrap_err().is_not_found());
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn colored_exploring_marks_discovered() {
        let g: Graph<u32> = Graph::from_edges(GraphKind::Undirected, [(1, 2)]).unwrap();
        let mut sink = ConsoleWriter::new(Vec::new()).colored(true);
        g.dfs_trace(&1, &mut sink).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        // 2 is undiscovered when exploring 1, 1 is discovered when exploring 2
        assert!(out.contains("\x1b[92m2\x1b[0m"));
        assert!(out.contains("\x1b[91m1\x1b[0m"));
    }
}
