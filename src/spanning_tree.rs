use crate::cycle_detection::has_cycle;
use crate::datastructures::DisjointSet;
use crate::error::{GraphError, GraphErrorKind};
use crate::graph::MutableGraph;
use fxhash::FxHashMap;

#[cfg(feature = "logging")]
use log::{debug, info};

/// How Kruskal's algorithm decides whether a candidate edge would close a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanningTreeStrategy {
    /// Track components in a union-find structure. O(E log E) overall.
    DisjointSet,
    /// Insert the edge, run a full cycle detection on the partial tree and undo the insertion
    /// if a cycle appeared. Quadratic, kept as a reference for the union-find variant.
    CycleCheck,
}

impl Default for SpanningTreeStrategy {
    fn default() -> Self {
        Self::DisjointSet
    }
}

/// Builds a minimum spanning tree of `graph` with Kruskal's algorithm.
///
/// The result holds every vertex of `graph` and exactly `order - 1` of its edges. Candidate
/// edges are taken by ascending weight with ties broken by endpoint ids, so the result is
/// deterministic. A disconnected graph has no spanning tree and yields
/// [`GraphErrorKind::Disconnected`]; use [`minimum_spanning_forest`] to accept such input.
pub fn minimum_spanning_tree<G: MutableGraph>(
    graph: &G,
    strategy: SpanningTreeStrategy,
) -> Result<G, GraphError> {
    let (forest, components) = kruskal(graph, strategy)?;
    if components > 1 {
        let msg = format!(
            "Graph with {} vertices splits into {} components, a spanning tree needs {} edges but only {} connect it.",
            graph.order(),
            components,
            graph.order() - 1,
            forest.size()
        );
        return Err(GraphError::new(GraphErrorKind::Disconnected, &msg));
    }
    #[cfg(feature = "logging")]
    info!(
        "spanning tree with {} edges and total weight {:?}",
        forest.size(),
        forest.total_weight()
    );
    Ok(forest)
}

/// Kruskal's algorithm without the connectivity requirement: one minimum spanning tree per
/// connected component.
pub fn minimum_spanning_forest<G: MutableGraph>(
    graph: &G,
    strategy: SpanningTreeStrategy,
) -> Result<G, GraphError> {
    kruskal(graph, strategy).map(|(forest, _)| forest)
}

/// Returns the spanning forest together with its number of connected components.
fn kruskal<G: MutableGraph>(
    graph: &G,
    strategy: SpanningTreeStrategy,
) -> Result<(G, usize), GraphError> {
    let vertices = graph.sorted_vertices();
    let mut forest = G::with_capacity(vertices.len());
    forest.add_nodes(vertices.iter().map(|v| (*v).clone()))?;

    let required_edges = vertices.len().saturating_sub(1);
    let candidates = graph.sorted_edges(false);
    #[cfg(feature = "logging")]
    debug!(
        "kruskal over {} vertices and {} candidate edges using {:?}",
        vertices.len(),
        candidates.len(),
        strategy
    );

    let components = match strategy {
        SpanningTreeStrategy::DisjointSet => {
            let position: FxHashMap<&G::Id, usize> = vertices
                .iter()
                .enumerate()
                .map(|(i, v)| (*v, i))
                .collect();
            let mut components = DisjointSet::new(vertices.len());
            for (u, v, w) in candidates {
                if forest.size() == required_edges {
                    break;
                }
                if let (Some(&a), Some(&b)) = (position.get(u), position.get(v)) {
                    if components.union(a, b) {
                        forest.add_edge(u, v, w)?;
                    }
                }
            }
            components.sets()
        }
        SpanningTreeStrategy::CycleCheck => {
            for (u, v, w) in candidates {
                if forest.size() == required_edges {
                    break;
                }
                forest.add_edge(u, v, w)?;
                if has_cycle(&forest) {
                    forest.remove_edge(u, v)?;
                }
            }
            // every kept edge joined two trees of the forest
            forest.order() - forest.size()
        }
    };
    Ok((forest, components))
}
