use crate::datastructures::BitSet;
use crate::graph::BaseGraph;
use fxhash::FxHashMap;

#[cfg(feature = "logging")]
use log::debug;

/// Returns whether the undirected graph contains a cycle.
///
/// Runs an iterative depth-first search from every not yet visited vertex, so each connected
/// component is examined. Reaching an already visited vertex through an edge other than the
/// one leading back to the parent closes a cycle.
pub fn has_cycle<G: BaseGraph>(graph: &G) -> bool {
    // a simple cycle needs at least three edges
    if graph.size() < 3 {
        return false;
    }

    let vertices = graph.sorted_vertices();
    let position: FxHashMap<&G::Id, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (*v, i))
        .collect();
    let mut visited = BitSet::new(vertices.len());
    let mut stack: Vec<(usize, Option<usize>)> = Vec::with_capacity(vertices.len());

    for root in 0..vertices.len() {
        if visited[root] {
            continue;
        }
        visited.set_bit(root);
        stack.push((root, None));
        while let Some((v, parent)) = stack.pop() {
            for (x, _) in graph.neighborhood(vertices[v]) {
                let u = match position.get(x) {
                    Some(u) => *u,
                    None => continue,
                };
                if Some(u) == parent {
                    continue;
                }
                if visited[u] {
                    #[cfg(feature = "logging")]
                    debug!(
                        "cycle closed by edge ({:?}, {:?})",
                        vertices[v], vertices[u]
                    );
                    return true;
                }
                visited.set_bit(u);
                stack.push((u, Some(v)));
            }
        }
        if visited.full() {
            break;
        }
    }
    false
}
