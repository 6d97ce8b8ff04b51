use crate::cycle_detection;
use crate::error::{GraphError, GraphErrorKind};
use crate::graph::adjacency_matrix::AdjacencyMatrix;
use crate::graph::base_graph::{BaseGraph, VertexId, Weight};
use crate::graph::mutable_graph::MutableGraph;
use crate::graph::vertex::Vertex;
use crate::spanning_tree::{self, SpanningTreeStrategy};
use fxhash::{FxHashMap, FxHashSet};
use std::fmt::Debug;

#[cfg(feature = "logging")]
use log::debug;

/// Undirected weighted graph keyed by vertex id.
///
/// `vertex_count`, `edge_count` and `total_weight` are kept up to date by every mutation
/// instead of being recomputed on read.
#[derive(Clone, Debug)]
pub struct HashMapGraph<I, W> {
    data: FxHashMap<I, Vertex<I, W>>,
    vertex_count: usize,
    edge_count: usize,
    total_weight: W,
}

fn unknown_vertex<I: Debug>(u: &I) -> GraphError {
    let msg = format!("Vertex {:?} is not in the graph.", u);
    GraphError::new(GraphErrorKind::UnknownVertex, &msg)
}

fn not_adjacent<I: Debug>(u: &I, v: &I) -> GraphError {
    let msg = format!("Vertices {:?} and {:?} are not adjacent.", u, v);
    GraphError::new(GraphErrorKind::NotAdjacent, &msg)
}

// NaN never equals itself, so two NaN entries still count as a matching pair
#[allow(clippy::eq_op)]
fn same_weight<W: Weight>(a: W, b: W) -> bool {
    a == b || (a != a && b != b)
}

fn invariant_violation(msg: &str) -> GraphError {
    GraphError::new(GraphErrorKind::InvariantViolation, msg)
}

impl<I: VertexId, W: Weight> HashMapGraph<I, W> {
    pub fn vertex(&self, u: &I) -> Option<&Vertex<I, W>> {
        self.data.get(u)
    }

    fn vertex_or_err(&self, u: &I) -> Result<&Vertex<I, W>, GraphError> {
        self.data.get(u).ok_or_else(|| unknown_vertex(u))
    }

    /// Both endpoints must exist and share an edge. Yields the current weight.
    fn adjacent_weight(&self, u: &I, v: &I) -> Result<W, GraphError> {
        let first = self.vertex_or_err(u)?;
        self.vertex_or_err(v)?;
        first.weight(v).ok_or_else(|| not_adjacent(u, v))
    }

    pub fn connected_components(&self) -> Vec<FxHashSet<I>> {
        let mut components: Vec<FxHashSet<I>> = Vec::new();
        let mut stack: Vec<&I> = Vec::with_capacity(self.data.len());
        let mut visited: FxHashSet<&I> =
            FxHashSet::with_capacity_and_hasher(self.data.len(), Default::default());

        for u in self.sorted_vertices() {
            if visited.contains(u) {
                continue;
            }
            stack.push(u);
            visited.insert(u);
            let mut component: FxHashSet<I> = FxHashSet::default();
            component.insert(u.clone());
            while let Some(v) = stack.pop() {
                for (x, _) in self.neighborhood(v) {
                    if visited.insert(x) {
                        component.insert(x.clone());
                        stack.push(x);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// Sum of edge weights computed from the adjacency itself rather than the cached counter.
    pub fn recomputed_total_weight(&self) -> W {
        self.edges()
            .into_iter()
            .fold(W::zero(), |acc, (_, _, w)| acc + w)
    }

    /// Checks symmetry, the absence of self-loops and dangling neighbors, and the cached
    /// vertex and edge counts against the adjacency.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.vertex_count != self.data.len() {
            let msg = format!(
                "Vertex count is {} but the graph holds {} vertices.",
                self.vertex_count,
                self.data.len()
            );
            return Err(invariant_violation(&msg));
        }

        let mut degree_sum = 0;
        for (u, vertex) in self.data.iter() {
            if vertex.id() != u {
                let msg = format!("Vertex {:?} is stored under id {:?}.", vertex.id(), u);
                return Err(invariant_violation(&msg));
            }
            for (v, w) in vertex.neighbors() {
                if v == u {
                    let msg = format!("Vertex {:?} neighbors itself.", u);
                    return Err(invariant_violation(&msg));
                }
                match self.data.get(v) {
                    None => {
                        let msg = format!("Vertex {:?} references missing vertex {:?}.", u, v);
                        return Err(invariant_violation(&msg));
                    }
                    Some(other) if !other.weight(u).map_or(false, |x| same_weight(x, w)) => {
                        let msg = format!(
                            "Edge ({:?}, {:?}) has weight {:?} but the reverse is {:?}.",
                            u,
                            v,
                            w,
                            other.weight(u)
                        );
                        return Err(invariant_violation(&msg));
                    }
                    _ => {}
                }
            }
            degree_sum += vertex.degree();
        }

        if degree_sum != 2 * self.edge_count {
            let msg = format!(
                "Edge count is {} but the adjacency holds {} edges.",
                self.edge_count,
                degree_sum / 2
            );
            return Err(invariant_violation(&msg));
        }
        Ok(())
    }

    pub fn to_matrix(&self) -> AdjacencyMatrix<I, W> {
        AdjacencyMatrix::from_graph(self)
    }

    pub fn has_cycle(&self) -> bool {
        cycle_detection::has_cycle(self)
    }

    /// Kruskal's algorithm using the default strategy. Fails with
    /// [`GraphErrorKind::Disconnected`] when no spanning tree exists.
    pub fn minimum_spanning_tree(&self) -> Result<Self, GraphError> {
        spanning_tree::minimum_spanning_tree(self, SpanningTreeStrategy::default())
    }

    pub fn minimum_spanning_tree_with(
        &self,
        strategy: SpanningTreeStrategy,
    ) -> Result<Self, GraphError> {
        spanning_tree::minimum_spanning_tree(self, strategy)
    }

    /// Like [`minimum_spanning_tree`](Self::minimum_spanning_tree), but returns a spanning
    /// tree per connected component instead of failing on disconnected input.
    pub fn minimum_spanning_forest(&self) -> Result<Self, GraphError> {
        spanning_tree::minimum_spanning_forest(self, SpanningTreeStrategy::default())
    }
}

impl<I: VertexId, W: Weight> MutableGraph for HashMapGraph<I, W> {
    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
            vertex_count: 0,
            edge_count: 0,
            total_weight: W::zero(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            vertex_count: 0,
            edge_count: 0,
            total_weight: W::zero(),
        }
    }

    fn add_node(&mut self, u: I) -> Result<(), GraphError> {
        if self.data.contains_key(&u) {
            let msg = format!("Vertex {:?} is already in the graph.", u);
            return Err(GraphError::new(GraphErrorKind::DuplicateVertex, &msg));
        }
        self.data.insert(u.clone(), Vertex::new(u));
        self.vertex_count += 1;
        Ok(())
    }

    fn remove_node(&mut self, u: &I) -> Result<(), GraphError> {
        let vertex = self.data.remove(u).ok_or_else(|| unknown_vertex(u))?;
        let degree = vertex.degree();
        let removed_weight = vertex.incident_weight();
        for v in vertex.into_adjacency().keys() {
            let removed = self
                .data
                .get_mut(v)
                .and_then(|neighbor| neighbor.remove_neighbor(u));
            debug_assert!(removed.is_some());
        }

        self.vertex_count -= 1;
        self.edge_count -= degree;
        self.total_weight = self.total_weight - removed_weight;
        #[cfg(feature = "logging")]
        debug!(
            "removed vertex {:?} with {} incident edges of weight {:?}",
            u, degree, removed_weight
        );
        Ok(())
    }

    fn add_edge(&mut self, u: &I, v: &I, weight: W) -> Result<(), GraphError> {
        let first = self.vertex_or_err(u)?;
        self.vertex_or_err(v)?;
        if u == v {
            let msg = format!("Vertex {:?} cannot be connected to itself.", u);
            return Err(GraphError::new(GraphErrorKind::SelfLoop, &msg));
        }
        if first.has_neighbor(v) {
            let msg = format!("Vertices {:?} and {:?} are already adjacent.", u, v);
            return Err(GraphError::new(GraphErrorKind::DuplicateEdge, &msg));
        }

        for (a, b) in [(u, v), (v, u)].iter() {
            let added = self
                .data
                .get_mut(*a)
                .map_or(false, |x| x.add_neighbor((*b).clone(), weight));
            debug_assert!(added);
        }
        self.edge_count += 1;
        self.total_weight = self.total_weight + weight;
        Ok(())
    }

    fn remove_edge(&mut self, u: &I, v: &I) -> Result<W, GraphError> {
        let weight = self.adjacent_weight(u, v)?;
        for (a, b) in [(u, v), (v, u)].iter() {
            if let Some(x) = self.data.get_mut(*a) {
                x.remove_neighbor(*b);
            }
        }
        self.edge_count -= 1;
        self.total_weight = self.total_weight - weight;
        Ok(weight)
    }

    fn update_edge(&mut self, u: &I, v: &I, weight: W) -> Result<W, GraphError> {
        let old_weight = self.adjacent_weight(u, v)?;
        for (a, b) in [(u, v), (v, u)].iter() {
            if let Some(x) = self.data.get_mut(*a) {
                x.update_weight(*b, weight);
            }
        }
        self.total_weight = self.total_weight - old_weight + weight;
        Ok(old_weight)
    }
}

impl<I: VertexId, W: Weight> BaseGraph for HashMapGraph<I, W> {
    type Id = I;
    type Weight = W;

    fn order(&self) -> usize {
        self.vertex_count
    }

    fn size(&self) -> usize {
        self.edge_count
    }

    fn total_weight(&self) -> W {
        self.total_weight
    }

    fn has_vertex(&self, u: &I) -> bool {
        self.data.contains_key(u)
    }

    fn has_edge(&self, u: &I, v: &I) -> bool {
        self.data.get(u).map_or(false, |x| x.has_neighbor(v))
    }

    fn weight(&self, u: &I, v: &I) -> Option<W> {
        self.data.get(u).and_then(|x| x.weight(v))
    }

    fn degree(&self, u: &I) -> Option<usize> {
        self.data.get(u).map(|x| x.degree())
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &I> + '_> {
        Box::new(self.data.keys())
    }

    fn neighborhood(&self, u: &I) -> Box<dyn Iterator<Item = (&I, W)> + '_> {
        match self.data.get(u) {
            Some(x) => Box::new(x.neighbors()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<I: VertexId, W: Weight> Default for HashMapGraph<I, W> {
    fn default() -> Self {
        MutableGraph::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphErrorKind;
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::hash_map_graph::HashMapGraph;
    use crate::graph::mutable_graph::MutableGraph;
    use rand::prelude::StdRng;
    use rand::{Rng, SeedableRng};

    fn triangle() -> HashMapGraph<&'static str, i64> {
        let mut graph = HashMapGraph::new();
        graph.add_nodes(vec!["a", "b", "c"]).unwrap();
        graph.add_edge(&"a", &"b", 5).unwrap();
        graph.add_edge(&"a", &"c", 10).unwrap();
        graph.add_edge(&"b", &"c", 15).unwrap();
        graph
    }

    fn assert_consistent<W: crate::graph::base_graph::Weight>(graph: &HashMapGraph<u32, W>) {
        graph.validate().unwrap();
        assert_eq!(graph.total_weight(), graph.recomputed_total_weight());
        assert_eq!(graph.size(), graph.edges().len());
        assert_eq!(graph.order(), graph.vertices().count());
    }

    #[test]
    fn test_order() {
        let mut graph: HashMapGraph<usize, f64> = HashMapGraph::new();
        assert_eq!(graph.order(), 0);

        graph.add_node(0).unwrap();
        let err = graph.add_node(0).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::DuplicateVertex);
        assert_eq!(graph.order(), 1);

        graph.remove_node(&0).unwrap();
        assert_eq!(graph.order(), 0);
        let err = graph.remove_node(&0).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::UnknownVertex);
        assert_eq!(graph.order(), 0);
    }

    #[test]
    fn test_summary_counters() {
        let mut graph = triangle();
        assert_eq!((graph.total_weight(), graph.size(), graph.order()), (30, 3, 3));

        assert_eq!(graph.remove_edge(&"a", &"b").unwrap(), 5);
        assert_eq!((graph.total_weight(), graph.size(), graph.order()), (25, 2, 3));

        graph.add_edge(&"a", &"b", 5).unwrap();
        assert_eq!((graph.total_weight(), graph.size(), graph.order()), (30, 3, 3));

        graph.remove_node(&"b").unwrap();
        assert_eq!((graph.total_weight(), graph.size(), graph.order()), (10, 1, 2));
        assert!(!graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"c", &"b"));
        assert_eq!(graph.weight(&"c", &"a"), Some(10));
        graph.validate().unwrap();
    }

    #[test]
    fn add_edge_failures_leave_graph_untouched() {
        let mut graph = triangle();
        graph.add_node("d").unwrap();

        let kind = |r: Result<(), crate::error::GraphError>| r.unwrap_err().kind();
        assert_eq!(kind(graph.add_edge(&"a", &"x", 1)), GraphErrorKind::UnknownVertex);
        assert_eq!(kind(graph.add_edge(&"x", &"a", 1)), GraphErrorKind::UnknownVertex);
        assert_eq!(kind(graph.add_edge(&"d", &"d", 1)), GraphErrorKind::SelfLoop);
        assert_eq!(kind(graph.add_edge(&"b", &"a", 1)), GraphErrorKind::DuplicateEdge);

        assert_eq!((graph.total_weight(), graph.size(), graph.order()), (30, 3, 4));
        assert_eq!(graph.weight(&"a", &"b"), Some(5));
        assert_eq!(graph.degree(&"d"), Some(0));
        graph.validate().unwrap();
    }

    #[test]
    fn remove_and_update_require_adjacency() {
        let mut graph = triangle();
        graph.add_node("d").unwrap();

        let err = graph.remove_edge(&"a", &"d").unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::NotAdjacent);
        let err = graph.update_edge(&"d", &"c", 4).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::NotAdjacent);
        let err = graph.update_edge(&"a", &"z", 4).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::UnknownVertex);
        let err = graph.remove_edge(&"z", &"a").unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::UnknownVertex);

        assert_eq!((graph.total_weight(), graph.size(), graph.order()), (30, 3, 4));
    }

    #[test]
    fn update_edge_adjusts_total_weight_by_delta() {
        let mut graph = triangle();
        let size = graph.size();

        assert_eq!(graph.update_edge(&"c", &"a", 3).unwrap(), 10);
        assert_eq!(graph.total_weight(), 30 - 10 + 3);
        assert_eq!(graph.size(), size);
        assert_eq!(graph.weight(&"a", &"c"), Some(3));
        assert_eq!(graph.weight(&"c", &"a"), Some(3));

        assert_eq!(graph.update_edge(&"a", &"b", 0).unwrap(), 5);
        assert_eq!(graph.total_weight(), 18);
        assert!(graph.has_edge(&"a", &"b"));
        graph.validate().unwrap();
    }

    #[test]
    fn cascading_removal() {
        let mut graph: HashMapGraph<u32, i32> = HashMapGraph::new();
        graph.add_nodes(0..6).unwrap();
        for (v, w) in [(1, 4), (2, -3), (3, 8), (4, 1)].iter() {
            graph.add_edge(&0, v, *w).unwrap();
        }
        graph.add_edge(&1, &2, 6).unwrap();
        graph.add_edge(&4, &5, 2).unwrap();

        let size = graph.size();
        let total = graph.total_weight();
        let degree = graph.degree(&0).unwrap();
        let incident: i32 = graph.neighborhood(&0).map(|(_, w)| w).sum();

        graph.remove_node(&0).unwrap();
        assert_eq!(graph.size(), size - degree);
        assert_eq!(graph.total_weight(), total - incident);
        assert_eq!(graph.total_weight(), 8);
        assert_eq!(graph.order(), 5);
        assert!(graph.vertices().all(|v| !graph.has_edge(v, &0)));
        assert_consistent(&graph);
    }

    #[test]
    fn counters_are_per_instance() {
        let first = triangle();
        let mut second: HashMapGraph<&str, i64> = HashMapGraph::new();
        second.add_node("x").unwrap();

        assert_eq!((first.total_weight(), first.size(), first.order()), (30, 3, 3));
        assert_eq!((second.total_weight(), second.size(), second.order()), (0, 0, 1));
    }

    #[test]
    fn edges_are_listed_once() {
        let graph = triangle();
        let edges = graph.sorted_edges(false);
        assert_eq!(
            edges,
            vec![(&"a", &"b", 5), (&"a", &"c", 10), (&"b", &"c", 15)]
        );
        let reversed: Vec<_> = graph.sorted_edges(true).into_iter().map(|e| e.2).collect();
        assert_eq!(reversed, vec![15, 10, 5]);
    }

    #[test]
    fn connected_components() {
        let mut graph: HashMapGraph<u32, f64> = HashMapGraph::with_capacity(7);
        graph.add_nodes(0..7).unwrap();
        graph.add_edge(&0, &1, 1.0).unwrap();
        graph.add_edge(&1, &2, 1.0).unwrap();
        graph.add_edge(&3, &4, 1.0).unwrap();

        let components = graph.connected_components();
        assert_eq!(components.len(), 4);
        assert!(components[0].contains(&0) && components[0].contains(&2));
        assert_eq!(components[1].len(), 2);
        assert!(!graph.is_connected());

        graph.add_edge(&2, &3, 1.0).unwrap();
        graph.add_edge(&4, &5, 1.0).unwrap();
        graph.add_edge(&0, &6, 1.0).unwrap();
        assert!(graph.is_connected());
        assert!(HashMapGraph::<u32, f64>::new().is_connected());
    }

    #[test]
    fn random_mutations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(1337 * 42 * 777);
        let mut graph: HashMapGraph<u32, i64> = HashMapGraph::new();

        for _ in 0..2_000 {
            let u = rng.gen_range(0..24);
            let v = rng.gen_range(0..24);
            let w = rng.gen_range(-50..50);
            let before = (graph.order(), graph.size(), graph.total_weight());
            let result = match rng.gen_range(0..10) {
                0 | 1 => graph.add_node(u),
                2 => graph.remove_node(&u),
                3..=6 => graph.add_edge(&u, &v, w),
                7 => graph.remove_edge(&u, &v).map(|_| ()),
                _ => graph.update_edge(&u, &v, w).map(|_| ()),
            };
            if result.is_err() {
                assert_eq!(before, (graph.order(), graph.size(), graph.total_weight()));
            }
            assert_consistent(&graph);
        }
    }

    #[test]
    fn nan_weights_are_symmetric() {
        let mut graph: HashMapGraph<u32, f64> = HashMapGraph::new();
        graph.add_nodes(0..3).unwrap();
        graph.add_edge(&0, &1, f64::NAN).unwrap();
        graph.add_edge(&1, &2, 2.0).unwrap();
        graph.validate().unwrap();

        let mut broken = graph.clone();
        broken.data.get_mut(&1).unwrap().update_weight(&0, 1.0);
        assert_eq!(
            broken.validate().unwrap_err().kind(),
            GraphErrorKind::InvariantViolation
        );
    }

    #[test]
    fn remove_node_subtracts_incident_weight() {
        let mut graph: HashMapGraph<u32, f64> = HashMapGraph::new();
        graph.add_nodes(0..4).unwrap();
        graph.add_edge(&0, &1, 1.5).unwrap();
        graph.add_edge(&0, &2, -0.25).unwrap();
        graph.add_edge(&2, &3, 4.0).unwrap();

        let incident = graph.vertex(&0).unwrap().incident_weight();
        assert_eq!(incident, 1.25);
        graph.remove_node(&0).unwrap();
        assert_eq!(graph.total_weight(), 4.0);
        assert_eq!(graph.size(), 1);
        graph.validate().unwrap();
    }

    #[test]
    fn validate_reports_corruption() {
        let mut graph: HashMapGraph<u32, i64> = HashMapGraph::new();
        graph.add_nodes(0..3).unwrap();
        graph.add_edge(&0, &1, 2).unwrap();
        graph.validate().unwrap();

        let mut broken = graph.clone();
        broken.data.get_mut(&0).unwrap().update_weight(&1, 3);
        assert_eq!(
            broken.validate().unwrap_err().kind(),
            GraphErrorKind::InvariantViolation
        );

        let mut broken = graph.clone();
        broken.edge_count = 2;
        assert_eq!(
            broken.validate().unwrap_err().kind(),
            GraphErrorKind::InvariantViolation
        );

        let mut broken = graph;
        broken.data.get_mut(&2).unwrap().add_neighbor(7, 1);
        assert!(broken.validate().unwrap_err().msg().contains("missing vertex"));
    }
}
