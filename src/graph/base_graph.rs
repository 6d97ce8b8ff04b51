use num::Num;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// Identity of a vertex. The total order makes matrix layout and edge ordering deterministic.
pub trait VertexId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> VertexId for T {}

/// Edge weight. Weights are compared with `partial_cmp`; incomparable values (NaN) sort as equal,
/// and two NaN entries count as the same weight when checking edge symmetry.
pub trait Weight: Num + Copy + PartialOrd + Debug {}

impl<T: Num + Copy + PartialOrd + Debug> Weight for T {}

pub trait BaseGraph: Clone + Debug {
    type Id: VertexId;
    type Weight: Weight;

    /// Number of vertices.
    fn order(&self) -> usize;
    /// Number of undirected edges.
    fn size(&self) -> usize;
    /// Sum of all edge weights, each edge counted once.
    fn total_weight(&self) -> Self::Weight;
    fn has_vertex(&self, u: &Self::Id) -> bool;
    fn has_edge(&self, u: &Self::Id, v: &Self::Id) -> bool;
    fn weight(&self, u: &Self::Id, v: &Self::Id) -> Option<Self::Weight>;
    fn degree(&self, u: &Self::Id) -> Option<usize>;
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Id> + '_>;
    fn neighborhood(
        &self,
        u: &Self::Id,
    ) -> Box<dyn Iterator<Item = (&Self::Id, Self::Weight)> + '_>;

    fn sorted_vertices(&self) -> Vec<&Self::Id> {
        let mut vertices: Vec<_> = self.vertices().collect();
        vertices.sort();
        vertices
    }

    /// Every edge exactly once, as `(smaller id, larger id, weight)`.
    fn edges(&self) -> Vec<(&Self::Id, &Self::Id, Self::Weight)> {
        let mut edges = Vec::with_capacity(self.size());
        for u in self.vertices() {
            edges.extend(
                self.neighborhood(u)
                    .filter(|(v, _)| u < *v)
                    .map(|(v, w)| (u, v, w)),
            );
        }
        edges
    }

    /// Edges ordered by weight, ties broken by endpoint ids.
    fn sorted_edges(&self, reverse: bool) -> Vec<(&Self::Id, &Self::Id, Self::Weight)> {
        let mut edges = self.edges();
        edges.sort_by(|a, b| {
            let by_weight = a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal);
            let by_weight = if reverse {
                by_weight.reverse()
            } else {
                by_weight
            };
            by_weight.then_with(|| (a.0, a.1).cmp(&(b.0, b.1)))
        });
        edges
    }
}
