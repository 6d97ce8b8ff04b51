use crate::graph::base_graph::{BaseGraph, VertexId, Weight};
use fxhash::FxHashMap;
use std::ops::Index;

/// Dense snapshot of a graph's edge weights.
///
/// Rows and columns follow the ascending order of the vertex ids. Absent edges and the
/// diagonal hold zero, so a zero-weight edge is indistinguishable from no edge here.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix<I, W> {
    ids: Vec<I>,
    data: Vec<Vec<W>>,
}

impl<I: VertexId, W: Weight> AdjacencyMatrix<I, W> {
    pub fn from_graph<G: BaseGraph<Id = I, Weight = W>>(graph: &G) -> Self {
        let ids: Vec<I> = graph.sorted_vertices().into_iter().cloned().collect();
        let position: FxHashMap<&I, usize> = ids.iter().enumerate().map(|(i, v)| (v, i)).collect();

        let mut data = vec![vec![W::zero(); ids.len()]; ids.len()];
        for (u, v, w) in graph.edges() {
            if let (Some(&i), Some(&j)) = (position.get(u), position.get(v)) {
                data[i][j] = w;
                data[j][i] = w;
            }
        }
        Self { ids, data }
    }

    pub fn order(&self) -> usize {
        self.ids.len()
    }

    /// The vertex id labelling each row (and column).
    pub fn ids(&self) -> &[I] {
        self.ids.as_slice()
    }

    pub fn position(&self, id: &I) -> Option<usize> {
        self.ids.binary_search(id).ok()
    }

    pub fn row(&self, i: usize) -> &[W] {
        self.data[i].as_slice()
    }

    pub fn rows(&self) -> &[Vec<W>] {
        self.data.as_slice()
    }

    pub fn get(&self, u: &I, v: &I) -> Option<W> {
        Some(self.data[self.position(u)?][self.position(v)?])
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.order()).all(|i| (i..self.order()).all(|j| self.data[i][j] == self.data[j][i]))
    }

    pub fn into_rows(self) -> Vec<Vec<W>> {
        self.data
    }
}

impl<I, W> Index<(usize, usize)> for AdjacencyMatrix<I, W> {
    type Output = W;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}
