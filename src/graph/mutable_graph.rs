use crate::error::GraphError;
use crate::graph::base_graph::BaseGraph;

/// Mutations on an undirected weighted graph.
///
/// Every operation validates its preconditions before touching any state, so a returned error
/// means the graph is unchanged.
pub trait MutableGraph: BaseGraph {
    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;

    fn add_node(&mut self, u: Self::Id) -> Result<(), GraphError>;
    /// Removes `u` along with every incident edge.
    fn remove_node(&mut self, u: &Self::Id) -> Result<(), GraphError>;
    fn add_edge(&mut self, u: &Self::Id, v: &Self::Id, weight: Self::Weight)
        -> Result<(), GraphError>;
    /// Returns the weight of the removed edge.
    fn remove_edge(&mut self, u: &Self::Id, v: &Self::Id) -> Result<Self::Weight, GraphError>;
    /// Returns the weight the edge had before the update.
    fn update_edge(
        &mut self,
        u: &Self::Id,
        v: &Self::Id,
        weight: Self::Weight,
    ) -> Result<Self::Weight, GraphError>;

    fn add_nodes<T: IntoIterator<Item = Self::Id>>(&mut self, nodes: T) -> Result<(), GraphError> {
        for u in nodes {
            self.add_node(u)?;
        }
        Ok(())
    }
}
