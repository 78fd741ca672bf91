use crate::Flow;

/// A directed capacitated arc between two vertices.
///
/// On input, `weight` is the edge's capacity. In the solver's output, `weight`
/// is the flow pushed along the arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<F>
where
    F: Flow,
{
    pub from: usize,
    pub to: usize,
    pub weight: F,
}

impl<F> Edge<F>
where
    F: Flow,
{
    pub fn new(from: usize, to: usize, weight: F) -> Self {
        Edge { from, to, weight }
    }
}
