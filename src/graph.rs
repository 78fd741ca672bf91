use std::collections::VecDeque;

use log::{debug, trace};

use crate::{matrix::Matrix, Edge, Flow, NetworkError};

/// A validated single-source single-sink flow network together with the
/// mutable solver state of one maximization run.
///
/// All state is owned by the value: building a `FlowGraph` and maximizing it
/// has no effect on any other instance, and a fresh instance is built per
/// solve call.
pub struct FlowGraph<F>
where
    F: Flow,
{
    capacity: Matrix<F>,
    flow: Matrix<F>,
    residual: Matrix<F>,
    source: usize,
    sink: usize,
}

impl<F> FlowGraph<F>
where
    F: Flow,
{
    /// Validates the edge list and builds the capacity matrix, locating the
    /// unique source and sink. The residual matrix starts as a copy of the
    /// capacity matrix and the flow matrix starts at zero.
    pub fn build(edges: &[Edge<F>], num_vertices: usize) -> Result<Self, NetworkError> {
        if num_vertices < 2 {
            return Err(NetworkError::TooFewVertices(num_vertices));
        }
        if edges.is_empty() {
            return Err(NetworkError::TooFewEdges);
        }
        for edge in edges {
            if edge.weight == F::zero() {
                return Err(NetworkError::ZeroWeightEdge {
                    from: edge.from,
                    to: edge.to,
                });
            }
            if edge.from >= num_vertices || edge.to >= num_vertices {
                return Err(NetworkError::BadEndpoint {
                    from: edge.from,
                    to: edge.to,
                    num_vertices,
                });
            }
            if edge.from == edge.to {
                return Err(NetworkError::SelfLoop(edge.from));
            }
        }

        let mut capacity = Matrix::zeroed(num_vertices);
        for edge in edges {
            if capacity[(edge.from, edge.to)] != F::zero() {
                return Err(NetworkError::MultiEdge {
                    from: edge.from,
                    to: edge.to,
                });
            }
            capacity[(edge.from, edge.to)] = edge.weight;
        }

        let (source, sink) = locate_terminals(edges, num_vertices)?;
        debug!("built flow network on {num_vertices} vertices, source {source}, sink {sink}");

        Ok(FlowGraph {
            residual: capacity.clone(),
            flow: Matrix::zeroed(num_vertices),
            capacity,
            source,
            sink,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn num_vertices(&self) -> usize {
        self.capacity.dim()
    }

    /// Breadth-first search for an augmenting path in the residual graph.
    ///
    /// Returns the parent trace of the discovery tree if the sink was reached,
    /// `None` once no augmenting path remains. Neighbors are visited in
    /// increasing vertex order, so the chosen path is deterministic.
    fn find_augmenting_path(&self) -> Option<Vec<Option<usize>>> {
        let n = self.num_vertices();
        let mut parent = vec![None; n];
        let mut discovered = vec![false; n];
        discovered[self.source] = true;

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if self.residual[(u, v)] != F::zero() && !discovered[v] {
                    discovered[v] = true;
                    parent[v] = Some(u);
                    trace!("bfs discovered vertex {v} via {u}");
                    queue.push_back(v);
                }
            }
        }

        if discovered[self.sink] {
            Some(parent)
        } else {
            None
        }
    }

    /// Pushes flow along the path recorded in `parent` and returns the
    /// bottleneck that was pushed.
    ///
    /// Forward arcs of the original network gain flow; a path step with no
    /// forward capacity is a cancel arc and instead subtracts flow previously
    /// pushed in the opposite direction. Residual capacity is adjusted
    /// symmetrically in both cases.
    fn augment(&mut self, parent: &[Option<usize>]) -> F {
        let mut bottleneck: Option<F> = None;
        let mut v = self.sink;
        while v != self.source {
            let u = parent[v].expect("parent trace does not reach the source");
            let remaining = self.residual[(u, v)];
            bottleneck = Some(match bottleneck {
                Some(b) => b.min(remaining),
                None => remaining,
            });
            v = u;
        }
        let bottleneck = bottleneck.expect("source and sink coincide");

        let mut v = self.sink;
        while v != self.source {
            let u = parent[v].expect("parent trace does not reach the source");
            if self.capacity[(u, v)] > F::zero() {
                self.flow[(u, v)] = self.flow[(u, v)] + bottleneck;
            } else {
                self.flow[(v, u)] = self.flow[(v, u)] - bottleneck;
            }
            self.residual[(u, v)] = self.residual[(u, v)] - bottleneck;
            self.residual[(v, u)] = self.residual[(v, u)] + bottleneck;
            v = u;
        }
        bottleneck
    }

    /// Maximize flow from source to sink with the Ford-Fulkerson method,
    /// taking the shortest augmenting path each round (Edmonds-Karp).
    ///
    /// Terminates because every augmentation pushes a positive integer
    /// bottleneck, bounded by the total capacity out of the source.
    pub fn maximize_flow(&mut self) {
        while let Some(parent) = self.find_augmenting_path() {
            let pushed = self.augment(&parent);
            debug!("augmented by {pushed:?}");
        }
    }

    /// Flow currently assigned to the arc `(from, to)`.
    pub fn flow(&self, from: usize, to: usize) -> F {
        self.flow[(from, to)]
    }

    /// Total flow leaving the source. Flow never enters the source (it has no
    /// incoming arcs), so this equals the value of the flow.
    pub fn total_flow(&self) -> F {
        (0..self.num_vertices())
            .map(|v| self.flow[(self.source, v)])
            .fold(F::zero(), |acc, f| acc + f)
    }

    /// The arcs carrying nonzero flow, in row-major `(from, to)` order.
    pub fn flow_edges(&self) -> Vec<Edge<F>> {
        let n = self.num_vertices();
        let mut output = Vec::new();
        for u in 0..n {
            for v in 0..n {
                if self.flow[(u, v)] != F::zero() {
                    output.push(Edge::new(u, v, self.flow[(u, v)]));
                }
            }
        }
        output
    }
}

/// Validate, maximize and report nonzero flow in one call.
pub fn solve_network_flow<F>(
    edges: &[Edge<F>],
    num_vertices: usize,
) -> Result<Vec<Edge<F>>, NetworkError>
where
    F: Flow,
{
    let mut graph = FlowGraph::build(edges, num_vertices)?;
    graph.maximize_flow();
    Ok(graph.flow_edges())
}

/// The source is the one vertex with outgoing arcs but no incoming arc, the
/// sink the one vertex with incoming arcs but no outgoing arc. In/out-degree
/// counting, O(V + E).
fn locate_terminals<F>(
    edges: &[Edge<F>],
    num_vertices: usize,
) -> Result<(usize, usize), NetworkError>
where
    F: Flow,
{
    let mut in_degree = vec![0usize; num_vertices];
    let mut out_degree = vec![0usize; num_vertices];
    for edge in edges {
        out_degree[edge.from] += 1;
        in_degree[edge.to] += 1;
    }

    let sources: Vec<usize> = (0..num_vertices)
        .filter(|&v| out_degree[v] > 0 && in_degree[v] == 0)
        .collect();
    let sinks: Vec<usize> = (0..num_vertices)
        .filter(|&v| in_degree[v] > 0 && out_degree[v] == 0)
        .collect();

    if sources.len() != 1 {
        return Err(NetworkError::NoUniqueSource(sources.len()));
    }
    if sinks.len() != 1 {
        return Err(NetworkError::NoUniqueSink(sinks.len()));
    }
    Ok((sources[0], sinks[0]))
}
