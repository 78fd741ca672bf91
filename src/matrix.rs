use std::ops::{Index, IndexMut};

use crate::Flow;

/// Dense square matrix over ordered vertex pairs, stored row-major.
///
/// Backs the capacity, flow and residual state of a solve. O(V^2) memory;
/// fine for the dense inputs this crate targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Matrix<F> {
    dim: usize,
    cells: Vec<F>,
}

impl<F> Matrix<F>
where
    F: Flow,
{
    pub(crate) fn zeroed(dim: usize) -> Self {
        Matrix {
            dim,
            cells: vec![F::zero(); dim * dim],
        }
    }

    pub(crate) fn dim(&self) -> usize {
        self.dim
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (u, v): (usize, usize)) -> &F {
        &self.cells[u * self.dim + v]
    }
}

impl<F> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (u, v): (usize, usize)) -> &mut F {
        &mut self.cells[u * self.dim + v]
    }
}
