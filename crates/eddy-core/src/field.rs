//! Field buffers and the [`FieldKind`] tag.
//!
//! A [`ScalarField`] is one `f64` per cell. A [`VectorField`] is stored as
//! two scalar planes, one per component, so every numerical operator can
//! work plane by plane; the [`FieldKind`] of a plane tells the boundary
//! rules whether it is a plain scalar or one velocity component.

use std::ops::{Index, IndexMut};

use crate::grid::Grid;

/// What a scalar plane represents, which decides its boundary rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Density, pressure, divergence: copied into the ring.
    Scalar,
    /// Velocity component along the first (`i`) axis.
    VelocityX,
    /// Velocity component along the second (`j`) axis.
    VelocityY,
}

/// One real value per grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    grid: Grid,
    data: Vec<f64>,
}

impl ScalarField {
    /// A zero-filled field on `grid`.
    pub fn zeros(grid: Grid) -> Self {
        Self {
            grid,
            data: vec![0.0; grid.cell_count()],
        }
    }

    /// A field whose value at `(i, j)` is `f(i, j)`.
    pub fn from_fn(grid: Grid, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let n = grid.size();
        let mut data = Vec::with_capacity(grid.cell_count());
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { grid, data }
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Value at `(i, j)`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.grid.idx(i, j)]
    }

    /// Overwrite the value at `(i, j)`. Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.grid.idx(i, j);
        self.data[k] = value;
    }

    /// Add `amount` to the value at `(i, j)`. Panics if out of bounds.
    #[inline]
    pub fn add(&mut self, i: usize, j: usize, amount: f64) {
        let k = self.grid.idx(i, j);
        self.data[k] += amount;
    }

    /// Row-major view of all cells, ring included.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of all cells, ring included.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Copy every cell of `other` into `self`.
    ///
    /// Panics if the grids differ.
    pub fn copy_from(&mut self, other: &ScalarField) {
        assert_eq!(self.grid, other.grid, "grid mismatch in copy_from");
        self.data.copy_from_slice(&other.data);
    }

    /// Sum over interior cells only.
    pub fn interior_sum(&self) -> f64 {
        self.grid.interior().map(|(i, j)| self.get(i, j)).sum()
    }

    /// Number of cells holding NaN or an infinity.
    pub fn non_finite_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }
}

impl Index<(usize, usize)> for ScalarField {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[self.grid.idx(i, j)]
    }
}

impl IndexMut<(usize, usize)> for ScalarField {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.grid.idx(i, j);
        &mut self.data[k]
    }
}

/// A 2-component vector per grid cell, stored as two planes.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    x: ScalarField,
    y: ScalarField,
}

impl VectorField {
    /// A zero-filled field on `grid`.
    pub fn zeros(grid: Grid) -> Self {
        Self {
            x: ScalarField::zeros(grid),
            y: ScalarField::zeros(grid),
        }
    }

    /// Assemble a vector field from two component planes.
    ///
    /// Panics if the planes live on different grids.
    pub fn from_components(x: ScalarField, y: ScalarField) -> Self {
        assert_eq!(x.grid(), y.grid(), "component grids differ");
        Self { x, y }
    }

    /// The grid this field lives on.
    pub fn grid(&self) -> Grid {
        self.x.grid()
    }

    /// `(vx, vy)` at `(i, j)`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> (f64, f64) {
        (self.x.get(i, j), self.y.get(i, j))
    }

    /// Add `(dx, dy)` to the vector at `(i, j)`. Panics if out of bounds.
    pub fn add(&mut self, i: usize, j: usize, dx: f64, dy: f64) {
        self.x.add(i, j, dx);
        self.y.add(i, j, dy);
    }

    /// Component along the first axis.
    pub fn x(&self) -> &ScalarField {
        &self.x
    }

    /// Component along the second axis.
    pub fn y(&self) -> &ScalarField {
        &self.y
    }

    /// Mutable component along the first axis.
    pub fn x_mut(&mut self) -> &mut ScalarField {
        &mut self.x
    }

    /// Mutable component along the second axis.
    pub fn y_mut(&mut self) -> &mut ScalarField {
        &mut self.y
    }

    /// Both components mutably at once.
    pub fn components_mut(&mut self) -> (&mut ScalarField, &mut ScalarField) {
        (&mut self.x, &mut self.y)
    }

    /// Set every component of every cell to zero.
    pub fn clear(&mut self) {
        self.x.fill(0.0);
        self.y.fill(0.0);
    }

    /// Copy both components of `other` into `self`.
    pub fn copy_from(&mut self, other: &VectorField) {
        self.x.copy_from(&other.x);
        self.y.copy_from(&other.y);
    }

    /// Number of component values holding NaN or an infinity.
    pub fn non_finite_count(&self) -> usize {
        self.x.non_finite_count() + self.y.non_finite_count()
    }
}
