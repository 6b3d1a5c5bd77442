//! Borrowed views over predictor matrices.
//!
//! ## Purpose
//!
//! This module provides `DesignMatrix`, a zero-copy view over a flat buffer of
//! predictor values, and `Column`, a strided view over one predictor column.
//! The estimator only ever walks one column at a time, so both row-major
//! slices and column-major `nalgebra` storage can be read without copying.
//!
//! ## Design notes
//!
//! * **Layout-agnostic**: A column is an `(offset, stride)` pair into the flat buffer.
//! * **Unchecked shape**: Views trust the shape they are given; callers validate first.
//!
//! ## Invariants
//!
//! * `data.len() == n_rows * n_cols`.
//! * `Column::get(i)` is in bounds for every `i < n_rows`.

/// Storage order of a flat predictor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Observations are contiguous: `[x00, x01, ..., x10, x11, ...]`.
    #[default]
    RowMajor,

    /// Predictor columns are contiguous (nalgebra storage order).
    ColumnMajor,
}

/// A borrowed `n_rows x n_cols` predictor matrix.
#[derive(Debug, Clone, Copy)]
pub struct DesignMatrix<'a, T> {
    data: &'a [T],
    n_rows: usize,
    n_cols: usize,
    layout: Layout,
}

impl<'a, T: Copy> DesignMatrix<'a, T> {
    /// Wrap a flat buffer.
    pub fn new(data: &'a [T], n_rows: usize, n_cols: usize, layout: Layout) -> Self {
        debug_assert_eq!(data.len(), n_rows * n_cols);
        Self {
            data,
            n_rows,
            n_cols,
            layout,
        }
    }

    /// Number of observations.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of predictor columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Strided view over predictor column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> Column<'a, T> {
        let (offset, stride) = match self.layout {
            Layout::RowMajor => (col, self.n_cols),
            Layout::ColumnMajor => (col * self.n_rows, 1),
        };
        Column {
            data: self.data,
            offset,
            stride,
            len: self.n_rows,
        }
    }
}

/// A strided view over one predictor column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T: Copy> Column<'a, T> {
    /// Number of observations in the column.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.len
    }

    /// Value of observation `row`.
    #[inline]
    pub fn get(&self, row: usize) -> T {
        self.data[self.offset + row * self.stride]
    }
}
