//! Tables (matrices, aligned environments, cases)

use crate::math_list::MathList;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Horizontal alignment of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColumnAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// A grid of math lists, addressed as `cells[row][column]`
///
/// Rows may be ragged. Missing cells read as empty and are filled in with
/// empty lists as soon as a cell further right is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Name of the environment this table was written as, e.g. `matrix`
    pub environment: Option<String>,
    /// Space between columns, in mu
    pub inter_column_spacing: f32,
    /// Additional space between rows, in jots (0.3 × font size)
    pub inter_row_additional_spacing: f32,
    cells: Vec<Vec<MathList>>,
    alignments: Vec<ColumnAlignment>,
}

impl Table {
    pub fn new(environment: Option<String>) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Create a table named after an environment
    pub fn with_environment(environment: impl Into<String>) -> Self {
        Self::new(Some(environment.into()))
    }

    pub fn n_rows(&self) -> usize {
        self.cells.len()
    }

    /// Length of the longest row
    pub fn n_columns(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Put a list into a cell, growing rows and columns with empty lists as needed
    pub fn set_cell(&mut self, list: MathList, row: usize, column: usize) {
        if self.cells.len() <= row {
            self.cells.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.cells[row];
        if cells.len() <= column {
            cells.resize_with(column + 1, MathList::new);
        }
        cells[column] = list;
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&MathList> {
        self.cells.get(row).and_then(|cells| cells.get(column))
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut MathList> {
        self.cells.get_mut(row).and_then(|cells| cells.get_mut(column))
    }

    pub fn rows(&self) -> &[Vec<MathList>] {
        &self.cells
    }

    /// Set a column's alignment, defaulting any skipped columns to center
    pub fn set_alignment(&mut self, alignment: ColumnAlignment, column: usize) {
        if self.alignments.len() <= column {
            self.alignments.resize(column + 1, ColumnAlignment::Center);
        }
        self.alignments[column] = alignment;
    }

    pub fn alignment(&self, column: usize) -> ColumnAlignment {
        self.alignments
            .get(column)
            .copied()
            .unwrap_or(ColumnAlignment::Center)
    }

    pub fn alignments(&self) -> &[ColumnAlignment] {
        &self.alignments
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &MathList> {
        self.cells.iter().flatten()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut MathList> {
        self.cells.iter_mut().flatten()
    }
}

// Equality covers cells and alignments only
impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.alignments == other.alignments
    }
}

impl Eq for Table {}

impl Hash for Table {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.alignments.hash(state);
    }
}
