//! Snake body - ordered cells, head first.

use std::collections::VecDeque;

use crate::types::Cell;

/// The snake's body, head at index 0.
///
/// Never empty and never overlapping itself. [`Snake::from_cells`] rejects
/// duplicate cells; [`crate::advance`] only ever prepends a cell that passed
/// the collision checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A single-segment snake.
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        Self { body }
    }

    /// Build a snake from head-first cells.
    ///
    /// Returns `None` for an empty list or when a cell appears twice.
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let snake = Self {
            body: cells.iter().copied().collect(),
        };
        if snake.has_duplicates() {
            return None;
        }
        Some(snake)
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Whether moving the head onto `cell` runs into the body.
    ///
    /// The current tail is excluded: on a normal tick it moves away in the
    /// same step.
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body.iter().take(self.body.len() - 1).any(|&c| c == cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    /// Move one step: new head in, tail out.
    pub(crate) fn slide(&mut self, head: Cell) {
        self.body.push_front(head);
        self.body.pop_back();
    }

    /// Grow one step: new head in, tail stays.
    pub(crate) fn grow(&mut self, head: Cell) {
        self.body.push_front(head);
    }

    pub fn has_duplicates(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.body.len());
        !self.body.iter().all(|c| seen.insert(*c))
    }
}
