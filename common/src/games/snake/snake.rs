use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Direction};

/// Snake body ordered tail (front) to head (back), with a set mirror for O(1) lookups.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    pub direction: Direction,
    pub pending_direction: Direction,
}

impl Snake {
    pub const START_LENGTH: i32 = 3;

    /// Horizontal run of `START_LENGTH` cells ending at `head`, facing right.
    pub fn new(head: Cell) -> Self {
        let cells = (0..Self::START_LENGTH)
            .rev()
            .map(|offset| Cell::new(head.x - offset, head.y));
        Self::from_cells(cells, Direction::Right)
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self {
            body,
            body_set,
            direction,
            pending_direction: direction,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn occupies(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    /// Would moving the head onto `cell` hit the body? The tail is vacated on a
    /// non-growing move, so it only counts when growing.
    pub fn blocks(&self, cell: Cell, grow: bool) -> bool {
        self.occupies(&cell) && (grow || cell != self.tail())
    }

    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn advance(&mut self, next_head: Cell, grow: bool) {
        self.direction = self.pending_direction;

        if !grow {
            let tail = self
                .body
                .pop_front()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
        }

        self.body.push_back(next_head);
        self.body_set.insert(next_head);
    }
}
