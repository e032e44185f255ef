use crate::cells::Cartesian2DCoordinate;

/// LIFO of grid coordinates recording the current depth first traversal path.
#[derive(Debug, Clone, Default)]
pub struct BacktrackStack {
    entries: Vec<Cartesian2DCoordinate>,
    pushes: usize,
    max_depth: usize,
}

impl BacktrackStack {
    pub fn new() -> BacktrackStack {
        BacktrackStack::default()
    }

    /// Preallocate room for `cells_count` entries, the deepest a traversal of that many cells
    /// can ever go.
    pub fn with_capacity(cells_count: usize) -> BacktrackStack {
        BacktrackStack {
            entries: Vec::with_capacity(cells_count),
            pushes: 0,
            max_depth: 0,
        }
    }

    pub fn push(&mut self, coord: Cartesian2DCoordinate) {
        self.entries.push(coord);
        self.pushes += 1;
        if self.entries.len() > self.max_depth {
            self.max_depth = self.entries.len();
        }
    }

    /// Panics if the stack is empty, callers check `is_empty` first.
    pub fn pop(&mut self) -> Cartesian2DCoordinate {
        self.entries.pop().expect("pop on an empty backtracking stack")
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of pushes over the stack's lifetime.
    #[inline]
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
