//! Move history for undo/redo.

use nanpure_core::{Digit, Grid, Position};

/// A reversible edit: the position of a cell and the value it held
/// immediately *before* the edit.
///
/// A move is owned by exactly one stack at a time. Undo and redo transfer
/// moves between the two stacks by value; nothing is shared or duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The edited cell.
    pub pos: Position,
    /// The value the cell held before the edit (`None` if it was empty).
    pub replaced: Option<Digit>,
}

/// Undo and redo stacks of [`Move`]s, most recent on top.
///
/// Recording a fresh edit clears the redo stack: history is linear and never
/// branches. The stacks are plain growable sequences — applying a move needs
/// the grid, so [`undo`](Self::undo) and [`redo`](Self::redo) take the
/// current grid and perform the swap themselves, capturing the value they
/// overwrite for the opposite stack.
#[derive(Debug, Default, Clone)]
pub struct History {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an edit about to be applied to `pos`, where `replaced` is the
    /// value the cell holds right now.
    ///
    /// Must be called immediately before the grid mutation it describes.
    /// Clears the redo stack.
    pub fn record(&mut self, pos: Position, replaced: Option<Digit>) {
        self.redo.clear();
        self.undo.push(Move { pos, replaced });
    }

    /// Reverts the most recent move on `grid`, transferring it to the redo
    /// stack, and returns the affected position (for cursor placement).
    ///
    /// No-op returning `None` when the undo stack is empty.
    pub fn undo(&mut self, grid: &mut Grid) -> Option<Position> {
        let mv = self.undo.pop()?;
        self.redo.push(Move {
            pos: mv.pos,
            replaced: grid.get(mv.pos),
        });
        grid.set(mv.pos, mv.replaced);
        Some(mv.pos)
    }

    /// Re-applies the most recently undone move on `grid`, transferring it
    /// back to the undo stack, and returns the affected position.
    ///
    /// No-op returning `None` when the redo stack is empty.
    pub fn redo(&mut self, grid: &mut Grid) -> Option<Position> {
        let mv = self.redo.pop()?;
        self.undo.push(Move {
            pos: mv.pos,
            replaced: grid.get(mv.pos),
        });
        grid.set(mv.pos, mv.replaced);
        Some(mv.pos)
    }

    /// Discards both stacks (game start and successful check).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Returns whether there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns whether there is a move to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the number of moves on the undo stack.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of moves on the redo stack.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(history: &mut History, grid: &mut Grid, pos: Position, value: Option<Digit>) {
        history.record(pos, grid.get(pos));
        grid.set(pos, value);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut grid = Grid::new();
        let mut history = History::new();
        let pos = Position::new(3, 5);

        edit(&mut history, &mut grid, pos, Some(Digit::D4));
        edit(&mut history, &mut grid, pos, Some(Digit::D8));

        assert_eq!(history.undo(&mut grid), Some(pos));
        assert_eq!(grid.get(pos), Some(Digit::D4));
        assert_eq!(history.undo(&mut grid), Some(pos));
        assert_eq!(grid.get(pos), None);
        assert!(!history.can_undo());

        assert_eq!(history.redo(&mut grid), Some(pos));
        assert_eq!(grid.get(pos), Some(Digit::D4));
        assert_eq!(history.redo(&mut grid), Some(pos));
        assert_eq!(grid.get(pos), Some(Digit::D8));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut grid = Grid::new();
        let mut history = History::new();
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);

        edit(&mut history, &mut grid, a, Some(Digit::D1));
        history.undo(&mut grid);
        assert!(history.can_redo());

        edit(&mut history, &mut grid, b, Some(Digit::D2));
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_empty_stacks_are_no_ops() {
        let mut grid = Grid::new();
        let mut history = History::new();

        assert_eq!(history.undo(&mut grid), None);
        assert_eq!(history.redo(&mut grid), None);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_moves_transfer_rather_than_duplicate() {
        let mut grid = Grid::new();
        let mut history = History::new();
        let pos = Position::new(7, 2);

        edit(&mut history, &mut grid, pos, Some(Digit::D6));
        assert_eq!((history.undo_len(), history.redo_len()), (1, 0));

        history.undo(&mut grid);
        assert_eq!((history.undo_len(), history.redo_len()), (0, 1));

        history.redo(&mut grid);
        assert_eq!((history.undo_len(), history.redo_len()), (1, 0));
    }

    #[test]
    fn test_clear_discards_both_stacks() {
        let mut grid = Grid::new();
        let mut history = History::new();

        edit(&mut history, &mut grid, Position::new(0, 0), Some(Digit::D1));
        edit(&mut history, &mut grid, Position::new(1, 1), Some(Digit::D2));
        history.undo(&mut grid);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
