use log::{debug, info, trace};
use nanpure_core::{Digit, Grid, Position};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::{BoardState, History};

/// Errors from creating a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NewGameError {
    /// The supplied puzzle admits no solution.
    ///
    /// Puzzles are externally sourced and assumed well formed; hitting this
    /// is a data error the embedding application should treat as fatal.
    #[display("puzzle has no solution")]
    Unsolvable,
}

/// A single puzzle session.
///
/// The game owns three grids — the *given* puzzle (immutable cells), the
/// live *current* board, and the *solved* reference computed once at
/// construction — plus the undo/redo [`History`] and the derived
/// [`BoardState`]. Every mutating operation recomputes the state before
/// returning it; none of them panic or return errors, and unmet
/// preconditions are documented no-ops.
///
/// Sessions are independent values: running several games concurrently is a
/// matter of holding several `Game`s.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
/// use nanpure_game::{BoardState, Game};
///
/// let given: Grid =
///     "..4678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()?;
/// let mut game = Game::new(given).expect("puzzle is solvable");
///
/// assert_eq!(game.place(Position::new(0, 0), Digit::D5), BoardState::Ok);
/// assert_eq!(game.place(Position::new(1, 0), Digit::D3), BoardState::Won);
/// # Ok::<(), nanpure_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    given: Grid,
    current: Grid,
    solution: Grid,
    history: History,
    state: BoardState,
    rng: Pcg64,
}

impl Game {
    /// Starts a game from a given puzzle, seeding the hint PRNG from the
    /// thread RNG.
    ///
    /// Runs the solver once to compute the reference solution used by the
    /// check and hint features; this is the only potentially expensive call
    /// in a session, so do it before the board is first shown.
    ///
    /// # Errors
    ///
    /// Returns [`NewGameError::Unsolvable`] if the puzzle has no solution.
    pub fn new(given: Grid) -> Result<Self, NewGameError> {
        Self::with_rng(given, Pcg64::from_rng(&mut rand::rng()))
    }

    /// Starts a game with a caller-supplied PRNG for the hint feature.
    ///
    /// Seeding the PRNG deterministically makes hint selection reproducible,
    /// which tests rely on.
    ///
    /// # Errors
    ///
    /// Returns [`NewGameError::Unsolvable`] if the puzzle has no solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Grid;
    /// use nanpure_game::{BoardState, Game};
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg64;
    ///
    /// let given: Grid =
    ///     "..4678912672195348198342567859761423426853791713924856961537284287419635345286179"
    ///         .parse()?;
    /// let mut game = Game::with_rng(given, Pcg64::seed_from_u64(7)).unwrap();
    ///
    /// let (state, pos) = game.hint();
    /// assert_eq!(state, BoardState::HintGiven);
    /// assert!(pos.is_some());
    /// # Ok::<(), nanpure_core::ParseGridError>(())
    /// ```
    pub fn with_rng(given: Grid, rng: Pcg64) -> Result<Self, NewGameError> {
        debug!("solving reference solution for {} givens", given.filled_count());
        let solution = nanpure_solver::solve(&given).ok_or(NewGameError::Unsolvable)?;
        info!("new game started with {} givens", given.filled_count());
        Ok(Self {
            current: given.clone(),
            given,
            solution,
            history: History::new(),
            state: BoardState::Ok,
            rng,
        })
    }

    /// Places `digit` into the cell at `pos`.
    ///
    /// No-op if the board is won or the cell is a given. Otherwise the
    /// previous value is recorded for undo, the digit is written, and the
    /// state is reclassified: `InvalidPlacement` if the digit clashes
    /// locally, else `InvalidBoard` if any house is broken, else `Won` if
    /// this completed the board, else `Ok`.
    pub fn place(&mut self, pos: Position, digit: Digit) -> BoardState {
        if self.state.is_won() || self.given.get(pos).is_some() {
            return self.state;
        }

        self.history.record(pos, self.current.get(pos));
        self.current.set(pos, Some(digit));
        trace!("placed {digit} at ({}, {})", pos.x(), pos.y());

        self.state = if !self.current.placement_is_valid(pos) {
            BoardState::InvalidPlacement
        } else if !self.current.is_consistent() {
            BoardState::InvalidBoard
        } else if self.current.is_solved() {
            info!("puzzle solved");
            BoardState::Won
        } else {
            BoardState::Ok
        };
        self.state
    }

    /// Empties the cell at `pos`.
    ///
    /// No-op if the board is won or the cell is a given. A cleared cell
    /// cannot clash locally or complete the board, so the state is either
    /// `InvalidBoard` (a conflict persists elsewhere) or `Ok`.
    pub fn clear_cell(&mut self, pos: Position) -> BoardState {
        if self.state.is_won() || self.given.get(pos).is_some() {
            return self.state;
        }

        self.history.record(pos, self.current.get(pos));
        self.current.set(pos, None);
        trace!("cleared ({}, {})", pos.x(), pos.y());

        self.state = if self.current.is_consistent() {
            BoardState::Ok
        } else {
            BoardState::InvalidBoard
        };
        self.state
    }

    /// Reverts the most recent move, returning the new state and the
    /// affected position (for cursor placement).
    ///
    /// No-op if the board is won or there is nothing to undo. When a failed
    /// check is being repaired move by move, the `CheckFailed` state is kept
    /// until the board matches the solution again.
    pub fn undo(&mut self) -> (BoardState, Option<Position>) {
        if self.state.is_won() {
            return (self.state, None);
        }
        let Some(pos) = self.history.undo(&mut self.current) else {
            return (self.state, None);
        };

        self.state = if !self.current.is_consistent() {
            BoardState::InvalidBoard
        } else if self.state.is_check_failed() && !self.matches_solution() {
            BoardState::CheckFailed
        } else {
            BoardState::Ok
        };
        (self.state, Some(pos))
    }

    /// Re-applies the most recently undone move, returning the new state
    /// and the affected position.
    ///
    /// No-op when there is nothing to redo. Redo is permitted whenever the
    /// redo stack is non-empty; the stack is cleared by any fresh edit, so
    /// in practice a won board has nothing to redo.
    pub fn redo(&mut self) -> (BoardState, Option<Position>) {
        let Some(pos) = self.history.redo(&mut self.current) else {
            return (self.state, None);
        };

        self.state = if !self.current.placement_is_valid(pos) {
            BoardState::InvalidPlacement
        } else if !self.current.is_consistent() {
            BoardState::InvalidBoard
        } else {
            BoardState::Ok
        };
        (self.state, Some(pos))
    }

    /// Compares the filled cells against the reference solution.
    ///
    /// No-op if the board is won. On success every currently filled cell is
    /// locked in as a given, the history is cleared, and the state becomes
    /// `Checked`; the player can no longer edit or undo past this point. On
    /// failure the state becomes `CheckFailed` and the board is left
    /// untouched, to be repaired by hand or by [`hint`](Self::hint).
    pub fn check(&mut self) -> BoardState {
        if self.state.is_won() {
            return self.state;
        }

        if self.matches_solution() {
            self.history.clear();
            self.given = self.current.clone();
            debug!("check passed, {} cells locked in", self.given.filled_count());
            self.state = BoardState::Checked;
        } else {
            debug!("check failed");
            self.state = BoardState::CheckFailed;
        }
        self.state
    }

    /// Provides a hint, returning the new state and the affected position.
    ///
    /// No-op if the board is won. If the board currently matches the
    /// solution, one empty cell — chosen uniformly at random from the
    /// row-major enumeration of empty cells — is filled from the solution
    /// (state `Won` if that completed the board, else `HintGiven`). The fill
    /// is not recorded: revealed cells are not undoable.
    ///
    /// If the board has a mistake instead, moves are undone until it
    /// matches again (state `HintFixed`), with the undone moves available
    /// for redo. Should the undo stack run dry first — unreachable through
    /// this API, since every recorded move targets a non-given cell — the
    /// rollback stops with the state left at `CheckFailed`.
    pub fn hint(&mut self) -> (BoardState, Option<Position>) {
        if self.state.is_won() {
            return (self.state, None);
        }

        if self.matches_solution() {
            let empty: Vec<_> = self.current.empty_positions().collect();
            if empty.is_empty() {
                return (self.state, None);
            }
            let target = empty[self.rng.random_range(0..empty.len())];
            self.current.set(target, self.solution.get(target));
            debug!("hint revealed ({}, {})", target.x(), target.y());

            self.state = if self.current.is_solved() {
                info!("puzzle solved");
                BoardState::Won
            } else {
                BoardState::HintGiven
            };
            (self.state, Some(target))
        } else {
            let mut last = None;
            while !self.matches_solution() {
                let Some(pos) = self.history.undo(&mut self.current) else {
                    self.state = BoardState::CheckFailed;
                    return (self.state, last);
                };
                last = Some(pos);
            }
            debug!("hint rolled back mistaken moves");
            self.state = BoardState::HintFixed;
            (self.state, last)
        }
    }

    /// Returns the current board state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Returns the current value of the cell at `pos`.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.current.get(pos)
    }

    /// Returns whether the cell at `pos` is a given (immutable to edits).
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.given.get(pos).is_some()
    }

    /// Returns the given puzzle grid.
    #[must_use]
    pub fn given(&self) -> &Grid {
        &self.given
    }

    /// Returns the live board.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Returns the reference solution.
    #[must_use]
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns whether row `y` of the live board contains no duplicate.
    #[must_use]
    pub fn row_is_valid(&self, y: u8) -> bool {
        self.current.row_is_valid(y)
    }

    /// Returns whether column `x` of the live board contains no duplicate.
    #[must_use]
    pub fn column_is_valid(&self, x: u8) -> bool {
        self.current.column_is_valid(x)
    }

    /// Returns whether box `index` of the live board contains no duplicate.
    #[must_use]
    pub fn box_is_valid(&self, index: u8) -> bool {
        self.current.box_is_valid(index)
    }

    /// Returns whether there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether there is a move to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Every filled cell agrees with the reference solution.
    fn matches_solution(&self) -> bool {
        Position::ALL.into_iter().all(|pos| {
            let value = self.current.get(pos);
            value.is_none() || value == self.solution.get(pos)
        })
    }
}
