//! Exhaustive backtracking solver for number-place grids.
//!
//! The solver computes one complete, valid assignment extending a partially
//! filled [`Grid`]. The game layer runs it once per game to obtain the
//! reference solution that the check and hint features compare against, so
//! the search must be *deterministic*: the same input grid always yields the
//! same solution and the same search cost.
//!
//! Determinism comes from two fixed policies:
//!
//! - the branch cell is the **last** empty cell encountered in a row-major
//!   scan of the board (not the first; either is correct, but the choice is
//!   pinned so results are reproducible), and
//! - candidate digits are tried in increasing order, [`Digit::ALL`].
//!
//! The search is exponential in the worst case but bounded in practice by
//! ordinary puzzle shapes (typically fewer than 60 empty cells).
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Grid;
//! use nanpure_solver::solve;
//!
//! let puzzle: Grid = "\
//! 53..7....\
//! 6..195...\
//! .98....6.\
//! 8...6...3\
//! 4..8.3..1\
//! 7...2...6\
//! .6....28.\
//! ...419..5\
//! ....8..79\
//! "
//! .parse()?;
//!
//! let solution = solve(&puzzle).expect("puzzle is solvable");
//! assert!(solution.is_solved());
//! # Ok::<(), nanpure_core::ParseGridError>(())
//! ```

use nanpure_core::{Digit, Grid, Position};

/// Computes a complete, valid assignment extending `grid`.
///
/// Returns `None` when no such assignment exists. An unsolvable input is a
/// caller/data error — the engine treats it as a fatal configuration
/// problem, not something to recover from — so no further diagnosis is
/// attached.
///
/// Two calls with the same input produce identical output; see the crate
/// docs for the policies that pin the search order.
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    let mut work = grid.clone();
    search(&mut work).then_some(work)
}

/// One node of the backtracking search, operating on `grid` in place.
///
/// On success the grid holds the solution; on failure it is restored to the
/// state it had on entry.
fn search(grid: &mut Grid) -> bool {
    if !grid.is_consistent() {
        return false;
    }
    if grid.is_solved() {
        return true;
    }

    // Not solved and not inconsistent, so an empty cell exists.
    let Some(target) = branch_cell(grid) else {
        return false;
    };

    for digit in Digit::ALL {
        grid.set(target, Some(digit));
        if search(grid) {
            return true;
        }
    }

    grid.set(target, None);
    false
}

/// Selects the cell to branch on: the last empty cell in row-major order.
fn branch_cell(grid: &Grid) -> Option<Position> {
    grid.empty_positions().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "\
53..7....\
6..195...\
.98....6.\
8...6...3\
4..8.3..1\
7...2...6\
.6....28.\
...419..5\
....8..79\
";

    const SOLUTION: &str = "\
534678912\
672195348\
198342567\
859761423\
426853791\
713924856\
961537284\
287419635\
345286179\
";

    fn puzzle() -> Grid {
        PUZZLE.parse().expect("valid puzzle grid")
    }

    fn solution() -> Grid {
        SOLUTION.parse().expect("valid solution grid")
    }

    #[test]
    fn test_solves_puzzle_with_unique_solution() {
        let solved = solve(&puzzle()).expect("puzzle is solvable");
        assert_eq!(solved, solution());
    }

    #[test]
    fn test_solution_extends_the_givens() {
        let puzzle = puzzle();
        let solved = solve(&puzzle).expect("puzzle is solvable");
        for pos in nanpure_core::Position::ALL {
            if let Some(digit) = puzzle.get(pos) {
                assert_eq!(solved.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let puzzle = puzzle();
        assert_eq!(solve(&puzzle), solve(&puzzle));
    }

    #[test]
    fn test_already_solved_grid_is_returned_unchanged() {
        let solved = solution();
        assert_eq!(solve(&solved), Some(solved));
    }

    #[test]
    fn test_single_blank_is_filled() {
        let mut grid = solution();
        let pos = Position::new(4, 4);
        let expected = grid.get(pos);
        grid.set(pos, None);
        let solved = solve(&grid).expect("one blank is solvable");
        assert_eq!(solved.get(pos), expected);
    }

    #[test]
    fn test_inconsistent_input_has_no_solution() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(8, 0), Some(Digit::D5));
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_consistent_but_unsolvable_input() {
        // Row 8 holds 1-8 with its last cell blank, and the 9 above blocks
        // the only candidate for that blank.
        let grid: Grid = format!("{}........912345678.", ".".repeat(63))
            .parse()
            .unwrap();
        assert!(grid.is_consistent());
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_input_grid_is_not_mutated() {
        let puzzle = puzzle();
        let before = puzzle.clone();
        let _ = solve(&puzzle);
        assert_eq!(puzzle, before);
    }
}
