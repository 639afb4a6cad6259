//! Board status classification.

/// The discrete status of the board, recomputed after every mutating
/// operation.
///
/// This is derived data: the engine never stores anything in it that cannot
/// be recomputed from the grids and the most recent operation. The rendering
/// layer maps each variant to a banner message and digit colouring.
///
/// [`Won`](Self::Won) is terminal for edits: once reached, digit entry,
/// removal, and undo are rejected until a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum BoardState {
    /// No rule violations; play continues.
    Ok,
    /// The most recently placed digit duplicates another in its row,
    /// column, or box.
    InvalidPlacement,
    /// Some house contains a duplicate (not necessarily at the last edit).
    InvalidBoard,
    /// The board is complete and valid.
    Won,
    /// A check succeeded; all filled cells are locked in as givens.
    Checked,
    /// A check failed: some filled cell disagrees with the solution.
    CheckFailed,
    /// A hint filled one empty cell from the solution.
    HintGiven,
    /// A hint rolled mistaken moves back until the board was clean again.
    HintFixed,
}
