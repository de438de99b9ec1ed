//! Invariant checks used in `debug_assert!` by the packer and directly by
//! tests. All of them hold for every solution the packer produces.

use crate::entities::{PackSolution, PieceType, SheetLayout};
use float_cmp::approx_eq;
use itertools::Itertools;

/// No two placed pieces on the sheet share interior area.
pub fn no_overlaps(sheet: &SheetLayout) -> bool {
    sheet
        .placed
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.overlaps(b))
}

/// Every placed piece lies fully within [0, width] x [0, length].
pub fn within_bounds(sheet: &SheetLayout) -> bool {
    sheet.placed.iter().all(|p| {
        p.x >= 0.0 && p.y >= 0.0 && p.x_max() <= sheet.width && p.y_max() <= sheet.length
    })
}

/// Placed copies plus explicitly unplaced copies account for every requested
/// copy, per piece type and in total nominal area.
pub fn conservation_holds(pieces: &[PieceType], solution: &PackSolution) -> bool {
    let requested: usize = pieces.iter().map(|p| p.quantity).sum();
    let accounted = solution.placed_count() + solution.unplaced.len();
    if requested != accounted {
        return false;
    }

    let nominal_area = |piece_id: usize| -> f32 {
        pieces
            .iter()
            .find(|p| p.id == piece_id)
            .map(PieceType::area)
            .unwrap_or(0.0)
    };

    let requested_area: f32 = pieces.iter().map(|p| p.area() * p.quantity as f32).sum();
    let placed_area: f32 = solution
        .sheets
        .iter()
        .flat_map(|s| &s.placed)
        .map(|p| nominal_area(p.piece_id))
        .sum();
    let unplaced_area: f32 = solution
        .unplaced
        .iter()
        .map(|p| nominal_area(p.piece_id))
        .sum();

    approx_eq!(
        f32,
        requested_area,
        placed_area + unplaced_area,
        epsilon = 1e-3 * requested_area.max(1.0)
    )
}
