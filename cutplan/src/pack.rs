use crate::entities::{PackSolution, PieceInstance, PlacedPiece, Rotation, SheetLayout};
use crate::util::assertions;
use anyhow::{Result, ensure};
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Geometry and rotation policy of the fabric roll sheets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetSpec {
    pub width: f32,
    pub max_length: f32,
    /// False when the grain direction must be respected: no piece may be
    /// rotated, regardless of its own preference.
    pub allow_rotation: bool,
}

impl SheetSpec {
    pub fn new(width: f32, max_length: f32, allow_rotation: bool) -> Result<Self> {
        ensure!(width > 0.0, "fabric width must be positive, got {width}");
        ensure!(
            max_length > 0.0,
            "max fabric length must be positive, got {max_length}"
        );
        Ok(SheetSpec {
            width,
            max_length,
            allow_rotation,
        })
    }
}

/// Row cursor for shelf packing. Passed by value through every placement so
/// the packer stays a pure fold over the piece sequence.
#[derive(Clone, Copy, Debug, Default)]
struct ShelfCursor {
    x: f32,
    y: f32,
    row_height: f32,
}

impl ShelfCursor {
    fn next_shelf(self) -> ShelfCursor {
        ShelfCursor {
            x: 0.0,
            y: self.y + self.row_height,
            row_height: 0.0,
        }
    }

    fn sheet_length(&self) -> f32 {
        self.y + self.row_height
    }
}

/// Packs every piece instance onto one or more sheets using largest-area-first
/// shelf packing.
///
/// Pieces are sorted by inflated area descending; the sort is stable, so
/// equal-area pieces keep their input order. Each piece is tried unrotated
/// first, then rotated 90° where both the spec and the piece permit it, first
/// in the current shelf and then in a fresh one. A piece that fails on a fresh
/// shelf closes the current sheet; the leftovers open the next sheet. A piece
/// that fails on a fresh shelf of an *empty* sheet can never be placed and is
/// reported in [`PackSolution::unplaced`].
pub fn pack(mut instances: Vec<PieceInstance>, spec: &SheetSpec) -> PackSolution {
    instances.sort_by_key(|p| Reverse(OrderedFloat(p.area())));

    let mut sheets: Vec<SheetLayout> = Vec::new();
    let mut unplaced: Vec<PieceInstance> = Vec::new();
    let mut remaining = instances;

    while !remaining.is_empty() {
        let (sheet, leftover) = pack_single_sheet(sheets.len(), remaining, spec);
        remaining = leftover;
        match sheet {
            Some(sheet) => {
                debug_assert!(assertions::no_overlaps(&sheet));
                debug_assert!(assertions::within_bounds(&sheet));
                info!(
                    "[PACK] sheet {} holds {} pieces over {:.1}cm, {:.1}% utilized",
                    sheet.index,
                    sheet.placed.len(),
                    sheet.length,
                    sheet.utilization() * 100.0
                );
                sheets.push(sheet);
            }
            None => {
                // head piece does not fit an empty sheet in any permitted orientation
                let reject = remaining.remove(0);
                warn!(
                    "[PACK] piece {} copy {} ({:.1} x {:.1}cm) fits no sheet, reporting as unplaced",
                    reject.piece_id, reject.copy, reject.width, reject.height
                );
                unplaced.push(reject);
            }
        }
    }

    PackSolution { sheets, unplaced }
}

/// Fills one sheet until a piece no longer fits, preserving piece order.
/// Returns the finalized sheet (`None` if nothing could be placed) and the
/// pieces left for the next sheet.
fn pack_single_sheet(
    index: usize,
    pieces: Vec<PieceInstance>,
    spec: &SheetSpec,
) -> (Option<SheetLayout>, Vec<PieceInstance>) {
    let mut cursor = ShelfCursor::default();
    let mut placed: Vec<PlacedPiece> = Vec::new();
    let mut pieces = pieces.into_iter();

    while let Some(inst) = pieces.next() {
        match place_piece(&inst, spec, cursor) {
            Some((pp, advanced)) => {
                debug!(
                    "[PACK] piece {} copy {} at ({:.1}, {:.1}) rot {}°",
                    pp.piece_id,
                    pp.copy,
                    pp.x,
                    pp.y,
                    pp.rotation.degrees()
                );
                cursor = advanced;
                placed.push(pp);
            }
            None => {
                // no skip-ahead: a piece that fails on a fresh shelf closes
                // the sheet, smaller pieces behind it wait for the next one
                let mut leftover = vec![inst];
                leftover.extend(pieces);
                return (finalize(index, spec, cursor, placed), leftover);
            }
        }
    }

    (finalize(index, spec, cursor, placed), Vec::new())
}

fn finalize(
    index: usize,
    spec: &SheetSpec,
    cursor: ShelfCursor,
    placed: Vec<PlacedPiece>,
) -> Option<SheetLayout> {
    if placed.is_empty() {
        return None;
    }
    Some(SheetLayout {
        index,
        width: spec.width,
        length: cursor.sheet_length(),
        placed,
    })
}

/// Tries the current shelf, then a fresh one.
fn place_piece(
    inst: &PieceInstance,
    spec: &SheetSpec,
    cursor: ShelfCursor,
) -> Option<(PlacedPiece, ShelfCursor)> {
    attempt(inst, spec, cursor).or_else(|| attempt(inst, spec, cursor.next_shelf()))
}

/// Tries to fit the piece at the cursor position, unrotated first, rotated
/// second when permitted.
fn attempt(
    inst: &PieceInstance,
    spec: &SheetSpec,
    cursor: ShelfCursor,
) -> Option<(PlacedPiece, ShelfCursor)> {
    let mut orientations = vec![(inst.width, inst.height, Rotation::None)];
    if spec.allow_rotation && inst.allow_rotation {
        orientations.push((inst.height, inst.width, Rotation::Ninety));
    }

    for (w, h, rotation) in orientations {
        if cursor.x + w <= spec.width && cursor.y + h <= spec.max_length {
            let pp = PlacedPiece {
                piece_id: inst.piece_id,
                copy: inst.copy,
                x: cursor.x,
                y: cursor.y,
                width: w,
                height: h,
                rotation,
            };
            let advanced = ShelfCursor {
                x: cursor.x + w,
                y: cursor.y,
                row_height: f32::max(cursor.row_height, h),
            };
            return Some((pp, advanced));
        }
    }
    None
}
