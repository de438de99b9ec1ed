use crate::entities::{PieceInstance, PieceType};
use anyhow::{Result, ensure};

/// Expands the deduplicated piece list into individual copies, inflating each
/// by `2 × seam_allowance` in both dimensions.
///
/// Output order is the input order, copies in ascending index; the packer's
/// tie-break rules depend on this order being stable.
pub fn expand_pieces(pieces: &[PieceType], seam_allowance: f32) -> Result<Vec<PieceInstance>> {
    ensure!(
        seam_allowance >= 0.0,
        "seam allowance must be non-negative, got {seam_allowance}"
    );

    let total_qty: usize = pieces.iter().map(|p| p.quantity).sum();
    let mut instances = Vec::with_capacity(total_qty);

    for p in pieces {
        ensure!(
            p.width > 0.0 && p.height > 0.0,
            "piece {} ({}) has non-positive dimensions: {} x {}",
            p.id,
            p.name,
            p.width,
            p.height
        );
        ensure!(p.quantity > 0, "piece {} ({}) has zero quantity", p.id, p.name);

        for copy in 0..p.quantity {
            instances.push(PieceInstance {
                piece_id: p.id,
                copy,
                width: p.width + 2.0 * seam_allowance,
                height: p.height + 2.0 * seam_allowance,
                allow_rotation: p.allow_rotation,
            });
        }
    }

    Ok(instances)
}
