use crate::entities::PieceType;
use crate::io::ext_repr::{ExtCutRequest, ExtPiece};
use crate::optimize::CutRequest;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Converts the external request into the internal one, rejecting invalid
/// input before any packing is attempted.
pub fn import_request(ext: &ExtCutRequest) -> Result<CutRequest> {
    ensure!(
        ext.fabric_width_cm > 0.0,
        "fabric width must be positive, got {}",
        ext.fabric_width_cm
    );
    ensure!(
        ext.max_fabric_length_cm > 0.0,
        "max fabric length must be positive, got {}",
        ext.max_fabric_length_cm
    );
    ensure!(
        ext.seam_allowance_cm >= 0.0,
        "seam allowance must be non-negative, got {}",
        ext.seam_allowance_cm
    );
    ensure!(
        ext.pieces.iter().map(|p| p.id).all_unique(),
        "piece ids must be unique"
    );

    let pieces = ext
        .pieces
        .iter()
        .map(import_piece)
        .collect::<Result<Vec<_>>>()?;

    Ok(CutRequest {
        pieces,
        fabric_width: ext.fabric_width_cm,
        max_fabric_length: ext.max_fabric_length_cm,
        seam_allowance: ext.seam_allowance_cm,
        grain_direction_required: ext.grain_direction_required,
    })
}

fn import_piece(ext: &ExtPiece) -> Result<PieceType> {
    ensure!(
        ext.quantity > 0,
        "piece {} ({}) has zero quantity",
        ext.id,
        ext.name
    );
    PieceType::new(
        ext.id as usize,
        ext.name.clone(),
        ext.size.clone(),
        ext.width_cm,
        ext.height_cm,
        ext.quantity as usize,
        ext.rotation,
    )
}
