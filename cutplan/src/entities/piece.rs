use anyhow::{Result, ensure};

/// A garment piece type from the bill of pieces.
///
/// Dimensions are nominal centimeters, before any seam allowance is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceType {
    pub id: usize,
    pub name: String,
    /// Size label as printed on the marker (e.g. "S", "M", "XL").
    pub size: String,
    pub width: f32,
    pub height: f32,
    pub quantity: usize,
    /// Whether this piece tolerates a 90° rotation, provided the request
    /// allows rotation at all (i.e. the grain direction is not enforced).
    pub allow_rotation: bool,
}

impl PieceType {
    pub fn new(
        id: usize,
        name: String,
        size: String,
        width: f32,
        height: f32,
        quantity: usize,
        allow_rotation: bool,
    ) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "piece {id} ({name}) has non-positive dimensions: {width} x {height}"
        );
        ensure!(quantity > 0, "piece {id} ({name}) has zero quantity");
        Ok(PieceType {
            id,
            name,
            size,
            width,
            height,
            quantity,
            allow_rotation,
        })
    }

    /// Nominal (pre-allowance) area of a single copy.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// One physical copy of a [`PieceType`], inflated by the seam allowance.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceInstance {
    /// Id of the originating [`PieceType`]. Back-reference for aggregation
    /// and reporting only, carries no ownership.
    pub piece_id: usize,
    /// Copy index within the piece type, 0-based.
    pub copy: usize,
    pub width: f32,
    pub height: f32,
    pub allow_rotation: bool,
}

impl PieceInstance {
    /// Inflated area, seam allowance included.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(PieceType::new(0, "front".into(), "M".into(), 0.0, 40.0, 1, true).is_err());
        assert!(PieceType::new(0, "front".into(), "M".into(), 30.0, -1.0, 1, true).is_err());
    }

    #[test]
    fn rejects_zero_quantity() {
        assert!(PieceType::new(0, "front".into(), "M".into(), 30.0, 40.0, 0, true).is_err());
    }
}
