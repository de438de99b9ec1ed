/// Orientation of a placed piece relative to its nominal dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    None,
    Ninety,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Ninety => 90,
        }
    }
}

/// A piece fixed onto a sheet: origin and effective dimensions after rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPiece {
    pub piece_id: usize,
    pub copy: usize,
    /// Distance from the left sheet edge to the piece's left edge.
    pub x: f32,
    /// Distance from the leading sheet edge to the piece's near edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
}

impl PlacedPiece {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Strict interior overlap; pieces sharing an edge do not overlap.
    pub fn overlaps(&self, other: &PlacedPiece) -> bool {
        f32::max(self.x, other.x) < f32::min(self.x_max(), other.x_max())
            && f32::max(self.y, other.y) < f32::min(self.y_max(), other.y_max())
    }
}

/// A single cut sheet: fixed width, length determined by the packer.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetLayout {
    /// Position of this sheet in the cutting sequence, 0-based.
    pub index: usize,
    pub width: f32,
    pub length: f32,
    pub placed: Vec<PlacedPiece>,
}

impl SheetLayout {
    pub fn area(&self) -> f32 {
        self.width * self.length
    }

    /// Sum of the placed pieces' effective (seam-inflated) areas.
    pub fn used_area(&self) -> f32 {
        self.placed.iter().map(PlacedPiece::area).sum()
    }

    /// Fraction of the sheet covered by pieces, in [0, 1]. Zero-area sheets
    /// report 0 rather than NaN.
    pub fn utilization(&self) -> f32 {
        let area = self.area();
        if area > 0.0 { self.used_area() / area } else { 0.0 }
    }
}
