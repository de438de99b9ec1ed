use crate::entities::piece::PieceInstance;
use crate::entities::sheet::SheetLayout;

/// Outcome of a packing pass: the finished sheets plus any pieces no sheet
/// could accept. A partial layout is still operationally useful, so an
/// incomplete pack is reported here rather than as an error.
#[derive(Clone, Debug, PartialEq)]
pub struct PackSolution {
    pub sheets: Vec<SheetLayout>,
    /// Pieces that fit no sheet in any permitted orientation.
    pub unplaced: Vec<PieceInstance>,
}

impl PackSolution {
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placed.len()).sum()
    }

    /// Total fabric length consumed, over all sheets.
    pub fn total_length(&self) -> f32 {
        self.sheets.iter().map(|s| s.length).sum()
    }

    pub fn total_sheet_area(&self) -> f32 {
        self.sheets.iter().map(SheetLayout::area).sum()
    }

    pub fn total_used_area(&self) -> f32 {
        self.sheets.iter().map(SheetLayout::used_area).sum()
    }

    /// Utilization aggregated over all sheets combined, in percent.
    /// Never an average of per-sheet utilizations.
    pub fn utilization_pct(&self) -> f32 {
        let total = self.total_sheet_area();
        if total > 0.0 {
            self.total_used_area() / total * 100.0
        } else {
            0.0
        }
    }
}

/// Waste share of the consumed fabric.
#[derive(Clone, Debug, PartialEq)]
pub struct WasteAnalysis {
    pub waste_area: f32,
    pub waste_pct: f32,
    pub waste_cost: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CostBreakdown {
    pub labor: f32,
    pub material: f32,
    pub waste: f32,
    pub total: f32,
    /// Total cost divided by the placed piece count, 0 when nothing placed.
    pub cost_per_piece: f32,
}

/// Immutable result of one optimization call. Computed once, never mutated,
/// only consumed.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationResult {
    pub total_fabric_length: f32,
    pub utilization_pct: f32,
    pub sheets: Vec<SheetLayout>,
    pub waste: WasteAnalysis,
    pub cutting_time_mins: f32,
    pub cost: CostBreakdown,
    /// Pieces that fit no sheet, surfaced explicitly rather than logged away.
    pub unplaced: Vec<PieceInstance>,
}
