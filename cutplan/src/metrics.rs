use crate::entities::{CostBreakdown, PackSolution, WasteAnalysis};
use serde::{Deserialize, Serialize};

/// How the sheets will be cut; drives the time-estimate constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuttingMethod {
    Manual,
    Laser,
    DieCut,
}

impl CuttingMethod {
    /// (minutes per piece, setup minutes per sheet).
    ///
    /// Die cutting carries the highest fixed setup (tooling change-over) but
    /// the lowest marginal cost per piece.
    pub fn time_constants(self) -> (f32, f32) {
        match self {
            CuttingMethod::Manual => (2.5, 5.0),
            CuttingMethod::Laser => (0.8, 3.0),
            CuttingMethod::DieCut => (0.3, 10.0),
        }
    }
}

/// Cost rates supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostParams {
    /// Labor rate, currency units per hour.
    pub hourly_rate: f32,
    /// Fabric cost, currency units per cm² of roll.
    pub fabric_cost_per_cm2: f32,
}

impl Default for CostParams {
    fn default() -> Self {
        CostParams {
            hourly_rate: 150.0,
            fabric_cost_per_cm2: 0.05,
        }
    }
}

/// Estimated cutting time in minutes: marginal time per piece plus a fixed
/// setup per sheet.
pub fn cutting_time_mins(piece_count: usize, sheet_count: usize, method: CuttingMethod) -> f32 {
    let (per_piece, per_sheet) = method.time_constants();
    piece_count as f32 * per_piece + sheet_count as f32 * per_sheet
}

/// Waste of the consumed fabric: area not covered by any piece, its share of
/// the total sheet area, and its cost at the fabric rate. All ratios are 0
/// when no fabric is consumed.
pub fn waste_analysis(solution: &PackSolution, params: &CostParams) -> WasteAnalysis {
    let sheet_area = solution.total_sheet_area();
    let waste_area = sheet_area - solution.total_used_area();
    let waste_pct = if sheet_area > 0.0 {
        waste_area / sheet_area * 100.0
    } else {
        0.0
    };
    WasteAnalysis {
        waste_area,
        waste_pct,
        waste_cost: waste_area * params.fabric_cost_per_cm2,
    }
}

/// Labor (time at the hourly rate), material (consumed fabric at the area
/// rate) and waste cost, totaled and normalized per placed piece.
pub fn cost_breakdown(
    solution: &PackSolution,
    cutting_time_mins: f32,
    params: &CostParams,
) -> CostBreakdown {
    let labor = cutting_time_mins / 60.0 * params.hourly_rate;
    let material = solution.total_sheet_area() * params.fabric_cost_per_cm2;
    let waste = waste_analysis(solution, params).waste_cost;
    let total = labor + material + waste;
    let piece_count = solution.placed_count();
    let cost_per_piece = if piece_count > 0 {
        total / piece_count as f32
    } else {
        0.0
    };
    CostBreakdown {
        labor,
        material,
        waste,
        total,
        cost_per_piece,
    }
}
