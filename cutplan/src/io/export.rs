use crate::advisory::{AdvisoryResult, RiskLevel};
use crate::entities::{OptimizationResult, PieceInstance, SheetLayout};
use crate::io::ext_repr::{
    ExtAdvisory, ExtCostBreakdown, ExtPlacedPiece, ExtSheet, ExtSolution, ExtUnplacedPiece,
    ExtWasteAnalysis,
};
use itertools::Itertools;

/// Exports a result out of the library.
pub fn export_solution(result: &OptimizationResult) -> ExtSolution {
    ExtSolution {
        total_fabric_length_cm: result.total_fabric_length,
        utilization_pct: result.utilization_pct,
        sheets: result.sheets.iter().map(export_sheet).collect(),
        waste_analysis: ExtWasteAnalysis {
            waste_area_cm2: result.waste.waste_area,
            waste_percentage: result.waste.waste_pct,
            waste_cost: result.waste.waste_cost,
        },
        cutting_time_estimate_mins: result.cutting_time_mins,
        cost: ExtCostBreakdown {
            labor_cost: result.cost.labor,
            material_cost: result.cost.material,
            waste_cost: result.cost.waste,
            total_cost: result.cost.total,
            cost_per_piece: result.cost.cost_per_piece,
        },
        unplaced_pieces: result.unplaced.iter().map(export_unplaced).collect(),
    }
}

fn export_sheet(sheet: &SheetLayout) -> ExtSheet {
    ExtSheet {
        index: sheet.index as u64,
        width_cm: sheet.width,
        length_cm: sheet.length,
        utilization_pct: sheet.utilization() * 100.0,
        pieces: sheet
            .placed
            .iter()
            .map(|p| ExtPlacedPiece {
                piece_id: p.piece_id as u64,
                copy: p.copy as u64,
                x_cm: p.x,
                y_cm: p.y,
                width_cm: p.width,
                height_cm: p.height,
                rotation_deg: p.rotation.degrees(),
            })
            .collect_vec(),
    }
}

fn export_unplaced(piece: &PieceInstance) -> ExtUnplacedPiece {
    ExtUnplacedPiece {
        piece_id: piece.piece_id as u64,
        copy: piece.copy as u64,
        width_cm: piece.width,
        height_cm: piece.height,
    }
}

pub fn export_advisory(advisory: &AdvisoryResult) -> ExtAdvisory {
    let risk_level = match advisory.risk {
        RiskLevel::Green => "GREEN",
        RiskLevel::Amber => "AMBER",
        RiskLevel::Red => "RED",
    };
    ExtAdvisory {
        efficiency_score: advisory.score,
        risk_level: risk_level.to_string(),
        recommendations: advisory.recommendations.clone(),
        optimization_tips: advisory.tips.clone(),
    }
}
