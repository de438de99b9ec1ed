use crate::advisory::Complexity;
use crate::entities::{OptimizationResult, PieceType};
use crate::expand::expand_pieces;
use crate::metrics::{CostParams, CuttingMethod, cost_breakdown, cutting_time_mins, waste_analysis};
use crate::pack::{SheetSpec, pack};
use crate::util::assertions;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

/// One optimization request, as handed over by the order-management side.
#[derive(Clone, Debug, PartialEq)]
pub struct CutRequest {
    pub pieces: Vec<PieceType>,
    pub fabric_width: f32,
    pub max_fabric_length: f32,
    pub seam_allowance: f32,
    /// When true (the default) no piece may be rotated.
    pub grain_direction_required: bool,
}

/// Tunables that are not part of the request itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CutConfig {
    pub cutting_method: CuttingMethod,
    pub cost: CostParams,
    /// Complexity hint forwarded to the advisory scorer.
    pub piece_complexity: Complexity,
}

impl Default for CutConfig {
    fn default() -> Self {
        CutConfig {
            cutting_method: CuttingMethod::Manual,
            cost: CostParams::default(),
            piece_complexity: Complexity::Medium,
        }
    }
}

/// Runs the full pipeline: expand -> pack -> metrics.
///
/// Validation failures reject immediately with no partial computation.
/// Packing exhaustion does not: pieces that fit no sheet are reported in
/// [`OptimizationResult::unplaced`] alongside the partial layout.
///
/// Pure and idempotent: identical input produces an identical result down to
/// the placement coordinates.
pub fn optimize(request: &CutRequest, config: &CutConfig) -> Result<OptimizationResult> {
    let spec = SheetSpec::new(
        request.fabric_width,
        request.max_fabric_length,
        !request.grain_direction_required,
    )?;
    let instances = expand_pieces(&request.pieces, request.seam_allowance)?;
    let solution = pack(instances, &spec);
    debug_assert!(assertions::conservation_holds(&request.pieces, &solution));

    let time = cutting_time_mins(
        solution.placed_count(),
        solution.sheets.len(),
        config.cutting_method,
    );
    let waste = waste_analysis(&solution, &config.cost);
    let cost = cost_breakdown(&solution, time, &config.cost);

    info!(
        "[OPT] {} pieces on {} sheet(s), {:.1}cm of fabric, {:.1}% utilized, {} unplaced",
        solution.placed_count(),
        solution.sheets.len(),
        solution.total_length(),
        solution.utilization_pct(),
        solution.unplaced.len()
    );

    Ok(OptimizationResult {
        total_fabric_length: solution.total_length(),
        utilization_pct: solution.utilization_pct(),
        cutting_time_mins: time,
        waste,
        cost,
        sheets: solution.sheets,
        unplaced: solution.unplaced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn piece(id: usize, width: f32, height: f32, quantity: usize) -> PieceType {
        PieceType {
            id,
            name: format!("piece_{id}"),
            size: "M".into(),
            width,
            height,
            quantity,
            allow_rotation: true,
        }
    }

    fn request(pieces: Vec<PieceType>) -> CutRequest {
        CutRequest {
            pieces,
            fabric_width: 160.0,
            max_fabric_length: 1000.0,
            seam_allowance: 0.5,
            grain_direction_required: true,
        }
    }

    #[test]
    fn zero_pieces_yield_an_empty_result() {
        let result = optimize(&request(vec![]), &CutConfig::default()).unwrap();
        assert!(result.sheets.is_empty());
        assert_eq!(result.utilization_pct, 0.0);
        assert_eq!(result.cost.total, 0.0);
        assert_eq!(result.total_fabric_length, 0.0);
    }

    #[test]
    fn simple_single_sheet_scenario() {
        let mut req = request(vec![piece(0, 30.0, 40.0, 4)]);
        req.seam_allowance = 0.0;
        let result = optimize(&req, &CutConfig::default()).unwrap();

        assert_eq!(result.sheets.len(), 1);
        assert!(result.sheets[0].length <= 80.0);
        assert!(result.utilization_pct > 0.0);
        assert!(result.unplaced.is_empty());
    }

    #[test]
    fn invalid_input_rejects_before_packing() {
        assert!(optimize(&request(vec![piece(0, 30.0, 0.0, 1)]), &CutConfig::default()).is_err());

        let mut req = request(vec![piece(0, 30.0, 40.0, 1)]);
        req.fabric_width = 0.0;
        assert!(optimize(&req, &CutConfig::default()).is_err());
    }

    #[test]
    fn oversized_piece_is_reported_not_fatal() {
        let result = optimize(
            &request(vec![piece(0, 200.0, 50.0, 1), piece(1, 30.0, 40.0, 2)]),
            &CutConfig::default(),
        )
        .unwrap();

        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.unplaced[0].piece_id, 0);
        assert_eq!(result.sheets[0].placed.len(), 2);
    }

    #[test]
    fn identical_requests_produce_identical_results() {
        let req = request(vec![piece(0, 30.0, 40.0, 6), piece(1, 25.0, 35.0, 4)]);
        let config = CutConfig::default();
        let a = optimize(&req, &config).unwrap();
        let b = optimize(&req, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fabric_length_grows_monotonically_with_seam_allowance() {
        let pieces = vec![piece(0, 30.0, 40.0, 6), piece(1, 25.0, 35.0, 4)];
        let mut last = 0.0;
        for allowance in [0.0, 0.5, 1.0, 2.0] {
            let mut req = request(pieces.clone());
            req.seam_allowance = allowance;
            let result = optimize(&req, &CutConfig::default()).unwrap();
            assert!(result.total_fabric_length >= last);
            last = result.total_fabric_length;
        }
    }

    #[test]
    fn total_fabric_length_sums_the_sheets() {
        let mut req = request(vec![piece(0, 150.0, 90.0, 3)]);
        req.max_fabric_length = 100.0;
        let result = optimize(&req, &CutConfig::default()).unwrap();

        assert_eq!(result.sheets.len(), 3);
        let summed: f32 = result.sheets.iter().map(|s| s.length).sum();
        assert!(approx_eq!(f32, result.total_fabric_length, summed));
    }
}
