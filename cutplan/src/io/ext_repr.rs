use serde::{Deserialize, Serialize};

/// JSON representation of a cut request, as supplied by the
/// order-management collaborator. All lengths in centimeters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutRequest {
    pub pieces: Vec<ExtPiece>,
    pub fabric_width_cm: f32,
    #[serde(default = "default_max_fabric_length")]
    pub max_fabric_length_cm: f32,
    #[serde(default = "default_seam_allowance")]
    pub seam_allowance_cm: f32,
    #[serde(default = "default_grain_direction")]
    pub grain_direction_required: bool,
}

fn default_max_fabric_length() -> f32 {
    1000.0
}

fn default_seam_allowance() -> f32 {
    0.5
}

fn default_grain_direction() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    pub id: u64,
    pub name: String,
    pub size: String,
    pub width_cm: f32,
    pub height_cm: f32,
    pub quantity: u64,
    /// Set false to pin this piece to its nominal orientation even when the
    /// request allows rotation.
    #[serde(default = "default_rotation")]
    pub rotation: bool,
}

fn default_rotation() -> bool {
    true
}

/// JSON representation of an optimization result.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub total_fabric_length_cm: f32,
    pub utilization_pct: f32,
    pub sheets: Vec<ExtSheet>,
    pub waste_analysis: ExtWasteAnalysis,
    pub cutting_time_estimate_mins: f32,
    pub cost: ExtCostBreakdown,
    pub unplaced_pieces: Vec<ExtUnplacedPiece>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheet {
    pub index: u64,
    pub width_cm: f32,
    pub length_cm: f32,
    pub utilization_pct: f32,
    pub pieces: Vec<ExtPlacedPiece>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPiece {
    pub piece_id: u64,
    pub copy: u64,
    pub x_cm: f32,
    pub y_cm: f32,
    pub width_cm: f32,
    pub height_cm: f32,
    /// 0 or 90.
    pub rotation_deg: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtUnplacedPiece {
    pub piece_id: u64,
    pub copy: u64,
    pub width_cm: f32,
    pub height_cm: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtWasteAnalysis {
    pub waste_area_cm2: f32,
    pub waste_percentage: f32,
    pub waste_cost: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCostBreakdown {
    pub labor_cost: f32,
    pub material_cost: f32,
    pub waste_cost: f32,
    pub total_cost: f32,
    pub cost_per_piece: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAdvisory {
    pub efficiency_score: u32,
    /// GREEN, AMBER or RED.
    pub risk_level: String,
    pub recommendations: Vec<String>,
    pub optimization_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply_when_fields_are_omitted() {
        let json = r#"{
            "pieces": [
                {"id": 1, "name": "front panel", "size": "M",
                 "width_cm": 30.0, "height_cm": 40.0, "quantity": 2}
            ],
            "fabric_width_cm": 160.0
        }"#;
        let req: ExtCutRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.max_fabric_length_cm, 1000.0);
        assert_eq!(req.seam_allowance_cm, 0.5);
        assert!(req.grain_direction_required);
        assert!(req.pieces[0].rotation);
    }
}
