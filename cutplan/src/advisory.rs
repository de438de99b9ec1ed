use serde::{Deserialize, Serialize};

/// Production-gating risk level. Ordered by severity so the worse of two
/// levels is simply the maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Green,
    Amber,
    Red,
}

/// Piece-complexity hint supplied by the caller (curved panels, notches,
/// matched plaids). Not derived from the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Efficiency assessment of a finished layout.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvisoryResult {
    /// Clamped to [0, 100].
    pub score: u32,
    pub risk: RiskLevel,
    pub recommendations: Vec<String>,
    pub tips: Vec<String>,
}

/// Batch size the cutting time is normalized against, so the time rule scores
/// minutes-per-piece rather than absolute minutes.
const BASELINE_PIECE_COUNT: f32 = 10.0;

/// Scores a layout from its metrics with a fixed rule table.
///
/// Deterministic by construction. The final risk level is the worse of the
/// score-derived level (>= 80 green, >= 60 amber, else red) and the strongest
/// escalation raised by an individual rule, so a high score can never mask a
/// red waste signal.
pub fn assess(
    utilization_pct: f32,
    waste_pct: f32,
    cutting_time_mins: f32,
    complexity: Complexity,
) -> AdvisoryResult {
    let mut score: i32 = 0;
    let mut escalation = RiskLevel::Green;
    let mut recommendations = Vec::new();
    let mut tips = Vec::new();

    // utilization: the 85% boundary is inclusive
    if utilization_pct >= 85.0 {
        score += 40;
        recommendations.push("Excellent fabric utilization".to_string());
    } else if utilization_pct >= 75.0 {
        score += 30;
        tips.push("Rotating pieces may close the remaining gaps".to_string());
    } else {
        score += 10;
        escalation = escalation.max(RiskLevel::Amber);
        recommendations.push(format!(
            "Utilization of {utilization_pct:.1}% is below target"
        ));
        tips.push("Review the layout or consider a different fabric width".to_string());
    }

    if waste_pct <= 10.0 {
        score += 30;
    } else if waste_pct <= 20.0 {
        score += 20;
        tips.push("Optimize piece placement to reduce offcuts".to_string());
    } else {
        score += 5;
        escalation = escalation.max(RiskLevel::Red);
        recommendations.push(format!("Waste of {waste_pct:.1}% exceeds the 20% threshold"));
    }

    let mins_per_piece = cutting_time_mins / BASELINE_PIECE_COUNT;
    if mins_per_piece <= 2.0 {
        score += 20;
    } else if mins_per_piece <= 4.0 {
        score += 15;
    } else {
        score += 5;
        tips.push("Batch similar pieces to cut down on repositioning".to_string());
    }

    if complexity == Complexity::High {
        score -= 10;
        tips.push("Allow extra handling time for complex pieces".to_string());
    }

    let score = score.clamp(0, 100) as u32;
    let score_risk = match score {
        80.. => RiskLevel::Green,
        60.. => RiskLevel::Amber,
        _ => RiskLevel::Red,
    };

    AdvisoryResult {
        score,
        risk: score_risk.max(escalation),
        recommendations,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn strong_layout_scores_green() {
        let adv = assess(90.0, 8.0, 15.0, Complexity::Low);
        assert_eq!(adv.score, 90);
        assert_eq!(adv.risk, RiskLevel::Green);
        assert!(adv.recommendations.iter().any(|r| r.contains("Excellent")));
    }

    #[test]
    fn utilization_boundary_is_inclusive() {
        // exactly 85.0% must earn the top utilization bonus
        let at_boundary = assess(85.0, 8.0, 15.0, Complexity::Low);
        let below = assess(84.9, 8.0, 15.0, Complexity::Low);
        assert_eq!(at_boundary.score, 90);
        assert_eq!(below.score, 80);
    }

    #[test]
    fn waste_escalation_survives_a_decent_score() {
        // 40 + 5 + 20 = 65: amber by score, but the waste rule forces red
        let adv = assess(90.0, 25.0, 15.0, Complexity::Low);
        assert_eq!(adv.score, 65);
        assert_eq!(adv.risk, RiskLevel::Red);
    }

    #[test]
    fn high_complexity_penalizes_and_tips() {
        let low = assess(90.0, 8.0, 15.0, Complexity::Low);
        let high = assess(90.0, 8.0, 15.0, Complexity::High);
        assert_eq!(high.score + 10, low.score);
        assert!(high.tips.iter().any(|t| t.contains("handling")));
    }

    #[test_case(15.0, 20 ; "fast cutting earns the full time bonus")]
    #[test_case(35.0, 15 ; "moderate cutting earns the partial bonus")]
    #[test_case(90.0, 5 ; "slow cutting earns the minimum")]
    fn time_rule_scores_minutes_per_piece(cutting_time_mins: f32, expected_bonus: u32) {
        let base = assess(90.0, 8.0, 15.0, Complexity::Low).score - 20;
        let adv = assess(90.0, 8.0, cutting_time_mins, Complexity::Low);
        assert_eq!(adv.score, base + expected_bonus);
    }

    #[test]
    fn worst_case_score_stays_in_range() {
        let adv = assess(10.0, 50.0, 200.0, Complexity::High);
        assert_eq!(adv.score, 10);
        assert_eq!(adv.risk, RiskLevel::Red);
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = assess(78.0, 12.0, 42.0, Complexity::Medium);
        let b = assess(78.0, 12.0, 42.0, Complexity::Medium);
        assert_eq!(a, b);
    }
}
