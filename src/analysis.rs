//! Mock injury-risk analysis. The score climbs by random steps until it hits
//! 100, then a fixed set of feedback lines is produced.

pub const TICK_MS: u32 = 100;
pub const MAX_STEP: f64 = 5.0;
pub const MAX_SCORE: f64 = 100.0;

pub const MOVEMENT_FEEDBACK: [&str; 4] = [
    "Potential knee strain detected",
    "Asymmetric landing pattern observed",
    "Core stability needs improvement",
    "Consider adjusting movement pattern",
];

pub const RECOMMENDATIONS: [&str; 3] = [
    "Maintain proper form during exercises",
    "Focus on controlled movements",
    "Keep core engaged throughout",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RiskAnalysis {
    score: f64,
    in_progress: bool,
    feedback: Vec<&'static str>,
}

impl RiskAnalysis {
    pub fn start(&mut self) {
        *self = Self {
            in_progress: true,
            ..Self::default()
        };
    }

    /// Adds one step. `unit` is a random draw from `[0, 1)`. Returns `true`
    /// on the tick that completes the run.
    pub fn advance(&mut self, unit: f64) -> bool {
        if !self.in_progress {
            return false;
        }
        let step = unit.clamp(0.0, 1.0) * MAX_STEP;
        self.score = (self.score + step).min(MAX_SCORE);
        if self.score >= MAX_SCORE {
            self.in_progress = false;
            self.feedback = MOVEMENT_FEEDBACK.to_vec();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn display_score(&self) -> u32 {
        self.score.round() as u32
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn feedback(&self) -> &[&'static str] {
        &self.feedback
    }

    pub fn status_label(&self) -> &'static str {
        if self.in_progress {
            "Analysis in progress..."
        } else {
            "Ready for analysis"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_analysis_does_not_move() {
        let mut analysis = RiskAnalysis::default();
        assert!(!analysis.advance(0.9));
        assert_eq!(analysis.score(), 0.0);
        assert_eq!(analysis.status_label(), "Ready for analysis");
    }

    #[test]
    fn completes_at_one_hundred() {
        let mut analysis = RiskAnalysis::default();
        analysis.start();

        let mut ticks = 0;
        while !analysis.advance(0.99) {
            ticks += 1;
            assert!(analysis.feedback().is_empty());
            assert!(ticks < 100);
        }
        assert_eq!(analysis.score(), MAX_SCORE);
        assert_eq!(analysis.display_score(), 100);
        assert!(!analysis.in_progress());
        assert_eq!(analysis.feedback(), &MOVEMENT_FEEDBACK[..]);
    }

    #[test]
    fn score_never_exceeds_cap() {
        let mut analysis = RiskAnalysis::default();
        analysis.start();
        for _ in 0..40 {
            analysis.advance(1.0);
        }
        assert_eq!(analysis.score(), MAX_SCORE);
        assert!(!analysis.advance(1.0));
    }

    #[test]
    fn restart_resets_progress() {
        let mut analysis = RiskAnalysis::default();
        analysis.start();
        analysis.advance(0.6);
        analysis.advance(0.6);
        assert_eq!(analysis.display_score(), 6);

        analysis.start();
        assert_eq!(analysis.score(), 0.0);
        assert!(analysis.in_progress());
        assert_eq!(analysis.status_label(), "Analysis in progress...");
    }

    #[test]
    fn clear_drops_feedback() {
        let mut analysis = RiskAnalysis::default();
        analysis.start();
        while !analysis.advance(1.0) {}
        analysis.clear();
        assert_eq!(analysis, RiskAnalysis::default());
    }
}
