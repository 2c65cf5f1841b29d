//! Mock training reports and the viewer state around them.

use std::collections::HashSet;

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RiskLevel::Low => "✔",
            RiskLevel::Medium => "⚠",
            RiskLevel::High => "✖",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub id: &'static str,
    pub athlete_name: &'static str,
    pub athlete_photo: &'static str,
    pub date: &'static str,
    pub session_type: &'static str,
    pub risk_level: RiskLevel,
    pub insights: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

impl Report {
    /// `MM/DD/YYYY`, or the raw string when it isn't an ISO date.
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .map(|date| date.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }

    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.athlete_name.to_lowercase().contains(&term)
            || self.session_type.to_lowercase().contains(&term)
            || self
                .insights
                .iter()
                .any(|insight| insight.to_lowercase().contains(&term))
    }
}

pub const MOCK_REPORTS: &[Report] = &[
    Report {
        id: "1",
        athlete_name: "John Smith",
        athlete_photo: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80",
        date: "2025-03-15",
        session_type: "Strength Training",
        risk_level: RiskLevel::Medium,
        insights: &[
            "Asymmetric knee loading detected",
            "Core stability improved by 15%",
            "Recovery metrics within optimal range",
        ],
        recommendations: &[
            "Focus on bilateral exercises",
            "Increase mobility work",
            "Maintain current recovery protocol",
        ],
    },
    Report {
        id: "2",
        athlete_name: "Sarah Johnson",
        athlete_photo: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80",
        date: "2025-03-14",
        session_type: "Speed & Agility",
        risk_level: RiskLevel::Low,
        insights: &[
            "Peak acceleration improved",
            "Optimal movement patterns maintained",
            "No significant fatigue indicators",
        ],
        recommendations: &[
            "Progress to advanced drills",
            "Continue current training load",
            "Monitor recovery markers",
        ],
    },
    Report {
        id: "3",
        athlete_name: "Marcus Lee",
        athlete_photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80",
        date: "2025-03-12",
        session_type: "Plyometrics",
        risk_level: RiskLevel::High,
        insights: &[
            "Landing forces exceed baseline by 22%",
            "Left ankle stiffness elevated",
            "Fatigue markers rising late in session",
        ],
        recommendations: &[
            "Reduce jump volume for one week",
            "Add ankle mobility before sessions",
            "Schedule a physio assessment",
        ],
    },
];

pub fn filter_reports<'a>(reports: &'a [Report], term: &str) -> Vec<&'a Report> {
    reports.iter().filter(|report| report.matches(term)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Summary,
    Movement,
    Risk,
    History,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::Summary,
        ReportSection::Movement,
        ReportSection::Risk,
        ReportSection::History,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportSection::Summary => "Performance Summary",
            ReportSection::Movement => "Movement Analysis",
            ReportSection::Risk => "Risk Assessment",
            ReportSection::History => "Historical Performance",
        }
    }
}

/// Which detail sections are open. Summary starts open.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandedSections(HashSet<ReportSection>);

impl Default for ExpandedSections {
    fn default() -> Self {
        Self(HashSet::from([ReportSection::Summary]))
    }
}

impl ExpandedSections {
    pub fn toggle(&mut self, section: ReportSection) {
        if !self.0.remove(&section) {
            self.0.insert(section);
        }
    }

    pub fn is_open(&self, section: ReportSection) -> bool {
        self.0.contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_keeps_everything() {
        assert_eq!(filter_reports(MOCK_REPORTS, "").len(), MOCK_REPORTS.len());
        assert_eq!(filter_reports(MOCK_REPORTS, "   ").len(), MOCK_REPORTS.len());
    }

    #[test]
    fn search_is_case_insensitive_over_name_session_and_insights() {
        let by_name: Vec<_> = filter_reports(MOCK_REPORTS, "sarah").iter().map(|r| r.id).collect();
        assert_eq!(by_name, vec!["2"]);

        let by_session: Vec<_> = filter_reports(MOCK_REPORTS, "STRENGTH").iter().map(|r| r.id).collect();
        assert_eq!(by_session, vec!["1"]);

        let by_insight: Vec<_> = filter_reports(MOCK_REPORTS, "ankle").iter().map(|r| r.id).collect();
        assert_eq!(by_insight, vec!["3"]);

        assert!(filter_reports(MOCK_REPORTS, "swimming").is_empty());
    }

    #[test]
    fn dates_render_us_style() {
        let report = &MOCK_REPORTS[0];
        assert_eq!(report.display_date(), "03/15/2025");

        let odd = Report {
            date: "sometime in March",
            ..report.clone()
        };
        assert_eq!(odd.display_date(), "sometime in March");
    }

    #[test]
    fn summary_starts_open_and_sections_toggle() {
        let mut sections = ExpandedSections::default();
        assert!(sections.is_open(ReportSection::Summary));
        assert!(!sections.is_open(ReportSection::Risk));

        sections.toggle(ReportSection::Risk);
        sections.toggle(ReportSection::Summary);
        assert!(sections.is_open(ReportSection::Risk));
        assert!(!sections.is_open(ReportSection::Summary));
    }

    #[test]
    fn risk_levels_have_distinct_styles() {
        assert_eq!(RiskLevel::High.color_class(), "risk-high");
        assert_ne!(RiskLevel::Low.icon(), RiskLevel::Medium.icon());
        assert_eq!(RiskLevel::Medium.label(), "Medium");
    }
}
