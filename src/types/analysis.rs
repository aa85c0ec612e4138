// src/types/analysis.rs
use serde::{Deserialize, Serialize};

/// Four-tier completeness label. Presentation-neutral; consumers apply
/// their own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl SectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::Excellent => "excellent",
            SectionStatus::Good => "good",
            SectionStatus::Fair => "fair",
            SectionStatus::NeedsWork => "needs_work",
        }
    }
}

/// One dimension's score within a report. `length`/`ideal` are set for the
/// text dimensions (headline, about), `count` for the enumerable ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    pub score: u32,
    pub max_score: u32,
    pub status: SectionStatus,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// One entry per scored dimension. A struct rather than a map keeps the key
/// set and the evaluation order fixed by the type; field order here is the
/// order sections are evaluated and displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScores {
    pub photo: SectionScore,
    pub headline: SectionScore,
    pub about: SectionScore,
    pub experience: SectionScore,
    pub skills: SectionScore,
    pub education: SectionScore,
    pub certifications: SectionScore,
    pub projects: SectionScore,
    pub languages: SectionScore,
}

impl SectionScores {
    /// Sections in evaluation order, keyed by their wire name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SectionScore)> + '_ {
        [
            ("photo", &self.photo),
            ("headline", &self.headline),
            ("about", &self.about),
            ("experience", &self.experience),
            ("skills", &self.skills),
            ("education", &self.education),
            ("certifications", &self.certifications),
            ("projects", &self.projects),
            ("languages", &self.languages),
        ]
        .into_iter()
    }

    pub fn total_score(&self) -> u32 {
        self.iter().map(|(_, s)| s.score).sum()
    }

    pub fn total_max_score(&self) -> u32 {
        self.iter().map(|(_, s)| s.max_score).sum()
    }
}

/// Scoring output consumed by a presentation layer. Built fresh per call,
/// never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub sections: SectionScores,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> SectionScore {
        SectionScore {
            score: 8,
            max_score: 10,
            status: SectionStatus::Excellent,
            feedback: "Looks good".to_string(),
            length: None,
            ideal: None,
            count: Some(4),
        }
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&SectionStatus::NeedsWork).unwrap();
        assert_eq!(json, r#""needs_work""#);
        assert_eq!(SectionStatus::NeedsWork.as_str(), "needs_work");
    }

    #[test]
    fn test_section_score_wire_names() {
        let value = serde_json::to_value(sample_section()).unwrap();
        assert_eq!(value["maxScore"], 10);
        assert_eq!(value["count"], 4);
        // Unset optionals are omitted, not null
        assert!(value.get("length").is_none());
    }

    #[test]
    fn test_sections_iterate_in_evaluation_order() {
        let sections = SectionScores {
            photo: sample_section(),
            headline: sample_section(),
            about: sample_section(),
            experience: sample_section(),
            skills: sample_section(),
            education: sample_section(),
            certifications: sample_section(),
            projects: sample_section(),
            languages: sample_section(),
        };
        let names: Vec<_> = sections.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "photo",
                "headline",
                "about",
                "experience",
                "skills",
                "education",
                "certifications",
                "projects",
                "languages"
            ]
        );
        assert_eq!(sections.total_score(), 72);
        assert_eq!(sections.total_max_score(), 90);
    }
}
