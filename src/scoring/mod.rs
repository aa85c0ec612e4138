// src/scoring/mod.rs
//
// Profile completeness scoring. Pure and deterministic: the same
// ProfileRecord always produces the same AnalysisReport, no I/O, no clock.

use thiserror::Error;

use crate::types::{AnalysisReport, ProfileRecord, SectionScore, SectionScores, SectionStatus};

// Per-dimension weights and ideals. The per-section maximums sum to 110;
// the overall score is normalized to 100 regardless, so adding a dimension
// never rebases the display scale.
pub const PHOTO_MAX_SCORE: u32 = 10;
pub const HEADLINE_MAX_SCORE: u32 = 15;
pub const HEADLINE_IDEAL_CHARS: usize = 60;
pub const ABOUT_MAX_SCORE: u32 = 20;
pub const ABOUT_IDEAL_CHARS: usize = 300;
pub const EXPERIENCE_MAX_SCORE: u32 = 20;
pub const EXPERIENCE_IDEAL_COUNT: usize = 3;
pub const SKILLS_MAX_SCORE: u32 = 15;
pub const SKILLS_IDEAL_COUNT: usize = 5;
pub const EDUCATION_MAX_SCORE: u32 = 10;
pub const EDUCATION_IDEAL_COUNT: usize = 1;
pub const CERTIFICATIONS_MAX_SCORE: u32 = 5;
pub const CERTIFICATIONS_IDEAL_COUNT: usize = 2;
pub const PROJECTS_MAX_SCORE: u32 = 10;
pub const PROJECTS_IDEAL_COUNT: usize = 2;
pub const LANGUAGES_MAX_SCORE: u32 = 5;
pub const LANGUAGES_IDEAL_COUNT: usize = 2;

/// Structurally malformed input. An empty or minimal profile is valid input
/// with a low score, never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("negative count for {field}: {value}")]
    NegativeCount { field: &'static str, value: i64 },
}

struct LengthRule {
    label: &'static str,
    ideal: usize,
    max_score: u32,
}

struct CountRule {
    label: &'static str,
    /// Plural noun used in error and suggestion text.
    noun: &'static str,
    ideal: usize,
    max_score: u32,
}

const HEADLINE_RULE: LengthRule = LengthRule {
    label: "Headline",
    ideal: HEADLINE_IDEAL_CHARS,
    max_score: HEADLINE_MAX_SCORE,
};

const ABOUT_RULE: LengthRule = LengthRule {
    label: "About section",
    ideal: ABOUT_IDEAL_CHARS,
    max_score: ABOUT_MAX_SCORE,
};

const EXPERIENCE_RULE: CountRule = CountRule {
    label: "Experience",
    noun: "work experience entries",
    ideal: EXPERIENCE_IDEAL_COUNT,
    max_score: EXPERIENCE_MAX_SCORE,
};

const SKILLS_RULE: CountRule = CountRule {
    label: "Skills",
    noun: "skills",
    ideal: SKILLS_IDEAL_COUNT,
    max_score: SKILLS_MAX_SCORE,
};

const EDUCATION_RULE: CountRule = CountRule {
    label: "Education",
    noun: "education entries",
    ideal: EDUCATION_IDEAL_COUNT,
    max_score: EDUCATION_MAX_SCORE,
};

const CERTIFICATIONS_RULE: CountRule = CountRule {
    label: "Certifications",
    noun: "certifications",
    ideal: CERTIFICATIONS_IDEAL_COUNT,
    max_score: CERTIFICATIONS_MAX_SCORE,
};

const PROJECTS_RULE: CountRule = CountRule {
    label: "Projects",
    noun: "projects",
    ideal: PROJECTS_IDEAL_COUNT,
    max_score: PROJECTS_MAX_SCORE,
};

const LANGUAGES_RULE: CountRule = CountRule {
    label: "Languages",
    noun: "languages",
    ideal: LANGUAGES_IDEAL_COUNT,
    max_score: LANGUAGES_MAX_SCORE,
};

#[derive(Default)]
struct IssueLog {
    errors: Vec<String>,
    suggestions: Vec<String>,
}

/// Score a profile across every dimension and aggregate to 0-100.
///
/// Every dimension is evaluated and reported even when its backing field is
/// empty; an empty field yields a zero score plus an error entry, not an
/// absent section. Fails only on structurally malformed input.
pub fn analyze(profile: &ProfileRecord) -> Result<AnalysisReport, InvalidInput> {
    if profile.experiences < 0 {
        return Err(InvalidInput::NegativeCount {
            field: "experiences",
            value: profile.experiences,
        });
    }
    let experience_count = profile.experiences as usize;

    let mut issues = IssueLog::default();

    // Field order here is evaluation order, matching SectionScores.
    let sections = SectionScores {
        photo: photo_section(profile.has_photo, &mut issues),
        headline: length_section(&HEADLINE_RULE, profile.headline_length(), &mut issues),
        about: length_section(&ABOUT_RULE, profile.about_length(), &mut issues),
        experience: count_section(&EXPERIENCE_RULE, experience_count, &mut issues),
        skills: count_section(&SKILLS_RULE, profile.skills.len(), &mut issues),
        education: count_section(&EDUCATION_RULE, profile.education.len(), &mut issues),
        certifications: count_section(
            &CERTIFICATIONS_RULE,
            profile.certifications.len(),
            &mut issues,
        ),
        projects: count_section(&PROJECTS_RULE, profile.projects.len(), &mut issues),
        languages: count_section(&LANGUAGES_RULE, profile.languages.len(), &mut issues),
    };

    Ok(AnalysisReport {
        overall_score: overall_score(&sections),
        sections,
        errors: issues.errors,
        suggestions: issues.suggestions,
    })
}

fn photo_section(has_photo: bool, issues: &mut IssueLog) -> SectionScore {
    if has_photo {
        SectionScore {
            score: PHOTO_MAX_SCORE,
            max_score: PHOTO_MAX_SCORE,
            status: SectionStatus::Excellent,
            feedback: "Profile photo is set".to_string(),
            length: None,
            ideal: None,
            count: None,
        }
    } else {
        issues.errors.push("Profile photo is missing".to_string());
        SectionScore {
            score: 0,
            max_score: PHOTO_MAX_SCORE,
            status: SectionStatus::NeedsWork,
            feedback: "Profile photo is missing".to_string(),
            length: None,
            ideal: None,
            count: None,
        }
    }
}

fn length_section(rule: &LengthRule, length: usize, issues: &mut IssueLog) -> SectionScore {
    let ratio = capped_ratio(length, rule.ideal);

    let feedback = if length == 0 {
        issues.errors.push(format!("{} is empty", rule.label));
        format!("{} is empty", rule.label)
    } else if ratio < 1.0 {
        issues.suggestions.push(format!(
            "Expand your {} to around {} characters (currently {})",
            rule.label.to_lowercase(),
            rule.ideal,
            length
        ));
        format!("{} is shorter than ideal", rule.label)
    } else {
        format!("{} length is on target", rule.label)
    };

    SectionScore {
        score: scale(rule.max_score, ratio),
        max_score: rule.max_score,
        status: status_for(ratio),
        feedback,
        length: Some(length),
        ideal: Some(rule.ideal),
        count: None,
    }
}

fn count_section(rule: &CountRule, count: usize, issues: &mut IssueLog) -> SectionScore {
    let ratio = capped_ratio(count, rule.ideal);

    let feedback = if count == 0 {
        issues.errors.push(format!("No {} listed", rule.noun));
        format!("No {} listed", rule.noun)
    } else if ratio < 1.0 {
        issues.suggestions.push(format!(
            "List at least {} {} (currently {})",
            rule.ideal, rule.noun, count
        ));
        format!("{} section could use more entries", rule.label)
    } else {
        format!("{} section looks strong", rule.label)
    };

    SectionScore {
        score: scale(rule.max_score, ratio),
        max_score: rule.max_score,
        status: status_for(ratio),
        feedback,
        length: None,
        ideal: None,
        count: Some(count),
    }
}

/// Observed over ideal, capped at 1.0.
fn capped_ratio(observed: usize, ideal: usize) -> f64 {
    if ideal == 0 {
        return 1.0;
    }
    (observed as f64 / ideal as f64).min(1.0)
}

/// Round half away from zero; for non-negative inputs this is half-up.
fn scale(max_score: u32, ratio: f64) -> u32 {
    (f64::from(max_score) * ratio).round() as u32
}

fn status_for(ratio: f64) -> SectionStatus {
    if ratio >= 0.8 {
        SectionStatus::Excellent
    } else if ratio >= 0.5 {
        SectionStatus::Good
    } else if ratio >= 0.2 {
        SectionStatus::Fair
    } else {
        SectionStatus::NeedsWork
    }
}

fn overall_score(sections: &SectionScores) -> u32 {
    let max = sections.total_max_score();
    if max == 0 {
        return 0;
    }
    (100.0 * f64::from(sections.total_score()) / f64::from(max)).round() as u32
}
