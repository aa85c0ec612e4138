// src/types/profile.rs
use serde::{Deserialize, Serialize};

/// Snapshot of a profile's fields, however obtained (scraping pipeline,
/// profile API, manual entry). Every field defaults, so a sparse payload is
/// an incomplete profile rather than a malformed one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub has_photo: bool,
    pub about: String,
    /// Work-history entry count. Signed because JSON numbers are signed;
    /// the scoring engine rejects negative values.
    pub experiences: i64,
    pub skills: Vec<Skill>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub languages: Vec<LanguageEntry>,
}

impl ProfileRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Headline length in characters, surrounding whitespace ignored.
    pub fn headline_length(&self) -> usize {
        self.headline.trim().chars().count()
    }

    /// About-section length in characters, surrounding whitespace ignored.
    pub fn about_length(&self) -> usize {
        self.about.trim().chars().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endorsements: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}
