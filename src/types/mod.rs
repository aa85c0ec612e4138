// src/types/mod.rs
pub mod analysis;
pub mod profile;

pub use analysis::{AnalysisReport, SectionScore, SectionScores, SectionStatus};
pub use profile::{
    Certification, EducationEntry, LanguageEntry, ProfileRecord, Project, Skill,
};
