pub mod scoring;
pub mod types;
pub mod web;

pub use scoring::{analyze, InvalidInput};
pub use types::{AnalysisReport, ProfileRecord, SectionScore, SectionScores, SectionStatus};
pub use web::start_web_server;
