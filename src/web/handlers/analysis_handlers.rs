// src/web/handlers/analysis_handlers.rs

use crate::scoring;
use crate::types::{AnalysisReport, ProfileRecord, SectionScore};
use crate::web::types::{
    DataResponse, DisplayFormat, DisplaySection, StandardErrorResponse, StandardRequest,
    WithConversationId,
};

use rocket::serde::json::Json;
use tracing::{error, info};
use uuid::Uuid;

pub async fn analyze_profile_handler(
    request: Json<StandardRequest<ProfileRecord>>,
) -> Result<Json<DataResponse<AnalysisReport>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();
    let request_id = Uuid::new_v4();

    let profile = &request.data;
    let name = profile.full_name();
    info!(
        "[{}] Analyzing profile for '{}' [{}]",
        request_id,
        if name.is_empty() {
            "(unnamed)"
        } else {
            name.as_str()
        },
        conversation_id.clone().unwrap_or_default()
    );

    match scoring::analyze(profile) {
        Ok(report) => {
            info!(
                "[{}] Analysis complete: {}/100, {} errors, {} suggestions",
                request_id,
                report.overall_score,
                report.errors.len(),
                report.suggestions.len()
            );

            let display_format = create_analysis_display_format(&report);
            let message = format!("Profile completeness: {}/100", report.overall_score);

            Ok(Json(
                DataResponse::success(message, report, conversation_id)
                    .with_display_format(display_format),
            ))
        }
        Err(e) => {
            error!("[{}] Rejected malformed profile: {}", request_id, e);
            Err(Json(StandardErrorResponse::new(
                e.to_string(),
                "INVALID_PROFILE".to_string(),
                vec![
                    "Check that all counts in the profile payload are non-negative".to_string(),
                    "Verify the upstream data acquisition step succeeded".to_string(),
                ],
                conversation_id,
            )))
        }
    }
}

fn create_analysis_display_format(report: &AnalysisReport) -> DisplayFormat {
    let mut sections = Vec::new();

    let mut overall_points: Vec<String> = report.errors.clone();
    overall_points.extend(report.suggestions.iter().cloned());

    sections.push(DisplaySection {
        title: "Overall completeness".to_string(),
        content: format!("{}/100", report.overall_score),
        score: None,
        points: if overall_points.is_empty() {
            None
        } else {
            Some(overall_points)
        },
    });

    for (name, section) in report.sections.iter() {
        sections.push(DisplaySection {
            title: section_title(name).to_string(),
            content: section_content(section),
            score: Some(section.status.as_str().to_string()),
            points: None,
        });
    }

    DisplayFormat {
        format_type: "analysis".to_string(),
        sections: Some(sections),
    }
}

fn section_title(name: &str) -> &'static str {
    match name {
        "photo" => "Profile photo",
        "headline" => "Headline",
        "about" => "About",
        "experience" => "Experience",
        "skills" => "Skills",
        "education" => "Education",
        "certifications" => "Certifications",
        "projects" => "Projects",
        "languages" => "Languages",
        _ => "Section",
    }
}

fn section_content(section: &SectionScore) -> String {
    format!(
        "{} ({}/{})",
        section.feedback, section.score, section.max_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format_lists_overall_then_each_dimension() {
        let report = scoring::analyze(&ProfileRecord::default()).unwrap();
        let format = create_analysis_display_format(&report);
        let sections = format.sections.unwrap();

        assert_eq!(sections.len(), 10);
        assert_eq!(sections[0].title, "Overall completeness");
        assert_eq!(sections[0].content, "0/100");
        // Empty profile: one error per dimension surfaces as a point
        assert_eq!(sections[0].points.as_ref().unwrap().len(), 9);
        assert_eq!(sections[1].title, "Profile photo");
        assert_eq!(sections[1].score.as_deref(), Some("needs_work"));
    }
}
