//! Logo analysis for a single team.

use crate::{
    design::{analysis, shape},
    dto::analysis::{BrandPositioning, CurrentLogoElements, LogoAnalysisPayload},
    error::ServiceError,
    state::SharedState,
};

/// Analyze the current logo, colors, and positioning of a team.
pub async fn get_logo_analysis(
    state: &SharedState,
    team_id: u32,
) -> Result<LogoAnalysisPayload, ServiceError> {
    let teams = state.store().load().await?;
    let team = teams
        .into_iter()
        .find(|team| team.id == team_id)
        .ok_or(ServiceError::TeamNotFound)?;

    Ok(LogoAnalysisPayload {
        current_logo_elements: CurrentLogoElements {
            // No style applies to the existing mark, so unmapped mascots
            // land on the generic framed-initial shape.
            primary_element: shape::primary_shape(&team.mascot, None).into(),
            color_usage: format!(
                "Primary: {}, Secondary: {}",
                team.colors.primary, team.colors.secondary
            ),
            style_era: analysis::historical_era(team.founded).into(),
            complexity_level: "Medium".into(),
        },
        color_psychology: analysis::color_psychology(&team.colors).into(),
        brand_positioning: BrandPositioning {
            market_position: format!(
                "{} {} team",
                team.conference.as_str(),
                team.division.as_str()
            ),
            brand_personality: "Strong, competitive, regional pride".into(),
            target_audience: "Local fanbase and national NFL audience".into(),
            differentiation: format!("Unique {} identity in {}", team.mascot, team.city),
        },
        design_opportunities: vec![
            "Modernize typography for better digital applications".into(),
            "Simplify complex elements for better scalability".into(),
            "Enhance color contrast for accessibility".into(),
            "Create responsive logo variations for different contexts".into(),
        ],
    })
}
