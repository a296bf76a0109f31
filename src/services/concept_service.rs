//! Logo-variation generation and the static style profile.

use crate::{
    design::{
        analysis,
        concept::{self, LogoStyle},
        profile::DesignProfile,
    },
    dto::{
        concepts::{DesignRationale, VariationSet, VariationsPayload},
        teams::TeamDto,
    },
    error::ServiceError,
    state::SharedState,
};

/// Derive the three style concepts and the rationale block for a team.
pub async fn generate_variations(
    state: &SharedState,
    team_id: u32,
) -> Result<VariationsPayload, ServiceError> {
    let teams = state.store().load().await?;
    let team = teams
        .into_iter()
        .find(|team| team.id == team_id)
        .ok_or(ServiceError::TeamNotFound)?;

    let variations = VariationSet {
        minimalist: concept::compose(&team, LogoStyle::Minimalist),
        retro: concept::compose(&team, LogoStyle::Retro),
        modern: concept::compose(&team, LogoStyle::Modern),
    };

    let design_rationale = DesignRationale {
        team_identity: format!(
            "The {} represent {} with a {} identity",
            team.name, team.city, team.mascot
        ),
        color_significance: analysis::color_psychology(&team.colors).into(),
        historical_context: analysis::historical_era(team.founded).into(),
        design_philosophy: state.profile().mood_and_atmosphere.clone(),
    };

    Ok(VariationsPayload {
        team: TeamDto::from_team(team),
        variations,
        design_rationale,
    })
}

/// The static style-profile document.
pub fn design_profile(state: &SharedState) -> DesignProfile {
    state.profile().clone()
}
