//! Payloads for the logo-variation generation action.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{design::concept::Concept, dto::teams::TeamDto};

/// The three concepts always produced together.
#[derive(Debug, Serialize, ToSchema)]
pub struct VariationSet {
    /// Two-color reduced concept.
    pub minimalist: Concept,
    /// Vintage concept.
    pub retro: Concept,
    /// Contemporary gradient concept.
    pub modern: Concept,
}

/// Overall rationale accompanying a variation set.
#[derive(Debug, Serialize, ToSchema)]
pub struct DesignRationale {
    /// Identity sentence for the team.
    pub team_identity: String,
    /// Color psychology phrase for the primary color.
    pub color_significance: String,
    /// Era label from the founding year.
    pub historical_context: String,
    /// Mood/atmosphere descriptors from the style profile.
    pub design_philosophy: Vec<String>,
}

/// Response payload of `generateLogoVariations`.
#[derive(Debug, Serialize, ToSchema)]
pub struct VariationsPayload {
    /// The annotated team the variations were derived from.
    pub team: TeamDto,
    /// One concept per style.
    pub variations: VariationSet,
    /// Overall rationale block.
    pub design_rationale: DesignRationale,
}
