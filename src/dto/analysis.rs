//! Payloads for the logo-analysis action.

use serde::Serialize;
use utoipa::ToSchema;

/// What the team's current logo is built from.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentLogoElements {
    /// Shape from the mascot lookup (generic frame when unmapped).
    pub primary_element: String,
    /// Primary/secondary color summary.
    pub color_usage: String,
    /// Era label from the founding year.
    pub style_era: String,
    /// Fixed complexity estimate.
    pub complexity_level: String,
}

/// Where the brand sits in its market.
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandPositioning {
    /// Conference/division slot.
    pub market_position: String,
    /// Fixed personality descriptor.
    pub brand_personality: String,
    /// Fixed audience descriptor.
    pub target_audience: String,
    /// Mascot/city differentiation sentence.
    pub differentiation: String,
}

/// Response payload of `getLogoAnalysis`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogoAnalysisPayload {
    /// Current logo breakdown.
    pub current_logo_elements: CurrentLogoElements,
    /// Color psychology phrase for the primary color.
    pub color_psychology: String,
    /// Brand positioning summary.
    pub brand_positioning: BrandPositioning,
    /// Fixed improvement suggestions.
    pub design_opportunities: Vec<String>,
}
