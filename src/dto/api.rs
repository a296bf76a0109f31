//! Query record and payload union for the action-dispatch endpoint.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::{
    design::profile::DesignProfile,
    dto::{
        analysis::LogoAnalysisPayload,
        concepts::VariationsPayload,
        teams::{TeamDto, TeamsPayload},
    },
};

/// Query parameters accepted by the dispatch endpoint. Which ones are read
/// depends on the action; unused parameters are ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApiQuery {
    /// Action name selecting the operation.
    #[serde(default)]
    pub action: String,
    /// Team id, read by `getTeam`.
    pub id: Option<u32>,
    /// Team id, read by `generateLogoVariations` and `getLogoAnalysis`.
    #[serde(rename = "teamId")]
    pub team_id: Option<u32>,
    /// Conference filter, read by `getTeamsByConference`.
    pub conference: Option<String>,
    /// Division filter, read by `getTeamsByDivision`.
    pub division: Option<String>,
}

/// Action-specific payload carried inside the success envelope.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiPayload {
    /// Team listing (full or filtered).
    Teams(TeamsPayload),
    /// A single annotated team.
    Team(Box<TeamDto>),
    /// Logo variations with rationale.
    Variations(Box<VariationsPayload>),
    /// The static style-profile document.
    Profile(DesignProfile),
    /// Logo analysis for one team.
    Analysis(LogoAnalysisPayload),
}
