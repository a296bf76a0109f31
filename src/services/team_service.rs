//! Team listing, lookup, and filter operations.

use crate::{
    dto::teams::{TeamDto, TeamsPayload},
    error::ServiceError,
    state::SharedState,
};

/// Return every team, annotated with a logo URL and derived design tags.
pub async fn get_teams(state: &SharedState) -> Result<TeamsPayload, ServiceError> {
    let teams = state.store().load().await?;
    Ok(TeamsPayload {
        teams: teams.into_iter().map(TeamDto::from_team).collect(),
    })
}

/// Return a single annotated team by id.
pub async fn get_team(state: &SharedState, id: u32) -> Result<TeamDto, ServiceError> {
    let teams = state.store().load().await?;
    teams
        .into_iter()
        .find(|team| team.id == id)
        .map(TeamDto::from_team)
        .ok_or(ServiceError::TeamNotFound)
}

/// Return the teams of one conference. The match is case-insensitive; an
/// unknown name simply yields an empty list.
pub async fn get_teams_by_conference(
    state: &SharedState,
    conference: &str,
) -> Result<TeamsPayload, ServiceError> {
    let payload = get_teams(state).await?;
    let teams = payload
        .teams
        .into_iter()
        .filter(|team| team.conference.as_str().eq_ignore_ascii_case(conference))
        .collect();
    Ok(TeamsPayload { teams })
}

/// Return the teams of one division, matched case-insensitively.
pub async fn get_teams_by_division(
    state: &SharedState,
    division: &str,
) -> Result<TeamsPayload, ServiceError> {
    let payload = get_teams(state).await?;
    let teams = payload
        .teams
        .into_iter()
        .filter(|team| team.division.as_str().eq_ignore_ascii_case(division))
        .collect();
    Ok(TeamsPayload { teams })
}
