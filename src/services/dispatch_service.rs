//! Maps an action name plus query parameters onto the service operations.

use crate::{
    dto::api::{ApiPayload, ApiQuery},
    error::ServiceError,
    services::{analysis_service, concept_service, team_service},
    state::SharedState,
};

/// Dispatch one request. Missing numeric parameters default to 0 (which no
/// team uses, so they resolve to "Team not found"); missing filters match
/// nothing; an unknown action is rejected outright.
pub async fn dispatch(state: &SharedState, query: ApiQuery) -> Result<ApiPayload, ServiceError> {
    match query.action.as_str() {
        "getTeams" => Ok(ApiPayload::Teams(team_service::get_teams(state).await?)),
        "getTeam" => {
            let team = team_service::get_team(state, query.id.unwrap_or(0)).await?;
            Ok(ApiPayload::Team(Box::new(team)))
        }
        "getTeamsByConference" => {
            let conference = query.conference.unwrap_or_default();
            Ok(ApiPayload::Teams(
                team_service::get_teams_by_conference(state, &conference).await?,
            ))
        }
        "getTeamsByDivision" => {
            let division = query.division.unwrap_or_default();
            Ok(ApiPayload::Teams(
                team_service::get_teams_by_division(state, &division).await?,
            ))
        }
        "generateLogoVariations" => {
            let payload =
                concept_service::generate_variations(state, query.team_id.unwrap_or(0)).await?;
            Ok(ApiPayload::Variations(Box::new(payload)))
        }
        "getDesignProfile" => Ok(ApiPayload::Profile(concept_service::design_profile(state))),
        "getLogoAnalysis" => {
            let payload =
                analysis_service::get_logo_analysis(state, query.team_id.unwrap_or(0)).await?;
            Ok(ApiPayload::Analysis(payload))
        }
        _ => Err(ServiceError::InvalidAction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};
    use std::io::Write;

    const DATASET: &str = r##"{
      "teams": [
        {
          "id": 1,
          "name": "Kansas City Chiefs",
          "city": "Kansas City",
          "mascot": "Chiefs",
          "conference": "AFC",
          "division": "West",
          "colors": {"primary": "#E31837", "secondary": "#FFB81C", "accent": "#FFFFFF"},
          "founded": 1960
        },
        {
          "id": 2,
          "name": "Tampa Bay Buccaneers",
          "city": "Tampa Bay",
          "mascot": "Buccaneers",
          "conference": "NFC",
          "division": "South",
          "colors": {"primary": "#D50A0A", "secondary": "#FF7900", "accent": "#0A0A08"},
          "founded": 1974
        }
      ]
    }"##;

    fn fixture_state() -> (tempfile::TempDir, crate::state::SharedState) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        let state = AppState::new(&AppConfig::with_data_path(path));
        (dir, state)
    }

    fn query(action: &str) -> ApiQuery {
        ApiQuery {
            action: action.into(),
            id: None,
            team_id: None,
            conference: None,
            division: None,
        }
    }

    #[tokio::test]
    async fn get_teams_annotates_every_record() {
        let (_dir, state) = fixture_state();
        let payload = dispatch(&state, query("getTeams")).await.unwrap();
        let ApiPayload::Teams(listing) = payload else {
            panic!("expected a team listing");
        };
        assert_eq!(listing.teams.len(), 2);
        assert!(listing.teams[0].logo.starts_with("https://via.placeholder.com/"));
        assert_eq!(listing.teams[1].logo_analysis.primary_motif, "Abstract/Conceptual");
    }

    #[tokio::test]
    async fn unknown_action_is_rejected_without_panicking() {
        let (_dir, state) = fixture_state();
        let result = dispatch(&state, query("dropTeams")).await;
        assert!(matches!(result, Err(ServiceError::InvalidAction)));
        let result = dispatch(&state, query("")).await;
        assert!(matches!(result, Err(ServiceError::InvalidAction)));
    }

    #[tokio::test]
    async fn missing_id_defaults_to_an_unknown_team() {
        let (_dir, state) = fixture_state();
        let result = dispatch(&state, query("getTeam")).await;
        assert!(matches!(result, Err(ServiceError::TeamNotFound)));
        let result = dispatch(&state, query("generateLogoVariations")).await;
        assert!(matches!(result, Err(ServiceError::TeamNotFound)));
    }

    #[tokio::test]
    async fn conference_filter_is_case_insensitive() {
        let (_dir, state) = fixture_state();
        let mut request = query("getTeamsByConference");
        request.conference = Some("afc".into());
        let ApiPayload::Teams(listing) = dispatch(&state, request).await.unwrap() else {
            panic!("expected a team listing");
        };
        assert_eq!(listing.teams.len(), 1);
        assert_eq!(listing.teams[0].name, "Kansas City Chiefs");
    }

    #[tokio::test]
    async fn missing_filter_matches_nothing() {
        let (_dir, state) = fixture_state();
        let ApiPayload::Teams(listing) =
            dispatch(&state, query("getTeamsByDivision")).await.unwrap()
        else {
            panic!("expected a team listing");
        };
        assert!(listing.teams.is_empty());
    }

    #[tokio::test]
    async fn variations_carry_all_three_styles() {
        let (_dir, state) = fixture_state();
        let mut request = query("generateLogoVariations");
        request.team_id = Some(1);
        let ApiPayload::Variations(payload) = dispatch(&state, request).await.unwrap() else {
            panic!("expected variations");
        };
        assert_eq!(payload.variations.minimalist.style, "Minimalist");
        assert_eq!(payload.variations.retro.style, "Retro Classic");
        assert_eq!(payload.variations.modern.style, "Modern Dynamic");
        assert_eq!(
            payload.design_rationale.team_identity,
            "The Kansas City Chiefs represent Kansas City with a Chiefs identity"
        );
        assert_eq!(payload.design_rationale.design_philosophy.len(), 4);
    }

    #[tokio::test]
    async fn logo_analysis_uses_the_generic_frame_for_unmapped_mascots() {
        let (_dir, state) = fixture_state();
        let mut request = query("getLogoAnalysis");
        request.team_id = Some(2);
        let ApiPayload::Analysis(payload) = dispatch(&state, request).await.unwrap() else {
            panic!("expected an analysis");
        };
        assert_eq!(
            payload.current_logo_elements.primary_element,
            "Team initial in geometric frame"
        );
        assert_eq!(
            payload.brand_positioning.market_position,
            "NFC South team"
        );
        assert_eq!(payload.design_opportunities.len(), 4);
    }

    #[tokio::test]
    async fn missing_dataset_surfaces_the_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(&AppConfig::with_data_path(dir.path().join("absent.json")));
        let result = dispatch(&state, query("getTeams")).await;
        assert!(matches!(result, Err(ServiceError::Store(_))));
    }
}
