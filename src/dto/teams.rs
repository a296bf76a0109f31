//! Wire projections of team records, annotated with derived metadata.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dao::teams::{Conference, Division, Team, TeamColors},
    design::{
        analysis::{self, DesignTraits},
        concept,
    },
};

/// A team as returned by the API: the stored record plus a resolved logo
/// URL and the derived design tags.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamDto {
    /// Unique identifier.
    pub id: u32,
    /// Full franchise name.
    pub name: String,
    /// Home city or region.
    pub city: String,
    /// Mascot name.
    pub mascot: String,
    /// Conference membership.
    pub conference: Conference,
    /// Division membership.
    pub division: Division,
    /// Brand colors.
    pub colors: TeamColors,
    /// Founding year.
    pub founded: i32,
    /// Stored logo URL, or a synthesized placeholder.
    pub logo: String,
    /// Derived design tags.
    pub logo_analysis: DesignTraits,
}

impl TeamDto {
    /// Annotate a stored record with its derived fields.
    pub fn from_team(team: Team) -> Self {
        let logo_analysis = analysis::analyze(&team);
        let logo = match team.logo.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => concept::placeholder_logo(&team),
        };
        Self {
            id: team.id,
            name: team.name,
            city: team.city,
            mascot: team.mascot,
            conference: team.conference,
            division: team.division,
            colors: team.colors,
            founded: team.founded,
            logo,
            logo_analysis,
        }
    }
}

/// List payload: `{"teams": [...]}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamsPayload {
    /// Annotated teams.
    pub teams: Vec<TeamDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::teams::{Conference, Division};

    fn team(logo: Option<&str>) -> Team {
        Team {
            id: 3,
            name: "Seattle Seahawks".into(),
            city: "Seattle".into(),
            mascot: "Seahawks".into(),
            conference: Conference::NFC,
            division: Division::West,
            colors: TeamColors {
                primary: "#002244".into(),
                secondary: "#69BE28".into(),
                accent: "#A5ACAF".into(),
            },
            founded: 1976,
            logo: logo.map(Into::into),
        }
    }

    #[test]
    fn stored_logo_is_kept() {
        let dto = TeamDto::from_team(team(Some("https://example.com/hawk.png")));
        assert_eq!(dto.logo, "https://example.com/hawk.png");
    }

    #[test]
    fn absent_or_empty_logo_gets_a_placeholder() {
        for missing in [team(None), team(Some(""))] {
            let dto = TeamDto::from_team(missing);
            assert_eq!(
                dto.logo,
                "https://via.placeholder.com/200x200/002244/A5ACAF?text=S"
            );
        }
    }

    #[test]
    fn annotation_attaches_design_tags() {
        let dto = TeamDto::from_team(team(None));
        assert_eq!(dto.logo_analysis.primary_motif, "Bird/Raptor");
        assert_eq!(
            dto.logo_analysis.regional_influence,
            "Pacific Northwest nature themes"
        );
    }
}
