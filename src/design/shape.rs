//! Mascot-to-shape lookup tables backing the concept generator.
//!
//! Coverage is intentionally partial: mascots missing from both tables fall
//! through to the style defaults.

use crate::design::concept::LogoStyle;

/// Shapes for teams whose mascot is an animal form.
const ANIMAL_SHAPES: &[(&str, &str)] = &[
    ("eagles", "Stylized eagle head or spread wings"),
    ("falcons", "Falcon silhouette in flight"),
    ("seahawks", "Hawk head profile"),
    ("ravens", "Raven silhouette"),
    ("cardinals", "Cardinal head profile"),
    ("panthers", "Panther head or paw print"),
    ("jaguars", "Jaguar head profile"),
    ("bengals", "Tiger stripes pattern"),
    ("bears", "Bear head or paw"),
    ("lions", "Lion head mane"),
    ("rams", "Ram horns"),
    ("colts", "Horseshoe"),
    ("broncos", "Horse head profile"),
    ("dolphins", "Dolphin jumping"),
];

/// Shapes for teams named after a concept, object, or location.
const CONCEPT_SHAPES: &[(&str, &str)] = &[
    ("patriots", "Patriot head profile or star"),
    ("cowboys", "Star"),
    ("steelers", "Steel beam or hypocycloid"),
    ("packers", "Letter G in circle"),
    ("giants", "NY letters"),
    ("jets", "Jet silhouette"),
    ("saints", "Fleur-de-lis"),
    ("browns", "Helmet"),
    ("titans", "Flame or T logo"),
    ("texans", "Bull head"),
    ("chiefs", "Arrowhead"),
    ("raiders", "Shield with crossed swords"),
    ("chargers", "Lightning bolt"),
    ("bills", "Buffalo or charging bull"),
    ("commanders", "W logo or shield"),
];

fn lookup(table: &[(&str, &'static str)], mascot: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == mascot)
        .map(|(_, shape)| *shape)
}

/// Pick the primary shape for a mascot, trying the animal table, then the
/// concept table, then the style default. With no style to key on, the
/// generic framed-initial shape is returned.
pub fn primary_shape(mascot: &str, style: Option<LogoStyle>) -> &'static str {
    let mascot = mascot.to_lowercase();
    if let Some(shape) = lookup(ANIMAL_SHAPES, &mascot).or_else(|| lookup(CONCEPT_SHAPES, &mascot))
    {
        return shape;
    }

    match style {
        Some(LogoStyle::Minimalist) => "Clean geometric circle with team initial",
        Some(LogoStyle::Retro) => "Classic shield shape",
        Some(LogoStyle::Modern) => "Dynamic angular shape",
        None => "Team initial in geometric frame",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_table_wins_regardless_of_style() {
        assert_eq!(
            primary_shape("Eagles", Some(LogoStyle::Modern)),
            "Stylized eagle head or spread wings"
        );
        assert_eq!(primary_shape("colts", None), "Horseshoe");
    }

    #[test]
    fn concept_table_is_checked_second() {
        assert_eq!(primary_shape("Cowboys", Some(LogoStyle::Minimalist)), "Star");
        assert_eq!(primary_shape("SAINTS", Some(LogoStyle::Retro)), "Fleur-de-lis");
    }

    #[test]
    fn unmapped_mascot_falls_back_to_style_default() {
        assert_eq!(
            primary_shape("Buccaneers", Some(LogoStyle::Minimalist)),
            "Clean geometric circle with team initial"
        );
        assert_eq!(
            primary_shape("Buccaneers", Some(LogoStyle::Retro)),
            "Classic shield shape"
        );
        assert_eq!(
            primary_shape("Buccaneers", Some(LogoStyle::Modern)),
            "Dynamic angular shape"
        );
    }

    #[test]
    fn no_style_yields_generic_frame() {
        assert_eq!(
            primary_shape("Buccaneers", None),
            "Team initial in geometric frame"
        );
    }
}
