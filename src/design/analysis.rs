//! Descriptive tags derived from a team record: motif, color dominance,
//! historical era, regional influence, and color psychology.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dao::teams::{Team, TeamColors},
    design::color::Rgb,
};

/// Mascots classified as birds of prey.
const BIRD_MASCOTS: &[&str] = &["eagles", "falcons", "seahawks", "ravens", "cardinals"];
/// Mascots classified as predators or felines.
const PREDATOR_MASCOTS: &[&str] = &["panthers", "jaguars", "bengals", "bears", "lions"];
/// Mascots classified as hoofed animals.
const HOOFED_MASCOTS: &[&str] = &["colts", "broncos", "rams"];
/// Mascots classified as marine animals.
const MARINE_MASCOTS: &[&str] = &["dolphins"];

/// Ordered city-substring table mapping regions to influence phrases.
const REGIONAL_INFLUENCES: &[(&str, &str)] = &[
    ("new england", "Colonial American heritage"),
    ("new orleans", "French Creole culture"),
    ("green bay", "Industrial Midwest tradition"),
    ("san francisco", "California innovation culture"),
    ("seattle", "Pacific Northwest nature themes"),
    ("miami", "Tropical, vibrant aesthetics"),
    ("denver", "Mountain West ruggedness"),
    ("dallas", "Texas pride and scale"),
    ("las vegas", "Entertainment and glamour"),
];

/// Derived design tags attached to every team the API returns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DesignTraits {
    /// Categorical mascot classification.
    pub primary_motif: String,
    /// Lightness-based dominance label of the primary color.
    pub color_dominance: String,
    /// Era label derived from the founding year.
    pub historical_context: String,
    /// Regional influence phrase matched on the city.
    pub regional_influence: String,
}

/// Derive the full set of design tags for a team.
pub fn analyze(team: &Team) -> DesignTraits {
    DesignTraits {
        primary_motif: primary_motif(&team.mascot).into(),
        color_dominance: color_dominance(&team.colors).into(),
        historical_context: historical_era(team.founded).into(),
        regional_influence: regional_influence(&team.city).into(),
    }
}

/// Classify a mascot into its motif category.
pub fn primary_motif(mascot: &str) -> &'static str {
    let mascot = mascot.to_lowercase();
    let is_in = |table: &[&str]| table.contains(&mascot.as_str());

    if is_in(BIRD_MASCOTS) {
        "Bird/Raptor"
    } else if is_in(PREDATOR_MASCOTS) {
        "Predator/Feline"
    } else if is_in(HOOFED_MASCOTS) {
        "Hoofed Animal"
    } else if is_in(MARINE_MASCOTS) {
        "Marine Animal"
    } else {
        "Abstract/Conceptual"
    }
}

/// Label the primary color by its HSL lightness.
pub fn color_dominance(colors: &TeamColors) -> &'static str {
    let hsl = Rgb::parse(&colors.primary).unwrap_or_default().to_hsl();
    if hsl.l < 0.3 {
        "Dark-dominant (Strong, Authoritative)"
    } else if hsl.l > 0.7 {
        "Light-dominant (Clean, Modern)"
    } else {
        "Balanced (Versatile, Dynamic)"
    }
}

/// Bucket a founding year into its design era.
pub fn historical_era(founded: i32) -> &'static str {
    if founded < 1950 {
        "Original NFL era - Traditional design heritage"
    } else if founded < 1970 {
        "Expansion era - Classic modernization period"
    } else if founded < 1995 {
        "Modern expansion - Contemporary design influence"
    } else {
        "Recent expansion - Modern brand development"
    }
}

/// Match a city against the regional influence table.
pub fn regional_influence(city: &str) -> &'static str {
    let city = city.to_lowercase();
    REGIONAL_INFLUENCES
        .iter()
        .find(|(region, _)| city.contains(region))
        .map(|(_, influence)| *influence)
        .unwrap_or("General American sports culture")
}

/// Explain the psychology of the primary color via channel dominance.
pub fn color_psychology(colors: &TeamColors) -> &'static str {
    let rgb = Rgb::parse(&colors.primary).unwrap_or_default();
    let (r, g, b) = (rgb.r as u16, rgb.g as u16, rgb.b as u16);

    if r > g && r > b && r > 150 {
        "Red conveys power, aggression, and passion"
    } else if b > r && b > g && b > 150 {
        "Blue represents trust, stability, and professionalism"
    } else if g > r && g > b && g > 150 {
        "Green symbolizes growth, nature, and freshness"
    } else if r > 200 && g > 200 && b < 100 {
        "Yellow/Gold represents excellence, energy, and optimism"
    } else {
        "Unique color choice for distinctive brand identity"
    }
}
