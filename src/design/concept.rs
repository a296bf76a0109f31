//! Procedural logo-concept generation: deterministic rules mapping a team
//! and a style tag to a structured design concept.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dao::teams::{Team, TeamColors},
    design::{color::lighten_hex, shape},
};

/// Fixed vintage-brown accent added to every retro palette.
const RETRO_ADDITIONAL: &str = "#8B4513";

/// The three supported concept styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    /// Two-color, reduced-form treatment.
    Minimalist,
    /// Vintage treatment with traditional shapes.
    Retro,
    /// Contemporary treatment with gradients.
    Modern,
}

impl LogoStyle {
    /// Every style, in presentation order.
    pub const ALL: [LogoStyle; 3] = [LogoStyle::Minimalist, LogoStyle::Retro, LogoStyle::Modern];

    /// Parse a style tag; unrecognized tags yield `None` so callers can
    /// apply the minimalist fallback where the surface demands one.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "minimalist" => Some(LogoStyle::Minimalist),
            "retro" => Some(LogoStyle::Retro),
            "modern" => Some(LogoStyle::Modern),
            _ => None,
        }
    }

    /// Display label of the style.
    pub fn label(self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Minimalist",
            LogoStyle::Retro => "Retro Classic",
            LogoStyle::Modern => "Modern Dynamic",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Clean, simplified design focusing on essential elements",
            LogoStyle::Retro => "Vintage-inspired design with traditional NFL aesthetics",
            LogoStyle::Modern => "Contemporary design with dynamic elements and gradients",
        }
    }

    fn typography(self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Sans-serif, clean letterforms",
            LogoStyle::Retro => "Serif or slab-serif, bold letterforms",
            LogoStyle::Modern => "Custom sans-serif with dynamic elements",
        }
    }

    fn visual_weight(self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Light to medium",
            LogoStyle::Retro => "Medium to heavy",
            LogoStyle::Modern => "Medium",
        }
    }

    fn complexity(self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Low",
            LogoStyle::Retro => "Medium",
            LogoStyle::Modern => "Medium to high",
        }
    }

    fn layout_guidelines(self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Centered composition with generous white space",
            LogoStyle::Retro => "Traditional shield or badge layout with decorative elements",
            LogoStyle::Modern => "Dynamic, possibly asymmetrical composition with movement",
        }
    }
}

/// Style-specific palette transform. Each variant serializes exactly its
/// own keys, so a minimalist scheme never carries a `secondary` entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ColorScheme {
    /// Two-color reduction used by the minimalist style.
    Simplified {
        /// Dominant color.
        primary: String,
        /// Highlight color.
        accent: String,
        /// Usage note for the palette.
        usage: String,
    },
    /// Four-color palette with the fixed vintage brown, used by retro.
    Enriched {
        /// Dominant color.
        primary: String,
        /// Supporting color.
        secondary: String,
        /// Highlight color.
        accent: String,
        /// Fixed vintage accent.
        additional: String,
        /// Usage note for the palette.
        usage: String,
    },
    /// Gradient pair derived from the primary color, used by modern.
    Gradient {
        /// Dominant color.
        primary: String,
        /// Supporting color.
        secondary: String,
        /// Highlight color.
        accent: String,
        /// Gradient start (the primary color).
        gradient_start: String,
        /// Gradient end (primary lightened by 20%).
        gradient_end: String,
        /// Usage note for the palette.
        usage: String,
    },
}

impl ColorScheme {
    /// Apply the style's palette transform to a team's colors.
    pub fn for_style(colors: &TeamColors, style: LogoStyle) -> Self {
        match style {
            LogoStyle::Minimalist => ColorScheme::Simplified {
                primary: colors.primary.clone(),
                accent: colors.accent.clone(),
                usage: "Two-color palette for maximum clarity".into(),
            },
            LogoStyle::Retro => ColorScheme::Enriched {
                primary: colors.primary.clone(),
                secondary: colors.secondary.clone(),
                accent: colors.accent.clone(),
                additional: RETRO_ADDITIONAL.into(),
                usage: "Rich, traditional color palette".into(),
            },
            LogoStyle::Modern => ColorScheme::Gradient {
                primary: colors.primary.clone(),
                secondary: colors.secondary.clone(),
                accent: colors.accent.clone(),
                gradient_start: colors.primary.clone(),
                gradient_end: lighten_hex(&colors.primary, 20),
                usage: "Dynamic gradients and modern color applications".into(),
            },
        }
    }
}

/// Where each palette entry lands in the composition.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorApplication {
    /// Background treatment.
    pub background: String,
    /// Foreground treatment.
    pub foreground: String,
    /// Accent treatment.
    pub accent: String,
}

impl ColorApplication {
    fn for_style(colors: &TeamColors, style: LogoStyle) -> Self {
        match style {
            LogoStyle::Minimalist => Self {
                background: colors.primary.clone(),
                foreground: colors.accent.clone(),
                accent: "None or minimal use of secondary color".into(),
            },
            LogoStyle::Retro => Self {
                background: "Gradient from primary to secondary".into(),
                foreground: colors.accent.clone(),
                accent: "Traditional gold or silver highlights".into(),
            },
            LogoStyle::Modern => Self {
                background: "Dynamic gradient".into(),
                foreground: "High contrast application".into(),
                accent: "Subtle color variations and highlights".into(),
            },
        }
    }
}

/// Typeface guidance for a style.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TypographySpecs {
    /// Typeface family guidance.
    pub font_family: String,
    /// Weight guidance.
    pub weight: String,
    /// Letterform style guidance.
    pub style: String,
}

impl TypographySpecs {
    fn for_style(style: LogoStyle) -> Self {
        let (font_family, weight, letterforms) = match style {
            LogoStyle::Minimalist => (
                "Clean sans-serif",
                "Medium to bold",
                "Simple, geometric letterforms",
            ),
            LogoStyle::Retro => ("Serif or slab-serif", "Bold", "Classic, traditional letterforms"),
            LogoStyle::Modern => (
                "Contemporary sans-serif",
                "Variable",
                "Dynamic, possibly custom letterforms",
            ),
        };
        Self {
            font_family: font_family.into(),
            weight: weight.into(),
            style: letterforms.into(),
        }
    }
}

/// Descriptive rendering metadata for a concept. These are guidelines for
/// a designer or renderer, not vector paths.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SvgInstructions {
    /// Canvas dimensions, `WxH`.
    pub canvas_size: String,
    /// Primary shape to draw.
    pub primary_element: String,
    /// Palette placement.
    pub color_application: ColorApplication,
    /// Typeface guidance.
    pub typography_specs: TypographySpecs,
    /// Composition guidance.
    pub layout_guidelines: String,
}

/// Core structured elements of a concept.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConceptElements {
    /// Shape chosen from the mascot lookup.
    pub primary_shape: String,
    /// Style-specific palette transform.
    pub color_scheme: ColorScheme,
    /// Typography summary.
    pub typography: String,
    /// Visual weight summary.
    pub visual_weight: String,
    /// Complexity summary.
    pub complexity: String,
}

/// A complete derived design concept for one `(team, style)` pair.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Concept {
    /// Style display label.
    pub style: String,
    /// One-line style description.
    pub description: String,
    /// Structured design elements.
    pub design_elements: ConceptElements,
    /// Narrative concept description.
    pub concept_description: String,
    /// Rendering guidance.
    pub svg_instructions: SvgInstructions,
}

/// Compose the full concept for a team in the given style.
pub fn compose(team: &Team, style: LogoStyle) -> Concept {
    let primary_shape = shape::primary_shape(&team.mascot, Some(style));
    Concept {
        style: style.label().into(),
        description: style.blurb().into(),
        design_elements: ConceptElements {
            primary_shape: primary_shape.into(),
            color_scheme: ColorScheme::for_style(&team.colors, style),
            typography: style.typography().into(),
            visual_weight: style.visual_weight().into(),
            complexity: style.complexity().into(),
        },
        concept_description: concept_description(team, style),
        svg_instructions: SvgInstructions {
            canvas_size: "200x200".into(),
            primary_element: primary_shape.into(),
            color_application: ColorApplication::for_style(&team.colors, style),
            typography_specs: TypographySpecs::for_style(style),
            layout_guidelines: style.layout_guidelines().into(),
        },
    }
}

fn concept_description(team: &Team, style: LogoStyle) -> String {
    let mascot = &team.mascot;
    let city = &team.city;
    match style {
        LogoStyle::Minimalist => format!(
            "A clean, modern interpretation of the {mascot} identity, stripping away \
             unnecessary details to focus on the core essence of {city}'s team spirit. \
             Uses bold, simple shapes and limited colors for maximum impact and scalability."
        ),
        LogoStyle::Retro => format!(
            "Drawing inspiration from classic NFL design traditions, this vintage concept \
             celebrates the rich history of the {mascot} with traditional shapes, classic \
             typography, and time-honored design elements that evoke the golden era of football."
        ),
        LogoStyle::Modern => format!(
            "A contemporary take on the {mascot} brand, incorporating dynamic elements, \
             subtle gradients, and modern design principles while maintaining the aggressive, \
             powerful presence expected of an NFL franchise."
        ),
    }
}

/// Synthesize a placeholder logo URL for teams shipping without one.
pub fn placeholder_logo(team: &Team) -> String {
    let primary = team.colors.primary.trim_start_matches('#');
    let accent = team.colors.accent.trim_start_matches('#');
    format!(
        "https://via.placeholder.com/200x200/{primary}/{accent}?text={}",
        team.initial()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::teams::{Conference, Division};

    fn team() -> Team {
        Team {
            id: 12,
            name: "Kansas City Chiefs".into(),
            city: "Kansas City".into(),
            mascot: "Chiefs".into(),
            conference: Conference::AFC,
            division: Division::West,
            colors: TeamColors {
                primary: "#E31837".into(),
                secondary: "#FFB81C".into(),
                accent: "#FFFFFF".into(),
            },
            founded: 1960,
            logo: None,
        }
    }

    #[test]
    fn parse_recognizes_only_the_three_tags() {
        assert_eq!(LogoStyle::parse("minimalist"), Some(LogoStyle::Minimalist));
        assert_eq!(LogoStyle::parse("retro"), Some(LogoStyle::Retro));
        assert_eq!(LogoStyle::parse("modern"), Some(LogoStyle::Modern));
        assert_eq!(LogoStyle::parse("brutalist"), None);
        assert_eq!(LogoStyle::parse("Minimalist"), None);
    }

    #[test]
    fn minimalist_scheme_serializes_exactly_three_keys() {
        let concept = compose(&team(), LogoStyle::Minimalist);
        let value = serde_json::to_value(&concept.design_elements.color_scheme).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["accent", "primary", "usage"]);
    }

    #[test]
    fn retro_scheme_carries_the_vintage_brown() {
        let concept = compose(&team(), LogoStyle::Retro);
        match concept.design_elements.color_scheme {
            ColorScheme::Enriched { additional, .. } => assert_eq!(additional, "#8B4513"),
            other => panic!("unexpected scheme: {other:?}"),
        }
    }

    #[test]
    fn modern_gradient_ends_on_lightened_primary() {
        let concept = compose(&team(), LogoStyle::Modern);
        match concept.design_elements.color_scheme {
            ColorScheme::Gradient {
                gradient_start,
                gradient_end,
                ..
            } => {
                assert_eq!(gradient_start, "#E31837");
                // #E31837 + 51 per channel, clamped.
                assert_eq!(gradient_end, "#ff4b6a");
            }
            other => panic!("unexpected scheme: {other:?}"),
        }
    }

    #[test]
    fn concept_interpolates_mascot_and_city() {
        let concept = compose(&team(), LogoStyle::Minimalist);
        assert!(concept.concept_description.contains("Chiefs identity"));
        assert!(concept.concept_description.contains("Kansas City's team spirit"));
        assert_eq!(concept.style, "Minimalist");
        assert_eq!(concept.svg_instructions.canvas_size, "200x200");
    }

    #[test]
    fn minimalist_color_application_uses_raw_team_colors() {
        let concept = compose(&team(), LogoStyle::Minimalist);
        let application = &concept.svg_instructions.color_application;
        assert_eq!(application.background, "#E31837");
        assert_eq!(application.foreground, "#FFFFFF");
        assert_eq!(application.accent, "None or minimal use of secondary color");
    }

    #[test]
    fn placeholder_logo_strips_hashes_and_uses_initial() {
        assert_eq!(
            placeholder_logo(&team()),
            "https://via.placeholder.com/200x200/E31837/FFFFFF?text=C"
        );
    }
}
