//! The static style-profile document describing the shared visual language
//! of NFL team logos.

use serde::Serialize;
use utoipa::ToSchema;

/// Style-profile document served by the `getDesignProfile` action and used
/// as the design-philosophy source for rationale blocks.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DesignProfile {
    /// Profile identifier.
    pub name: String,
    /// One-line profile summary.
    pub description: String,
    /// Overall style descriptors.
    pub overall_style: Vec<String>,
    /// Recurring shape families.
    pub common_shapes: Vec<String>,
    /// Palette conventions.
    pub color_palettes: Vec<String>,
    /// Typography conventions.
    pub typography_style: Vec<String>,
    /// Recurring visual motifs.
    pub visual_motifs: Vec<String>,
    /// Common construction techniques.
    pub design_techniques: Vec<String>,
    /// Mood and atmosphere descriptors.
    pub mood_and_atmosphere: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl DesignProfile {
    /// Build the built-in profile document.
    pub fn new() -> Self {
        Self {
            name: "NFL_Team_Logo_Style_Profile".into(),
            description: "A design profile based on the visual elements and aesthetics of NFL team logos.".into(),
            overall_style: strings(&[
                "Bold",
                "Dynamic",
                "Modern with classic elements",
                "Strong and impactful",
                "Scalable for various applications",
            ]),
            common_shapes: strings(&[
                "Geometric shapes (circles, shields, stars, ovals)",
                "Stylized animal forms (birds, cats, equines)",
                "Abstract representations of objects or concepts",
                "Letterforms as central elements",
            ]),
            color_palettes: strings(&[
                "Primary and secondary colors with high contrast",
                "Limited color palettes, typically 2-4 main colors",
                "Often incorporating patriotic colors (red, white, blue)",
            ]),
            typography_style: strings(&[
                "Bold, sans-serif or slab-serif typefaces",
                "Uppercase letters common for team names or initials",
                "Custom or highly stylized letterforms",
                "Clear legibility at various sizes",
            ]),
            visual_motifs: strings(&[
                "Animal mascots (eagles, panthers, jaguars, colts, bears, falcons, seahawks)",
                "Iconic objects (stars, helmets, horseshoes, fleur-de-lis, lightning bolts)",
                "Initials or single letters representing team names",
                "Elements symbolizing location or history",
            ]),
            design_techniques: strings(&[
                "Flat design with strong outlines and clear separation of elements",
                "Subtle gradients or shadows for depth",
                "Emphasis on clean lines and simplified forms",
                "Effective use of negative space for visual impact",
            ]),
            mood_and_atmosphere: strings(&[
                "Aggressive and powerful",
                "Loyal and traditional",
                "Energetic and competitive",
                "Representing strength and determination",
            ]),
        }
    }
}

impl Default for DesignProfile {
    fn default() -> Self {
        Self::new()
    }
}
