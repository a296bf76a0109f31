/// Team analysis heuristics (motif, dominance, era, region, psychology).
pub mod analysis;
/// Hex/RGB/HSL color math.
pub mod color;
/// Concept composition for the three logo styles.
pub mod concept;
/// Static style-profile document.
pub mod profile;
/// Mascot-to-shape lookup tables.
pub mod shape;
