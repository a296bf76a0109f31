#![forbid(unsafe_code)]

//! The two fixed 200x200 badge compositions rendered for every team.

use std::f64::consts::PI;

use nfl_logo_back::dao::teams::Team;

use super::svg::SvgDoc;

const CANVAS: f64 = 200.0;

/// Minimalist circle badge: primary disc, secondary inner disc, accent
/// initial, white ring.
pub fn minimalist_badge(team: &Team) -> String {
    let center = CANVAS / 2.0;
    let radius = CANVAS * 0.35;

    let mut doc = SvgDoc::new(200, 200);
    doc.circle(center, center, radius, &team.colors.primary);
    doc.circle(center, center, radius * 0.7, &team.colors.secondary);
    doc.text(
        center,
        center,
        radius * 0.8,
        "Arial",
        &team.colors.accent,
        &team.initial().to_string(),
    );
    doc.circle_outline(center, center, radius, "#ffffff", 3.0);
    doc.finish()
}

/// Retro shield badge: nested shields, accent initial, uppercase captions,
/// two stars, and the founding-year line.
pub fn retro_badge(team: &Team) -> String {
    let center = CANVAS / 2.0;
    let width = CANVAS * 0.35;
    let height = CANVAS * 0.4;

    let mut doc = SvgDoc::new(200, 200);
    doc.polygon(
        &shield_points(center, center, width, height),
        &team.colors.primary,
    );
    doc.polygon(
        &shield_points(center, center, width * 0.7, height * 0.7),
        &team.colors.secondary,
    );
    doc.text(
        center,
        center,
        32.0,
        "serif",
        &team.colors.accent,
        &team.initial().to_string(),
    );

    doc.text(
        center,
        center - CANVAS * 0.15,
        16.0,
        "serif",
        &team.colors.primary,
        &team.city.to_uppercase(),
    );
    doc.text(
        center,
        center + CANVAS * 0.25,
        14.0,
        "serif",
        &team.colors.primary,
        &team.mascot.to_uppercase(),
    );

    for dx in [-CANVAS * 0.3, CANVAS * 0.3] {
        doc.polygon(
            &star_points(center + dx, center - CANVAS * 0.3, 8, 5.0, 3.0),
            &team.colors.secondary,
        );
    }
    doc.text(
        center,
        center + CANVAS * 0.35,
        10.0,
        "serif",
        &team.colors.primary,
        &format!("EST. {}", team.founded),
    );
    doc.finish()
}

/// Six-point shield outline centered on `(cx, cy)`.
fn shield_points(cx: f64, cy: f64, width: f64, height: f64) -> Vec<(f64, f64)> {
    vec![
        (cx, cy - height),
        (cx - width, cy - height * 0.3),
        (cx - width, cy + height * 0.3),
        (cx, cy + height),
        (cx + width, cy + height * 0.3),
        (cx + width, cy - height * 0.3),
    ]
}

/// Star outline alternating between the outer and inner radius.
fn star_points(cx: f64, cy: f64, spikes: u32, outer: f64, inner: f64) -> Vec<(f64, f64)> {
    let step = PI / f64::from(spikes);
    let mut rot = PI / 2.0 * 3.0;
    let mut points = vec![(cx, cy - outer)];
    for _ in 0..spikes {
        points.push((cx + rot.cos() * outer, cy + rot.sin() * outer));
        rot += step;
        points.push((cx + rot.cos() * inner, cy + rot.sin() * inner));
        rot += step;
    }
    points.push((cx, cy - outer));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_logo_back::dao::teams::{Conference, Division, TeamColors};

    fn team() -> Team {
        Team {
            id: 1,
            name: "Chicago Bears".into(),
            city: "Chicago".into(),
            mascot: "Bears".into(),
            conference: Conference::NFC,
            division: Division::North,
            colors: TeamColors {
                primary: "#0B162A".into(),
                secondary: "#C83803".into(),
                accent: "#FFFFFF".into(),
            },
            founded: 1920,
            logo: None,
        }
    }

    #[test]
    fn star_outline_has_two_points_per_spike_plus_closure() {
        let points = star_points(0.0, 0.0, 8, 5.0, 3.0);
        assert_eq!(points.len(), 2 * 8 + 2);
        // Starts and closes on the topmost outer vertex.
        assert_eq!(points.first(), Some(&(0.0, -5.0)));
        assert_eq!(points.last(), Some(&(0.0, -5.0)));
    }

    #[test]
    fn minimalist_badge_layers_team_colors() {
        let svg = minimalist_badge(&team());
        assert!(svg.contains("#0B162A"));
        assert!(svg.contains("#C83803"));
        assert!(svg.contains(">B</text>"));
        assert!(svg.contains(r#"stroke="#ffffff""#));
    }

    #[test]
    fn retro_badge_carries_captions_and_founding_year() {
        let svg = retro_badge(&team());
        assert!(svg.contains(">CHICAGO</text>"));
        assert!(svg.contains(">BEARS</text>"));
        assert!(svg.contains(">EST. 1920</text>"));
    }
}
