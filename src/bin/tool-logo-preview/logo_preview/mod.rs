//! Helper tool to render badge previews of the generated logo variations

#![forbid(unsafe_code)]

mod badge;
mod html;
mod svg;

use anyhow::Result;
use std::{env, fs, path::PathBuf};

use nfl_logo_back::{config::AppConfig, dao::teams::TeamStore};

use badge::{minimalist_badge, retro_badge};
use html::{TeamCard, write_gallery};

pub async fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-logo-preview");
    fs::create_dir_all(&out_dir)?;

    let config = AppConfig::load();
    let store = TeamStore::new(config.data_path());
    let teams = store.load().await?;

    let mut cards = Vec::with_capacity(teams.len());
    for team in &teams {
        let minimalist_svg = minimalist_badge(team);
        let retro_svg = retro_badge(team);

        let slug = team.name.replace(char::is_whitespace, "_");
        fs::write(out_dir.join(format!("{slug}_minimalist.svg")), &minimalist_svg)?;
        fs::write(out_dir.join(format!("{slug}_retro.svg")), &retro_svg)?;

        cards.push(TeamCard {
            name: team.name.clone(),
            minimalist_svg,
            retro_svg,
        });
    }

    let gallery_path = write_gallery(
        &format!("Logo variation previews ({} teams)", cards.len()),
        &cards,
        out_dir.join("index.html"),
    )?;

    println!(
        "Generated badge previews in {}:\n  - {}",
        out_dir.display(),
        gallery_path.display()
    );

    Ok(())
}
