#![forbid(unsafe_code)]

use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};

/// One gallery entry: a team name and its two rendered badges.
pub struct TeamCard {
    pub name: String,
    pub minimalist_svg: String,
    pub retro_svg: String,
}

/// Write the gallery page with both badge variations per team.
pub fn write_gallery(
    title: &str,
    cards: &[TeamCard],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat(4,1fr);gap:12px;padding:12px}}
  .card{{background:#1b1b1b;border-radius:10px;padding:10px;text-align:center}}
  .card svg{{width:160px;height:160px;background:#fff;border-radius:6px;margin:4px}}
  .card p{{margin:6px 0 0;font-weight:700}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    for card in cards {
        writeln!(
            w,
            r#"<div class="card">{}{}<p>{}</p></div>"#,
            card.minimalist_svg, card.retro_svg, card.name
        )?;
    }
    writeln!(w, "</div>")?;
    Ok(path.to_path_buf())
}
