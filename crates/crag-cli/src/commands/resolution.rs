use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use crag_core::photo::{ideal_resolution, select_resolution, PhotoKey, PhotoSet};
use crag_core::viewport::ViewportState;

use super::load_config;

#[derive(Args)]
pub struct ResolutionArgs {
    /// Window width in pixels
    #[arg(long)]
    pub width: f32,

    /// Window height in pixels
    #[arg(long)]
    pub height: f32,

    /// Photo zoom scale
    #[arg(long, default_value = "1.0")]
    pub scale: f32,

    /// Comma-separated resolutions already loaded (e.g. 200,500)
    #[arg(long)]
    pub loaded: Option<String>,

    /// Session config file (TOML) with custom tiers
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ResolutionArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut viewport = ViewportState::new(args.width, args.height);
    viewport.set_zoom(args.scale);

    let photo = PhotoKey::new("photo")?;
    let mut photos = PhotoSet::new();
    for res in parse_list(args.loaded.as_deref())? {
        photos.mark_loaded(&photo, res);
    }

    let ideal = ideal_resolution(&viewport, config.resolution.max_ideal);
    let choice = select_resolution(&config.resolution, &viewport, Some(&photo), &photos);

    println!("Ideal:       {ideal}px");
    println!("Tiers:       {:?}", config.resolution.tiers);
    println!("Target:      {}px", choice.target);
    println!("Display:     {}px", choice.display);
    println!("Needs fetch: {}", choice.needs_fetch());

    Ok(())
}

fn parse_list(s: Option<&str>) -> Result<Vec<u32>> {
    let Some(s) = s else {
        return Ok(Vec::new());
    };
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid resolution: {v:?}"))
        })
        .collect()
}
