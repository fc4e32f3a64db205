use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use crag_core::session::Session;
use tracing::debug;

use super::load_config;
use crate::host::{photo_from_url, LoggingPhotos, NavigationQueue, QueueNavigator};
use crate::script::{apply, Script};
use crate::summary::{print_header, print_step};

#[derive(Args)]
pub struct ReplayArgs {
    /// Event script (TOML)
    pub script: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave navigation requests unanswered instead of switching the photo
    #[arg(long)]
    pub no_follow: bool,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = Script::load(&args.script)?;

    let queue = NavigationQueue::default();
    let mut session = Session::new(
        config,
        script.feature.clone(),
        script.photo.clone(),
        script.viewport.to_viewport(),
        Box::new(LoggingPhotos),
        Box::new(QueueNavigator::new(queue.clone())),
    )?;
    session.set_routes(script.routes.clone());
    session.set_route_offsets(script.route_offsets.clone());

    print_header(&session, &script);
    for (step, event) in script.events.iter().enumerate() {
        apply(&mut session, event)?;

        let navigations: Vec<String> = queue.borrow_mut().drain(..).collect();
        if !args.no_follow {
            for url in &navigations {
                match photo_from_url(url) {
                    Some(photo) => session.set_photo_path(photo),
                    None => debug!(url, "Navigation without a photo segment"),
                }
            }
        }
        print_step(step + 1, event, &session.view(), &navigations);
    }

    Ok(())
}
