use console::Style;
use crag_core::layout::Expander;
use crag_core::session::{Session, SessionView};

use crate::script::{Script, ScriptEvent};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    mode: Style,
    flag: Style,
    nav: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            flag: Style::new().yellow(),
            nav: Style::new().magenta(),
        }
    }
}

pub fn print_header(session: &Session, script: &Script) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Crag Session Replay"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(19)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Feature"),
        s.value.apply_to(session.feature().link())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Photo"),
        s.value.apply_to(
            session
                .state()
                .photo_path
                .as_ref()
                .map_or("-", |p| p.as_str())
        )
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Routes"),
        s.value.apply_to(script.routes.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Events"),
        s.value.apply_to(script.events.len())
    );
    println!();
}

pub fn print_step(step: usize, event: &ScriptEvent, view: &SessionView, navigations: &[String]) {
    let s = Styles::new();

    println!(
        "  {} {}",
        s.label.apply_to(format!("#{step:<3}")),
        s.value.apply_to(event)
    );
    println!(
        "       {:<12}{}",
        s.label.apply_to("mode"),
        s.mode.apply_to(view.mode)
    );
    println!(
        "       {:<12}{}px (target {}px)",
        s.label.apply_to("resolution"),
        view.resolution,
        view.target_resolution
    );

    let expander = match view.expander {
        Some(Expander::Down) => " [expand \u{2193}]",
        Some(Expander::Up) => " [collapse \u{2191}]",
        None => "",
    };
    println!(
        "       {:<12}{}{}",
        s.label.apply_to("pane"),
        view.pane_height,
        s.flag.apply_to(expander)
    );

    let mut flags = Vec::new();
    if view.is_photo_loading {
        flags.push("photo loading");
    }
    if view.show_full_loading {
        flags.push("no photo yet");
    } else if view.show_mini_loading {
        flags.push("resolution pending");
    }
    if !view.routes_layer_visible {
        flags.push("routes hidden");
    }
    if view.show_edit_controls {
        flags.push("editor");
    }
    if view.is_map_visible {
        flags.push("map");
    }
    if !flags.is_empty() {
        println!(
            "       {:<12}{}",
            s.label.apply_to("flags"),
            s.flag.apply_to(flags.join(", "))
        );
    }
    for url in navigations {
        println!(
            "       {:<12}{}",
            s.label.apply_to("navigate"),
            s.nav.apply_to(url)
        );
    }
}
