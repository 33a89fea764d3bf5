// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces of the Headliner demos: a TOML session format, a scripted
//! banner, and a simulated list screen hosting the header cell.
//!
//! Run:
//! - `cargo run -p headliner_demos --example header_ad_basics`
//! - `cargo run -p headliner_demos --example header_ad_table [session.toml]`

pub mod config;
pub mod renderer;
pub mod scene;

use config::{DemoConfig, Step};
use renderer::ScriptedRenderer;
use scene::TableScene;

/// Install a `fmt` subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Build the scene, load the ad, and play every scripted step.
///
/// `on_step` sees the scene after each step.
pub fn run_session(
    config: &DemoConfig,
    mut on_step: impl FnMut(&Step, &TableScene),
) -> anyhow::Result<TableScene> {
    let mut scene = TableScene::new(config)?;
    let mut renderer = ScriptedRenderer::new(config.outcome);
    if !scene.load(&mut renderer, &config.placement) {
        anyhow::bail!("header cell closed before the first load");
    }
    for event in renderer.drain() {
        let _ = scene.deliver(event);
    }

    for step in &config.steps {
        match step {
            Step::Scroll { y } => {
                let _ = scene.scroll_to(*y);
            }
            Step::Click => renderer.click(),
            Step::CloseButton => renderer.tap_close_button(),
        }
        for event in renderer.drain() {
            let _ = scene.deliver(event);
        }
        on_step(step, &scene);
    }
    Ok(scene)
}
