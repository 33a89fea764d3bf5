// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated 40-row list with a video header ad in its first row.
//!
//! Plays a scripted session (scrolls, a click, the close button) from a TOML
//! file, or the built-in one, and prints which rows are on screen after each step.
//!
//! Run:
//! - `cargo run -p headliner_demos --example header_ad_table`
//! - `RUST_LOG=debug cargo run -p headliner_demos --example header_ad_table -- session.toml`

use anyhow::Context;
use headliner_demos::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    headliner_demos::init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            DemoConfig::from_toml(&text).with_context(|| format!("parsing {path}"))?
        }
        None => DemoConfig::builtin().context("parsing the built-in session")?,
    };

    let scene = headliner_demos::run_session(&config, |step, scene| {
        let rows = scene.visible_rows();
        println!(
            "{step:?}\n  phase {:?}, height {:.2}, padding {:.2}, element {:?}\n  rows {}..={}",
            scene.cell().phase(),
            scene.cell().current_height(),
            scene.cell().padding_height(),
            scene.element_frame(),
            rows.first().copied().unwrap_or_default(),
            rows.last().copied().unwrap_or_default(),
        );
    })?;

    println!("== Session ==\n  {:?}", scene.cell().listener());
    Ok(())
}
