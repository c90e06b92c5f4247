//! `shoegrid` — render the shoe grid as a standalone HTML page on stdout.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io::Write;

    use anyhow::Context;

    use shoegrid_catalog::Clock;
    use shoegrid_storefront::{Config, ShoeGrid, html};

    shoegrid_observability::init();

    let config = Config::from_env()?;
    let catalog = config.load_catalog()?;
    let now = config.clock().now();
    let theme = config.theme.theme();

    tracing::info!(%now, theme = ?config.theme, "rendering shoe grid");

    let grid = ShoeGrid::new(&catalog, now);
    let page = html::render_document("Shoes", &grid.render(&theme));

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(page.as_bytes())
        .context("failed to write page to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    tracing::info!(cards = grid.cards().len(), bytes = page.len(), "page written");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build mounts the Leptos app from the library entry point.
}
