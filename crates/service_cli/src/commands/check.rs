//! Check command implementation
//!
//! Validates the configuration and the scenario catalog.

use climate_core::types::Industry;
use tracing::info;

use super::session::Context;
use crate::Result;

/// Run the check command
pub fn run(ctx: &Context) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(ctx)?);
    info!("Check complete");
    Ok(())
}

fn render(ctx: &Context) -> Result<String> {
    let config = &ctx.config;
    let mut out = String::new();

    out.push_str(&format!("✓ Configuration valid (log level: {})\n", config.log_level));
    out.push_str(&format!("✓ Currency: {}\n", ctx.currency));
    match &config.catalog {
        Some(path) => out.push_str(&format!(
            "✓ Catalog: {} ({} scenarios)\n",
            path.display(),
            ctx.catalog.len()
        )),
        None => out.push_str(&format!(
            "✓ Catalog: built-in NGFS ({} scenarios)\n",
            ctx.catalog.len()
        )),
    }
    out.push_str(&format!(
        "✓ Exposure columns: '{}', '{}'\n",
        config.exposure.sector_column, config.exposure.value_column
    ));
    out.push_str(&format!("✓ Output directory: {}\n", config.output_dir.display()));

    out.push_str("✓ Industry defaults resolve:\n");
    for industry in Industry::known() {
        let defaults = ctx.catalog.defaults_for_industry(&industry);
        ctx.catalog.resolve_selection(&defaults)?;
        out.push_str(&format!("  {}: {}\n", industry, defaults.join(", ")));
    }
    ctx.catalog.resolve_selection(&[ctx.catalog.fallback()])?;
    out.push_str(&format!("  (other): {}\n", ctx.catalog.fallback()));
    Ok(out)
}
