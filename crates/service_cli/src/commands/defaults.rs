//! Defaults command implementation
//!
//! Shows the scenarios pre-selected for an industry.

use climate_core::catalog::ScenarioCatalog;
use climate_core::types::Industry;
use tracing::warn;

use super::session::Context;
use crate::Result;

/// Run the defaults command
pub fn run(ctx: &Context, industry: &str) -> Result<()> {
    let industry = Industry::from_label(industry);
    if !industry.is_known() {
        warn!(
            industry = %industry,
            fallback = ctx.catalog.fallback(),
            "Industry has no configured defaults; using fallback"
        );
    }
    print!("{}", render(&ctx.catalog, &industry));
    Ok(())
}

fn render(catalog: &ScenarioCatalog, industry: &Industry) -> String {
    let mut out = format!("Default scenarios for {}:\n", industry);
    for name in catalog.defaults_for_industry(industry) {
        out.push_str(&format!("  - {}\n", name));
    }
    out
}
