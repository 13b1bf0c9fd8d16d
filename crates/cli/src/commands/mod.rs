//! CLI command implementations.

pub mod session;
pub mod show;

use cart_checkout_core::PageView;
use clap::ValueEnum;

use crate::render;

/// How page views are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per page view
    Json,
}

/// Write a page view to stdout.
fn print_view(view: &PageView, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = format_view(view, format)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

/// Render a page view in the requested format.
fn format_view(view: &PageView, format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Text => render::page(view)?,
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
    })
}
