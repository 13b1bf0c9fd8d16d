//! Text rendering of the shopping cart page.

use std::fmt::{self, Write};

use cart_checkout_core::PageView;

/// Render a page view as plain text.
///
/// # Errors
///
/// Returns an error if a formatting implementation fails.
pub fn page(view: &PageView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_page(&mut out, view)?;
    Ok(out)
}

fn write_page(out: &mut String, view: &PageView) -> fmt::Result {
    writeln!(out, "Shopping Cart")?;
    writeln!(out, "=============")?;

    if let Some(message) = view.empty_message {
        writeln!(out, "{message}")?;
    }

    for item in &view.items {
        writeln!(
            out,
            "[{id}] {name} x{qty} @ {unit} = {total}",
            id = item.id,
            name = item.name,
            qty = item.quantity,
            unit = item.unit_price,
            total = item.line_total,
        )?;
        if !item.description.is_empty() {
            writeln!(out, "    {}", item.description)?;
        }
    }

    if let Some(summary) = &view.summary {
        writeln!(out)?;
        writeln!(out, "Order Summary")?;
        writeln!(out, "-------------")?;
        writeln!(out, "Items ({}): {}", summary.item_count, summary.subtotal)?;
        writeln!(out, "Shipping:")?;
        for choice in &summary.shipping_choices {
            let marker = if choice.selected { "(*)" } else { "( )" };
            writeln!(out, "  {marker} {}", choice.caption)?;
        }
        if summary.discount_code.is_empty() {
            writeln!(out, "Discount code: (none)")?;
        } else {
            writeln!(out, "Discount code: {}", summary.discount_code)?;
        }
        writeln!(out, "Total Price: {}", summary.total)?;
    }

    Ok(())
}
