//! Scenario 3: Pharmacy Price Comparison
//!
//! Looks up the simulated offer table for a few medicines and picks the
//! best (cheapest in-stock) offer for each. An unknown medicine simply
//! has no offers; that is not an error.

use remedia_contracts::error::RemediaResult;

use crate::pharmacy::{best_offer, offers_for};

/// Run Scenario 3: Pharmacy Price Comparison.
pub fn run_scenario() -> RemediaResult<()> {
    println!("=== Scenario 3: Pharmacy Price Comparison ===");
    println!();

    for medicine in ["Paracetamol", "Metformin", "Zolpidem"] {
        println!("  Medicine: {}", medicine);

        let offers = offers_for(medicine);
        if offers.is_empty() {
            println!("    No pharmacy lists this medicine.");
            println!();
            continue;
        }

        for offer in &offers {
            println!(
                "    {:<22} {:>7}  {}",
                offer.pharmacy,
                format_price(offer.price_cents),
                if offer.in_stock { "in stock" } else { "OUT OF STOCK" }
            );
        }

        match best_offer(&offers) {
            Some(best) => println!(
                "    Best offer: {} at {}",
                best.pharmacy,
                format_price(best.price_cents)
            ),
            None => println!("    No pharmacy currently has stock."),
        }
        println!();
    }

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}

fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
