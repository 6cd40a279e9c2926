//! Simulated pharmacy price data.
//!
//! A hardcoded offer table standing in for real pharmacy inventory APIs.
//! Lookups are case-insensitive on the medicine name; an unknown medicine
//! simply has no offers. All prices and pharmacy names are fictional.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One pharmacy's listing for a medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyOffer {
    /// Pharmacy display name.
    pub pharmacy: String,
    /// Medicine the offer is for, as listed by the pharmacy.
    pub medicine: String,
    /// Unit price in cents, to avoid float money.
    pub price_cents: u32,
    /// Whether the pharmacy currently stocks it.
    pub in_stock: bool,
}

fn offer(pharmacy: &str, medicine: &str, price_cents: u32, in_stock: bool) -> PharmacyOffer {
    PharmacyOffer {
        pharmacy: pharmacy.to_string(),
        medicine: medicine.to_string(),
        price_cents,
        in_stock,
    }
}

/// Look up all offers for a medicine, case-insensitively.
///
/// Returns an empty list for medicines no pharmacy lists.
pub fn offers_for(medicine: &str) -> Vec<PharmacyOffer> {
    let offers = match medicine.to_lowercase().as_str() {
        "paracetamol" => vec![
            offer("GreenCross Pharmacy", "Paracetamol", 349, true),
            offer("MediMart", "Paracetamol", 299, true),
            offer("City Care Chemist", "Paracetamol", 319, true),
        ],
        "ibuprofen" => vec![
            offer("GreenCross Pharmacy", "Ibuprofen", 429, true),
            offer("MediMart", "Ibuprofen", 389, false),
            offer("City Care Chemist", "Ibuprofen", 409, true),
        ],
        "cetirizine" => vec![
            offer("GreenCross Pharmacy", "Cetirizine", 259, true),
            offer("MediMart", "Cetirizine", 279, true),
        ],
        "metformin" => vec![
            offer("GreenCross Pharmacy", "Metformin", 549, true),
            offer("MediMart", "Metformin", 499, false),
            offer("City Care Chemist", "Metformin", 529, true),
        ],
        "amoxicillin" => vec![
            offer("MediMart", "Amoxicillin", 649, true),
            offer("City Care Chemist", "Amoxicillin", 699, true),
        ],
        "omeprazole" => vec![
            offer("GreenCross Pharmacy", "Omeprazole", 459, true),
            offer("City Care Chemist", "Omeprazole", 439, false),
        ],
        _ => vec![],
    };

    debug!(medicine = %medicine, offer_count = offers.len(), "pharmacy lookup");
    offers
}

/// Pick the cheapest in-stock offer, if any.
///
/// Out-of-stock listings never win, even at a lower price.
pub fn best_offer(offers: &[PharmacyOffer]) -> Option<&PharmacyOffer> {
    offers
        .iter()
        .filter(|o| o.in_stock)
        .min_by_key(|o| o.price_cents)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::{best_offer, offers_for};

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(offers_for("PARACETAMOL").len(), 3);
        assert_eq!(offers_for("paracetamol").len(), 3);
    }

    #[test]
    fn test_unknown_medicine_has_no_offers() {
        assert!(offers_for("Zolpidem").is_empty());
    }

    #[test]
    fn test_best_offer_is_cheapest() {
        let offers = offers_for("Paracetamol");
        let best = best_offer(&offers).unwrap();
        assert_eq!(best.pharmacy, "MediMart");
        assert_eq!(best.price_cents, 299);
    }

    /// The cheapest Metformin listing is out of stock, so the runner-up
    /// in-stock offer wins.
    #[test]
    fn test_best_offer_skips_out_of_stock() {
        let offers = offers_for("Metformin");
        let best = best_offer(&offers).unwrap();
        assert_eq!(best.pharmacy, "City Care Chemist");
        assert!(best.in_stock);
    }

    #[test]
    fn test_best_offer_none_when_nothing_in_stock() {
        assert!(best_offer(&[]).is_none());

        let mut offers = offers_for("Ibuprofen");
        for o in &mut offers {
            o.in_stock = false;
        }
        assert!(best_offer(&offers).is_none());
    }
}
