//! Similarity matcher: other available listings of the same kind in the
//! same price band.

use super::Property;

/// Price band half-width as a fraction of the reference price.
const PRICE_BAND: f64 = 0.3;

/// Finds properties comparable to `reference`: available, identical type
/// and operation, and price within +-30% of the reference price (inclusive
/// bounds). The reference itself is never returned. Results come back in
/// store order, at most `limit` of them.
pub fn similar_properties(
    properties: &[Property],
    reference: &Property,
    limit: usize,
) -> Vec<Property> {
    let price_min = reference.price * (1.0 - PRICE_BAND);
    let price_max = reference.price * (1.0 + PRICE_BAND);

    properties
        .iter()
        .filter(|p| {
            p.id != reference.id
                && p.is_available()
                && p.property_type == reference.property_type
                && p.operation == reference.operation
                && p.price >= price_min
                && p.price <= price_max
        })
        .take(limit)
        .cloned()
        .collect()
}
