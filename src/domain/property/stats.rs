//! Aggregate statistics over the available inventory.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::{Operation, Property, PropertyType};

/// Derived counters over properties with `Available` status.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PropertyStats {
    pub total_properties: u64,
    #[schema(value_type = Object)]
    pub by_type: BTreeMap<PropertyType, u64>,
    #[schema(value_type = Object)]
    pub by_operation: BTreeMap<Operation, u64>,
    pub average_price: f64,
    pub featured_count: u64,
}

/// Computes counts by type and operation, mean price and featured count over
/// the available subset. Mean is 0.0 when nothing is available.
pub fn compute_stats(properties: &[Property]) -> PropertyStats {
    let available: Vec<&Property> = properties.iter().filter(|p| p.is_available()).collect();

    let mut by_type: BTreeMap<PropertyType, u64> = BTreeMap::new();
    let mut by_operation: BTreeMap<Operation, u64> = BTreeMap::new();
    for p in &available {
        *by_type.entry(p.property_type).or_insert(0) += 1;
        *by_operation.entry(p.operation).or_insert(0) += 1;
    }

    let average_price = if available.is_empty() {
        0.0
    } else {
        available.iter().map(|p| p.price).sum::<f64>() / available.len() as f64
    };

    let featured_count = available.iter().filter(|p| p.featured).count() as u64;

    PropertyStats {
        total_properties: available.len() as u64,
        by_type,
        by_operation,
        average_price,
        featured_count,
    }
}
