//! Filter and sort engines for property listings.
//!
//! Both are pure functions over slices: filtering returns the subset
//! satisfying every present constraint (logical AND), sorting reorders a new
//! vector with a stable sort so that ties keep their input order. Stability
//! matters for reproducible pagination across requests on unmodified data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Operation, Property, PropertyType};

/// Optional search constraints. An absent field imposes no restriction;
/// present fields compose with AND semantics, independent of order.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    /// Exact property type match.
    pub property_type: Option<PropertyType>,
    /// Exact operation match.
    pub operation: Option<Operation>,
    /// Case-insensitive substring match against the location field.
    pub location: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<f64>,
    /// Inclusive upper price bound.
    pub price_max: Option<f64>,
    /// Minimum room count (not exact match).
    pub rooms: Option<u32>,
    /// Minimum bathroom count.
    pub bathrooms: Option<u32>,
    /// Inclusive lower bound on built area.
    pub area_min: Option<f64>,
    /// Inclusive upper bound on built area.
    pub area_max: Option<f64>,
    /// Exact featured-flag match.
    pub featured: Option<bool>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(t) = self.property_type {
            if property.property_type != t {
                return false;
            }
        }
        if let Some(op) = self.operation {
            if property.operation != op {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !property
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if property.price > max {
                return false;
            }
        }
        if let Some(rooms) = self.rooms {
            if property.rooms < rooms {
                return false;
            }
        }
        if let Some(bathrooms) = self.bathrooms {
            if property.bathrooms < bathrooms {
                return false;
            }
        }
        if let Some(min) = self.area_min {
            if property.area < min {
                return false;
            }
        }
        if let Some(max) = self.area_max {
            if property.area > max {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if property.featured != featured {
                return false;
            }
        }
        true
    }
}

/// Sort criterion for listing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Publication timestamp descending (newest first). The default.
    Recent,
    PriceAsc,
    PriceDesc,
    AreaDesc,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Recent
    }
}

/// Returns the subset of `properties` matching `filter`, in input order.
pub fn filter_properties(properties: &[Property], filter: &PropertyFilter) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Reorders `properties` in place by `key`. `sort_by` is stable, so equal
/// keys preserve their relative input order.
pub fn sort_properties(properties: &mut [Property], key: SortKey) {
    match key {
        SortKey::PriceAsc => properties.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => properties.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::AreaDesc => properties.sort_by(|a, b| b.area.total_cmp(&a.area)),
        SortKey::Recent => properties.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::seed;
    use crate::domain::property::{Agent, PropertyStatus};
    use chrono::{Duration, Utc};

    fn agent() -> Agent {
        Agent {
            id: 1,
            name: "Agente".to_string(),
            email: "agente@example.com".to_string(),
            phone: "+54 341 000-0000".to_string(),
            avatar: None,
        }
    }

    fn property(id: u64, price: f64, area: f64, days_ago: i64) -> Property {
        Property {
            id,
            title: format!("Propiedad {}", id),
            description: String::new(),
            price,
            location: "Centro, Rosario".to_string(),
            address: None,
            property_type: PropertyType::House,
            operation: Operation::Sale,
            rooms: 3,
            bathrooms: 2,
            area,
            lot_area: None,
            age_years: None,
            maintenance_fee: None,
            features: vec![],
            services: vec![],
            images: vec![],
            coordinates: None,
            status: PropertyStatus::Available,
            featured: false,
            published_at: Utc::now() - Duration::days(days_ago),
            updated_at: None,
            agent: agent(),
            views: 0,
        }
    }

    #[test]
    fn empty_filter_returns_full_input() {
        let properties = seed::seed_properties();
        let result = filter_properties(&properties, &PropertyFilter::default());
        assert_eq!(result.len(), properties.len());
    }

    #[test]
    fn constraints_compose_with_and_semantics() {
        let properties = seed::seed_properties();
        let filter = PropertyFilter {
            property_type: Some(PropertyType::House),
            operation: Some(Operation::Sale),
            ..Default::default()
        };
        let result = filter_properties(&properties, &filter);
        assert!(!result.is_empty());
        for p in &result {
            assert_eq!(p.property_type, PropertyType::House);
            assert_eq!(p.operation, Operation::Sale);
        }
    }

    #[test]
    fn location_match_is_case_insensitive_substring() {
        let properties = seed::seed_properties();
        let filter = PropertyFilter {
            location: Some("FISHERTON".to_string()),
            ..Default::default()
        };
        let result = filter_properties(&properties, &filter);
        assert_eq!(result.len(), 1);
        assert!(result[0].location.contains("Fisherton"));
    }

    #[test]
    fn rooms_filter_is_a_minimum_not_exact() {
        let properties = seed::seed_properties();
        let filter = PropertyFilter {
            rooms: Some(3),
            ..Default::default()
        };
        for p in filter_properties(&properties, &filter) {
            assert!(p.rooms >= 3);
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let properties = vec![property(1, 100.0, 50.0, 0), property(2, 200.0, 50.0, 0)];
        let filter = PropertyFilter {
            price_min: Some(100.0),
            price_max: Some(100.0),
            ..Default::default()
        };
        let result = filter_properties(&properties, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn seeded_price_band_sorted_ascending() {
        // Contract scenario: 40k..300k over the seeds, price ascending.
        let properties = seed::seed_properties();
        let filter = PropertyFilter {
            price_min: Some(40_000.0),
            price_max: Some(300_000.0),
            ..Default::default()
        };
        let mut result = filter_properties(&properties, &filter);
        sort_properties(&mut result, SortKey::PriceAsc);
        let prices: Vec<f64> = result.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![45_000.0, 180_000.0, 280_000.0]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut properties = vec![
            property(1, 100.0, 80.0, 0),
            property(2, 100.0, 60.0, 0),
            property(3, 100.0, 70.0, 0),
        ];
        sort_properties(&mut properties, SortKey::PriceAsc);
        let ids: Vec<u64> = properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn price_orders_are_inverse_up_to_ties() {
        let mut asc = seed::seed_properties();
        let mut desc = seed::seed_properties();
        sort_properties(&mut asc, SortKey::PriceAsc);
        sort_properties(&mut desc, SortKey::PriceDesc);
        let asc_prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
    }

    #[test]
    fn recent_sorts_newest_first() {
        let mut properties = vec![
            property(1, 100.0, 50.0, 5),
            property(2, 100.0, 50.0, 0),
            property(3, 100.0, 50.0, 2),
        ];
        sort_properties(&mut properties, SortKey::Recent);
        let ids: Vec<u64> = properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn area_desc_sorts_largest_first() {
        let mut properties = vec![
            property(1, 100.0, 50.0, 0),
            property(2, 100.0, 180.0, 0),
            property(3, 100.0, 80.0, 0),
        ];
        sort_properties(&mut properties, SortKey::AreaDesc);
        let ids: Vec<u64> = properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
