//! In-memory property store.
//!
//! Owns the listing collection and the shared agent record. Handlers reach
//! it through `AppState` behind a `tokio::sync::RwLock`: reads take the read
//! guard, every mutation (including the view increment on single-item fetch)
//! takes the write guard, which serializes writers.

use chrono::Utc;

use crate::app::seed;
use crate::domain::error::DomainError;
use crate::domain::property::{
    compute_stats, similar_properties, Agent, Property, PropertyDraft, PropertyStats,
    PropertyStatus,
};

pub struct PropertyStore {
    properties: Vec<Property>,
    agent: Agent,
}

impl PropertyStore {
    /// Empty store with the given shared agent.
    pub fn new(agent: Agent) -> Self {
        Self {
            properties: Vec::new(),
            agent,
        }
    }

    /// Store preloaded with the demo inventory.
    pub fn seeded() -> Self {
        Self {
            properties: seed::seed_properties(),
            agent: seed::seed_agent(),
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Snapshot of every record in store order (insertion order).
    pub fn list(&self) -> Vec<Property> {
        self.properties.clone()
    }

    pub fn get(&self, id: u64) -> Result<Property, DomainError> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::property_not_found(id))
    }

    /// Single-item fetch path: returns the record with its view counter
    /// already incremented. The increment on a read is inherited behavior;
    /// the counter only ever grows.
    pub fn get_and_count_view(&mut self, id: u64) -> Result<Property, DomainError> {
        let property = self
            .properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::property_not_found(id))?;
        property.views += 1;
        Ok(property.clone())
    }

    /// Inserts a new record from a validated draft. The store assigns the
    /// id (max existing + 1, never reused), initial status/flags and the
    /// publication timestamp.
    pub fn create(&mut self, draft: PropertyDraft) -> Property {
        let id = self
            .properties
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;

        let property = Property {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            location: draft.location,
            address: draft.address,
            property_type: draft.property_type,
            operation: draft.operation,
            rooms: draft.rooms,
            bathrooms: draft.bathrooms,
            area: draft.area,
            lot_area: draft.lot_area,
            age_years: draft.age_years,
            maintenance_fee: draft.maintenance_fee,
            features: draft.features,
            services: draft.services,
            images: draft.images,
            coordinates: draft.coordinates,
            status: PropertyStatus::Available,
            featured: false,
            published_at: Utc::now(),
            updated_at: None,
            agent: self.agent.clone(),
            views: 0,
        };
        self.properties.push(property.clone());
        property
    }

    /// Full replace of the mutable fields. Id, status, featured flag,
    /// publication timestamp, view counter and agent are preserved; the
    /// update timestamp is set.
    pub fn update(&mut self, id: u64, draft: PropertyDraft) -> Result<Property, DomainError> {
        let property = self
            .properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::property_not_found(id))?;

        property.title = draft.title;
        property.description = draft.description;
        property.price = draft.price;
        property.location = draft.location;
        property.address = draft.address;
        property.property_type = draft.property_type;
        property.operation = draft.operation;
        property.rooms = draft.rooms;
        property.bathrooms = draft.bathrooms;
        property.area = draft.area;
        property.lot_area = draft.lot_area;
        property.age_years = draft.age_years;
        property.maintenance_fee = draft.maintenance_fee;
        property.features = draft.features;
        property.services = draft.services;
        property.images = draft.images;
        property.coordinates = draft.coordinates;
        property.updated_at = Some(Utc::now());

        Ok(property.clone())
    }

    /// Soft delete: flips the record to `Inactive` and keeps it.
    pub fn soft_delete(&mut self, id: u64) -> Result<(), DomainError> {
        let property = self
            .properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::property_not_found(id))?;
        property.retire(Utc::now());
        Ok(())
    }

    /// Similar listings for `id` (see `domain::property::similar`).
    pub fn similar(&self, id: u64, limit: usize) -> Result<Vec<Property>, DomainError> {
        let reference = self.get(id)?;
        Ok(similar_properties(&self.properties, &reference, limit))
    }

    pub fn stats(&self) -> PropertyStats {
        compute_stats(&self.properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::{Coordinates, Operation, PropertyType};

    fn draft(title: &str, price: f64) -> PropertyDraft {
        PropertyDraft {
            title: title.to_string(),
            description: "Descripción de prueba con longitud suficiente para el contrato \
                          de validación del borrador."
                .to_string(),
            price,
            location: "Centro, Rosario".to_string(),
            address: None,
            property_type: PropertyType::Apartment,
            operation: Operation::Sale,
            rooms: 2,
            bathrooms: 1,
            area: 70.0,
            lot_area: None,
            age_years: None,
            maintenance_fee: None,
            features: vec![],
            services: vec![],
            images: vec![],
            coordinates: Some(Coordinates { lat: -32.95, lng: -60.64 }),
            agent_id: 1,
        }
    }

    #[test]
    fn create_assigns_max_plus_one() {
        let mut store = PropertyStore::seeded();
        let created = store.create(draft("Departamento de prueba", 90_000.0));
        assert_eq!(created.id, 7);
        assert_eq!(created.status, PropertyStatus::Available);
        assert!(!created.featured);
        assert_eq!(created.views, 0);

        let next = store.create(draft("Otro departamento de prueba", 95_000.0));
        assert_eq!(next.id, 8);
    }

    #[test]
    fn ids_are_never_reused_after_soft_delete() {
        let mut store = PropertyStore::seeded();
        store.soft_delete(6).unwrap();
        // Record 6 is retained, so the next id is still max + 1.
        let created = store.create(draft("Departamento de prueba", 90_000.0));
        assert_eq!(created.id, 7);
    }

    #[test]
    fn view_counter_increments_on_fetch() {
        let mut store = PropertyStore::seeded();
        let first = store.get_and_count_view(1).unwrap();
        let second = store.get_and_count_view(1).unwrap();
        assert_eq!(second.views, first.views + 1);
    }

    #[test]
    fn update_preserves_identity_fields() {
        let mut store = PropertyStore::seeded();
        let before = store.get(2).unwrap();
        let updated = store.update(2, draft("Título actualizado aquí", 200_000.0)).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.published_at, before.published_at);
        assert_eq!(updated.views, before.views);
        assert_eq!(updated.status, before.status);
        assert_eq!(updated.price, 200_000.0);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn soft_delete_keeps_the_record() {
        let mut store = PropertyStore::seeded();
        store.soft_delete(3).unwrap();
        let retired = store.get(3).unwrap();
        assert_eq!(retired.status, PropertyStatus::Inactive);
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut store = PropertyStore::seeded();
        assert!(store.get(999).is_err());
        assert!(store.get_and_count_view(999).is_err());
        assert!(store.update(999, draft("Título de prueba x", 1_000.0)).is_err());
        assert!(store.soft_delete(999).is_err());
        assert!(store.similar(999, 4).is_err());
    }

    #[test]
    fn soft_deleted_records_drop_out_of_similar_and_stats() {
        let mut store = PropertyStore::seeded();
        let before = store.similar(1, 10).unwrap();
        assert!(before.iter().any(|p| p.id == 6));

        store.soft_delete(6).unwrap();
        let after = store.similar(1, 10).unwrap();
        assert!(after.iter().all(|p| p.id != 6));
        assert_eq!(store.stats().total_properties, 5);
    }
}
