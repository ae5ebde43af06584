//! Seed inventory loaded at startup. In production this would come from a
//! database; here it is the demo dataset the whole API serves.

use chrono::{Duration, Utc};

use crate::domain::property::{
    Agent, Coordinates, Operation, Property, PropertyStatus, PropertyType,
};

/// The single shared listing agent.
pub fn seed_agent() -> Agent {
    Agent {
        id: 1,
        name: "María González".to_string(),
        email: "maria@inmomax.com".to_string(),
        phone: "+54 341 123-4567".to_string(),
        avatar: Some("/images/agente1.jpg".to_string()),
    }
}

/// Six demo listings around Rosario. Publication timestamps are staggered
/// one day apart, newest first, so the `recent` ordering equals seed order.
pub fn seed_properties() -> Vec<Property> {
    let agent = seed_agent();
    let now = Utc::now();
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Property {
            id: 1,
            title: "Casa moderna en Las Lomas".to_string(),
            description: "Hermosa casa moderna ubicada en el prestigioso barrio de Las Lomas. \
                          La propiedad cuenta con amplios espacios, excelente luminosidad y un \
                          diseño contemporáneo que combina funcionalidad y estética. El jardín \
                          ofrece un espacio ideal para el disfrute familiar."
                .to_string(),
            price: 350_000.0,
            location: "Las Lomas, Rosario".to_string(),
            address: Some("Av. Las Lomas 1234".to_string()),
            property_type: PropertyType::House,
            operation: Operation::Sale,
            rooms: 3,
            bathrooms: 2,
            area: 120.0,
            lot_area: Some(200.0),
            age_years: Some(5),
            maintenance_fee: None,
            features: strings(&[
                "Cocina integrada con mesada de granito",
                "Living comedor con ventanal al jardín",
                "Suite principal con vestidor",
                "Parrilla cubierta",
                "Cochera para 2 autos",
                "Sistema de alarma",
                "Portón automatizado",
                "Piscina climatizada",
            ]),
            services: strings(&[
                "Gas natural",
                "Agua corriente",
                "Cloacas",
                "Electricidad",
                "Internet fibra óptica",
                "Cable",
            ]),
            images: strings(&[
                "/images/casa1-1.jpg",
                "/images/casa1-2.jpg",
                "/images/casa1-3.jpg",
                "/images/casa1-4.jpg",
            ]),
            coordinates: Some(Coordinates {
                lat: -32.9442,
                lng: -60.6505,
            }),
            status: PropertyStatus::Available,
            featured: true,
            published_at: now,
            updated_at: None,
            agent: agent.clone(),
            views: 145,
        },
        Property {
            id: 2,
            title: "Departamento céntrico con balcón".to_string(),
            description: "Excelente departamento de 2 ambientes en pleno centro de Rosario. \
                          Ubicado en un edificio con portero las 24 horas, cuenta con todas \
                          las comodidades para una vida urbana plena. A pasos de comercios, \
                          bancos y transporte público."
                .to_string(),
            price: 180_000.0,
            location: "Centro, Rosario".to_string(),
            address: Some("San Martín 856, Piso 4°".to_string()),
            property_type: PropertyType::Apartment,
            operation: Operation::Sale,
            rooms: 2,
            bathrooms: 1,
            area: 65.0,
            lot_area: None,
            age_years: Some(15),
            maintenance_fee: Some(12_000.0),
            features: strings(&[
                "Balcón con vista a la ciudad",
                "Cocina separada",
                "Dormitorio principal con placard",
                "Baño completo con ducha",
                "Living comedor integrado",
                "Portero 24 horas",
            ]),
            services: strings(&[
                "Gas natural",
                "Agua corriente",
                "Cloacas",
                "Electricidad",
                "Internet",
                "Cable",
            ]),
            images: strings(&[
                "/images/depto1-1.jpg",
                "/images/depto1-2.jpg",
                "/images/depto1-3.jpg",
            ]),
            coordinates: Some(Coordinates {
                lat: -32.9520,
                lng: -60.6385,
            }),
            status: PropertyStatus::Available,
            featured: true,
            published_at: now - Duration::days(1),
            updated_at: None,
            agent: agent.clone(),
            views: 89,
        },
        Property {
            id: 3,
            title: "Casa en Fisherton con jardín".to_string(),
            description: "Acogedora casa familiar en el tranquilo barrio de Fisherton. \
                          Perfecta para familias que buscan tranquilidad sin alejarse de la \
                          ciudad. Cuenta con amplio jardín, ideal para niños y mascotas."
                .to_string(),
            price: 45_000.0,
            location: "Fisherton, Rosario".to_string(),
            address: Some("Los Álamos 789".to_string()),
            property_type: PropertyType::House,
            operation: Operation::Rent,
            rooms: 3,
            bathrooms: 2,
            area: 110.0,
            lot_area: Some(180.0),
            age_years: Some(20),
            maintenance_fee: None,
            features: strings(&[
                "Jardín delantero y trasero",
                "Cochera cubierta",
                "Parrilla",
                "Lavadero independiente",
                "3 dormitorios con placards",
                "Baño principal y toilette",
            ]),
            services: strings(&["Gas natural", "Agua corriente", "Cloacas", "Electricidad"]),
            images: strings(&["/images/casa2-1.jpg", "/images/casa2-2.jpg"]),
            coordinates: Some(Coordinates {
                lat: -32.9380,
                lng: -60.6650,
            }),
            status: PropertyStatus::Available,
            featured: false,
            published_at: now - Duration::days(2),
            updated_at: None,
            agent: agent.clone(),
            views: 67,
        },
        Property {
            id: 4,
            title: "Local comercial sobre avenida".to_string(),
            description: "Excelente local comercial ubicado sobre avenida Pellegrini, una de \
                          las arterias más importantes de Rosario. Ideal para cualquier tipo \
                          de comercio con alta visibilidad y flujo peatonal constante."
                .to_string(),
            price: 280_000.0,
            location: "Pellegrini, Rosario".to_string(),
            address: Some("Av. Pellegrini 2456".to_string()),
            property_type: PropertyType::Commercial,
            operation: Operation::Sale,
            rooms: 0,
            bathrooms: 1,
            area: 80.0,
            lot_area: None,
            age_years: Some(10),
            maintenance_fee: Some(8_000.0),
            features: strings(&[
                "Frente sobre avenida principal",
                "Vidriera de 4 metros",
                "Depósito en subsuelo",
                "Baño para empleados",
                "Instalación eléctrica trifásica",
                "Aire acondicionado",
            ]),
            services: strings(&[
                "Gas natural",
                "Agua corriente",
                "Cloacas",
                "Electricidad",
                "Internet",
            ]),
            images: strings(&["/images/local1-1.jpg", "/images/local1-2.jpg"]),
            coordinates: Some(Coordinates {
                lat: -32.9510,
                lng: -60.6420,
            }),
            status: PropertyStatus::Available,
            featured: true,
            published_at: now - Duration::days(3),
            updated_at: None,
            agent: agent.clone(),
            views: 203,
        },
        Property {
            id: 5,
            title: "Departamento nuevo en Pichincha".to_string(),
            description: "Monoambiente a estrenar en el barrio Pichincha. Ideal para \
                          estudiantes o profesionales jóvenes. Edificio con todas las \
                          comodidades modernas y excelente conectividad con el centro."
                .to_string(),
            price: 32_000.0,
            location: "Pichincha, Rosario".to_string(),
            address: Some("Tucumán 1567, Piso 2°".to_string()),
            property_type: PropertyType::Apartment,
            operation: Operation::Rent,
            rooms: 1,
            bathrooms: 1,
            area: 45.0,
            lot_area: None,
            age_years: Some(0),
            maintenance_fee: Some(8_500.0),
            features: strings(&[
                "A estrenar",
                "Cocina integrada",
                "Baño completo",
                "Balcón",
                "Placard empotrado",
                "Ventanas DVH",
            ]),
            services: strings(&[
                "Gas natural",
                "Agua corriente",
                "Cloacas",
                "Electricidad",
                "Internet fibra óptica",
            ]),
            images: strings(&["/images/depto2-1.jpg", "/images/depto2-2.jpg"]),
            coordinates: Some(Coordinates {
                lat: -32.9480,
                lng: -60.6450,
            }),
            status: PropertyStatus::Available,
            featured: false,
            published_at: now - Duration::days(4),
            updated_at: None,
            agent: agent.clone(),
            views: 34,
        },
        Property {
            id: 6,
            title: "Casa quinta en Funes".to_string(),
            description: "Espectacular casa quinta ubicada en Funes, ideal para quienes \
                          buscan tranquilidad y contacto con la naturaleza sin alejarse \
                          demasiado de la ciudad. Amplio parque con piscina y quincho para \
                          disfrutar en familia."
                .to_string(),
            price: 420_000.0,
            location: "Funes, Santa Fe".to_string(),
            address: Some("Los Robles 345".to_string()),
            property_type: PropertyType::House,
            operation: Operation::Sale,
            rooms: 4,
            bathrooms: 3,
            area: 180.0,
            lot_area: Some(800.0),
            age_years: Some(8),
            maintenance_fee: None,
            features: strings(&[
                "Piscina climatizada",
                "Quincho con parrilla",
                "Cancha de tenis",
                "Casa de huéspedes",
                "Cochera para 3 autos",
                "Sistema de riego automático",
                "Alarma perimetral",
                "Parque con árboles frutales",
            ]),
            services: strings(&[
                "Agua corriente",
                "Electricidad",
                "Gas envasado",
                "Internet satelital",
                "Cloacas",
            ]),
            images: strings(&[
                "/images/quinta1-1.jpg",
                "/images/quinta1-2.jpg",
                "/images/quinta1-3.jpg",
                "/images/quinta1-4.jpg",
            ]),
            coordinates: Some(Coordinates {
                lat: -32.9150,
                lng: -60.8200,
            }),
            status: PropertyStatus::Available,
            featured: true,
            published_at: now - Duration::days(5),
            updated_at: None,
            agent,
            views: 178,
        },
    ]
}
