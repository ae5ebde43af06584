//! Reply generation: template pools, confidence scores and follow-up
//! suggestions per intent.
//!
//! Template selection draws from an injected `Rng` so the responder is
//! deterministic under a seeded generator in tests. Whatever happens
//! internally, the caller always gets a reply: an empty pool degrades into
//! the generic apology instead of an error.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::intent::Intent;

/// Confidence assigned to any matched (non-default) intent.
pub const CONFIDENCE_MATCHED: f64 = 0.9;
/// Confidence assigned to the default intent.
pub const CONFIDENCE_FALLBACK: f64 = 0.3;
/// Confidence assigned to the apology produced on internal failure.
pub const CONFIDENCE_ERROR: f64 = 0.1;

/// A generated chat reply. The transport layer stamps the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

fn templates(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => &[
            "¡Hola! Bienvenido a InmoMax. ¿En qué puedo ayudarte hoy?",
            "¡Hola! Soy el asistente virtual de InmoMax. ¿Cómo te puedo ayudar?",
            "¡Hola! ¿Estás buscando alguna propiedad en particular?",
        ],
        Intent::Properties => &[
            "Tenemos una gran variedad de propiedades disponibles. ¿Buscas casa, departamento, local comercial o terreno?",
            "Contamos con propiedades en venta y alquiler en toda la zona de Rosario. ¿Qué tipo te interesa?",
            "Manejamos más de 500 propiedades activas. ¿Te interesa alguna zona en particular?",
        ],
        Intent::Prices => &[
            "Los precios varían según la ubicación, tipo y características. ¿Te interesa alguna zona específica?",
            "Tenemos opciones para todos los presupuestos. ¿Podrías contarme qué rango de precio manejas?",
            "Los precios dependen de muchos factores. ¿Qué tipo de propiedad te interesa y en qué zona?",
        ],
        Intent::Rent => &[
            "Manejamos alquileres tradicionales y temporales. ¿Para cuánto tiempo necesitas la propiedad?",
            "Tenemos excelentes opciones en alquiler. ¿Buscas casa o departamento?",
            "Para alquileres trabajamos con garantía propietaria o seguro de caución. ¿Qué modalidad prefieres?",
        ],
        Intent::Sale => &[
            "¿Estás buscando comprar o vender una propiedad?",
            "Para ventas ofrecemos asesoramiento integral. ¿Ya tienes una propiedad en mente?",
            "Contamos con financiación y asesoramiento legal. ¿Qué tipo de propiedad te interesa comprar?",
        ],
        Intent::Location => &[
            "Trabajamos en Rosario y zona metropolitana: Las Lomas, Centro, Fisherton, Pichincha, Funes y más.",
            "Cubrimos toda la ciudad de Rosario y alrededores. ¿Hay algún barrio que te interese particularmente?",
            "Tenemos propiedades en las mejores zonas de Rosario. ¿Qué barrio prefieres?",
        ],
        Intent::Contact => &[
            "Puedes contactarnos al +54 341 123-4567 o por email a info@inmomax.com",
            "Nuestro teléfono es +54 341 123-4567 y también puedes escribirnos a info@inmomax.com",
            "Para contacto directo: +54 341 123-4567 o agenda una cita desde nuestra web",
        ],
        Intent::Hours => &[
            "Atendemos de lunes a viernes de 9:00 a 18:00 y sábados de 9:00 a 13:00",
            "Nuestros horarios son: L-V 9:00-18:00, Sábados 9:00-13:00, Domingos cerrado",
            "Estamos disponibles de lunes a viernes todo el día y sábados por la mañana",
        ],
        Intent::Services => &[
            "Ofrecemos: compra-venta, alquileres, tasaciones, administración de propiedades y asesoramiento legal",
            "Nuestros servicios incluyen gestión integral inmobiliaria: ventas, alquileres, tasaciones y más",
            "Brindamos asesoramiento completo: desde la búsqueda hasta la escrituración",
        ],
        Intent::Financing => &[
            "Trabajamos con todos los bancos para créditos hipotecarios. ¿Necesitas info sobre financiación?",
            "Ofrecemos asesoramiento para créditos UVA, tradicionales y planes gubernamentales",
            "Podemos ayudarte con la gestión de créditos hipotecarios. ¿Ya pre-calificaste en algún banco?",
        ],
        Intent::Appraisal => &[
            "Realizamos tasaciones oficiales para compra, venta, sucesiones y trámites bancarios",
            "Nuestras tasaciones están avaladas por el Colegio de Martilleros. ¿Para qué la necesitas?",
            "Hacemos tasaciones en 48-72 horas. El costo varía según el tipo de propiedad",
        ],
        Intent::Farewell => &[
            "¡Gracias por contactarte con InmoMax! Espero haberte ayudado",
            "¡Hasta luego! No dudes en escribirme si necesitas más información",
            "¡Que tengas un excelente día! Aquí estaré si necesitas ayuda",
        ],
        Intent::Unknown => &[
            "Entiendo tu consulta. Para una atención más personalizada, te sugiero contactar a uno de nuestros agentes",
            "Para brindarte la mejor información, te recomiendo hablar directamente con nuestro equipo",
            "Tu consulta es muy específica. ¿Te parece si coordinas una llamada con uno de nuestros especialistas?",
        ],
    }
}

const DEFAULT_SUGGESTIONS: &[&str] = &[
    "¿Puedes contarme más detalles?",
    "¿Te interesa alguna zona en particular?",
    "¿Prefieres hablar con uno de nuestros agentes?",
];

fn suggestions(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => &[
            "¿Buscas alguna propiedad en particular?",
            "¿Te interesa comprar o alquilar?",
            "¿En qué zona estás buscando?",
        ],
        Intent::Properties => &[
            "¿Qué tipo de propiedad te interesa?",
            "¿Tienes algún presupuesto en mente?",
            "¿Hay alguna zona que prefieras?",
        ],
        Intent::Prices => &[
            "¿Qué tipo de propiedad te interesa?",
            "¿En qué zona estás buscando?",
            "¿Necesitas información sobre financiación?",
        ],
        Intent::Rent => &[
            "¿Para cuánto tiempo necesitas la propiedad?",
            "¿Qué zona prefieres?",
            "¿Tienes garantía propietaria?",
        ],
        Intent::Sale => &[
            "¿Ya tienes una propiedad en mente?",
            "¿Necesitas asesoramiento para financiación?",
            "¿Qué zona te interesa?",
        ],
        Intent::Location => &[
            "¿Qué tipo de propiedad buscas en esa zona?",
            "¿Para compra o alquiler?",
            "¿Tienes algún presupuesto definido?",
        ],
        Intent::Contact => &[
            "¿Quieres agendar una visita?",
            "¿Prefieres que te llamemos?",
            "¿Hay alguna propiedad específica que te interese?",
        ],
        _ => DEFAULT_SUGGESTIONS,
    }
}

/// Builds a reply for `intent`, picking one template from the intent's pool
/// with the supplied generator.
pub fn respond<R: Rng + ?Sized>(intent: Intent, rng: &mut R) -> ChatReply {
    let confidence = if intent == Intent::Unknown {
        CONFIDENCE_FALLBACK
    } else {
        CONFIDENCE_MATCHED
    };

    match templates(intent).choose(rng) {
        Some(template) => ChatReply {
            reply: (*template).to_string(),
            confidence,
            suggestions: suggestions(intent).iter().map(|s| s.to_string()).collect(),
        },
        None => fallback_reply(),
    }
}

/// The canned apology used when reply generation fails internally. Chat
/// availability is prioritized over correctness, so this is returned instead
/// of propagating an error.
pub fn fallback_reply() -> ChatReply {
    ChatReply {
        reply: "Disculpa, ha ocurrido un error. ¿Podrías reformular tu pregunta?".to_string(),
        confidence: CONFIDENCE_ERROR,
        suggestions: vec![
            "¿Puedes intentar de otra manera?".to_string(),
            "¿Te ayudo con otra consulta?".to_string(),
        ],
    }
}

/// Static example questions served by `GET /api/chat/suggestions`.
pub fn frequent_questions() -> &'static [&'static str] {
    &[
        "¿Qué propiedades tienen disponibles?",
        "¿Cuáles son sus horarios de atención?",
        "¿Cómo puedo contactarlos?",
        "¿En qué zonas trabajan?",
        "¿Ofrecen financiación?",
        "¿Hacen tasaciones?",
        "¿Qué servicios brindan?",
        "¿Tienen propiedades en alquiler temporal?",
    ]
}
