//! Intent classification for chat messages.
//!
//! Free text is lower-cased and tested against each category's pattern list
//! in a fixed priority order; the first category with any match wins. The
//! order is part of the contract: several words appear under more than one
//! category (e.g. "valor" under prices and appraisal), and priority alone
//! resolves the ambiguity. Patterns carry accented and unaccented variants
//! of the Spanish vocabulary the assistant understands.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

/// Closed set of message intents. `Unknown` is the fallback when nothing
/// matches; it is serialized as `default` on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Properties,
    Prices,
    Rent,
    Sale,
    Location,
    Contact,
    Hours,
    Services,
    Financing,
    Appraisal,
    Farewell,
    #[serde(rename = "default")]
    Unknown,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Properties => "properties",
            Intent::Prices => "prices",
            Intent::Rent => "rent",
            Intent::Sale => "sale",
            Intent::Location => "location",
            Intent::Contact => "contact",
            Intent::Hours => "hours",
            Intent::Services => "services",
            Intent::Financing => "financing",
            Intent::Appraisal => "appraisal",
            Intent::Farewell => "farewell",
            Intent::Unknown => "default",
        }
    }
}

/// Categories in priority order, each with its alternation of patterns.
/// Compiled once; classification is read-only after that.
static INTENT_PATTERNS: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    const TABLE: &[(Intent, &[&str])] = &[
        (
            Intent::Greeting,
            &[
                r"hola",
                r"buenos? d[ií]as?",
                r"buenas? tardes?",
                r"buenas? noches?",
                r"saludos",
                r"qu[eé] tal",
                r"c[oó]mo est[aá]s?",
            ],
        ),
        (
            Intent::Properties,
            &[
                r"propiedades?",
                r"inmuebles?",
                r"casas?",
                r"departamentos?",
                r"locales?",
                r"terrenos?",
                r"quintas?",
                r"qu[eé] tienen",
                r"opciones",
                r"disponibles?",
                r"cat[aá]logo",
            ],
        ),
        (
            Intent::Prices,
            &[
                r"precios?",
                r"costo",
                r"valor",
                r"cu[aá]nto",
                r"barato",
                r"caro",
                r"econ[oó]mico",
                r"accesible",
            ],
        ),
        (
            Intent::Rent,
            &[
                r"alquiler",
                r"alquilar",
                r"rentar",
                r"arrendar",
                r"temporal",
                r"inquilino",
            ],
        ),
        (
            Intent::Sale,
            &[
                r"venta",
                r"vender",
                r"comprar",
                r"compra",
                r"adquirir",
                r"escriturar",
            ],
        ),
        (
            Intent::Location,
            &[
                r"ubicaci[oó]n",
                r"zona",
                r"barrio",
                r"d[oó]nde",
                r"lugar",
                r"[aá]rea",
                r"sector",
                r"rosario",
                r"centro",
                r"las lomas",
                r"fisherton",
                r"pichincha",
                r"funes",
            ],
        ),
        (
            Intent::Contact,
            &[
                r"contacto",
                r"tel[eé]fono",
                r"llamar",
                r"comunicar",
                r"email",
                r"mail",
                r"direcci[oó]n",
                r"whatsapp",
            ],
        ),
        (
            Intent::Hours,
            &[
                r"horarios?",
                r"atienden",
                r"abren",
                r"cierran",
                r"cu[aá]ndo",
                r"d[ií]as?",
                r"s[aá]bados?",
                r"domingos?",
            ],
        ),
        (
            Intent::Services,
            &[
                r"servicios?",
                r"qu[eé] hacen",
                r"qu[eé] ofrecen",
                r"administraci[oó]n",
                r"gesti[oó]n",
            ],
        ),
        (
            Intent::Financing,
            &[
                r"financiaci[oó]n",
                r"cr[eé]dito",
                r"hipoteca",
                r"banco",
                r"cuotas",
                r"financiar",
                r"uva",
                r"pr[eé]stamo",
            ],
        ),
        (
            Intent::Appraisal,
            &[
                r"tasaci[oó]n",
                r"tasar",
                r"avaluar",
                r"valor",
                r"cu[aá]nto vale",
                r"tasador",
            ],
        ),
        (
            Intent::Farewell,
            &[
                r"gracias",
                r"chau",
                r"adi[oó]s",
                r"hasta luego",
                r"nos vemos",
                r"bye",
                r"hasta pronto",
            ],
        ),
    ];

    TABLE
        .iter()
        .map(|(intent, patterns)| {
            let alternation = patterns
                .iter()
                .map(|p| format!("(?:{})", p))
                .collect::<Vec<_>>()
                .join("|");
            (*intent, Regex::new(&alternation).expect("static intent pattern"))
        })
        .collect()
});

/// Classifies `text` into an [`Intent`]. Deterministic: same input always
/// yields the same intent.
pub fn classify(text: &str) -> Intent {
    let message = text.to_lowercase();
    for (intent, pattern) in INTENT_PATTERNS.iter() {
        if pattern.is_match(&message) {
            return *intent;
        }
    }
    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_with_accents() {
        assert_eq!(classify("Hola, buenos días"), Intent::Greeting);
        assert_eq!(classify("buenas tardes"), Intent::Greeting);
        assert_eq!(classify("que tal"), Intent::Greeting);
    }

    #[test]
    fn unmatched_text_falls_back_to_default() {
        assert_eq!(classify("xyz123"), Intent::Unknown);
        assert_eq!(classify("%%%%"), Intent::Unknown);
    }

    #[test]
    fn accent_insensitive_variants_match() {
        assert_eq!(classify("cuanto cuesta?"), Intent::Prices);
        assert_eq!(classify("cuánto cuesta?"), Intent::Prices);
        assert_eq!(classify("catalogo completo"), Intent::Properties);
        assert_eq!(classify("catálogo completo"), Intent::Properties);
    }

    #[test]
    fn priority_order_resolves_ambiguity() {
        // A greeting word beats the property word appearing later in the text.
        assert_eq!(classify("hola, busco casas"), Intent::Greeting);
        // "valor" is listed under prices and appraisal; prices is checked first.
        assert_eq!(classify("cuál es el valor"), Intent::Prices);
        // "tasación" only appears under appraisal.
        assert_eq!(classify("necesito una tasación"), Intent::Appraisal);
    }

    #[test]
    fn each_category_is_reachable() {
        assert_eq!(classify("busco departamento"), Intent::Properties);
        assert_eq!(classify("me interesa alquilar"), Intent::Rent);
        assert_eq!(classify("quiero comprar"), Intent::Sale);
        assert_eq!(classify("en qué barrio están"), Intent::Location);
        assert_eq!(classify("pasame un teléfono"), Intent::Contact);
        assert_eq!(classify("atienden los sábados?"), Intent::Hours);
        assert_eq!(classify("qué servicios ofrecen"), Intent::Services);
        assert_eq!(classify("tienen crédito hipotecario"), Intent::Financing);
        assert_eq!(classify("puede venir un tasador"), Intent::Appraisal);
        assert_eq!(classify("gracias, hasta luego"), Intent::Farewell);
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..5 {
            assert_eq!(classify("busco casa en funes"), classify("busco casa en funes"));
        }
    }
}
