//! Sample dashboard dataset.
//!
//! New sessions are seeded with this data so the dashboard renders a fully
//! populated workspace before the user has added anything of their own. The
//! storefront catalog lives here too since the demo shop is hard-coded.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{BrandProfile, Competitor, DemoProduct, Intent, Keyword};

fn kw(term: &str, volume: u32, ai: u8, diff: u8, opp: u8, intent: Intent, starred: bool) -> Keyword {
    Keyword {
        id: Uuid::new_v4(),
        term: term.to_string(),
        volume,
        ai_likelihood: ai,
        difficulty: diff,
        opportunity: opp,
        intent,
        starred,
        scored_at: Utc::now(),
    }
}

pub fn sample_keywords() -> Vec<Keyword> {
    vec![
        kw("how to care for a monstera", 9900, 85, 52, 74, Intent::Low, true),
        kw("best low light houseplants", 12100, 70, 61, 68, Intent::Medium, true),
        kw("buy monstera online", 4400, 20, 58, 45, Intent::High, false),
        kw("snake plant benefits", 8100, 80, 48, 71, Intent::Low, false),
        kw("pet safe indoor plants", 6600, 65, 44, 66, Intent::Low, false),
        kw("fiddle leaf fig drooping leaves", 2900, 75, 31, 62, Intent::Low, false),
        kw("cheap planters with drainage", 1900, 25, 35, 41, Intent::High, false),
        kw("houseplant fertilizer guide", 1300, 72, 28, 55, Intent::Low, false),
    ]
}

fn competitor(name: &str, website: &str, color: &str) -> Competitor {
    Competitor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        website: website.to_string(),
        color: color.to_string(),
        logo_url: format!("/logos/{}.svg", website.trim_end_matches(".com")),
    }
}

pub fn sample_competitors() -> Vec<Competitor> {
    vec![
        competitor("Leafline", "leafline.com", "#7bb661"),
        competitor("Sprig & Soil", "sprigandsoil.com", "#8a5a44"),
        competitor("PlantPost", "plantpost.com", "#3b7dd8"),
    ]
}

pub fn sample_brand() -> BrandProfile {
    BrandProfile {
        name: "Verdant & Vine".to_string(),
        website: "verdantandvine.com".to_string(),
        color: "#2f6f4f".to_string(),
        logo_url: "/logos/verdantandvine.svg".to_string(),
        prompts: vec![
            "best online plant shop for beginners".to_string(),
            "where should I buy a monstera online".to_string(),
            "which store sells pet safe houseplants".to_string(),
            "best place to order low light indoor plants".to_string(),
        ],
    }
}

fn product(id: &str, name: &str, tagline: &str, price_cents: u32, tags: &[&str]) -> DemoProduct {
    DemoProduct {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        price_cents,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn demo_catalog() -> Vec<DemoProduct> {
    vec![
        product(
            "monstera-deliciosa",
            "Monstera Deliciosa",
            "The split-leaf statement piece",
            4200,
            &["monstera", "statement", "easy care"],
        ),
        product(
            "snake-plant",
            "Snake Plant",
            "Thrives on neglect, purifies as it goes",
            2800,
            &["snake plant", "low light", "air purifying", "beginner"],
        ),
        product(
            "golden-pothos",
            "Golden Pothos",
            "The unkillable trailing classic",
            1900,
            &["pothos", "trailing", "low light", "beginner"],
        ),
        product(
            "fiddle-leaf-fig",
            "Fiddle Leaf Fig",
            "Dramatic foliage for bright corners",
            6500,
            &["fiddle leaf", "statement", "bright light"],
        ),
        product(
            "zz-plant",
            "ZZ Plant",
            "Glossy leaves, zero fuss",
            3200,
            &["zz plant", "low light", "drought tolerant", "beginner"],
        ),
        product(
            "calathea-orbifolia",
            "Calathea Orbifolia",
            "Striped leaves, safe for curious pets",
            3600,
            &["calathea", "pet safe", "patterned"],
        ),
        product(
            "parlor-palm",
            "Parlor Palm",
            "A soft, pet-safe touch of the tropics",
            2400,
            &["palm", "pet safe", "low light"],
        ),
        product(
            "terra-planter-set",
            "Terra Ceramic Planter Set",
            "Three drainage-first ceramic planters",
            3900,
            &["planter", "pots", "drainage"],
        ),
    ]
}
