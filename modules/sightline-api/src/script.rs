//! Scripted storefront assistant.
//!
//! Deterministic: the reply is a function of the latest user message and
//! the catalog, so clients can replay a whole conversation from their own
//! history and always land on the same stage.

use ai_client::{Message, MessageRole};
use serde::Serialize;
use sightline_common::DemoProduct;

const CHECKOUT_TRIGGERS: &[&str] = &[
    "checkout",
    "check out",
    "place the order",
    "place my order",
    "buy now",
    "pay now",
];

const CART_TRIGGERS: &[&str] = &["add to cart", "add it", "add the", "i'll take", "ill take"];

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "hiya", "howdy"];

/// How many products a single reply will surface.
const MAX_PICKS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStage {
    Greeting,
    Browsing,
    CartOffer,
    Checkout,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScriptReply {
    pub stage: ScriptStage,
    pub reply: String,
    pub products: Vec<DemoProduct>,
}

/// Produce the next scripted reply for a conversation.
///
/// Trigger precedence: checkout phrases beat cart phrases beat product
/// matches, so "add the pothos and check out" completes the order.
pub fn advance(catalog: &[DemoProduct], history: &[Message]) -> ScriptReply {
    let Some(last) = history.iter().rev().find(|m| m.role == MessageRole::User) else {
        return greeting(catalog);
    };
    let text = last.content.to_lowercase();

    if CHECKOUT_TRIGGERS.iter().any(|t| text.contains(t)) {
        return ScriptReply {
            stage: ScriptStage::Checkout,
            reply: "Order placed! This is where the demo ends, but in the real shop \
                    your plants would already be on their way."
                .to_string(),
            products: Vec::new(),
        };
    }

    if CART_TRIGGERS.iter().any(|t| text.contains(t)) {
        let picks = match_products(catalog, &text);
        let reply = match picks.first() {
            Some(product) => format!(
                "Done! {} is in your cart. Say \"checkout\" whenever you're ready.",
                product.name
            ),
            None => "Done! It's in your cart. Say \"checkout\" whenever you're ready."
                .to_string(),
        };
        return ScriptReply {
            stage: ScriptStage::CartOffer,
            reply,
            products: picks,
        };
    }

    let picks = match_products(catalog, &text);
    if !picks.is_empty() {
        let listing = picks
            .iter()
            .map(|p| format!("{} ({})", p.name, format_price(p.price_cents)))
            .collect::<Vec<_>>()
            .join(", ");
        return ScriptReply {
            stage: ScriptStage::Browsing,
            reply: format!(
                "Good direction! Take a look at: {listing}. Say \"add to cart\" to grab one."
            ),
            products: picks,
        };
    }

    if is_greeting(&text) {
        return greeting(catalog);
    }

    fallback(catalog)
}

fn greeting(catalog: &[DemoProduct]) -> ScriptReply {
    ScriptReply {
        stage: ScriptStage::Greeting,
        reply: "Welcome to the shop! Tell me what kind of spot you're shopping for \
                and I'll point you to the right plants."
            .to_string(),
        products: featured(catalog),
    }
}

fn fallback(catalog: &[DemoProduct]) -> ScriptReply {
    ScriptReply {
        stage: ScriptStage::Browsing,
        reply: "I'm best at plant talk! Tell me about your light, pets, or travel \
                schedule. Meanwhile, this week's favorites:"
            .to_string(),
        products: featured(catalog),
    }
}

fn featured(catalog: &[DemoProduct]) -> Vec<DemoProduct> {
    catalog.iter().take(MAX_PICKS).cloned().collect()
}

fn is_greeting(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .is_some_and(|w| GREETING_WORDS.contains(&w))
}

fn match_products(catalog: &[DemoProduct], text: &str) -> Vec<DemoProduct> {
    catalog
        .iter()
        .filter(|p| {
            text.contains(&p.name.to_lowercase())
                || p.tags.iter().any(|tag| text.contains(tag.as_str()))
        })
        .take(MAX_PICKS)
        .cloned()
        .collect()
}

fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
