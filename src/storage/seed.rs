//! Demo content seeding.
//!
//! Populates a store with the sample dispensary, event, and news listings
//! the site ships with. Records go through [`ContentStore::add_item`] so
//! ids and timestamps obey the store invariants.

use crate::record::{FieldMap, FieldValue};
use crate::storage::store::ContentStore;

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

fn fields(entries: &[(&str, FieldValue)]) -> FieldMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Seeds the built-in demo collections: two dispensaries, one event, and
/// one news article.
pub fn seed_demo_content(store: &ContentStore) {
    store.add_item(
        "dispensaries",
        fields(&[
            ("name", text("Green Leaf Dispensary")),
            ("address", text("123 Main St, Buffalo, NY 14202")),
            ("phone", text("(716) 555-0123")),
            ("hours", text("Mon-Sun: 10AM-9PM")),
            (
                "description",
                text(
                    "Premium cannabis products with expert consultation. We pride \
                     ourselves on quality flower, concentrates, and edibles.",
                ),
            ),
            ("specialties", text("Flower,Edibles,Concentrates,Vaporizers")),
            ("rating", FieldValue::Float(4.8)),
            ("reviews", FieldValue::Integer(124)),
            ("featured", FieldValue::Boolean(true)),
            ("website", text("https://greenleaf-buffalo.com")),
            ("image", text("/api/placeholder/400/300")),
        ]),
    );
    store.add_item(
        "dispensaries",
        fields(&[
            ("name", text("Buffalo Cannabis Co")),
            ("address", text("456 Elm Ave, Buffalo, NY 14203")),
            ("phone", text("(716) 555-0456")),
            ("hours", text("Mon-Sat: 9AM-8PM, Sun: 11AM-6PM")),
            (
                "description",
                text(
                    "Local favorites with competitive prices and a welcoming \
                     atmosphere for all experience levels.",
                ),
            ),
            (
                "specialties",
                text("Budget Options,New Customer Deals,Medical Cannabis"),
            ),
            ("rating", FieldValue::Float(4.6)),
            ("reviews", FieldValue::Integer(89)),
            ("featured", FieldValue::Boolean(true)),
            ("website", text("https://buffalocannabisco.com")),
            ("image", text("/api/placeholder/400/300")),
        ]),
    );

    store.add_item(
        "events",
        fields(&[
            ("title", text("Cannabis Education Workshop")),
            ("date", text("2024-12-15")),
            ("time", text("7:00 PM - 9:00 PM")),
            ("location", text("Buffalo Community Center, 341 Delaware Ave")),
            ("price", text("Free")),
            ("category", text("Education")),
            (
                "description",
                text(
                    "Learn about different cannabis strains, consumption methods, \
                     and responsible use. Perfect for beginners and those looking \
                     to expand their knowledge.",
                ),
            ),
            ("organizer", text("Buffalo Cannabis Network")),
            ("capacity", text("50 people")),
            ("registration", text("Required")),
            ("featured", FieldValue::Boolean(true)),
            ("image", text("/api/placeholder/400/300")),
        ]),
    );

    store.add_item(
        "news",
        fields(&[
            ("title", text("New York Expands Cannabis Retail Licensing")),
            (
                "excerpt",
                text(
                    "The state announced new opportunities for retail cannabis \
                     licenses, with priority given to social equity applicants in \
                     Western New York.",
                ),
            ),
            ("content", text("Full article content would go here...")),
            ("author", text("Buffalo Cannabis Network Staff")),
            ("category", text("Policy")),
            ("date", text("2024-12-01")),
            ("readTime", text("3 min read")),
            ("featured", FieldValue::Boolean(true)),
            ("published", FieldValue::Boolean(true)),
            ("image", text("/api/placeholder/400/200")),
        ]),
    );

    tracing::info!(
        "Seeded demo content: {} dispensaries, {} events, {} news articles",
        store.item_count("dispensaries"),
        store.item_count("events"),
        store.item_count("news")
    );
}
