//! Declarative collection schemas.
//!
//! A [`CmsConfig`] describes the expected shape of each collection's records:
//! field names, display labels, value kinds, required flags, and select
//! options. This is descriptive metadata for admin tooling and a future
//! validating backend; the store itself never checks payloads against it.

use serde::{Deserialize, Serialize};

/// Value kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Boolean,
    Date,
    Image,
    Select,
    Relation,
}

/// Reference to a field in another collection, for `Relation` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDef {
    pub collection: String,
    pub field: String,
}

/// Declarative description of one record field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Allowed values for `Select` fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationDef>,
}

impl FieldDef {
    /// Creates an optional field with no placeholder or options.
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            placeholder: None,
            options: Vec::new(),
            relation: None,
        }
    }

    /// Marks the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the admin-form placeholder text.
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Sets the allowed values for a `Select` field.
    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Declarative description of one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    pub label: String,
    pub description: String,
    pub fields: Vec<FieldDef>,
}

impl CollectionSchema {
    /// Looks up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The full set of collection schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    pub collections: Vec<CollectionSchema>,
}

impl CmsConfig {
    /// Looks up a collection schema by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionSchema> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// The built-in schemas for the dispensaries, events, and news
    /// collections.
    pub fn builtin() -> Self {
        Self {
            collections: vec![
                CollectionSchema {
                    name: "dispensaries".into(),
                    label: "Dispensaries".into(),
                    description: "Manage cannabis dispensary listings".into(),
                    fields: vec![
                        FieldDef::new("name", "Dispensary Name", FieldKind::Text)
                            .required()
                            .placeholder("Enter dispensary name"),
                        FieldDef::new("address", "Address", FieldKind::Text)
                            .required()
                            .placeholder("123 Main St, Buffalo, NY 14202"),
                        FieldDef::new("phone", "Phone Number", FieldKind::Text)
                            .required()
                            .placeholder("(716) 555-0123"),
                        FieldDef::new("hours", "Operating Hours", FieldKind::Text)
                            .required()
                            .placeholder("Mon-Sun: 10AM-9PM"),
                        FieldDef::new("description", "Description", FieldKind::TextArea)
                            .required()
                            .placeholder("Brief description of the dispensary"),
                        FieldDef::new("specialties", "Specialties", FieldKind::Text)
                            .placeholder("Comma-separated list of specialties"),
                        FieldDef::new("rating", "Rating", FieldKind::Number).placeholder("4.5"),
                        FieldDef::new("reviews", "Number of Reviews", FieldKind::Number)
                            .placeholder("124"),
                        FieldDef::new("image", "Featured Image", FieldKind::Image),
                        FieldDef::new("website", "Website", FieldKind::Text)
                            .placeholder("https://dispensary.com"),
                        FieldDef::new("featured", "Featured Listing", FieldKind::Boolean),
                    ],
                },
                CollectionSchema {
                    name: "events".into(),
                    label: "Events".into(),
                    description: "Manage cannabis community events".into(),
                    fields: vec![
                        FieldDef::new("title", "Event Title", FieldKind::Text)
                            .required()
                            .placeholder("Cannabis Education Workshop"),
                        FieldDef::new("date", "Event Date", FieldKind::Date).required(),
                        FieldDef::new("time", "Time", FieldKind::Text)
                            .required()
                            .placeholder("7:00 PM - 9:00 PM"),
                        FieldDef::new("location", "Location", FieldKind::Text)
                            .required()
                            .placeholder("Buffalo Community Center, 341 Delaware Ave"),
                        FieldDef::new("price", "Price", FieldKind::Text)
                            .required()
                            .placeholder("Free or $25"),
                        FieldDef::new("category", "Category", FieldKind::Select)
                            .required()
                            .options(&[
                                "Education",
                                "Networking",
                                "Medical",
                                "Culinary",
                                "Legal",
                                "Community",
                            ]),
                        FieldDef::new("description", "Description", FieldKind::TextArea)
                            .required()
                            .placeholder("Detailed event description"),
                        FieldDef::new("organizer", "Organizer", FieldKind::Text)
                            .required()
                            .placeholder("Buffalo Cannabis Network"),
                        FieldDef::new("capacity", "Capacity", FieldKind::Text)
                            .placeholder("50 people or Unlimited"),
                        FieldDef::new("registration", "Registration Required", FieldKind::Select)
                            .options(&["Required", "Encouraged", "Not Required"]),
                        FieldDef::new("image", "Event Image", FieldKind::Image),
                        FieldDef::new("featured", "Featured Event", FieldKind::Boolean),
                    ],
                },
                CollectionSchema {
                    name: "news".into(),
                    label: "News Articles".into(),
                    description: "Manage cannabis news and blog posts".into(),
                    fields: vec![
                        FieldDef::new("title", "Article Title", FieldKind::Text)
                            .required()
                            .placeholder("Enter article title"),
                        FieldDef::new("excerpt", "Excerpt", FieldKind::TextArea)
                            .required()
                            .placeholder("Brief summary of the article"),
                        FieldDef::new("content", "Article Content", FieldKind::TextArea)
                            .required()
                            .placeholder("Full article content"),
                        FieldDef::new("author", "Author", FieldKind::Text)
                            .required()
                            .placeholder("Author name"),
                        FieldDef::new("category", "Category", FieldKind::Select)
                            .required()
                            .options(&[
                                "Policy",
                                "Events",
                                "Medical",
                                "Education",
                                "Community",
                                "Business",
                            ]),
                        FieldDef::new("date", "Publish Date", FieldKind::Date).required(),
                        FieldDef::new("readTime", "Read Time", FieldKind::Text)
                            .placeholder("5 min read"),
                        FieldDef::new("image", "Featured Image", FieldKind::Image),
                        FieldDef::new("featured", "Featured Article", FieldKind::Boolean),
                        FieldDef::new("published", "Published", FieldKind::Boolean),
                    ],
                },
            ],
        }
    }
}
