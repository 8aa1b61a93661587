// Seed configuration: what gets created remotely and where. Everything a
// run needs is embedded in one struct so the binary stays a zero-argument
// utility while tests can point the same data at a local server.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Collection kind understood by the backend. `auth` collections carry
/// built-in user-authentication semantics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    Base,
    Auth,
}

/// Field kinds used by the demo schemas.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Editor,
    Bool,
    File,
}

/// One typed field of a collection schema.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &str, field_type: FieldType, required: bool) -> Self {
        FieldSpec {
            name: name.to_string(),
            field_type,
            required,
        }
    }
}

/// A collection to create. Serializes to the backend's expected
/// `POST /api/collections` body (`name`, `type`, `schema`).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CollectionSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub collection_type: CollectionType,
    pub schema: Vec<FieldSpec>,
}

/// A record to insert, tagged with its target collection. The payload
/// shape is not checked locally; the backend validates it against the
/// collection schema and rejects mismatches.
#[derive(Debug, Clone)]
pub struct RecordSeed {
    pub collection: String,
    pub fields: serde_json::Value,
}

impl RecordSeed {
    /// Short label for log lines: the record's `title` field when it has
    /// one, otherwise the target collection name.
    pub fn label(&self) -> &str {
        self.fields
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.collection)
    }
}

/// Everything one seeding run needs: the target base URL plus the ordered
/// collections and records to create.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_url: String,
    pub collections: Vec<CollectionSpec>,
    pub records: Vec<RecordSeed>,
}

impl SeedConfig {
    /// The fixed demo data set: a `posts` collection with three sample
    /// posts, plus a `users` auth collection, targeting a local backend
    /// instance.
    pub fn demo() -> Self {
        SeedConfig {
            base_url: "http://localhost:8090".into(),
            collections: vec![
                CollectionSpec {
                    name: "posts".into(),
                    collection_type: CollectionType::Base,
                    schema: vec![
                        FieldSpec::new("title", FieldType::Text, true),
                        FieldSpec::new("content", FieldType::Editor, true),
                        FieldSpec::new("author", FieldType::Text, true),
                        FieldSpec::new("published", FieldType::Bool, false),
                        FieldSpec::new("tags", FieldType::Text, false),
                    ],
                },
                CollectionSpec {
                    name: "users".into(),
                    collection_type: CollectionType::Auth,
                    schema: vec![
                        FieldSpec::new("name", FieldType::Text, true),
                        FieldSpec::new("avatar", FieldType::File, false),
                        FieldSpec::new("bio", FieldType::Text, false),
                    ],
                },
            ],
            records: vec![
                RecordSeed {
                    collection: "posts".into(),
                    fields: json!({
                        "title": "Welcome to the demo",
                        "content": "This instance was seeded with sample content so the API has something to serve.",
                        "author": "Admin",
                        "published": true,
                        "tags": "demo,sample",
                    }),
                },
                RecordSeed {
                    collection: "posts".into(),
                    fields: json!({
                        "title": "Wiring up a client",
                        "content": "Point any HTTP client at /api/collections/posts/records to list the sample posts.",
                        "author": "Developer",
                        "published": true,
                        "tags": "api,client",
                    }),
                },
                RecordSeed {
                    collection: "posts".into(),
                    fields: json!({
                        "title": "Draft: testing notes",
                        "content": "Unpublished draft used to exercise the published flag.",
                        "author": "Test user",
                        "published": false,
                        "tags": "test,draft",
                    }),
                },
            ],
        }
    }
}
