//! MongoDB variant store
//!
//! Durable store backed by a MongoDB collection. The client is created on
//! first use and shared by every request; a unique index on `variant_id` is
//! ensured at the same time.
//!
//! Documents are kept schema-less. The store identity (`_id`) is exposed to
//! the rest of the service as a hex string.

use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use variants_domain::constants::{DOCUMENT_ID_FIELD, VARIANTS_COLLECTION, VARIANT_ID_FIELD};
use variants_domain::entities::{Variant, VariantPatch};
use variants_domain::error::{Error, Result};
use variants_domain::ports::providers::VariantStoreProvider;
use variants_domain::value_objects::{InsertedVariant, ReplaceOutcome};

use crate::constants::{MONGODB_DEFAULT_DATABASE, MONGODB_DEFAULT_URI, MONGODB_VARIANT_ID_INDEX};

/// Connected client plus the collection handle
struct MongoState {
    client: Client,
    collection: Collection<Document>,
}

/// MongoDB variant store provider
pub struct MongoVariantStore {
    uri: String,
    database: String,
    collection: String,
    state: OnceCell<MongoState>,
}

impl MongoVariantStore {
    /// Create a store for `collection` in `database`
    ///
    /// Only the URI scheme is checked here; the connection is made on the
    /// first store call.
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Result<Self> {
        let uri = uri.into();
        if !(uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://")) {
            return Err(Error::configuration(format!(
                "MongoDB URI must start with mongodb:// or mongodb+srv://, got '{}'",
                redact(&uri)
            )));
        }

        Ok(Self {
            uri,
            database: database.into(),
            collection: collection.into(),
            state: OnceCell::new(),
        })
    }

    /// Get the shared client state, connecting on first use
    async fn state(&self) -> Result<&MongoState> {
        self.state
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri)
                    .await
                    .map_err(|e| mongo_error("connect", e))?;
                let collection = client
                    .database(&self.database)
                    .collection::<Document>(&self.collection);

                let index = IndexModel::builder()
                    .keys(doc! { VARIANT_ID_FIELD: 1 })
                    .options(
                        IndexOptions::builder()
                            .unique(true)
                            .name(MONGODB_VARIANT_ID_INDEX.to_string())
                            .build(),
                    )
                    .build();
                collection
                    .create_index(index)
                    .await
                    .map_err(|e| mongo_error("create_index", e))?;

                info!(
                    server = %redact(&self.uri),
                    database = %self.database,
                    collection = %self.collection,
                    "MongoDB variant store connected"
                );
                Ok(MongoState { client, collection })
            })
            .await
    }

    async fn collection(&self) -> Result<&Collection<Document>> {
        Ok(&self.state().await?.collection)
    }
}

fn mongo_error(operation: &str, e: mongodb::error::Error) -> Error {
    Error::database_with_source(format!("MongoDB {operation} failed: {e}"), e)
}

/// Strip credentials from a connection string
fn redact(uri: &str) -> String {
    match (uri.split_once("://"), uri.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://***@{host}"),
        _ => uri.to_string(),
    }
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn variant_filter(variant_id: &str) -> Document {
    doc! { VARIANT_ID_FIELD: variant_id }
}

/// Convert a stored document into a variant, flattening `_id` to a string
fn variant_from_document(mut document: Document) -> Result<Variant> {
    let id = document.remove(DOCUMENT_ID_FIELD).map(id_to_string);
    let value = Bson::Document(document).into_relaxed_extjson();

    let mut variant: Variant = serde_json::from_value(value)
        .map_err(|e| Error::database_with_source("stored document is not a variant", e))?;
    variant.id = id;
    Ok(variant)
}

/// Convert a variant into a document without `_id`, leaving identity to the server
fn document_from_variant(variant: &Variant) -> Result<Document> {
    let mut value = serde_json::to_value(variant)?;
    if let Value::Object(fields) = &mut value {
        fields.remove(DOCUMENT_ID_FIELD);
    }
    mongodb::bson::to_document(&value)
        .map_err(|e| Error::database_with_source("variant is not representable as BSON", e))
}

#[async_trait]
impl VariantStoreProvider for MongoVariantStore {
    async fn find_all(&self) -> Result<Vec<Variant>> {
        let documents: Vec<Document> = self
            .collection()
            .await?
            .find(doc! {})
            .sort(doc! { DOCUMENT_ID_FIELD: 1 })
            .await
            .map_err(|e| mongo_error("find", e))?
            .try_collect()
            .await
            .map_err(|e| mongo_error("find", e))?;

        debug!(count = documents.len(), "variants read from MongoDB");
        documents.into_iter().map(variant_from_document).collect()
    }

    async fn find_one(&self, variant_id: &str) -> Result<Option<Variant>> {
        self.collection()
            .await?
            .find_one(variant_filter(variant_id))
            .await
            .map_err(|e| mongo_error("find_one", e))?
            .map(variant_from_document)
            .transpose()
    }

    async fn insert_one(&self, variant: Variant) -> Result<InsertedVariant> {
        let document = document_from_variant(&variant)?;
        let result = self
            .collection()
            .await?
            .insert_one(document)
            .await
            .map_err(|e| mongo_error("insert_one", e))?;

        Ok(InsertedVariant::new(id_to_string(result.inserted_id)))
    }

    async fn replace_one(
        &self,
        variant_id: &str,
        variant: Variant,
        upsert: bool,
    ) -> Result<ReplaceOutcome> {
        let document = document_from_variant(&variant)?;
        let result = self
            .collection()
            .await?
            .replace_one(variant_filter(variant_id), document)
            .upsert(upsert)
            .await
            .map_err(|e| mongo_error("replace_one", e))?;

        Ok(ReplaceOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(id_to_string),
        })
    }

    async fn update_one(&self, variant_id: &str, patch: VariantPatch) -> Result<u64> {
        let collection = self.collection().await?;

        // MongoDB rejects an empty $set; report whether the target exists instead
        if patch.is_empty() {
            let count = collection
                .count_documents(variant_filter(variant_id))
                .await
                .map_err(|e| mongo_error("count_documents", e))?;
            return Ok(count.min(1));
        }

        let fields = mongodb::bson::to_document(&patch)
            .map_err(|e| Error::database_with_source("patch is not representable as BSON", e))?;
        let result = collection
            .update_one(variant_filter(variant_id), doc! { "$set": fields })
            .await
            .map_err(|e| mongo_error("update_one", e))?;

        Ok(result.matched_count)
    }

    async fn delete_one(&self, variant_id: &str) -> Result<u64> {
        let result = self
            .collection()
            .await?
            .delete_one(variant_filter(variant_id))
            .await
            .map_err(|e| mongo_error("delete_one", e))?;

        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> Result<()> {
        let state = self.state().await?;
        state
            .client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| mongo_error("ping", e))
    }

    async fn close(&self) -> Result<()> {
        if let Some(state) = self.state.get() {
            state.client.clone().shutdown().await;
            info!("MongoDB variant store closed");
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "mongodb"
    }
}

impl std::fmt::Debug for MongoVariantStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoVariantStore")
            .field("server", &redact(&self.uri))
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("connected", &self.state.initialized())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use variants_application::ports::registry::{
    VariantStoreProviderConfig, VariantStoreProviderEntry, VARIANT_STORE_PROVIDERS,
};

/// Factory function for creating MongoDB store instances.
fn mongodb_store_factory(
    config: &VariantStoreProviderConfig,
) -> std::result::Result<Arc<dyn VariantStoreProvider>, String> {
    let store = MongoVariantStore::new(
        config.uri.as_deref().unwrap_or(MONGODB_DEFAULT_URI),
        config.database.as_deref().unwrap_or(MONGODB_DEFAULT_DATABASE),
        config.collection.as_deref().unwrap_or(VARIANTS_COLLECTION),
    )
    .map_err(|e| format!("Failed to create MongoDB provider: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(VARIANT_STORE_PROVIDERS)]
static MONGODB_PROVIDER: VariantStoreProviderEntry = VariantStoreProviderEntry {
    name: "mongodb",
    description: "MongoDB collection with a unique variant_id index",
    factory: mongodb_store_factory,
};
