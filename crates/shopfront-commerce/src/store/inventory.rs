//! The inventory store: product CRUD, bulk import/export and snapshots.

use std::collections::BTreeSet;

use shopfront_cache::{Cache, CacheError, KeyValueStore};
use tracing::{debug, info, warn};

use crate::catalog::{Inventory, Product, ProductDraft};
use crate::error::CommerceError;
use crate::ids::{IdGenerator, ProductId};

/// Fresh candidates requested from a generator before falling back to
/// suffixing the last one.
const MAX_ID_ATTEMPTS: usize = 16;

/// Owns the inventory and keeps its snapshot in sync.
///
/// Besides the live products the store remembers every id it has ever held,
/// deleted ones included, and never mints one of those again. That history
/// is persisted under its own key so it survives a reopen.
pub struct InventoryStore<S> {
    cache: Cache<S>,
    key: String,
    ids_key: String,
    inventory: Inventory,
    issued: BTreeSet<ProductId>,
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Open the store, loading the snapshot under `key` and the id history
    /// under `ids_key`.
    pub fn open(store: S, key: impl Into<String>, ids_key: impl Into<String>) -> Self {
        let cache = Cache::new(store);
        let key = key.into();
        let ids_key = ids_key.into();
        let inventory = read_snapshot(&cache, &key);
        let mut issued = read_history(&cache, &ids_key);
        issued.extend(inventory.iter().map(|p| p.id().clone()));
        Self {
            cache,
            key,
            ids_key,
            inventory,
            issued,
        }
    }

    /// Current products.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Snapshot key this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted snapshot.
    ///
    /// Returns the built-in catalog when nothing is stored or the stored text
    /// doesn't decode. Never fails.
    pub fn load_snapshot(&self) -> Inventory {
        read_snapshot(&self.cache, &self.key)
    }

    /// Write the current inventory and the id history.
    pub fn save_snapshot(&self) -> Result<(), CacheError> {
        self.cache.set(&self.ids_key, &self.issued)?;
        self.cache.set(&self.key, &self.inventory)
    }

    /// Every id this store has handed out or loaded, deleted ones included.
    pub fn issued_ids(&self) -> &BTreeSet<ProductId> {
        &self.issued
    }

    fn persist(&self) {
        if let Err(e) = self.save_snapshot() {
            warn!(key = %self.key, error = %e, "Failed to persist inventory snapshot");
        }
    }

    /// Add a product under a new id. New products go first.
    pub fn create<G>(&mut self, draft: ProductDraft, ids: &mut G) -> ProductId
    where
        G: IdGenerator + ?Sized,
    {
        let id = self.mint_id(ids);
        self.issued.insert(id.clone());
        self.inventory
            .prepend(Product::from_draft(id.clone(), draft));
        debug!(id = %id, "Created product");
        self.persist();
        id
    }

    /// Replace the product with `id`, keeping its id and position.
    ///
    /// Returns `None`, and changes nothing, when no such product exists.
    pub fn update(&mut self, id: &ProductId, draft: ProductDraft) -> Option<&Product> {
        self.inventory.replace(id, draft)?;
        debug!(id = %id, "Updated product");
        self.persist();
        self.inventory.get(id)
    }

    /// Remove the product with `id`.
    ///
    /// Cart lines pointing at it become stale and price at zero.
    pub fn delete(&mut self, id: &ProductId) -> Option<Product> {
        let removed = self.inventory.remove(id)?;
        debug!(id = %id, "Deleted product");
        self.persist();
        Some(removed)
    }

    /// Swap in a whole new product list.
    ///
    /// Records get the same cleanup as created ones. A list that repeats an
    /// id is rejected and the store is left as it was.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<(), CommerceError> {
        let inventory =
            Inventory::from_products(products.into_iter().map(Product::normalized).collect())
                .map_err(|e| CommerceError::InvalidImport(e.to_string()))?;
        self.install(inventory);
        Ok(())
    }

    /// Bulk import from JSON text.
    ///
    /// The payload must be an array of product records. Anything else is
    /// rejected with [`CommerceError::InvalidImport`] and the store is left as
    /// it was. Returns the number of imported products.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, CommerceError> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| CommerceError::InvalidImport(format!("not valid JSON: {}", e)))?;

        if !value.is_array() {
            return Err(CommerceError::InvalidImport(
                "expected a JSON array of products".to_string(),
            ));
        }

        let products: Vec<Product> = serde_json::from_value(value)
            .map_err(|e| CommerceError::InvalidImport(e.to_string()))?;
        let count = products.len();
        self.replace_all(products)?;
        Ok(count)
    }

    /// Export every product as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(&self.inventory)?)
    }

    fn install(&mut self, inventory: Inventory) {
        self.issued
            .extend(inventory.iter().map(|p| p.id().clone()));
        self.inventory = inventory;
        info!(count = self.inventory.len(), "Replaced inventory");
        self.persist();
    }

    fn mint_id<G>(&self, ids: &mut G) -> ProductId
    where
        G: IdGenerator + ?Sized,
    {
        let mut candidate = ids.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.issued.contains(&candidate) {
                return candidate;
            }
            candidate = ids.next_id();
        }

        // The generator keeps proposing used ids; disambiguate with a suffix.
        let mut n: u64 = 0;
        loop {
            let id = if n == 0 {
                candidate.clone()
            } else {
                ProductId::new(format!("{}-{}", candidate, n))
            };
            if !self.issued.contains(&id) {
                if n > 0 {
                    warn!(id = %id, "Id generator repeated itself; suffixed candidate");
                }
                return id;
            }
            n += 1;
        }
    }
}

fn read_history<S: KeyValueStore>(cache: &Cache<S>, key: &str) -> BTreeSet<ProductId> {
    match cache.get::<BTreeSet<ProductId>>(key) {
        Ok(Some(ids)) => ids,
        Ok(None) => BTreeSet::new(),
        Err(e) => {
            warn!(key, error = %e, "Unreadable id history; starting from live ids");
            BTreeSet::new()
        }
    }
}

fn read_snapshot<S: KeyValueStore>(cache: &Cache<S>, key: &str) -> Inventory {
    match cache.get::<Inventory>(key) {
        Ok(Some(inventory)) => {
            debug!(key, count = inventory.len(), "Loaded inventory snapshot");
            inventory
        }
        Ok(None) => {
            debug!(key, "No inventory snapshot; using default catalog");
            Inventory::seeded()
        }
        Err(e) => {
            warn!(key, error = %e, "Unreadable inventory snapshot; using default catalog");
            Inventory::seeded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::SequentialIds;
    use shopfront_cache::MemoryStore;

    /// A backend that is always down.
    struct Unavailable;

    impl KeyValueStore for Unavailable {
        fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::StoreError("unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("unavailable".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("unavailable".into()))
        }
    }

    /// A generator stuck on one value.
    struct Stuck;

    impl IdGenerator for Stuck {
        fn next_id(&mut self) -> ProductId {
            ProductId::new("p_same")
        }
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft::new(name, Category::TopUp, 1000)
    }

    #[test]
    fn test_empty_store_loads_default_catalog() {
        let store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        assert_eq!(store.inventory().len(), 8);
        assert_eq!(store.inventory().products()[0].id().as_str(), "r1");
    }

    #[test]
    fn test_corrupt_snapshot_loads_default_catalog() {
        let kv = MemoryStore::with_entry("inventory", "{\"oops\":");
        let store = InventoryStore::open(kv, "inventory", "inventory_ids");
        assert_eq!(store.inventory(), &Inventory::seeded());

        let kv = MemoryStore::with_entry("inventory", r#"{"id":"not an array"}"#);
        let store = InventoryStore::open(kv, "inventory", "inventory_ids");
        assert_eq!(store.inventory(), &Inventory::seeded());
    }

    #[test]
    fn test_unreadable_backend_loads_default_catalog() {
        let store = InventoryStore::open(Unavailable, "inventory", "inventory_ids");
        assert_eq!(store.inventory(), &Inventory::seeded());
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let kv = MemoryStore::new();
        let mut store = InventoryStore::open(&kv, "inventory", "inventory_ids");
        let mut ids = SequentialIds::new();

        let id = store.create(draft("New Pack"), &mut ids);
        assert_eq!(id.as_str(), "p_1");
        assert_eq!(store.inventory().products()[0].id(), &id);
        assert_eq!(store.inventory().len(), 9);

        let reopened = InventoryStore::open(&kv, "inventory", "inventory_ids");
        assert_eq!(reopened.inventory(), store.inventory());
    }

    #[test]
    fn test_deleted_ids_are_never_reissued() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let mut ids = Stuck;

        let first = store.create(draft("One"), &mut ids);
        store.delete(&first).unwrap();
        let second = store.create(draft("Two"), &mut ids);
        let third = store.create(draft("Three"), &mut ids);

        assert_eq!(first.as_str(), "p_same");
        assert_ne!(second, first);
        assert_ne!(third, second);
        assert_ne!(third, first);
    }

    #[test]
    fn test_deleted_ids_are_not_reissued_after_reopen() {
        let kv = MemoryStore::new();

        let first = {
            let mut store = InventoryStore::open(&kv, "inventory", "inventory_ids");
            let id = store.create(draft("Short-lived"), &mut SequentialIds::new());
            store.delete(&id).unwrap();
            id
        };

        let mut reopened = InventoryStore::open(&kv, "inventory", "inventory_ids");
        assert!(reopened.issued_ids().contains(&first));
        let second = reopened.create(draft("Replacement"), &mut SequentialIds::new());

        assert_eq!(first.as_str(), "p_1");
        assert_ne!(second, first);
    }

    #[test]
    fn test_corrupt_id_history_falls_back_to_live_ids() {
        let kv = MemoryStore::with_entry("inventory_ids", "{not json");
        let store = InventoryStore::open(&kv, "inventory", "inventory_ids");
        assert_eq!(store.issued_ids().len(), 8);
        assert!(store.issued_ids().contains(&ProductId::new("r1")));
    }

    #[test]
    fn test_generator_colliding_with_existing_ids() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let mut ids = SequentialIds::with_prefix("r");

        // r1..r8 are already taken by the default catalog.
        let id = store.create(draft("Ninth"), &mut ids);
        assert_eq!(id.as_str(), "r9");
    }

    #[test]
    fn test_update_keeps_id() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let id = ProductId::new("r3");

        let updated = store
            .update(&id, ProductDraft::new("Gift Card 15K", Category::GiftCard, 15_000))
            .unwrap();
        assert_eq!(updated.id(), &id);
        assert_eq!(updated.price, 15_000);
        assert_eq!(store.inventory().products()[2].name, "Gift Card 15K");

        assert!(store.update(&ProductId::new("nope"), draft("x")).is_none());
    }

    #[test]
    fn test_delete() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let removed = store.delete(&ProductId::new("r1")).unwrap();
        assert_eq!(removed.name, "Top-Up 800 Coins");
        assert!(store.delete(&ProductId::new("r1")).is_none());
        assert_eq!(store.inventory().len(), 7);
    }

    #[test]
    fn test_import_rejects_object_and_keeps_state() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let before = store.inventory().clone();

        let err = store.import_json(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidImport(_)));
        assert_eq!(store.inventory(), &before);
    }

    #[test]
    fn test_import_rejects_malformed_records() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let before = store.inventory().clone();

        for payload in [
            "not json",
            r#"[{"id":"x","name":"X"}]"#,
            r#"[{"id":"x","name":"X","category":"All","price":1,"rating":1,"image":""}]"#,
            r#"[1, 2, 3]"#,
        ] {
            assert!(store.import_json(payload).is_err(), "accepted {}", payload);
            assert_eq!(store.inventory(), &before);
        }
    }

    #[test]
    fn test_import_replaces_everything() {
        let kv = MemoryStore::new();
        let mut store = InventoryStore::open(&kv, "inventory", "inventory_ids");
        let payload = r#"[
            {"id":"x1","name":"Imported","category":"Bundle","price":5000,"rating":3.5,"image":"i.png","badge":"Sale"},
            {"id":"x2","name":"Also Imported","category":"Game Pass","price":7000,"rating":4,"image":""}
        ]"#;

        assert_eq!(store.import_json(payload).unwrap(), 2);
        assert_eq!(store.inventory().len(), 2);
        assert_eq!(store.inventory().products()[0].badge.as_deref(), Some("Sale"));

        let reopened = InventoryStore::open(&kv, "inventory", "inventory_ids");
        assert_eq!(reopened.inventory().len(), 2);
    }

    #[test]
    fn test_import_cleans_records_like_create() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let payload = r#"[
            {"id":"x1","name":"  Padded  ","category":"Bundle","price":1,"rating":1,"image":" i.png ","badge":"  "}
        ]"#;

        store.import_json(payload).unwrap();
        let product = &store.inventory().products()[0];
        assert_eq!(product.name, "Padded");
        assert_eq!(product.image, "i.png");
        assert_eq!(product.badge, None);
    }

    #[test]
    fn test_export_import_roundtrip() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let exported = store.export_json().unwrap();
        assert!(exported.contains("\n  {"));

        let mut other = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        other.replace_all(Vec::new()).unwrap();
        assert_eq!(other.import_json(&exported).unwrap(), 8);
        assert_eq!(other.inventory(), store.inventory());

        store.replace_all(Vec::new()).unwrap();
        assert!(store.inventory().is_empty());
    }

    #[test]
    fn test_replace_all_rejects_duplicates() {
        let mut store = InventoryStore::open(MemoryStore::new(), "inventory", "inventory_ids");
        let result = store.replace_all(vec![
            Product::new("d", "D", Category::Bundle, 1),
            Product::new("d", "D2", Category::Bundle, 2),
        ]);
        assert!(matches!(result, Err(CommerceError::InvalidImport(_))));
        assert_eq!(store.inventory().len(), 8);
    }

    #[test]
    fn test_failed_persist_keeps_memory_state() {
        let mut store = InventoryStore::open(Unavailable, "inventory", "inventory_ids");
        let mut ids = SequentialIds::new();

        let id = store.create(draft("Offline"), &mut ids);
        assert!(store.inventory().contains(&id));
        assert!(store.save_snapshot().is_err());
    }

    #[test]
    fn test_load_snapshot_rereads_store() {
        let kv = MemoryStore::new();
        let mut store = InventoryStore::open(&kv, "inventory", "inventory_ids");
        store.delete(&ProductId::new("r8"));
        assert_eq!(store.load_snapshot().len(), 7);
    }
}
