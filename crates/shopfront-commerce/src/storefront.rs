//! The storefront context: all session state behind one owner.

use shopfront_cache::KeyValueStore;
use tracing::debug;

use crate::cart::{Cart, CartPricing};
use crate::catalog::{Inventory, Product, ProductDraft};
use crate::error::CommerceError;
use crate::ids::{IdGenerator, ProductId, RandomIds};
use crate::money::MoneyFormatter;
use crate::search::{view, CatalogQuery};
use crate::store::{BrandConfig, BrandStore, InventoryStore, StoreConfig};

/// One storefront session.
///
/// Owns the inventory and brand stores, the cart, the id generator and the
/// money formatter. Every event handler runs to completion on `&mut self`;
/// views are recomputed from current state on each call.
///
/// The cart lives only as long as this value and is never persisted.
pub struct Storefront<S, G = RandomIds> {
    config: StoreConfig,
    inventory: InventoryStore<S>,
    brand: BrandStore<S>,
    cart: Cart,
    ids: G,
    formatter: Box<dyn MoneyFormatter>,
}

impl<S> Storefront<S, RandomIds>
where
    S: KeyValueStore + Clone,
{
    /// Open a storefront over `store`, loading both snapshots.
    pub fn open(store: S, config: StoreConfig) -> Self {
        let inventory = InventoryStore::open(
            store.clone(),
            config.inventory_key.clone(),
            config.ids_key.clone(),
        );
        let brand = BrandStore::open(store, config.brand_key.clone());
        let formatter = Box::new(config.currency);
        debug!(
            products = inventory.inventory().len(),
            site_name = %brand.config().site_name,
            "Opened storefront"
        );
        Self {
            config,
            inventory,
            brand,
            cart: Cart::new(),
            ids: RandomIds,
            formatter,
        }
    }
}

impl<S, G> Storefront<S, G>
where
    S: KeyValueStore,
    G: IdGenerator,
{
    /// Swap the id generator used for new products.
    pub fn with_id_generator<H: IdGenerator>(self, ids: H) -> Storefront<S, H> {
        Storefront {
            config: self.config,
            inventory: self.inventory,
            brand: self.brand,
            cart: self.cart,
            ids,
            formatter: self.formatter,
        }
    }

    /// Swap the money formatter. Defaults to the configured currency.
    pub fn with_formatter(mut self, formatter: impl MoneyFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        self.inventory.inventory()
    }

    pub fn brand(&self) -> &BrandConfig {
        self.brand.config()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Products matching `query`, in display order.
    pub fn catalog(&self, query: &CatalogQuery) -> Vec<&Product> {
        view(self.inventory(), query)
    }

    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total(self.inventory())
    }

    pub fn cart_pricing(&self) -> CartPricing {
        CartPricing::calculate(&self.cart, self.inventory())
    }

    pub fn format_money(&self, amount_minor: u64) -> String {
        self.formatter.format(amount_minor)
    }

    /// Whether there is anything to check out.
    pub fn checkout_available(&self) -> bool {
        !self.cart.is_empty()
    }

    // Cart events

    pub fn add_to_cart(&mut self, id: &ProductId) -> &Cart {
        self.cart = self.cart.add(id);
        &self.cart
    }

    pub fn increment(&mut self, id: &ProductId) -> &Cart {
        self.cart = self.cart.increment(id);
        &self.cart
    }

    pub fn decrement(&mut self, id: &ProductId) -> &Cart {
        self.cart = self.cart.decrement(id);
        &self.cart
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> &Cart {
        self.cart = self.cart.remove(id);
        &self.cart
    }

    pub fn clear_cart(&mut self) {
        self.cart = Cart::new();
    }

    // Inventory events

    pub fn create_product(&mut self, draft: ProductDraft) -> ProductId {
        self.inventory.create(draft, &mut self.ids)
    }

    pub fn update_product(&mut self, id: &ProductId, draft: ProductDraft) -> Option<&Product> {
        self.inventory.update(id, draft)
    }

    /// Delete a product. Cart lines for it stay and price at zero.
    pub fn delete_product(&mut self, id: &ProductId) -> Option<Product> {
        self.inventory.delete(id)
    }

    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<(), CommerceError> {
        self.inventory.replace_all(products)
    }

    pub fn import_json(&mut self, payload: &str) -> Result<usize, CommerceError> {
        self.inventory.import_json(payload)
    }

    pub fn export_json(&self) -> Result<String, CommerceError> {
        self.inventory.export_json()
    }

    // Brand events

    pub fn save_brand(&mut self, config: BrandConfig) -> &BrandConfig {
        self.brand.save(config)
    }

    pub fn reset_brand(&mut self) -> &BrandConfig {
        self.brand.reset()
    }
}
