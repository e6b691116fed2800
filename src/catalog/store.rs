// In-memory product store
// One process, one list: a RwLock'd Vec holds the whole catalog

use tokio::sync::RwLock;

use super::id;
use super::types::{NewProduct, Product, ProductPatch};

/// The catalog: a mutable in-memory sequence of product records
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// Create a store from seed records, regenerating any colliding ids
    pub fn new(seed: Vec<Product>) -> Self {
        let mut products: Vec<Product> = Vec::with_capacity(seed.len());
        for mut product in seed {
            while products.iter().any(|p| p.id == product.id) {
                product.id = id::generate();
            }
            products.push(product);
        }
        Self {
            products: RwLock::new(products),
        }
    }

    /// Append a new record, assigning a fresh unique id
    ///
    /// Callers validate the payload first; missing fields fall back to
    /// defaults rather than panicking.
    pub async fn insert(&self, new: NewProduct) -> Product {
        let mut products = self.products.write().await;

        let mut new_id = id::generate();
        while products.iter().any(|p| p.id == new_id) {
            new_id = id::generate();
        }

        let product = Product {
            id: new_id,
            name: trimmed(new.name),
            category: trimmed(new.category),
            description: trimmed(new.description),
            price: new.price.unwrap_or_default(),
            stock: new.stock.unwrap_or_default(),
            rating: new.rating,
            image: new.image.map(|s| s.trim().to_string()),
        };
        products.push(product.clone());
        product
    }

    /// Snapshot of all records in insertion order
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Look up a record by id
    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Apply a partial update, returning the updated record
    pub async fn apply_patch(&self, id: &str, patch: &ProductPatch) -> Option<Product> {
        let mut products = self.products.write().await;
        let product = products.iter_mut().find(|p| p.id == id)?;
        product.apply(patch);
        Some(product.clone())
    }

    /// Remove a record; false when the id is unknown
    pub async fn remove(&self, id: &str) -> bool {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        products.len() != before
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}

fn trimmed(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            category: Some("Electronics".to_string()),
            description: Some("A thing".to_string()),
            price: Some(10.0),
            stock: Some(3),
            rating: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_trims() {
        let store = CatalogStore::new(Vec::new());
        let product = store
            .insert(NewProduct {
                name: Some("  Laptop  ".to_string()),
                ..payload("unused")
            })
            .await;

        assert_eq!(product.id.len(), id::ID_LEN);
        assert_eq!(product.name, "Laptop");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = CatalogStore::new(Vec::new());
        store.insert(payload("First")).await;
        store.insert(payload("Second")).await;
        store.insert(payload("Third")).await;

        let names: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = CatalogStore::new(Vec::new());
        let created = store.insert(payload("Keyboard")).await;

        let found = store.get(&created.id).await;
        assert_eq!(found, Some(created));
        assert!(store.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_apply_patch_updates_in_place() {
        let store = CatalogStore::new(Vec::new());
        let created = store.insert(payload("Monitor")).await;

        let patch: ProductPatch =
            serde_json::from_str(r#"{"price":350.0,"rating":4.8}"#).unwrap();
        let updated = store.apply_patch(&created.id, &patch).await.unwrap();

        assert_eq!(updated.price, 350.0);
        assert_eq!(updated.rating, Some(4.8));
        assert_eq!(store.get(&created.id).await.unwrap().price, 350.0);
    }

    #[tokio::test]
    async fn test_apply_patch_unknown_id() {
        let store = CatalogStore::new(Vec::new());
        let patch = ProductPatch::default();
        assert!(store.apply_patch("nope", &patch).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_keeps_order_of_remaining() {
        let store = CatalogStore::new(Vec::new());
        store.insert(payload("A")).await;
        let middle = store.insert(payload("B")).await;
        store.insert(payload("C")).await;

        assert!(store.remove(&middle.id).await);
        assert!(!store.remove(&middle.id).await);

        let names: Vec<String> = store.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
