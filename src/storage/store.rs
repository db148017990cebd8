//! Aggregated store for all entities
//!
//! The store owns one shared collection per resource. It is created once,
//! handed to the server builder, and reaches handlers only through their
//! controllers' state.

use super::in_memory::{Collection, SharedCollection};
use crate::config::SeedConfig;
use crate::core::error::StorageError;
use crate::entities::{Dish, Order};

/// Aggregated store containing all entity collections
#[derive(Clone)]
pub struct Store {
    pub dishes: SharedCollection<Dish>,
    pub orders: SharedCollection<Order>,
}

impl Store {
    /// An empty store
    pub fn new() -> Self {
        Self {
            dishes: Collection::new().shared(),
            orders: Collection::new().shared(),
        }
    }

    /// A store pre-filled with seed records
    pub fn from_seed(seed: &SeedConfig) -> Result<Self, StorageError> {
        let dishes = Collection::from_records(seed.dishes.iter().cloned())?;
        let orders = Collection::from_records(seed.orders.iter().cloned())?;

        tracing::info!(
            dishes = dishes.len(),
            orders = orders.len(),
            "store seeded"
        );

        Ok(Self {
            dishes: dishes.shared(),
            orders: orders.shared(),
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    const SEED: &str = r#"
seed:
  dishes:
    - id: "d1"
      name: "Dolcelatte and chickpea spaghetti"
      description: "Spaghetti topped with a blend of dolcelatte and fresh chickpeas"
      price: 19
      image_url: "https://example.com/spaghetti.jpg"
  orders:
    - id: "o1"
      deliverTo: "308 Negra Arroyo Lane"
      mobileNumber: "(505) 143-3369"
      status: "delivered"
      dishes:
        - id: "d1"
          name: "Dolcelatte and chickpea spaghetti"
          quantity: 2
"#;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.dishes.read().await.is_empty());
        assert!(store.orders.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_from_seed() {
        let config = AppConfig::from_yaml_str(SEED).unwrap();
        let store = Store::from_seed(&config.seed).unwrap();

        let dishes = store.dishes.read().await;
        assert_eq!(dishes.find("d1").unwrap().price, serde_json::Number::from(19));

        let orders = store.orders.read().await;
        let order = orders.find("o1").unwrap();
        assert_eq!(order.dishes[0].quantity, serde_json::Number::from(2));
        assert_eq!(order.dishes[0].details["id"], "d1");
    }

    #[test]
    fn test_from_seed_rejects_invalid_order() {
        let yaml = SEED.replace("quantity: 2", "quantity: 0");
        let config = AppConfig::from_yaml_str(&yaml).unwrap();
        let err = Store::from_seed(&config.seed).err().unwrap();
        assert!(err.to_string().contains("o1"));
    }
}
