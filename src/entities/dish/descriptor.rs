//! Entity descriptor for Dish

use super::model::Dish;
use crate::core::controller::ResourceController;
use crate::core::resource::Resource;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::{collection_routes, item_routes, method_not_allowed};
use axum::Router;

/// Descriptor for the Dish entity
///
/// Dishes are never deleted, so `DELETE /dishes/{id}` falls through to 405.
pub struct DishDescriptor {
    pub controller: ResourceController<Dish>,
}

impl DishDescriptor {
    pub fn new(controller: ResourceController<Dish>) -> Self {
        Self { controller }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        Dish::PLURAL
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                collection_routes::<Dish>().fallback(method_not_allowed),
            )
            .route(
                "/dishes/{id}",
                item_routes::<Dish>().fallback(method_not_allowed),
            )
            .with_state(self.controller.clone())
    }
}
