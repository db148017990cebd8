//! Entity descriptor for Order

use super::model::Order;
use crate::core::controller::ResourceController;
use crate::core::resource::Resource;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::{collection_routes, delete, item_routes, method_not_allowed};
use axum::Router;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub controller: ResourceController<Order>,
}

impl OrderDescriptor {
    pub fn new(controller: ResourceController<Order>) -> Self {
        Self { controller }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        Order::PLURAL
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/orders",
                collection_routes::<Order>().fallback(method_not_allowed),
            )
            .route(
                "/orders/{id}",
                item_routes::<Order>()
                    .delete(delete::<Order>)
                    .fallback(method_not_allowed),
            )
            .with_state(self.controller.clone())
    }
}
