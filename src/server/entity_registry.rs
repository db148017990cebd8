//! Entity registry: collects descriptors and merges their routes

use axum::Router;

/// Describes how to route one resource type
///
/// Each entity (Dish, Order) implements this to publish its
/// collection and item routes with its controller bound as state.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "dish")
    fn entity_type(&self) -> &str;

    /// The collection path segment (e.g., "dishes")
    fn plural(&self) -> &str;

    /// Build the routes for this entity:
    /// - `/{plural}`
    /// - `/{plural}/{id}`
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// A descriptor for an already-registered entity type replaces it.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        self.descriptors
            .retain(|existing| existing.entity_type() != descriptor.entity_type());
        self.descriptors.push(descriptor);
    }

    /// Merge every registered entity's routes into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                tracing::debug!(
                    entity = descriptor.entity_type(),
                    "mounting /{}",
                    descriptor.plural()
                );
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }
}
