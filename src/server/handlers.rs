//! HTTP handlers for resource operations
//!
//! These handlers are generic over [`Resource`]; each entity descriptor
//! instantiates them with its own type and controller state.

use crate::core::controller::ResourceController;
use crate::core::error::{ApiError, ApiResult, RequestError};
use crate::core::resource::{Deletable, Envelope, Resource};
use crate::core::validation::Payload;
use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    routing::{MethodRouter, get},
};

/// GET /{plural}
pub async fn list<R: Resource>(
    State(controller): State<ResourceController<R>>,
) -> Json<Envelope<Vec<R>>> {
    Json(Envelope::new(controller.list().await))
}

/// POST /{plural}
pub async fn create<R: Resource>(
    State(controller): State<ResourceController<R>>,
    Payload(data): Payload,
) -> ApiResult<(StatusCode, Json<Envelope<R>>)> {
    let record = controller.create(&data).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(record))))
}

/// GET /{plural}/{id}
pub async fn read<R: Resource>(
    State(controller): State<ResourceController<R>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<R>>> {
    Ok(Json(Envelope::new(controller.read(&id).await?)))
}

/// PUT /{plural}/{id}
pub async fn update<R: Resource>(
    State(controller): State<ResourceController<R>>,
    Path(id): Path<String>,
    Payload(data): Payload,
) -> ApiResult<Json<Envelope<R>>> {
    Ok(Json(Envelope::new(controller.update(&id, &data).await?)))
}

/// DELETE /{plural}/{id}
pub async fn delete<R: Deletable>(
    State(controller): State<ResourceController<R>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    controller.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}

/// Fallback for paths no route matches
pub async fn path_not_found(uri: Uri) -> ApiError {
    RequestError::PathNotFound {
        path: uri.path().to_string(),
    }
    .into()
}

/// `GET` list + `POST` create on the collection path
pub fn collection_routes<R: Resource>() -> MethodRouter<ResourceController<R>> {
    get(list::<R>).post(create::<R>)
}

/// `GET` read + `PUT` update on the item path
pub fn item_routes<R: Resource>() -> MethodRouter<ResourceController<R>> {
    get(read::<R>).put(update::<R>)
}
