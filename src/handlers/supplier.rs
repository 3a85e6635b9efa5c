//! Supplier CRUD handlers: list, get-by-id, create, update, delete.
//!
//! Each handler is stateless. Writes run the same linear sequence:
//! validate, (check existence,) stage in a fresh unit of work, commit,
//! map the affected-row count to a response.

use crate::error::AppError;
use crate::model::Supplier;
use crate::service::validate_supplier;
use crate::state::AppState;
use crate::store::UnitOfWork;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let suppliers = state.store.list().await?;
    Ok(Json(suppliers))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = state.store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(supplier))
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut supplier): Json<Supplier>,
) -> Result<impl IntoResponse, AppError> {
    if supplier.id.is_nil() {
        supplier.id = Uuid::new_v4();
    }
    validate_supplier(&supplier)?;

    let mut uow = UnitOfWork::new();
    uow.add(supplier.clone());
    if state.store.commit(uow).await? == 0 {
        return Err(AppError::SaveFailed);
    }

    let location = format!("/supplier/{}", supplier.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(supplier),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut supplier): Json<Supplier>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    // The path id is authoritative; a mismatched body id must not retarget
    // the write.
    supplier.id = id;
    validate_supplier(&supplier)?;

    let mut uow = UnitOfWork::new();
    uow.update(supplier);
    if state.store.commit(uow).await? == 0 {
        return Err(AppError::SaveFailed);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = state.store.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    let mut uow = UnitOfWork::new();
    uow.remove(&supplier);
    if state.store.commit(uow).await? == 0 {
        return Err(AppError::SaveFailed);
    }
    Ok(StatusCode::NO_CONTENT)
}
