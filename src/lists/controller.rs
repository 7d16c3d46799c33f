use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, ErrorBody, json_body, query_params, ServerError};
use crate::lists::command::add_entry_cmd::{AddEntryCommand, AddEntryCommandRequest, AddEntryCommandResponse};
use crate::lists::command::find_entries_cmd::{FindEntriesCommand, FindEntriesCommandRequest, FindEntriesCommandResponse};
use crate::lists::command::mark_read_cmd::{MarkReadCommand, MarkReadCommandRequest, MarkReadCommandResponse};
use crate::lists::domain::ListService;

async fn add_entry(
    list_service: Arc<dyn ListService>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddEntryCommandResponse>, ServerError> {
    let payload = match json_body(payload)? {
        Value::Object(map) => map,
        _ => {
            return Err((StatusCode::BAD_REQUEST, Json(ErrorBody {
                error: format!("{} entry must be a JSON object", list_service.kind()),
            })));
        }
    };
    let res = AddEntryCommand::new(list_service).execute(AddEntryCommandRequest::new(payload)).await?;
    Ok(Json(res))
}

async fn find_entries(
    list_service: Arc<dyn ListService>,
    req: FindEntriesCommandRequest) -> Result<Json<FindEntriesCommandResponse>, ServerError> {
    let res = FindEntriesCommand::new(list_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_wishlist_entry(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddEntryCommandResponse>, ServerError> {
    add_entry(state.wishlist.clone(), payload).await
}

pub(crate) async fn find_wishlist_entries(
    State(state): State<AppState>,
    query: Result<Query<FindEntriesCommandRequest>, QueryRejection>) -> Result<Json<FindEntriesCommandResponse>, ServerError> {
    find_entries(state.wishlist.clone(), query_params(query)?).await
}

pub(crate) async fn add_reading_entry(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddEntryCommandResponse>, ServerError> {
    add_entry(state.reading.clone(), payload).await
}

pub(crate) async fn find_reading_entries(
    State(state): State<AppState>,
    query: Result<Query<FindEntriesCommandRequest>, QueryRejection>) -> Result<Json<FindEntriesCommandResponse>, ServerError> {
    find_entries(state.reading.clone(), query_params(query)?).await
}

pub(crate) async fn mark_read(
    State(state): State<AppState>,
    Path(entry_id): Path<String>) -> Result<Json<MarkReadCommandResponse>, ServerError> {
    let req = MarkReadCommandRequest::new(entry_id);
    let res = MarkReadCommand::new(state.reading.clone()).execute(req).await?;
    Ok(Json(res))
}
