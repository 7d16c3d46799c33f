use axum::{
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use crate::catalog::command::add_product_cmd::{AddProductCommand, AddProductCommandRequest, AddProductCommandResponse};
use crate::catalog::command::add_review_cmd::{AddReviewCommand, AddReviewCommandRequest, AddReviewCommandResponse};
use crate::catalog::command::edit_product_cmd::{EditProductCommand, EditProductCommandRequest, EditProductCommandResponse};
use crate::catalog::command::get_product_cmd::{GetProductCommand, GetProductCommandRequest, GetProductCommandResponse};
use crate::catalog::command::remove_product_cmd::{RemoveProductCommand, RemoveProductCommandRequest, RemoveProductCommandResponse};
use crate::catalog::command::search_products_cmd::{SearchProductsCommand, SearchProductsCommandRequest, SearchProductsCommandResponse};
use crate::catalog::query::CatalogQuery;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_body, json_to_server_error, query_params, ServerError};
use crate::products::dto::ProductEdit;

#[derive(Debug, Deserialize)]
struct ReviewBody {
    review: String,
}

pub(crate) async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<CatalogQuery>, QueryRejection>) -> Result<Json<SearchProductsCommandResponse>, ServerError> {
    let req = SearchProductsCommandRequest::new(query_params(query)?);
    let res = SearchProductsCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddProductCommandResponse>, ServerError> {
    let req: AddProductCommandRequest = serde_json::from_value(json_body(payload)?).map_err(json_to_server_error)?;
    let res = AddProductCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_product_by_id(
    State(state): State<AppState>,
    Path(product_id): Path<String>) -> Result<Json<GetProductCommandResponse>, ServerError> {
    let req = GetProductCommandRequest::new(product_id);
    let res = GetProductCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>) -> Result<Json<RemoveProductCommandResponse>, ServerError> {
    let req = RemoveProductCommandRequest::new(product_id);
    let res = RemoveProductCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_review(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddReviewCommandResponse>, ServerError> {
    let body: ReviewBody = serde_json::from_value(json_body(payload)?).map_err(json_to_server_error)?;
    let req = AddReviewCommandRequest::new(product_id.as_str(), body.review.as_str());
    let res = AddReviewCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn edit_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<EditProductCommandResponse>, ServerError> {
    let edit: ProductEdit = serde_json::from_value(json_body(payload)?).map_err(json_to_server_error)?;
    let req = EditProductCommandRequest::new(product_id.as_str(), edit);
    let res = EditProductCommand::new(state.catalog.clone()).execute(req).await?;
    Ok(Json(res))
}
