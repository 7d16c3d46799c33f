use std::sync::Arc;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, patch, post, put};
use axum::{BoxError, Router};
use axum::body::HttpBody;
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use crate::catalog;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, ListKind};
use crate::core::repository::StoreClient;
use crate::lists;
use crate::lists::domain::ListService;

// AppState is shared by every handler. The services sit on top of a single store client
// that is connected once when the state is built.
#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) wishlist: Arc<dyn ListService>,
    pub(crate) reading: Arc<dyn ListService>,
}

impl AppState {
    pub async fn build(config: &Configuration) -> LibraryResult<AppState> {
        let client = StoreClient::connect(config).await?;
        let catalog = catalog::factory::create_catalog_service(config, &client).await;
        let wishlist = lists::factory::create_list_service(config, ListKind::Wishlist, &client).await;
        let reading = lists::factory::create_list_service(config, ListKind::Reading, &client).await;
        Ok(AppState {
            catalog: Arc::from(catalog),
            wishlist: Arc::from(wishlist),
            reading: Arc::from(reading),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

pub(crate) type ServerError = (StatusCode, Json<ErrorBody>);

fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(ErrorBody { error: message.to_string() }))
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// unwraps a JSON body, reporting undecodable bodies the same way as other bad requests
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ServerError> {
    payload.map(|json| json.0).map_err(|rejection| {
        server_error(StatusCode::BAD_REQUEST, rejection.body_text().as_str())
    })
}

// same for query strings, e.g. a parameter given twice
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ServerError> {
    query.map(|query| query.0).map_err(|rejection| {
        server_error(StatusCode::BAD_REQUEST, rejection.body_text().as_str())
    })
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Store { message, retryable } => {
                error!(message = message.as_str(), retryable, "store failure");
                server_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            CommandError::DuplicateKey { message } => {
                warn!(message = message.as_str(), "duplicate entry");
                server_error(StatusCode::BAD_REQUEST, "Duplicate entry")
            }
            CommandError::NotFound { message } => {
                warn!(message = message.as_str(), "not found");
                server_error(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::Validation { message } => {
                server_error(StatusCode::BAD_REQUEST, message.as_str())
            }
        }
    }
}

pub(crate) async fn health() -> &'static str {
    "Server Working...."
}

// generic over the request body so the same routes serve both hyper and the Lambda runtime
pub fn routes<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    use crate::catalog::controller::{add_product, add_review, edit_product, find_product_by_id, remove_product, search_products};
    use crate::lists::controller::{add_reading_entry, add_wishlist_entry, find_reading_entries, find_wishlist_entries, mark_read};

    Router::new()
        .route("/", get(health))
        .route("/products", get(search_products))
        .route("/product", post(add_product))
        .route("/products/:id",
               get(find_product_by_id).delete(remove_product))
        .route("/review/:id", post(add_review))
        .route("/edit/:id", put(edit_product))
        .route("/wishlist",
               post(add_wishlist_entry).get(find_wishlist_entries))
        .route("/reading",
               post(add_reading_entry).get(find_reading_entries))
        .route("/updateRead/:id", patch(mark_read))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
