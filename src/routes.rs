use crate::api::Booking;
use crate::booker::BookingApp;
use crate::error::ApiError;
use aide::axum::routing::get_with;
use aide::axum::{ApiRouter, IntoApiResponse};
use aide::openapi::OpenApi;
use aide::redoc::Redoc;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

pub type SharedBooker = Arc<RwLock<BookingApp>>;

async fn handle_bookings(State(app): State<SharedBooker>) -> Json<Vec<Booking>> {
    Json(app.read().await.get_bookings())
}

async fn handle_new_booking(
    State(app): State<SharedBooker>,
    Json(payload): Json<Booking>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    match app.write().await.handle_new_booking(payload) {
        Ok(bookings) => Ok(Json(bookings)),
        Err(e) => {
            error!("Error creating new booking: {}", e);
            Err(ApiError::internal(e))
        }
    }
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(&*api).into_response()
}

fn booking_api(book_app: SharedBooker) -> ApiRouter {
    ApiRouter::new()
        .api_route(
            "/bookings",
            get_with(handle_bookings, |op| {
                op.summary("List bookings")
                    .description("The full booking list, oldest first.")
            })
            .post_with(handle_new_booking, |op| {
                op.summary("Create a booking")
                    .description("Stores the booking and returns the full updated list.")
            }),
        )
        .with_state(book_app)
}

/// The whole HTTP surface minus the static frontend, so tests can drive it
/// in-process.
pub fn app_router(book_app: SharedBooker) -> Router {
    let mut api = OpenApi::default();

    ApiRouter::new()
        .nest_api_service("/api", booking_api(book_app))
        .api_route(
            "/api/docs",
            get_with(
                Redoc::new("/api/openapi.json")
                    .with_title("pcbook API")
                    .axum_handler(),
                |op| op.description("This documentation page."),
            ),
        )
        .route("/api/openapi.json", get(serve_openapi))
        .finish_api_with(&mut api, |doc| {
            doc.title("pcbook API")
                .summary("Booking service for a community computer lab")
        })
        .layer(Extension(Arc::new(api)))
}
