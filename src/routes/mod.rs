// Route exports
pub mod error;
pub mod matches;

pub use error::{handle_json_payload_error, ApiError};
pub use matches::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    );
}
