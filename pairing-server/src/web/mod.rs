//! Web layer: thin request/response glue over the parser.

mod dto;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
