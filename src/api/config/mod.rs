//! Bot and exchange configuration endpoints

mod bots;
mod exchange;

use axum::{routing::get, Router};

use crate::api::state::AppState;

pub fn create_config_router() -> Router<AppState> {
    Router::new()
        .route("/bots", get(bots::list_bots).post(bots::create_bot))
        .route(
            "/bots/{bot_id}",
            get(bots::get_bot)
                .put(bots::update_bot)
                .delete(bots::delete_bot),
        )
        .route(
            "/exchange/{bot_id}",
            get(exchange::get_exchange_config).put(exchange::update_exchange_config),
        )
}
