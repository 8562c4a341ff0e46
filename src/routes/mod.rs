pub mod auth;
pub mod health;
pub mod machines;
pub mod nfc_tags;
pub mod sessions;
pub mod studios;
pub mod training;
pub mod units;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Assembles the full application router: public auth endpoints, the
/// protected `/api/v1` surface behind the bearer-token middleware, and
/// the health probe.
pub fn build_router(state: AppState) -> Router {
    let base_routes = Router::new().route("/health", get(health::health));

    let auth_api = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/forgotPassword", post(auth::forgot_password))
        .route("/api/auth/resetPassword", post(auth::reset_password));

    let v1_api = Router::new()
        .route("/api/v1/users", get(users::list_users))
        .route(
            "/api/v1/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/v1/studios",
            get(studios::list_studios).post(studios::create_studio),
        )
        .route(
            "/api/v1/studios/:id",
            get(studios::get_studio)
                .put(studios::update_studio)
                .delete(studios::delete_studio),
        )
        .route(
            "/api/v1/studios/:id/owners",
            post(studios::add_studio_owner),
        )
        .route(
            "/api/v1/studios/:id/machines",
            get(machines::list_studio_machines),
        )
        .route(
            "/api/v1/licences",
            get(studios::list_licences).post(studios::create_licence),
        )
        .route(
            "/api/v1/machines",
            get(machines::list_machines).post(machines::create_machine),
        )
        .route(
            "/api/v1/machines/:id",
            get(machines::get_machine)
                .put(machines::update_machine)
                .delete(machines::delete_machine),
        )
        .route(
            "/api/v1/machinecategories",
            get(machines::list_categories).post(machines::create_category),
        )
        .route(
            "/api/v1/machinecategories/:id",
            get(machines::get_category)
                .put(machines::update_category)
                .delete(machines::delete_category),
        )
        .route(
            "/api/v1/nfctags",
            get(nfc_tags::list_nfc_tags).post(nfc_tags::create_nfc_tag),
        )
        .route(
            "/api/v1/nfctags/:id",
            get(nfc_tags::get_nfc_tag)
                .put(nfc_tags::update_nfc_tag)
                .delete(nfc_tags::delete_nfc_tag),
        )
        .route(
            "/api/v1/units",
            get(units::list_units).post(units::create_unit),
        )
        .route(
            "/api/v1/units/:id",
            get(units::get_unit)
                .put(units::update_unit)
                .delete(units::delete_unit),
        )
        .route(
            "/api/v1/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route("/api/v1/sessions/user", get(sessions::get_user_sessions))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::get_session)
                .put(sessions::update_session)
                .delete(sessions::delete_session),
        )
        .route(
            "/api/v1/sessions/:id/entries",
            get(training::list_session_entries),
        )
        .route(
            "/api/v1/trainingentries",
            post(training::create_entry),
        )
        .route(
            "/api/v1/trainingentries/:id",
            get(training::get_entry)
                .put(training::update_entry)
                .delete(training::delete_entry),
        )
        .route(
            "/api/v1/trainingentries/:id/data",
            get(training::list_entry_data),
        )
        .route("/api/v1/trainingdata", post(training::create_data))
        .route(
            "/api/v1/trainingdata/:id",
            get(training::get_data)
                .put(training::update_data)
                .delete(training::delete_data),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::verify_token,
        ));

    base_routes
        .merge(auth_api)
        .merge(v1_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
