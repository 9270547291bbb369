//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the session, access check, and record management
/// endpoints registered. Each endpoint is annotated with OpenAPI specifications via
/// utoipa, which are collected into a unified OpenAPI document. The router includes
/// Swagger UI at `/api/docs` for interactive API exploration and testing.
///
/// # Registered Endpoints
/// - `GET /api/session` - Get the current session state
/// - `GET /api/session/logout` - Logout current user
/// - `GET /api/access` - Check access for an entity and operation
/// - `GET|POST /api/customers`, `GET|PUT|DELETE /api/customers/{id}` - Customer records
/// - `GET|POST /api/employees`, `GET|PUT|DELETE /api/employees/{id}` - Employee records
/// - `GET|POST /api/hr-managers`, `GET|PUT|DELETE /api/hr-managers/{id}` - HR manager records
/// - `GET|POST /api/owners`, `GET|PUT|DELETE /api/owners/{id}` - Owner records
/// - `GET /api/users` - User reference candidates
/// - `GET /api/companies` - Company reference candidates
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and includes:
/// - Endpoint paths and HTTP methods
/// - Request/response schemas
/// - Error responses
///
/// # Swagger UI
/// Interactive API documentation is served at `/api/docs`, allowing developers to:
/// - Browse available endpoints
/// - View request/response schemas
/// - Test endpoints directly from the browser
/// - Download the OpenAPI specification
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and middleware, ready to be
/// merged into the main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// // Router is now ready to serve HTTP requests
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster API"), tags(
        (name = controller::session::SESSION_TAG, description = "Session API routes"),
        (name = controller::access::ACCESS_TAG, description = "Access check API routes"),
        (name = controller::customer::CUSTOMER_TAG, description = "Customer record API routes"),
        (name = controller::employee::EMPLOYEE_TAG, description = "Employee record API routes"),
        (name = controller::hr_manager::HR_MANAGER_TAG, description = "HR manager record API routes"),
        (name = controller::owner::OWNER_TAG, description = "Owner record API routes"),
        (name = controller::user::USER_TAG, description = "User lookup API routes"),
        (name = controller::company::COMPANY_TAG, description = "Company lookup API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::session::get_session))
        .routes(routes!(controller::session::logout))
        .routes(routes!(controller::access::check_access))
        .routes(routes!(
            controller::customer::get_customers,
            controller::customer::create_customer
        ))
        .routes(routes!(
            controller::customer::get_customer,
            controller::customer::update_customer,
            controller::customer::delete_customer
        ))
        .routes(routes!(
            controller::employee::get_employees,
            controller::employee::create_employee
        ))
        .routes(routes!(
            controller::employee::get_employee,
            controller::employee::update_employee,
            controller::employee::delete_employee
        ))
        .routes(routes!(
            controller::hr_manager::get_hr_managers,
            controller::hr_manager::create_hr_manager
        ))
        .routes(routes!(
            controller::hr_manager::get_hr_manager,
            controller::hr_manager::update_hr_manager,
            controller::hr_manager::delete_hr_manager
        ))
        .routes(routes!(
            controller::owner::get_owners,
            controller::owner::create_owner
        ))
        .routes(routes!(
            controller::owner::get_owner,
            controller::owner::update_owner,
            controller::owner::delete_owner
        ))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::company::get_companies))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
