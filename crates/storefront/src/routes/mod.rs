//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (pings the database)
//!
//! # Products
//! GET    /api/products             - Listing; ?search= and ?category= filters
//! GET    /api/products/duplicates  - Duplicate groups (admin)
//! GET    /api/products/favorites   - Products for a comma-separated ?ids= list
//! GET    /api/products/category/{category} - Active products in a category
//! GET    /api/products/{id}        - Single product
//! POST   /api/products             - Create product (admin)
//! PUT    /api/products/{id}        - Update product (admin)
//! DELETE /api/products/{id}        - Delete product (admin)
//!
//! # Cart (session-backed)
//! GET  /cart                       - Cart contents and totals
//! POST /cart/add                   - Add one unit of a product
//! POST /cart/update                - Set a line quantity (<= 0 removes)
//! POST /cart/remove                - Remove a line
//! GET  /cart/count                 - Cart count badge
//!
//! # Favorites (session-backed)
//! GET  /favorites                  - Favorited products
//! POST /favorites/toggle           - Toggle a product in or out
//! GET  /favorites/count            - Favorites count badge
//!
//! # Checkout
//! POST /checkout                   - Place a demo order from the cart
//!
//! # Admin
//! POST /api/admin/login            - Login, starts a session
//! GET  /api/admin/profile          - Current admin (requires session)
//! POST /api/admin/logout           - End the session
//! POST /api/admin/create           - Create an admin account (requires session)
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod favorites;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product API router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/duplicates", get(products::duplicates))
        .route("/favorites", get(products::by_ids))
        .route("/category/{category}", get(products::by_category))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index))
        .route("/toggle", post(favorites::toggle))
        .route("/count", get(favorites::count))
}

/// Create the admin API router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/profile", get(admin::profile))
        .route("/logout", post(admin::logout))
        .route("/create", post(admin::create))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/admin", admin_routes())
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
        .route("/checkout", post(checkout::place_order))
}
