//! The storefront context object.
//!
//! [`Storefront`] ties the session manager, the catalog and cart clients and
//! the presentation seams together. It is the one place where results become
//! [`Notice`]s, routes and renders, so every user action ends with exactly
//! one notice or one navigation.

use std::fmt;
use std::sync::Arc;

use crate::auth::{AuthError, Session, SessionManager};
use crate::cart::{Cart, CartClient, CartError, Checkout, Order, OrderDetails};
use crate::catalog::{
    products_in_category, CatalogClient, Category, GridState, PageRequest, PagerState, Paginator,
    Product,
};
use crate::clients::HttpClient;
use crate::config::StorefrontConfig;
use crate::error::ConfigError;
use crate::ids::{CartId, ProductId};
use crate::storage::{MemoryStorage, Storage};
use crate::ui::{
    Navigator, Notice, Notifier, Route, StorefrontView, TracingNavigator, TracingNotifier,
    TracingView,
};

/// Shown when a registration is refused without a `detail`.
pub const REGISTRATION_FAILED: &str = "Registration failed";
/// Shown when a registration could not be sent.
pub const REGISTRATION_ERROR: &str = "Error during registration";
/// Shown after a successful registration.
pub const REGISTRATION_SUCCESS: &str = "Account created successfully! Please login.";
/// Shown when a login is refused without a `detail`.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when a login could not be sent.
pub const LOGIN_ERROR: &str = "Error during login";
/// Shown after a successful login.
pub const LOGIN_SUCCESS: &str = "Login successful!";
/// Shown when a cart action is attempted while logged out.
pub const LOGIN_REQUIRED: &str = "Please login first to add items to cart!";
/// Shown when adding to the cart is refused without a `detail`.
pub const ADD_TO_CART_FAILED: &str = "Failed to add to cart";
/// Shown when adding to the cart could not be sent.
pub const ADD_TO_CART_ERROR: &str = "Error adding to cart";
/// Shown when a search is submitted without a term.
pub const EMPTY_SEARCH: &str = "Please enter a search term";
/// Shown when a checkout is refused without a `detail`.
pub const CHECKOUT_FAILED: &str = "Checkout failed";
/// Shown after a successful checkout.
pub const CHECKOUT_SUCCESS: &str = "Order placed successfully!";
/// Shown when the backend accepted a checkout but its reply could not be read.
pub const CHECKOUT_UNCONFIRMED: &str = "Order placed, but the confirmation could not be read";

/// A storefront client session.
///
/// Reads take `&self`. Anything that changes the session or the current
/// page takes `&mut self`, so there is exactly one writer.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_client::{Storefront, StorefrontConfig};
///
/// let mut store = Storefront::new(StorefrontConfig::default())?;
/// store.restore()?;
/// store.display_products(None).await;
/// store.login("a@b.com", "x").await?;
/// ```
pub struct Storefront {
    config: StorefrontConfig,
    sessions: SessionManager,
    catalog: CatalogClient,
    carts: CartClient,
    pager: Paginator,
    listed: Vec<Product>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    view: Arc<dyn StorefrontView>,
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("sessions", &self.sessions)
            .field("pager", &self.pager)
            .field("listed", &self.listed.len())
            .finish_non_exhaustive()
    }
}

// Verify Storefront is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Storefront>();
};

impl Storefront {
    /// Creates a storefront with in-memory storage that reports notices,
    /// navigation and frames to `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if the configured page size is zero.
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    /// Creates a builder for plugging in storage and presentation.
    #[must_use]
    pub fn builder(config: StorefrontConfig) -> StorefrontBuilder {
        StorefrontBuilder::new(config)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Returns the session manager.
    #[must_use]
    pub const fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Returns the active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    /// Returns the catalog client.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Returns the cart client.
    #[must_use]
    pub const fn carts(&self) -> &CartClient {
        &self.carts
    }

    /// Returns the list the product grid is paging through.
    #[must_use]
    pub fn listed_products(&self) -> &[Product] {
        &self.listed
    }

    /// Returns the pager state.
    #[must_use]
    pub const fn pager_state(&self) -> PagerState {
        self.pager.state()
    }

    fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    fn render_auth(&self) {
        self.view.render_auth(self.sessions.auth_banner());
    }

    fn render_page(&self) {
        let page = self.pager.slice(&self.listed);
        self.view.render_grid(GridState::from_products(page));
        self.view.render_pager(self.pager.state());
    }

    /// Picks up the persisted session and draws the auth banner.
    ///
    /// Returns `true` if a session was restored. The banner is drawn even
    /// when storage fails, showing the logged-out state.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if durable storage cannot be read.
    pub fn restore(&mut self) -> Result<bool, AuthError> {
        let result = self.sessions.restore().map(|session| session.is_some());
        if let Err(e) = &result {
            tracing::warn!(error = %e, "could not restore session");
        }
        self.render_auth();
        result
    }

    /// Registers an account, then sends the user to the login page.
    ///
    /// Emits one notice: the success message, the password mismatch, the
    /// backend `detail`, or a generic failure.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] behind the failure notice.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        let result = self
            .sessions
            .register(email, password, confirm_password)
            .await;

        match &result {
            Ok(()) => {
                self.notify(Notice::success(REGISTRATION_SUCCESS));
                self.navigate(Route::Login);
            }
            Err(AuthError::PasswordMismatch) => {
                self.notify(Notice::error(AuthError::PasswordMismatch.to_string()));
            }
            Err(AuthError::Rejected { detail, .. }) => {
                self.notify(Notice::error(
                    detail.as_deref().unwrap_or(REGISTRATION_FAILED),
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during registration");
                self.notify(Notice::error(REGISTRATION_ERROR));
            }
        }
        result
    }

    /// Logs in, redraws the banner and sends the user home.
    ///
    /// On failure the previous session, if any, is kept.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] behind the failure notice.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let result = self.sessions.login(email, password).await.map(|_| ());

        match &result {
            Ok(()) => {
                self.render_auth();
                self.notify(Notice::success(LOGIN_SUCCESS));
                self.navigate(Route::Home);
            }
            Err(AuthError::Rejected { detail, .. }) => {
                self.notify(Notice::error(detail.as_deref().unwrap_or(LOGIN_FAILED)));
            }
            Err(AuthError::MalformedResponse { reason }) => {
                tracing::error!(reason = %reason, "unusable login response");
                self.notify(Notice::error(LOGIN_FAILED));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during login");
                self.notify(Notice::error(LOGIN_ERROR));
            }
        }
        result
    }

    /// Logs out locally, redraws the banner and sends the user home.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the persisted session could not be
    /// removed. The in-memory session is gone regardless.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        let result = self.sessions.logout();
        if let Err(e) = &result {
            tracing::error!(error = %e, "could not clear stored session");
        }
        self.render_auth();
        self.navigate(Route::Home);
        result
    }

    /// Fetches the catalog, returning an empty list on failure.
    pub async fn fetch_products(&self) -> Vec<Product> {
        self.catalog.fetch_products().await
    }

    /// Fetches the categories, returning an empty list on failure.
    pub async fn fetch_categories(&self) -> Vec<Category> {
        self.catalog.fetch_categories().await
    }

    /// Replaces the product grid.
    ///
    /// Draws [`GridState::Loading`] first. With `None` the catalog is
    /// fetched; a supplied list is used as-is, even when empty. The grid
    /// then shows the first page of the list.
    pub async fn display_products(&mut self, products: Option<Vec<Product>>) {
        self.view.render_grid(GridState::Loading);

        let products = match products {
            Some(products) => products,
            None => self.catalog.fetch_products().await,
        };

        self.pager.set_total(products.len());
        self.pager.change(PageRequest::Index(0));
        self.listed = products;
        self.render_page();
    }

    /// Shows only the products whose category name equals `name` exactly.
    ///
    /// The full catalog is fetched and filtered locally, keeping its order.
    pub async fn filter_by_category(&mut self, name: &str) {
        let products = self.catalog.fetch_products().await;
        let filtered = products_in_category(products, name);
        tracing::debug!(category = name, matches = filtered.len(), "filtered catalog");
        self.display_products(Some(filtered)).await;
    }

    /// Adds one unit of a product to the cart.
    ///
    /// Without a session the user is sent to the login page and nothing is
    /// sent. Emits exactly one notice either way.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] behind the failure notice.
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        product_name: &str,
        product_price: f64,
    ) -> Result<Option<Cart>, CartError> {
        tracing::debug!(%product_id, price = product_price, "add to cart");
        let result = self
            .carts
            .add_to_cart(self.sessions.current(), product_id)
            .await;

        match &result {
            Ok(_) => self.notify(Notice::success(format!("{product_name} added to cart!"))),
            Err(CartError::NotLoggedIn) => {
                self.notify(Notice::error(LOGIN_REQUIRED));
                self.navigate(Route::Login);
            }
            Err(CartError::Rejected { detail, .. }) => {
                self.notify(Notice::error(
                    detail.as_deref().unwrap_or(ADD_TO_CART_FAILED),
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error adding to cart");
                self.notify(Notice::error(ADD_TO_CART_ERROR));
            }
        }
        result
    }

    /// Sends the user to the search page for `input`.
    ///
    /// The term is lowercased. A blank term emits a notice and navigates
    /// nowhere. Returns the route taken.
    pub fn search_products(&self, input: &str) -> Option<Route> {
        let Some(route) = Route::search(input) else {
            self.notify(Notice::error(EMPTY_SEARCH));
            return None;
        };
        self.navigate(route.clone());
        Some(route)
    }

    /// Moves to another page of the listed products and redraws the grid.
    ///
    /// Moves past either end are clamped. Emits one progress notice and
    /// returns the resulting zero-based page.
    pub fn change_page(&mut self, request: PageRequest) -> usize {
        let page = self.pager.change(request);
        self.notify(Notice::info(request.loading_message(page)));
        self.render_page();
        page
    }

    fn require_session(&self) -> Result<&Session, CartError> {
        self.sessions.current().ok_or(CartError::NotLoggedIn)
    }

    /// Lists the logged-in user's carts.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotLoggedIn`] without a session, otherwise any
    /// request failure.
    pub async fn user_carts(&self) -> Result<Vec<Cart>, CartError> {
        let session = self.require_session()?;
        self.carts.user_carts(session).await
    }

    /// Checks out `cart_id` and emits one notice with the outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] behind the notice. A
    /// [`CartError::Decode`] means the order was accepted but the reply was
    /// unreadable, and is reported as [`CHECKOUT_UNCONFIRMED`].
    pub async fn checkout(&self, cart_id: CartId) -> Result<Checkout, CartError> {
        let result = match self.require_session() {
            Ok(session) => self.carts.checkout(session, cart_id).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(checkout) => {
                tracing::debug!(order_id = %checkout.order_id, "checkout complete");
                self.notify(Notice::success(CHECKOUT_SUCCESS));
            }
            Err(CartError::NotLoggedIn) => {
                self.notify(Notice::error(LOGIN_REQUIRED));
                self.navigate(Route::Login);
            }
            Err(CartError::Rejected { detail, .. }) => {
                self.notify(Notice::error(detail.as_deref().unwrap_or(CHECKOUT_FAILED)));
            }
            // The order exists; only the reply was unreadable.
            Err(e @ CartError::Decode { .. }) => {
                tracing::warn!(error = %e, "checkout reply could not be decoded");
                self.notify(Notice::info(CHECKOUT_UNCONFIRMED));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during checkout");
                self.notify(Notice::error(CHECKOUT_FAILED));
            }
        }
        result
    }

    /// Places an order for `cart_id` on behalf of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotLoggedIn`] without a session, otherwise any
    /// request failure.
    pub async fn place_order(&self, cart_id: CartId) -> Result<Order, CartError> {
        let session = self.require_session()?;
        self.carts.place_order(session, cart_id).await
    }

    /// Fetches the most recent confirmed order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the request fails.
    pub async fn latest_order(&self) -> Result<Order, CartError> {
        self.carts.latest_order().await
    }

    /// Fetches the logged-in user's latest order with its lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotLoggedIn`] without a session, otherwise any
    /// request failure.
    pub async fn order_details(&self) -> Result<OrderDetails, CartError> {
        let session = self.require_session()?;
        self.carts.order_details(session).await
    }
}

/// Builder for [`Storefront`].
///
/// # Defaults
///
/// - storage: [`MemoryStorage`]
/// - notifier: [`TracingNotifier`]
/// - navigator: [`TracingNavigator`]
/// - view: [`TracingView`]
pub struct StorefrontBuilder {
    config: StorefrontConfig,
    storage: Option<Box<dyn Storage>>,
    notifier: Option<Arc<dyn Notifier>>,
    navigator: Option<Arc<dyn Navigator>>,
    view: Option<Arc<dyn StorefrontView>>,
}

impl fmt::Debug for StorefrontBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StorefrontBuilder {
    /// Creates a builder for `config`.
    #[must_use]
    pub const fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            storage: None,
            notifier: None,
            navigator: None,
            view: None,
        }
    }

    /// Sets the durable session storage.
    #[must_use]
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Sets where notices go.
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Sets who performs navigation.
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Sets the view that draws the grid, banner and pager.
    #[must_use]
    pub fn view(mut self, view: Arc<dyn StorefrontView>) -> Self {
        self.view = Some(view);
        self
    }

    /// Builds the [`Storefront`]. The session starts logged out; call
    /// [`Storefront::restore`] to pick up a persisted one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if the page size is zero.
    pub fn build(self) -> Result<Storefront, ConfigError> {
        let pager = Paginator::new(self.config.page_size())?;
        let http = Arc::new(HttpClient::new(&self.config));
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));

        Ok(Storefront {
            sessions: SessionManager::new(Arc::clone(&http), storage),
            catalog: CatalogClient::new(Arc::clone(&http)),
            carts: CartClient::new(http),
            pager,
            listed: Vec::new(),
            notifier: self
                .notifier
                .unwrap_or_else(|| Arc::new(TracingNotifier)),
            navigator: self
                .navigator
                .unwrap_or_else(|| Arc::new(TracingNavigator)),
            view: self.view.unwrap_or_else(|| Arc::new(TracingView)),
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockStatus;
    use crate::ui::{AuthBanner, NavigationLog, NoticeLog, RecordedView};

    struct Harness {
        store: Storefront,
        notices: NoticeLog,
        routes: NavigationLog,
        view: RecordedView,
    }

    fn harness(page_size: usize) -> Harness {
        let notices = NoticeLog::new();
        let routes = NavigationLog::new();
        let view = RecordedView::new();
        let config = StorefrontConfig::builder()
            .page_size(page_size)
            .build()
            .unwrap();
        let store = Storefront::builder(config)
            .notifier(Arc::new(notices.clone()))
            .navigator(Arc::new(routes.clone()))
            .view(Arc::new(view.clone()))
            .build()
            .unwrap();
        Harness {
            store,
            notices,
            routes,
            view,
        }
    }

    fn product(id: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: None,
            price: 10.0,
            stock_status: StockStatus::Available,
            category: Category {
                id: None,
                name: "Books".to_string(),
                description: None,
            },
            quantity: None,
        }
    }

    fn shown_ids(view: &RecordedView) -> Vec<i64> {
        match view.grid() {
            Some(GridState::Products(cards)) => cards.iter().map(|c| c.product_id.get()).collect(),
            _ => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_display_products_renders_loading_then_grid() {
        let mut h = harness(12);
        h.store.display_products(Some(vec![product(1)])).await;

        let grids = h.view.grids();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0], GridState::Loading);
        assert_eq!(shown_ids(&h.view), vec![1]);
    }

    #[tokio::test]
    async fn test_display_empty_list_shows_empty_state() {
        let mut h = harness(12);
        h.store.display_products(Some(Vec::new())).await;
        assert_eq!(h.view.grid(), Some(GridState::Empty));
    }

    #[tokio::test]
    async fn test_change_page_slices_and_notifies() {
        let mut h = harness(2);
        h.store
            .display_products(Some((1..=5).map(product).collect()))
            .await;
        assert_eq!(shown_ids(&h.view), vec![1, 2]);

        assert_eq!(h.store.change_page(PageRequest::Next), 1);
        assert_eq!(shown_ids(&h.view), vec![3, 4]);
        assert_eq!(h.notices.last(), Some(Notice::info("Loading next page...")));

        assert_eq!(h.store.change_page(PageRequest::Index(2)), 2);
        assert_eq!(shown_ids(&h.view), vec![5]);
        assert_eq!(h.notices.last(), Some(Notice::info("Loading page 3...")));
        assert_eq!(h.view.pager(), Some(PagerState { current: 2, pages: 3 }));

        assert_eq!(h.store.change_page(PageRequest::Next), 2);
        assert_eq!(h.notices.notices().len(), 3);
    }

    #[test]
    fn test_search_routes_lowercased_term() {
        let h = harness(12);
        let route = h.store.search_products("Lamp").unwrap();
        assert_eq!(route.path(), "/search?q=lamp");
        assert_eq!(h.routes.current(), Some(route));
        assert!(h.notices.notices().is_empty());
    }

    #[test]
    fn test_restore_draws_logged_out_banner() {
        let mut h = harness(12);
        assert!(!h.store.restore().unwrap());
        assert_eq!(h.view.banner(), Some(AuthBanner::LoggedOut));
    }

    #[test]
    fn test_logout_goes_home() {
        let mut h = harness(12);
        h.store.logout().unwrap();
        assert_eq!(h.routes.current(), Some(Route::Home));
        assert_eq!(h.view.banner(), Some(AuthBanner::LoggedOut));
        assert!(h.notices.notices().is_empty());
    }

    #[tokio::test]
    async fn test_session_scoped_calls_need_login() {
        let h = harness(12);
        assert!(matches!(h.store.user_carts().await, Err(CartError::NotLoggedIn)));
        assert!(matches!(
            h.store.place_order(CartId(1)).await,
            Err(CartError::NotLoggedIn)
        ));
        assert!(matches!(h.store.order_details().await, Err(CartError::NotLoggedIn)));

        assert!(h.store.checkout(CartId(1)).await.is_err());
        assert_eq!(h.notices.last(), Some(Notice::error(LOGIN_REQUIRED)));
        assert_eq!(h.routes.current(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_default_sinks_survive_many_renders() {
        let mut store = Storefront::new(StorefrontConfig::default()).unwrap();
        let products: Vec<Product> = (1..=30).map(product).collect();

        for _ in 0..500 {
            store.display_products(Some(products.clone())).await;
            store.change_page(PageRequest::Next);
        }
        store.logout().unwrap();
        assert!(store.search_products("lamp").is_some());

        assert_eq!(store.listed_products().len(), 30);
        assert_eq!(std::mem::size_of::<TracingView>(), 0);
        assert_eq!(std::mem::size_of::<TracingNavigator>(), 0);
    }
}
