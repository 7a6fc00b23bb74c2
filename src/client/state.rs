//! Application state
//!
//! One `AppState` per running client. It owns the wiring between storage,
//! session, refresher and HTTP wrapper so views only ask for the endpoint
//! family they need. Cloning is cheap; every clone shares the same session
//! and the same refresher.

use crate::client::api::{
    AdminApi, AuthApi, CategoryApi, MyPageApi, PlanApi, QnaApi, SocialApi,
};
use crate::client::category_cache::CategoryCache;
use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::client::http::{build_http_client, ApiClient, HttpReissuer};
use crate::client::notice::NoticeBoard;
use crate::client::refresh::{Reissuer, TokenRefresher};
use crate::client::routes::{Navigator, Route, WatchNavigator};
use crate::client::search_history::{SearchHistory, SearchScope};
use crate::client::session::Session;
use crate::client::storage::KeyValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    config: Config,
    session: Session,
    navigator: Arc<WatchNavigator>,
    client: ApiClient,
    category_cache: CategoryCache,
    notices: NoticeBoard,
}

impl AppState {
    /// Wire a client against the configured server, persisting into `store`
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, ClientError> {
        let http = build_http_client(&config)?;
        let reissuer: Arc<dyn Reissuer> = Arc::new(HttpReissuer::new(http.clone(), config.clone()));
        Ok(Self::with_reissuer(config, store, http, reissuer))
    }

    /// Same wiring with a caller-supplied reissue port
    pub fn with_reissuer(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        http: reqwest::Client,
        reissuer: Arc<dyn Reissuer>,
    ) -> Self {
        let session = Session::new(store.clone());
        let initial = if session.is_authenticated() {
            Route::Home
        } else {
            Route::Login
        };
        let navigator = Arc::new(WatchNavigator::new(initial));
        let refresher = Arc::new(TokenRefresher::new(
            reissuer,
            session.clone(),
            navigator.clone() as Arc<dyn Navigator>,
        ));
        let client = ApiClient::new(http, config.clone(), session.clone(), refresher);

        tracing::info!(
            "[SESSION] Client ready for {} (signed in: {})",
            config.server_url(),
            session.is_authenticated()
        );

        Self {
            config,
            session,
            navigator,
            client,
            category_cache: CategoryCache::new(store),
            notices: NoticeBoard::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn navigator(&self) -> &Arc<WatchNavigator> {
        &self.navigator
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn category_cache(&self) -> &CategoryCache {
        &self.category_cache
    }

    pub fn search_history(&self, scope: SearchScope) -> SearchHistory {
        SearchHistory::new(
            self.session.store().clone(),
            scope,
            self.config.search_history_limit(),
        )
    }

    /// Navigate, sending guests to login and non-admins away from admin pages
    pub fn go(&self, route: Route) -> Route {
        let target = if route.requires_auth() && !self.session.is_authenticated() {
            Route::Login
        } else if route.requires_admin() && !self.session.is_admin() {
            Route::Home
        } else {
            route
        };
        self.navigator.navigate(target.clone());
        target
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.client.clone())
    }

    pub fn plans(&self) -> PlanApi {
        PlanApi::new(self.client.clone())
    }

    pub fn categories(&self) -> CategoryApi {
        CategoryApi::new(self.client.clone())
    }

    pub fn social(&self) -> SocialApi {
        SocialApi::new(self.client.clone())
    }

    pub fn mypage(&self) -> MyPageApi {
        MyPageApi::new(self.client.clone())
    }

    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.client.clone())
    }

    pub fn qna(&self) -> QnaApi {
        QnaApi::new(self.client.clone())
    }
}
