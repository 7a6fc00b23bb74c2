//! Navigation routes
//!
//! In-app navigation targets and the `Navigator` port used by non-view code
//! (the token refresher) to send the user somewhere, typically the login page.

use tokio::sync::watch;

/// Back-office sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Users,
    Reports,
    Categories,
    Qna,
}

impl AdminSection {
    fn segment(self) -> &'static str {
        match self {
            AdminSection::Users => "users",
            AdminSection::Reports => "reports",
            AdminSection::Categories => "categories",
            AdminSection::Qna => "qna",
        }
    }
}

/// Current app view/route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Home,
    PlanDetail(i64),
    PlanEdit(Option<i64>),
    MyPage,
    Search,
    Qna,
    Admin(AdminSection),
    NotFound,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Home => "/".to_string(),
            Route::PlanDetail(id) => format!("/plan/{}", id),
            Route::PlanEdit(None) => "/plan/new".to_string(),
            Route::PlanEdit(Some(id)) => format!("/plan/{}/edit", id),
            Route::MyPage => "/mypage".to_string(),
            Route::Search => "/search".to_string(),
            Route::Qna => "/qna".to_string(),
            Route::Admin(section) => format!("/admin/{}", section.segment()),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["mypage"] => Route::MyPage,
            ["search"] => Route::Search,
            ["qna"] => Route::Qna,
            ["plan", "new"] => Route::PlanEdit(None),
            ["plan", id] => id.parse().map(Route::PlanDetail).unwrap_or(Route::NotFound),
            ["plan", id, "edit"] => id
                .parse()
                .map(|id| Route::PlanEdit(Some(id)))
                .unwrap_or(Route::NotFound),
            ["admin"] | ["admin", "users"] => Route::Admin(AdminSection::Users),
            ["admin", "reports"] => Route::Admin(AdminSection::Reports),
            ["admin", "categories"] => Route::Admin(AdminSection::Categories),
            ["admin", "qna"] => Route::Admin(AdminSection::Qna),
            _ => Route::NotFound,
        }
    }

    /// Whether the route needs a signed-in session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup | Route::Home | Route::NotFound)
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Admin(_))
    }
}

/// Navigation port
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator publishing the current route on a watch channel
#[derive(Debug)]
pub struct WatchNavigator {
    tx: watch::Sender<Route>,
}

impl WatchNavigator {
    pub fn new(initial: Route) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Route {
        self.tx.borrow().clone()
    }
}

impl Default for WatchNavigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator for WatchNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!("[NAV] -> {}", route.path());
        self.tx.send_replace(route);
    }
}
