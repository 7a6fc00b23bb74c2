//! Back-office dashboard
//!
//! User management, report handling and category maintenance. Category edits
//! refresh only the affected list from the server instead of reloading the
//! whole dashboard.

use crate::client::api::{AdminApi, CategoryApi};
use crate::client::category_cache::CategoryCache;
use crate::client::error::ClientError;
use crate::client::notice::{NoticeBoard, NoticeKind};
use crate::client::search_history::{SearchHistory, SearchScope};
use crate::client::state::AppState;
use crate::shared::models::{
    AdminUser, Category, CategoryKind, NewIcon, Page, Report, ReportStatus, Role,
};

pub struct AdminDashboard {
    admin: AdminApi,
    categories: CategoryApi,
    cache: CategoryCache,
    history: SearchHistory,
    notices: NoticeBoard,
    pub users: Option<Page<AdminUser>>,
    pub reports: Vec<Report>,
    pub icons: Vec<Category>,
    pub top_menu: Vec<Category>,
}

impl AdminDashboard {
    pub fn new(state: &AppState) -> Self {
        Self {
            admin: state.admin(),
            categories: state.categories(),
            cache: state.category_cache().clone(),
            history: state.search_history(SearchScope::AdminUsers),
            notices: state.notices().clone(),
            users: None,
            reports: Vec::new(),
            icons: Vec::new(),
            top_menu: Vec::new(),
        }
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.history.terms()
    }

    /// Load a page of users, optionally filtered by keyword
    pub async fn search_users(&mut self, page: u32, keyword: Option<&str>) -> Result<(), ClientError> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        if let Some(keyword) = keyword {
            self.history.record(keyword)?;
        }
        self.users = Some(self.admin.users(page, keyword).await?);
        Ok(())
    }

    pub async fn change_role(&mut self, user_id: i64, role: Role) -> Result<(), ClientError> {
        let updated = self.admin.change_role(user_id, role).await?;
        self.replace_user(updated);
        self.notices.flash(NoticeKind::Success, "Role updated");
        Ok(())
    }

    pub async fn set_banned(&mut self, user_id: i64, banned: bool) -> Result<(), ClientError> {
        let updated = self.admin.set_banned(user_id, banned).await?;
        self.replace_user(updated);
        Ok(())
    }

    pub async fn load_reports(&mut self) -> Result<(), ClientError> {
        self.reports = self.admin.reports().await?;
        Ok(())
    }

    pub async fn decide_report(&mut self, report_id: i64, status: ReportStatus) -> Result<(), ClientError> {
        let decided = self.admin.decide_report(report_id, status).await?;
        if let Some(slot) = self.reports.iter_mut().find(|r| r.report_id == report_id) {
            *slot = decided;
        }
        Ok(())
    }

    /// Show cached category lists at once, then bring them up to date
    pub async fn load_categories(&mut self) -> Result<(), ClientError> {
        if let Some(icons) = self.cache.cached(CategoryKind::Icon) {
            self.icons = icons;
        }
        if let Some(top_menu) = self.cache.cached(CategoryKind::TopMenu) {
            self.top_menu = top_menu;
        }
        self.icons = self.cache.revalidate(CategoryKind::Icon, &self.categories).await?.0;
        self.top_menu = self.cache.revalidate(CategoryKind::TopMenu, &self.categories).await?.0;
        Ok(())
    }

    pub async fn add_icon(&mut self, icon: &NewIcon) -> Result<(), ClientError> {
        let created = self.categories.add_icon(icon).await?;
        tracing::info!("[CACHE] Icon {} added", created.id);
        self.refresh_icons().await
    }

    pub async fn remove_icon(&mut self, icon_id: i64) -> Result<(), ClientError> {
        self.categories.delete_icon(icon_id).await?;
        self.refresh_icons().await
    }

    /// Save the top menu and re-fetch it; the stored copy is replaced with
    /// whatever order the server settled on
    pub async fn save_top_menu(&mut self, entries: &[Category]) -> Result<(), ClientError> {
        self.categories.replace_top_menu(entries).await?;
        self.top_menu = self
            .cache
            .revalidate(CategoryKind::TopMenu, &self.categories)
            .await?
            .0;
        self.notices.flash(NoticeKind::Success, "Top menu saved");
        Ok(())
    }

    async fn refresh_icons(&mut self) -> Result<(), ClientError> {
        self.cache.invalidate(CategoryKind::Icon)?;
        self.icons = self.cache.load(CategoryKind::Icon, &self.categories).await?;
        Ok(())
    }

    fn replace_user(&mut self, updated: AdminUser) {
        if let Some(page) = self.users.as_mut() {
            if let Some(slot) = page.content.iter_mut().find(|u| u.user_id == updated.user_id) {
                *slot = updated;
            }
        }
    }
}
