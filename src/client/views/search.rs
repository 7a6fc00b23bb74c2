//! Plan search with recent-term history

use crate::client::api::SocialApi;
use crate::client::error::ClientError;
use crate::client::latest::LatestSlot;
use crate::client::search_history::{SearchHistory, SearchScope};
use crate::client::session::Session;
use crate::client::state::AppState;
use crate::shared::models::Plan;

pub struct PlanSearch {
    social: SocialApi,
    session: Session,
    history: SearchHistory,
    results: LatestSlot<Vec<Plan>>,
}

impl PlanSearch {
    pub fn new(state: &AppState) -> Self {
        Self {
            social: state.social(),
            session: state.session().clone(),
            history: state.search_history(SearchScope::Plans),
            results: LatestSlot::new(),
        }
    }

    pub fn recent(&self) -> Vec<String> {
        self.history.terms()
    }

    pub fn forget(&self, term: &str) -> Result<Vec<String>, ClientError> {
        self.history.remove(term)
    }

    /// Results of the newest search that has completed
    pub fn results(&self) -> Vec<Plan> {
        self.results.get().unwrap_or_default()
    }

    /// Run a search. Returns `None` when a newer search was started while
    /// this one was in flight; its response is discarded.
    pub async fn search(&self, keyword: &str) -> Result<Option<Vec<Plan>>, ClientError> {
        let keyword = keyword.trim();
        let ticket = self.results.begin();
        if keyword.is_empty() {
            self.results.commit(ticket, Vec::new());
            return Ok(Some(Vec::new()));
        }
        self.history.record(keyword)?;

        let plans = self.social.search_plans(keyword).await?;
        if !self.results.commit(ticket, plans.clone()) {
            tracing::debug!("[PLAN] Dropping stale results for '{}'", keyword);
            return Ok(None);
        }

        if self.session.is_authenticated() {
            if let Err(err) = self.social.add_search_log(keyword).await {
                tracing::warn!("[PLAN] Could not record search log: {}", err);
            }
        }
        Ok(Some(plans))
    }
}
