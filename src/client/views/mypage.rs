//! My page: own plans, liked plans and written reviews

use crate::client::api::{MyPageApi, PlanApi, SocialApi};
use crate::client::error::ClientError;
use crate::client::notice::{NoticeBoard, NoticeKind};
use crate::client::optimistic::LikeLedger;
use crate::client::state::AppState;
use crate::shared::models::{LikeStatus, Plan, Review};

pub struct MyPage {
    mypage: MyPageApi,
    plans_api: PlanApi,
    social: SocialApi,
    notices: NoticeBoard,
    ledger: LikeLedger,
    pub plans: Vec<Plan>,
    pub liked: Vec<Plan>,
    pub reviews: Vec<Review>,
}

impl MyPage {
    pub fn new(state: &AppState) -> Self {
        Self {
            mypage: state.mypage(),
            plans_api: state.plans(),
            social: state.social(),
            notices: state.notices().clone(),
            ledger: LikeLedger::new(),
            plans: Vec::new(),
            liked: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Fetch all three lists concurrently
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let (plans, liked, reviews) = tokio::try_join!(
            self.mypage.my_plans(),
            self.mypage.liked_plans(),
            self.mypage.my_reviews(),
        )?;
        tracing::debug!(
            "[PLAN] My page: {} plans, {} liked, {} reviews",
            plans.len(),
            liked.len(),
            reviews.len()
        );
        self.plans = plans;
        self.liked = liked;
        self.reviews = reviews;
        Ok(())
    }

    /// Remove the plan from the list right away; put it back where it was if
    /// the server refuses
    pub async fn delete_plan(&mut self, plan_id: i64) -> Result<(), ClientError> {
        let Some(index) = self.plans.iter().position(|p| p.plan_id == plan_id) else {
            return Ok(());
        };
        let removed = self.plans.remove(index);

        match self.plans_api.delete(plan_id).await {
            Ok(()) => {
                self.liked.retain(|p| p.plan_id != plan_id);
                self.notices.flash(NoticeKind::Success, "Plan deleted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!("[PLAN] Delete of plan {} failed: {}", plan_id, err);
                self.plans.insert(index.min(self.plans.len()), removed);
                self.notices.flash(NoticeKind::Error, err.user_message());
                Err(err)
            }
        }
    }

    /// Flip the like on a plan shown on this page
    pub async fn toggle_like(&mut self, plan_id: i64) -> Result<(), ClientError> {
        let Some(current) = self.like_status(plan_id) else {
            return Ok(());
        };
        let Self {
            social,
            ledger,
            plans,
            liked,
            notices,
            ..
        } = self;

        let result = ledger
            .toggle(social, current, |status| {
                for plan in plans.iter_mut().chain(liked.iter_mut()) {
                    if plan.plan_id == status.plan_id {
                        plan.liked = status.liked;
                        plan.like_count = status.like_count;
                    }
                }
            })
            .await;

        match result {
            Ok(status) => {
                if !status.liked {
                    liked.retain(|p| p.plan_id != plan_id);
                }
                Ok(())
            }
            Err(err) => {
                notices.flash(NoticeKind::Error, err.user_message());
                Err(err)
            }
        }
    }

    pub fn is_like_pending(&self, plan_id: i64) -> bool {
        self.ledger.is_pending(plan_id)
    }

    fn like_status(&self, plan_id: i64) -> Option<LikeStatus> {
        self.plans
            .iter()
            .chain(self.liked.iter())
            .find(|p| p.plan_id == plan_id)
            .map(|p| LikeStatus {
                plan_id,
                liked: p.liked,
                like_count: p.like_count,
            })
    }
}
