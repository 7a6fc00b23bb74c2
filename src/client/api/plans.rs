use crate::client::error::ClientError;
use crate::client::http::{ApiClient, ApiRequest};
use crate::client::validation;
use crate::shared::models::{Activity, ActivityProgress, Plan, PlanForm};

/// Routine CRUD
#[derive(Clone)]
pub struct PlanApi {
    client: ApiClient,
}

impl PlanApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Public feed shown on the home page
    pub async fn default_list(&self) -> Result<Vec<Plan>, ClientError> {
        self.client
            .list(&ApiRequest::get("/list/plan/default").public())
            .await
    }

    pub async fn get(&self, plan_id: i64) -> Result<Plan, ClientError> {
        self.client
            .json(&ApiRequest::get(format!("/plan/{}", plan_id)))
            .await
    }

    /// Validate then create
    pub async fn create(&self, form: &PlanForm) -> Result<Plan, ClientError> {
        validation::validate_plan(form)?;
        let plan: Plan = self
            .client
            .json(&ApiRequest::post("/plan").json(form)?)
            .await?;
        tracing::info!("[PLAN] Created plan {}", plan.plan_id);
        Ok(plan)
    }

    pub async fn update(&self, plan_id: i64, form: &PlanForm) -> Result<Plan, ClientError> {
        validation::validate_plan(form)?;
        self.client
            .json(&ApiRequest::patch(format!("/plan/{}", plan_id)).json(form)?)
            .await
    }

    pub async fn delete(&self, plan_id: i64) -> Result<(), ClientError> {
        self.client
            .execute(&ApiRequest::delete(format!("/plan/{}", plan_id)))
            .await
    }

    /// Mark an activity done and optionally rate it
    pub async fn record_activity(
        &self,
        plan_id: i64,
        activity_id: i64,
        progress: &ActivityProgress,
    ) -> Result<Activity, ClientError> {
        if let Some(rating) = progress.rating {
            validation::validate_rating(rating)?;
        }
        self.client
            .json(
                &ApiRequest::patch(format!("/plan/{}/activity/{}", plan_id, activity_id))
                    .json(progress)?,
            )
            .await
    }
}
