use api_types::budget::{Budget, BudgetAmountUpdate};
use engine::BudgetStore;

use crate::{
    error::{status_error, StoreError},
    error_message, parse_or_echo, ApiClient,
};

impl ApiClient {
    /// Shared by `get` and the empty-body fallback of `update_amount`.
    async fn fetch_budget(&self, id: i64) -> Result<Budget, StoreError> {
        let resp = self
            .http()
            .get(self.url(&format!("budgets/{id}")))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error("budget", id, status, error_message(resp).await));
        }
        Ok(resp.json().await?)
    }
}

impl BudgetStore for ApiClient {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Budget>, StoreError> {
        let resp = self.http().get(self.url("budgets")).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status,
                message: error_message(resp).await,
            });
        }
        Ok(resp.json().await?)
    }

    async fn get(&self, id: i64) -> Result<Budget, StoreError> {
        self.fetch_budget(id).await
    }

    async fn create(&self, budget: &Budget) -> Result<Budget, StoreError> {
        let resp = self
            .http()
            .post(self.url("budgets"))
            .json(budget)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status,
                message: error_message(resp).await,
            });
        }
        let body = resp.bytes().await?;
        Ok(parse_or_echo(&body, budget))
    }

    async fn update(&self, id: i64, budget: &Budget) -> Result<Budget, StoreError> {
        let resp = self
            .http()
            .put(self.url(&format!("budgets/{id}")))
            .json(budget)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error("budget", id, status, error_message(resp).await));
        }
        let body = resp.bytes().await?;
        Ok(parse_or_echo(&body, budget))
    }

    async fn update_amount(&self, id: i64, new_amount: i64) -> Result<Budget, StoreError> {
        let resp = self
            .http()
            .put(self.url(&format!("budgets/{id}/amount")))
            .json(&BudgetAmountUpdate { amount: new_amount })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error("budget", id, status, error_message(resp).await));
        }

        // Unlike create/update, the caller has no consistent full record to
        // echo here, so an empty success body means a re-fetch.
        let body = resp.bytes().await?;
        if body.is_empty() {
            return self.fetch_budget(id).await;
        }
        match serde_json::from_slice(&body) {
            Ok(budget) => Ok(budget),
            Err(err) => {
                tracing::debug!(budget_id = id, "unparseable amount-update body, re-fetching: {err}");
                self.fetch_budget(id).await
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let resp = self
            .http()
            .delete(self.url(&format!("budgets/{id}")))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%status, budget_id = id, "budget delete rejected");
        }
        Ok(status.is_success())
    }
}
