use api_types::transaction::Transaction;
use engine::TransactionStore;

use crate::{error::StoreError, error_message, ApiClient};

impl TransactionStore for ApiClient {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Transaction>, StoreError> {
        let resp = self.http().get(self.url("transactions")).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status,
                message: error_message(resp).await,
            });
        }
        Ok(resp.json().await?)
    }

    async fn create(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let resp = self
            .http()
            .post(self.url("transactions"))
            .json(transaction)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status,
                message: error_message(resp).await,
            });
        }
        // The backend does not return the created entity; success is enough.
        Ok(())
    }
}
