use api_types::wallet::Wallet;
use engine::WalletStore;

use crate::{
    error::{status_error, StoreError},
    error_message, parse_or_echo, ApiClient,
};

impl WalletStore for ApiClient {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Wallet>, StoreError> {
        let resp = self.http().get(self.url("wallets")).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status,
                message: error_message(resp).await,
            });
        }
        Ok(resp.json().await?)
    }

    async fn get(&self, id: i64) -> Result<Wallet, StoreError> {
        let resp = self
            .http()
            .get(self.url(&format!("wallets/{id}")))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error("wallet", id, status, error_message(resp).await));
        }
        Ok(resp.json().await?)
    }

    async fn create(&self, wallet: &Wallet) -> Result<Wallet, StoreError> {
        let resp = self
            .http()
            .post(self.url("wallets"))
            .json(wallet)
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
        Ok(parse_or_echo(&body, wallet))
    }

    async fn update(&self, id: i64, wallet: &Wallet) -> Result<Wallet, StoreError> {
        let resp = self
            .http()
            .put(self.url(&format!("wallets/{id}")))
            .json(wallet)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error("wallet", id, status, error_message(resp).await));
        }
        let body = resp.bytes().await?;
        Ok(parse_or_echo(&body, wallet))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let resp = self
            .http()
            .delete(self.url(&format!("wallets/{id}")))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%status, wallet_id = id, "wallet delete rejected");
        }
        Ok(status.is_success())
    }
}
