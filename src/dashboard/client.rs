use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::response::ApiResponse;
use crate::budgets::db_types::{BudgetRecord, CreateBudget, UpdateBudget};
use crate::period::Period;
use crate::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};

/// Everything the dashboard needs from the finance API.
pub trait FinanceApi {
    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>>;
    async fn fetch_budgets(&self, period: Period) -> Result<Vec<BudgetRecord>>;
    async fn create_transaction(&self, input: &CreateTransaction) -> Result<TransactionRecord>;
    async fn update_transaction(&self, id: Uuid, changes: &UpdateTransaction) -> Result<TransactionRecord>;
    async fn delete_transaction(&self, id: Uuid) -> Result<()>;
    async fn create_budget(&self, input: &CreateBudget) -> Result<BudgetRecord>;
    async fn update_budget(&self, id: Uuid, changes: &UpdateBudget) -> Result<BudgetRecord>;
    async fn delete_budget(&self, id: Uuid) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct HttpFinanceClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpFinanceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Unwraps the `{success, data, error}` envelope, turning any non-2xx answer
/// into an error that carries the server's detail when it sent one.
async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response, action: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.error);

        return Err(match detail {
            Some(detail) => anyhow!("Failed to {}: {}", action, detail),
            None => anyhow!("Failed to {}", action),
        });
    }

    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .with_context(|| format!("Failed to {}", action))?;

    envelope
        .data
        .ok_or_else(|| anyhow!("Failed to {}: response carried no data", action))
}

impl FinanceApi for HttpFinanceClient {
    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        let response = self
            .http
            .get(self.url("/api/transactions"))
            .send()
            .await
            .context("Failed to fetch transactions")?;

        read_envelope(response, "fetch transactions").await
    }

    async fn fetch_budgets(&self, period: Period) -> Result<Vec<BudgetRecord>> {
        let response = self
            .http
            .get(self.url("/api/budgets"))
            .query(&[("month", period.month.to_string()), ("year", period.year.to_string())])
            .send()
            .await
            .context("Failed to fetch budgets")?;

        read_envelope(response, "fetch budgets").await
    }

    async fn create_transaction(&self, input: &CreateTransaction) -> Result<TransactionRecord> {
        let response = self
            .http
            .post(self.url("/api/transactions"))
            .json(input)
            .send()
            .await
            .context("Failed to save transaction")?;

        read_envelope(response, "save transaction").await
    }

    async fn update_transaction(&self, id: Uuid, changes: &UpdateTransaction) -> Result<TransactionRecord> {
        let response = self
            .http
            .put(self.url(&format!("/api/transactions/{}", id)))
            .json(changes)
            .send()
            .await
            .context("Failed to update transaction")?;

        read_envelope(response, "update transaction").await
    }

    async fn delete_transaction(&self, id: Uuid) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/transactions/{}", id)))
            .send()
            .await
            .context("Failed to delete transaction")?;

        read_envelope::<serde_json::Value>(response, "delete transaction").await?;
        Ok(())
    }

    async fn create_budget(&self, input: &CreateBudget) -> Result<BudgetRecord> {
        let response = self
            .http
            .post(self.url("/api/budgets"))
            .json(input)
            .send()
            .await
            .context("Failed to save budget")?;

        read_envelope(response, "save budget").await
    }

    async fn update_budget(&self, id: Uuid, changes: &UpdateBudget) -> Result<BudgetRecord> {
        let response = self
            .http
            .put(self.url(&format!("/api/budgets/{}", id)))
            .json(changes)
            .send()
            .await
            .context("Failed to update budget")?;

        read_envelope(response, "update budget").await
    }

    async fn delete_budget(&self, id: Uuid) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/budgets/{}", id)))
            .send()
            .await
            .context("Failed to delete budget")?;

        read_envelope::<serde_json::Value>(response, "delete budget").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use bigdecimal::BigDecimal;

    use crate::api::router::build_router;
    use crate::utils::app_config::AppConfig;

    async fn serve_in_memory() -> HttpFinanceClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(AppConfig::in_memory())).await.unwrap();
        });

        HttpFinanceClient {
            base_url: format!("http://{}", addr),
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    fn groceries(amount: &str) -> CreateBudget {
        CreateBudget {
            category: "Groceries".to_string(),
            amount: BigDecimal::from_str(amount).unwrap(),
            month: 7,
            year: 2024,
        }
    }

    #[tokio::test]
    async fn test_budget_lifecycle_over_http() -> Result<()> {
        let client = serve_in_memory().await;
        let july = Period::new(7, 2024)?;

        let created = client.create_budget(&groceries("12345678901234567.89")).await?;
        assert_eq!(created.category, "Groceries");
        assert_eq!(created.amount, BigDecimal::from_str("12345678901234567.89")?);

        let fetched = client.fetch_budgets(july).await?;
        assert_eq!(fetched, vec![created.clone()]);
        assert!(client.fetch_budgets(Period::new(8, 2024)?).await?.is_empty());

        let changes = UpdateBudget { amount: Some(BigDecimal::from_str("450.25")?), ..Default::default() };
        let updated = client.update_budget(created.id, &changes).await?;
        assert_eq!(updated.amount, BigDecimal::from_str("450.25")?);
        assert_eq!(updated.category, "Groceries");
        assert_eq!(updated.month, 7);

        let duplicate = client.create_budget(&groceries("10")).await.unwrap_err();
        assert!(duplicate.to_string().starts_with("Failed to save budget: "));
        Ok(())
    }

    #[tokio::test]
    async fn test_budget_delete_and_missing_over_http() -> Result<()> {
        let client = serve_in_memory().await;
        let created = client.create_budget(&groceries("80")).await?;

        client.delete_budget(created.id).await?;
        assert!(client.fetch_budgets(Period::new(7, 2024)?).await?.is_empty());

        let again = client.delete_budget(created.id).await.unwrap_err();
        assert_eq!(again.to_string(), "Failed to delete budget");

        let missing = client
            .update_budget(Uuid::new_v4(), &UpdateBudget { month: Some(8), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(missing.to_string(), "Failed to update budget");
        Ok(())
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpFinanceClient::new("http://localhost:3000/");
        assert_eq!(client.url("/api/budgets"), "http://localhost:3000/api/budgets");
    }
}
