use anyhow::Result;
use chrono::Utc;
use crate::transactions::processor_enums::{TransactionsProcessorInput, TransactionsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<TransactionsProcessorOutput> for TransactionsProcessorInput {
    async fn process(&self, app_config: &AppConfig) -> Result<TransactionsProcessorOutput> {
        let store = app_config.store.as_ref();
        match self {
            TransactionsProcessorInput::CreateTransaction(create_args) => {
                let create_args = create_args.normalized();
                create_args.validate()?;

                let record = store.insert_transaction(&create_args)?;
                tracing::info!(transaction_id = %record.id, "transaction recorded");

                Ok(TransactionsProcessorOutput::CreateTransaction(record))
            }
            TransactionsProcessorInput::GetTransactions => {
                let results = store.find_transactions()?;

                Ok(TransactionsProcessorOutput::GetTransactions(results))
            }
            TransactionsProcessorInput::UpdateTransaction(update_args) => {
                let changes = update_args.changes.normalized();
                changes.validate()?;

                let changes = changes.touched(Utc::now().naive_utc());
                let result = store.update_transaction(update_args.transaction_id, &changes)?;
                if result.is_some() {
                    tracing::info!(transaction_id = %update_args.transaction_id, "transaction updated");
                }

                Ok(TransactionsProcessorOutput::UpdateTransaction(result))
            }
            TransactionsProcessorInput::DeleteTransaction(transaction_id) => {
                let removed = store.delete_transaction(*transaction_id)?;
                if removed > 0 {
                    tracing::info!(transaction_id = %transaction_id, "transaction deleted");
                }

                Ok(TransactionsProcessorOutput::DeleteTransaction(removed))
            }
        }
    }
}
