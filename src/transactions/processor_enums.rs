use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::transactions::db_types::{CreateTransaction, TransactionRecord, UpdateTransaction};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateTransactionInputArgs {
    pub transaction_id: Uuid,
    pub changes: UpdateTransaction,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum TransactionsProcessorInput {
    CreateTransaction(CreateTransaction),
    GetTransactions,
    UpdateTransaction(UpdateTransactionInputArgs),
    DeleteTransaction(Uuid),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum TransactionsProcessorOutput {
    CreateTransaction(TransactionRecord),
    GetTransactions(Vec<TransactionRecord>),
    UpdateTransaction(Option<TransactionRecord>),
    DeleteTransaction(usize),
}
