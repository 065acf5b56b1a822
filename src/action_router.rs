use anyhow::Result;
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::transactions::processor_enums::{TransactionsProcessorInput, TransactionsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

pub enum ActionRouterInput {
    Budgets(BudgetsProcessorInput),
    Transactions(TransactionsProcessorInput),
}

#[derive(Debug)]
pub enum ActionRouterOutput {
    Budgets(BudgetsProcessorOutput),
    Transactions(TransactionsProcessorOutput),
}

impl ActionRouterInput {

    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        match self {
            ActionRouterInput::Budgets(processor) => {
                let res = processor.process(&app_config).await?;

                Ok(ActionRouterOutput::Budgets(res))
            }
            ActionRouterInput::Transactions(processor) => {
                let res = processor.process(&app_config).await?;

                Ok(ActionRouterOutput::Transactions(res))
            }
        }
    }
}
