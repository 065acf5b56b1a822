use anyhow::Result;
use chrono::Utc;
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<BudgetsProcessorOutput> for BudgetsProcessorInput {
    async fn process(&self, app_config: &AppConfig) -> Result<BudgetsProcessorOutput> {
        let store = app_config.store.as_ref();
        match self {
            BudgetsProcessorInput::CreateBudget(create_args) => {
                let create_args = create_args.normalized();
                create_args.validate()?;

                let record = store.insert_budget(&create_args)?;
                tracing::info!(budget_id = %record.id, category = %record.category, "budget created");

                Ok(BudgetsProcessorOutput::CreateBudget(record))
            }
            BudgetsProcessorInput::GetBudgets(filter) => {
                let results = store.find_budgets(filter)?;

                Ok(BudgetsProcessorOutput::GetBudgets(results))
            }
            BudgetsProcessorInput::UpdateBudget(update_args) => {
                let changes = update_args.changes.normalized();
                changes.validate()?;

                let changes = changes.touched(Utc::now().naive_utc());
                let result = store.update_budget(update_args.budget_id, &changes)?;
                if result.is_some() {
                    tracing::info!(budget_id = %update_args.budget_id, "budget updated");
                }

                Ok(BudgetsProcessorOutput::UpdateBudget(result))
            }
            BudgetsProcessorInput::DeleteBudget(budget_id) => {
                let removed = store.delete_budget(*budget_id)?;
                if removed > 0 {
                    tracing::info!(budget_id = %budget_id, "budget deleted");
                }

                Ok(BudgetsProcessorOutput::DeleteBudget(removed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use uuid::Uuid;
    use crate::budgets::db_types::{BudgetFilter, CreateBudget, UpdateBudget};
    use crate::budgets::processor_enums::UpdateBudgetInputArgs;

    fn create(category: &str) -> BudgetsProcessorInput {
        BudgetsProcessorInput::CreateBudget(CreateBudget {
            category: category.to_string(),
            amount: BigDecimal::from(200),
            month: 5,
            year: 2024,
        })
    }

    #[tokio::test]
    async fn test_create_trims_category() -> Result<()> {
        let app_config = AppConfig::in_memory();

        match create("  Food ").process(&app_config).await? {
            BudgetsProcessorOutput::CreateBudget(record) => assert_eq!(record.category, "Food"),
            other => panic!("unexpected output {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_update_is_error_not_none() -> Result<()> {
        let app_config = AppConfig::in_memory();
        let BudgetsProcessorOutput::CreateBudget(record) = create("Food").process(&app_config).await? else {
            panic!("expected created budget");
        };

        let input = BudgetsProcessorInput::UpdateBudget(UpdateBudgetInputArgs {
            budget_id: record.id,
            changes: UpdateBudget { month: Some(0), ..Default::default() },
        });
        assert!(input.process(&app_config).await.is_err());

        let missing = BudgetsProcessorInput::UpdateBudget(UpdateBudgetInputArgs {
            budget_id: Uuid::new_v4(),
            changes: UpdateBudget::default(),
        });
        match missing.process(&app_config).await? {
            BudgetsProcessorOutput::UpdateBudget(result) => assert!(result.is_none()),
            other => panic!("unexpected output {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_get_budgets_filters_period() -> Result<()> {
        let app_config = AppConfig::in_memory();
        create("Food").process(&app_config).await?;

        let june = BudgetsProcessorInput::GetBudgets(BudgetFilter { month: Some(6), year: Some(2024) });
        match june.process(&app_config).await? {
            BudgetsProcessorOutput::GetBudgets(results) => assert!(results.is_empty()),
            other => panic!("unexpected output {:?}", other),
        }
        Ok(())
    }
}
