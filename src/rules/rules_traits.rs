use async_trait::async_trait;

use crate::errors::Result;
use crate::events::events_model::SavingsEvent;
use crate::rules::rules_model::SavingsRule;

#[async_trait]
pub trait SavingsRuleServiceTrait: Send + Sync {
    fn active_rules_for_user(&self, user_id: i64) -> Result<Vec<SavingsRule>>;
    async fn execute_rule(&self, rule: &SavingsRule) -> Result<Vec<SavingsEvent>>;
}
