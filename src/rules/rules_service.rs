use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::events::events_model::SavingsEvent;
use crate::rules::rules_model::{RuleType, SavingsRule};
use crate::rules::rules_traits::SavingsRuleServiceTrait;
use crate::transactions::transactions_model::Transaction;
use crate::transactions::transactions_traits::TransactionSourceTrait;
use crate::utils::money_utils::{round_up_to_multiple, split_across_goals};

/// Behavior switches for rule evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationOptions {
    /// When set, a transaction whose computed per-goal contribution is
    /// exactly zero emits no events instead of zero-amount events.
    pub skip_zero_contributions: bool,
}

/// Evaluates a savings rule against a batch of transactions with default
/// options (zero-amount contributions still emit events).
pub fn evaluate(rule: &SavingsRule, transactions: &[Transaction]) -> Vec<SavingsEvent> {
    evaluate_with_options(rule, transactions, EvaluationOptions::default())
}

/// Evaluates a savings rule against a batch of transactions.
///
/// Inactive rules, rules without goals and empty batches all produce an
/// empty result; so do data-quality gaps such as a missing transaction
/// description on a guilty-pleasure rule. None of these are errors.
///
/// Transactions are visited strictly in input order and only expenses
/// (strictly negative amounts) are eligible. Each matching transaction emits
/// one event per goal, goals in ascending id order, every goal receiving the
/// same per-goal share. Events carry the transaction's date and id; the
/// creation timestamp comes from the wall clock and is the only
/// non-deterministic output field.
pub fn evaluate_with_options(
    rule: &SavingsRule,
    transactions: &[Transaction],
    options: EvaluationOptions,
) -> Vec<SavingsEvent> {
    if !rule.is_active() || rule.savings_goal_ids.is_empty() || transactions.is_empty() {
        return Vec::new();
    }

    let goal_count = rule.savings_goal_ids.len();
    let mut events = Vec::new();

    for transaction in transactions {
        if !transaction.is_expense() {
            continue;
        }

        let per_goal = match rule.rule_type {
            RuleType::Roundup => {
                let total = round_up_to_multiple(transaction.amount, rule.amount);
                split_across_goals(total, goal_count)
            }
            RuleType::GuiltyPleasure => {
                let (Some(place), Some(description)) = (
                    rule.place_description.as_deref(),
                    transaction.description.as_deref(),
                ) else {
                    continue;
                };
                // Exact match, ignoring case; substrings do not count
                if place.to_lowercase() != description.to_lowercase() {
                    continue;
                }
                split_across_goals(rule.amount, goal_count)
            }
        };

        if options.skip_zero_contributions && per_goal == Decimal::ZERO {
            continue;
        }

        for &savings_goal_id in &rule.savings_goal_ids {
            events.push(SavingsEvent::new_rule_application(
                rule.user_id,
                savings_goal_id,
                rule,
                transaction.date,
                per_goal,
                transaction.id,
            ));
        }
    }

    events
}

/// Rule evaluation behind the service trait, fetching transactions from the
/// configured source.
pub struct SavingsRuleService<T: TransactionSourceTrait> {
    transaction_source: Arc<T>,
}

impl<T: TransactionSourceTrait> SavingsRuleService<T> {
    pub fn new(transaction_source: Arc<T>) -> Self {
        SavingsRuleService { transaction_source }
    }
}

#[async_trait]
impl<T: TransactionSourceTrait + Send + Sync> SavingsRuleServiceTrait for SavingsRuleService<T> {
    fn active_rules_for_user(&self, user_id: i64) -> Result<Vec<SavingsRule>> {
        // Canned rules until rule persistence lands
        let guilty_pleasure =
            SavingsRule::new_guilty_pleasure(Some(1), user_id, "Starbucks", dec!(3.00))
                .with_savings_goal(1)
                .with_savings_goal(2);
        let roundup = SavingsRule::new_roundup(Some(2), user_id, dec!(2.00)).with_savings_goal(1);

        Ok(vec![guilty_pleasure, roundup])
    }

    async fn execute_rule(&self, rule: &SavingsRule) -> Result<Vec<SavingsEvent>> {
        let transactions = self
            .transaction_source
            .latest_transactions_for_user(rule.user_id)
            .await?;
        if transactions.is_empty() {
            return Ok(Vec::new());
        }

        let events = evaluate(rule, &transactions);
        debug!(
            "rule {:?} produced {} savings events from {} transactions",
            rule.id,
            events.len(),
            transactions.len()
        );
        Ok(events)
    }
}
