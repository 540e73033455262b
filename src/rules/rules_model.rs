use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The core configuration object for a savings rule.
///
/// A rule is a value object: builders and status changes return new values,
/// and the goal-id set is frozen for the lifetime of the value, so a rule can
/// be evaluated concurrently for different users without coordination.
/// The meaning of `amount` depends on the rule type: the round-up unit for
/// `Roundup`, the fixed penalty for `GuiltyPleasure`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: i64,
    pub rule_type: RuleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_description: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub savings_goal_ids: BTreeSet<i64>,
    #[serde(default)]
    pub status: RuleStatus,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Roundup,
    GuiltyPleasure,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    #[default]
    Active,
    Paused,
    Deleted,
}

impl SavingsRule {
    /// Round-up rule: every expense is rounded up to the nearest multiple of
    /// `roundup_to_nearest` and the difference goes to the goals.
    pub fn new_roundup(id: Option<i64>, user_id: i64, roundup_to_nearest: Decimal) -> Self {
        SavingsRule {
            id,
            user_id,
            rule_type: RuleType::Roundup,
            place_description: None,
            amount: roundup_to_nearest,
            savings_goal_ids: BTreeSet::new(),
            status: RuleStatus::Active,
        }
    }

    /// Guilty-pleasure rule: spending at `place_description` costs a fixed
    /// `penalty_amount` toward the goals.
    pub fn new_guilty_pleasure(
        id: Option<i64>,
        user_id: i64,
        place_description: impl Into<String>,
        penalty_amount: Decimal,
    ) -> Self {
        SavingsRule {
            id,
            user_id,
            rule_type: RuleType::GuiltyPleasure,
            place_description: Some(place_description.into()),
            amount: penalty_amount,
            savings_goal_ids: BTreeSet::new(),
            status: RuleStatus::Active,
        }
    }

    /// New value with the goal added. Adding a goal twice is a no-op.
    pub fn with_savings_goal(mut self, savings_goal_id: i64) -> Self {
        self.savings_goal_ids.insert(savings_goal_id);
        self
    }

    /// New value with the goal removed.
    pub fn without_savings_goal(mut self, savings_goal_id: i64) -> Self {
        self.savings_goal_ids.remove(&savings_goal_id);
        self
    }

    /// New value with the given status.
    pub fn with_status(self, status: RuleStatus) -> Self {
        SavingsRule { status, ..self }
    }

    pub fn is_active(&self) -> bool {
        self.status == RuleStatus::Active
    }
}
