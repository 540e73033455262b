use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rules::rules_model::{RuleType, SavingsRule};

/// One entry in the history of a savings goal.
///
/// Events are either monetary (rule applications, manual transfers, interest
/// payments, incentive payouts) or milestones in the life of the goal, such
/// as rules being paused or users joining a shared goal. This core only ever
/// produces `rule_application` events; the rest of the vocabulary belongs to
/// downstream systems.
///
/// An event is immutable once created. The persistence and transfer layers
/// attach their identifiers by deriving a new value through the `with_*`
/// methods, never by mutating in place.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: i64,
    pub savings_goal_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_rule_id: Option<i64>,
    pub rule_type: RuleType,
    pub event_name: EventName,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub trigger_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_transfer_id: Option<i64>,
    #[serde(default)]
    pub cancelled: bool,
    pub created: DateTime<Utc>,
}

/// Closed vocabulary of savings-goal history events
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    Manual,
    Started,
    Stopped,
    RuleApplication,
    IftttTransfer,
    Joined,
    Withdrawal,
    InternalTransfer,
    Cancellation,
    IncentivePayout,
    Interest,
}

impl SavingsEvent {
    /// Event recording one rule application: `rule` matched the transaction
    /// identified by `trigger_id` and contributes `amount` to the goal.
    /// The creation timestamp is stamped from the wall clock; the database id
    /// and transfer id stay empty until downstream layers assign them.
    pub fn new_rule_application(
        user_id: i64,
        savings_goal_id: i64,
        rule: &SavingsRule,
        date: NaiveDate,
        amount: Decimal,
        trigger_id: i64,
    ) -> Self {
        SavingsEvent {
            id: None,
            user_id,
            savings_goal_id,
            savings_rule_id: rule.id,
            rule_type: rule.rule_type,
            event_name: EventName::RuleApplication,
            date,
            amount,
            trigger_id,
            savings_transfer_id: None,
            cancelled: false,
            created: Utc::now(),
        }
    }

    /// New value with the persistence id attached.
    pub fn with_id(self, id: i64) -> Self {
        SavingsEvent {
            id: Some(id),
            ..self
        }
    }

    /// New value with the transfer id attached.
    pub fn with_savings_transfer_id(self, savings_transfer_id: i64) -> Self {
        SavingsEvent {
            savings_transfer_id: Some(savings_transfer_id),
            ..self
        }
    }

    /// New value with the cancelled flag set.
    pub fn with_cancelled(self, cancelled: bool) -> Self {
        SavingsEvent { cancelled, ..self }
    }
}
