pub mod rules_model;
pub mod rules_service;
pub mod rules_traits;

pub use rules_model::{RuleStatus, RuleType, SavingsRule};
pub use rules_service::{evaluate, evaluate_with_options, EvaluationOptions, SavingsRuleService};
pub use rules_traits::SavingsRuleServiceTrait;
