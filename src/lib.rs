pub mod constants;
pub mod errors;
pub mod events;
pub mod rules;
pub mod transactions;
pub mod utils;

pub use errors::{Error, Result};
pub use events::SavingsEvent;
pub use rules::{evaluate, evaluate_with_options, EvaluationOptions, SavingsRule, SavingsRuleService};
pub use transactions::Transaction;
