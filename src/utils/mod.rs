pub mod money_utils;

pub use money_utils::{round_up_to_multiple, split_across_goals};
