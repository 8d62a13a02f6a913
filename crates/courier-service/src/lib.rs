//! Courier Service
//!
//! The orchestration core of the Courier execution engine: token
//! resolution, amount adjustment, balance and allowance validation,
//! transaction execution, and error classification, driven by the
//! [`ExecutionEngine`] pipeline.

pub mod adjuster;
pub mod allowance;
pub mod balance;
pub mod classifier;
pub mod engine;
pub mod executor;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use adjuster::{AmountAdjuster, GasBuffers};
pub use allowance::AllowanceManager;
pub use balance::{BalanceValidator, BalanceVerdict};
pub use classifier::ErrorClassifier;
pub use engine::ExecutionEngine;
pub use executor::TransactionExecutor;
pub use resolver::TokenResolver;
