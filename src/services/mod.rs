//! Business logic layer
//!
//! Services validate input, apply mutations to the storage collections, and
//! persist the affected collection immediately afterwards. Validation lives
//! here so direct API use cannot corrupt state, not in the presentation
//! layer.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use transaction::TransactionService;
