//! Table registry and the scheduler that drives simulated tables.

pub mod registry;
pub mod scheduler;

pub use registry::{CreateTableParams, RegistryError, TableRegistry, TableSummary};
pub use scheduler::Scheduler;
