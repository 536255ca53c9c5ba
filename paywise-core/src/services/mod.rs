//! Business logic orchestration

pub mod authorization;
pub mod history;
pub mod receipt;
pub mod workflow;

pub use authorization::{AuthorizationGate, GateOutcome, GateState, MAX_ATTEMPTS};
pub use history::{DirectionFilter, HistoryService};
pub use receipt::ReceiptService;
pub use workflow::{AuthorizationOutcome, Step, TransferWorkflow, WorkflowError};
