pub mod agent_status;
pub mod billing_run_status;
pub mod change_request_status;
pub mod debt_entry_status;
pub mod refund_status;

pub use agent_status::AgentStatus;
pub use billing_run_status::BillingRunStatus;
pub use change_request_status::ChangeRequestStatus;
pub use debt_entry_status::DebtEntryStatus;
pub use refund_status::RefundStatus;
