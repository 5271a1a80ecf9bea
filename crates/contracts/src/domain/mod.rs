pub mod a001_agent;
pub mod a002_billing_run;
pub mod a003_debt_entry;
pub mod a004_recovery_policy;
pub mod a005_refund;
pub mod a006_meter;
pub mod a007_change_request;
