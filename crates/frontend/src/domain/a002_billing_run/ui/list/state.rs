use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a002_billing_run::response::BillingRunResponse;
use contracts::enums::BillingRunStatus;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingRunFilters {
    /// "YYYY-MM"; explicit apply (half-typed periods are useless filters).
    pub billing_period: String,
    pub status: Option<BillingRunStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct BillingRunListState {
    pub collection: RemoteCollection<BillingRunResponse>,
    pub filters: FilterForm<BillingRunFilters>,
    pub page: PageRequest,
}

pub fn create_state() -> RwSignal<BillingRunListState> {
    RwSignal::new(BillingRunListState::default())
}
