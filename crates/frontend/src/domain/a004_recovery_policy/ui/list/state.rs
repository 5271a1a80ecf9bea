use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a004_recovery_policy::response::RecoveryPolicyResponse;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoveryPolicyFilters {
    /// Show only policies currently paused.
    pub paused_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RecoveryPolicyListState {
    pub collection: RemoteCollection<RecoveryPolicyResponse>,
    pub filters: FilterForm<RecoveryPolicyFilters>,
    pub page: PageRequest,
}

pub fn create_state() -> RwSignal<RecoveryPolicyListState> {
    RwSignal::new(RecoveryPolicyListState::default())
}
