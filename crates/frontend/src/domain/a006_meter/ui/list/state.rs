use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a006_meter::response::MeterResponse;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeterFilters {
    /// Matches serial or account number; explicit apply.
    pub search: String,
    pub active_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MeterListState {
    pub collection: RemoteCollection<MeterResponse>,
    pub filters: FilterForm<MeterFilters>,
    pub page: PageRequest,
}

pub fn create_state() -> RwSignal<MeterListState> {
    RwSignal::new(MeterListState::default())
}
