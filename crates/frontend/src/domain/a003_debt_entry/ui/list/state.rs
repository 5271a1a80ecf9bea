use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a003_debt_entry::response::DebtEntryResponse;
use contracts::enums::DebtEntryStatus;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebtEntryFilters {
    pub account: String,
    pub status: Option<DebtEntryStatus>,
    /// Unset means all periods.
    pub billing_period_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DebtEntryListState {
    pub collection: RemoteCollection<DebtEntryResponse>,
    pub filters: FilterForm<DebtEntryFilters>,
    pub page: PageRequest,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for DebtEntryListState {
    fn default() -> Self {
        Self {
            collection: RemoteCollection::default(),
            filters: FilterForm::new(),
            page: PageRequest::default(),
            sort_field: "due_date".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<DebtEntryListState> {
    RwSignal::new(DebtEntryListState::default())
}
