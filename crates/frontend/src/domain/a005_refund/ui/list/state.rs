use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a005_refund::response::RefundResponse;
use contracts::enums::RefundStatus;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefundFilters {
    pub status: Option<RefundStatus>,
    /// ISO dates; both optional, explicit apply.
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone)]
pub struct RefundListState {
    pub collection: RemoteCollection<RefundResponse>,
    pub filters: FilterForm<RefundFilters>,
    pub page: PageRequest,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for RefundListState {
    fn default() -> Self {
        Self {
            collection: RemoteCollection::default(),
            filters: FilterForm::new(),
            page: PageRequest::default(),
            sort_field: "requested_at".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<RefundListState> {
    RwSignal::new(RefundListState::default())
}
