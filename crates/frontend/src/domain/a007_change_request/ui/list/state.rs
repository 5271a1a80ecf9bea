use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a007_change_request::response::ChangeRequestResponse;
use contracts::enums::ChangeRequestStatus;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRequestFilters {
    pub status: Option<ChangeRequestStatus>,
}

impl Default for ChangeRequestFilters {
    fn default() -> Self {
        // Reviewers live in the pending queue; that is the default view.
        Self {
            status: Some(ChangeRequestStatus::Pending),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChangeRequestListState {
    pub collection: RemoteCollection<ChangeRequestResponse>,
    pub filters: FilterForm<ChangeRequestFilters>,
    pub page: PageRequest,
}

pub fn create_state() -> RwSignal<ChangeRequestListState> {
    RwSignal::new(ChangeRequestListState::default())
}
