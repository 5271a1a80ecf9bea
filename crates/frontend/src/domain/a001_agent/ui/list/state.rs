use crate::shared::filter_form::FilterForm;
use crate::shared::remote_collection::RemoteCollection;
use contracts::domain::a001_agent::response::AgentResponse;
use contracts::enums::AgentStatus;
use contracts::shared::paging::PageRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentFilters {
    /// Matches code, name or phone; explicit apply.
    pub search: String,
    pub status: Option<AgentStatus>,
    /// Empty string means all regions.
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct AgentListState {
    pub collection: RemoteCollection<AgentResponse>,
    pub filters: FilterForm<AgentFilters>,
    pub page: PageRequest,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for AgentListState {
    fn default() -> Self {
        Self {
            collection: RemoteCollection::default(),
            filters: FilterForm::new(),
            page: PageRequest::default(),
            sort_field: "code".to_string(),
            sort_ascending: true,
        }
    }
}

// State lives inside the component scope so it is disposed with the tab.
pub fn create_state() -> RwSignal<AgentListState> {
    RwSignal::new(AgentListState::default())
}
