use super::ui::list::state::AgentFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a001_agent::request::SetAgentStatusRequest;
use contracts::domain::a001_agent::response::AgentResponse;
use contracts::shared::api::ApiMessage;
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;
use uuid::Uuid;

/// Query string for the agent list. Only the *applied* filter set ever
/// reaches this function.
pub fn list_query(filters: &AgentFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    pairs.push_text("search", &filters.search);
    pairs.push_opt("status", filters.status.map(|s| s.as_str()));
    pairs.push_text("region", &filters.region);
    pairs.into_query_string()
}

pub async fn fetch_agents(
    filters: &AgentFilters,
    page: PageRequest,
) -> Result<Paged<AgentResponse>, String> {
    let url = api_url(&format!("/api/agents{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch agents: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_agent(id: Uuid) -> Result<AgentResponse, String> {
    let url = api_url(&format!("/api/agents/{}", id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch agent: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn set_agent_status(
    id: Uuid,
    dto: SetAgentStatusRequest,
) -> Result<ApiMessage, String> {
    let url = api_url(&format!("/api/agents/{}/status", id));
    let response = Request::post(&url)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update agent status: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::AgentStatus;

    #[test]
    fn test_list_query_defaults() {
        let q = list_query(&AgentFilters::default(), PageRequest::default());
        assert_eq!(q, "?pageNumber=1&pageSize=10");
    }

    #[test]
    fn test_list_query_with_filters() {
        let filters = AgentFilters {
            search: "smith".into(),
            status: Some(AgentStatus::Suspended),
            region: "North".into(),
        };
        let q = list_query(&filters, PageRequest::new(3, 25));
        assert_eq!(
            q,
            "?pageNumber=3&pageSize=25&search=smith&status=Suspended&region=North"
        );
    }
}
