use super::ui::list::state::ChangeRequestFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a007_change_request::request::DecideChangeRequest;
use contracts::domain::a007_change_request::response::ChangeRequestResponse;
use contracts::shared::api::ApiMessage;
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;
use uuid::Uuid;

pub fn list_query(filters: &ChangeRequestFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    pairs.push_opt("status", filters.status.map(|s| s.as_str()));
    pairs.into_query_string()
}

pub async fn fetch_change_requests(
    filters: &ChangeRequestFilters,
    page: PageRequest,
) -> Result<Paged<ChangeRequestResponse>, String> {
    let url = api_url(&format!("/api/change_requests{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch change requests: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn approve_change_request(
    id: Uuid,
    dto: DecideChangeRequest,
) -> Result<ApiMessage, String> {
    decide(id, "approve", dto).await
}

pub async fn decline_change_request(
    id: Uuid,
    dto: DecideChangeRequest,
) -> Result<ApiMessage, String> {
    decide(id, "decline", dto).await
}

async fn decide(id: Uuid, action: &str, dto: DecideChangeRequest) -> Result<ApiMessage, String> {
    let url = api_url(&format!("/api/change_requests/{}/{}", id, action));
    let response = Request::post(&url)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to {} change request: {}", action, response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ChangeRequestStatus;

    #[test]
    fn test_default_view_is_the_pending_queue() {
        let q = list_query(&ChangeRequestFilters::default(), PageRequest::default());
        assert_eq!(q, "?pageNumber=1&pageSize=10&status=Pending");
    }

    #[test]
    fn test_all_statuses() {
        let filters = ChangeRequestFilters { status: None };
        assert_eq!(
            list_query(&filters, PageRequest::default()),
            "?pageNumber=1&pageSize=10"
        );
        let filters = ChangeRequestFilters {
            status: Some(ChangeRequestStatus::Declined),
        };
        assert!(list_query(&filters, PageRequest::default()).ends_with("status=Declined"));
    }
}
