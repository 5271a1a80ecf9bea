use super::ui::list::state::MeterFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a006_meter::response::{MeterResponse, TestTokenResponse};
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;
use uuid::Uuid;

pub fn list_query(filters: &MeterFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    pairs.push_text("search", &filters.search);
    if filters.active_only {
        pairs.push("isActive", "true");
    }
    pairs.into_query_string()
}

pub async fn fetch_meters(
    filters: &MeterFilters,
    page: PageRequest,
) -> Result<Paged<MeterResponse>, String> {
    let url = api_url(&format!("/api/meters{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch meters: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the backend to mint a test token for one meter.
pub async fn generate_test_token(meter_id: Uuid) -> Result<TestTokenResponse, String> {
    let url = api_url(&format!("/api/meters/{}/test_token", meter_id));
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to generate test token: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query() {
        let filters = MeterFilters {
            search: "SN-009".into(),
            active_only: true,
        };
        assert_eq!(
            list_query(&filters, PageRequest::default()),
            "?pageNumber=1&pageSize=10&search=SN-009&isActive=true"
        );
    }
}
