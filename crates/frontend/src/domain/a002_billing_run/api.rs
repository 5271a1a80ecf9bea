use super::ui::list::state::BillingRunFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a002_billing_run::response::BillingRunResponse;
use contracts::shared::api::{ApiMessage, ArtifactRef};
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;
use uuid::Uuid;

pub fn list_query(filters: &BillingRunFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    pairs.push_text("billingPeriod", &filters.billing_period);
    pairs.push_opt("status", filters.status.map(|s| s.as_str()));
    pairs.into_query_string()
}

pub async fn fetch_billing_runs(
    filters: &BillingRunFilters,
    page: PageRequest,
) -> Result<Paged<BillingRunResponse>, String> {
    let url = api_url(&format!("/api/billing_runs{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch billing runs: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Re-queue a failed run. The backend restarts rendering from the last
/// good bill.
pub async fn retry_run(id: Uuid) -> Result<ApiMessage, String> {
    let url = api_url(&format!("/api/billing_runs/{}/retry", id));
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to retry billing run: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the backend for a short-lived download link to the print artifact.
pub async fn export_run(id: Uuid) -> Result<ArtifactRef, String> {
    let url = api_url(&format!("/api/billing_runs/{}/export", id));
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to export billing run: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::BillingRunStatus;

    #[test]
    fn test_list_query_skips_blank_period() {
        let filters = BillingRunFilters {
            billing_period: "  ".into(),
            status: None,
        };
        assert_eq!(
            list_query(&filters, PageRequest::default()),
            "?pageNumber=1&pageSize=10"
        );
    }

    #[test]
    fn test_list_query_with_status() {
        let filters = BillingRunFilters {
            billing_period: "2026-07".into(),
            status: Some(BillingRunStatus::Failed),
        };
        assert_eq!(
            list_query(&filters, PageRequest::new(2, 10)),
            "?pageNumber=2&pageSize=10&billingPeriod=2026-07&status=Failed"
        );
    }
}
