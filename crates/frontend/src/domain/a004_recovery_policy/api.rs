use super::ui::list::state::RecoveryPolicyFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a004_recovery_policy::response::RecoveryPolicyResponse;
use contracts::shared::api::ApiMessage;
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;

pub fn list_query(filters: &RecoveryPolicyFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    if filters.paused_only {
        pairs.push("isPaused", "true");
    }
    pairs.into_query_string()
}

pub async fn fetch_policies(
    filters: &RecoveryPolicyFilters,
    page: PageRequest,
) -> Result<Paged<RecoveryPolicyResponse>, String> {
    let url = api_url(&format!("/api/recovery_policies{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch recovery policies: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn pause_policy(id: i64) -> Result<ApiMessage, String> {
    policy_action(id, "pause").await
}

pub async fn resume_policy(id: i64) -> Result<ApiMessage, String> {
    policy_action(id, "resume").await
}

async fn policy_action(id: i64, action: &str) -> Result<ApiMessage, String> {
    let url = api_url(&format!("/api/recovery_policies/{}/{}", id, action));
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to {} policy: {}", action, response.status()));
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
    fn test_paused_only_filter() {
        let filters = RecoveryPolicyFilters { paused_only: true };
        assert_eq!(
            list_query(&filters, PageRequest::default()),
            "?pageNumber=1&pageSize=10&isPaused=true"
        );
        assert_eq!(
            list_query(&RecoveryPolicyFilters::default(), PageRequest::default()),
            "?pageNumber=1&pageSize=10"
        );
    }
}
