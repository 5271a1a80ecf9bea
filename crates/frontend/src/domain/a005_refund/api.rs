use super::ui::list::state::RefundFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a005_refund::response::RefundResponse;
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;

pub fn list_query(filters: &RefundFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    pairs.push_opt("status", filters.status.map(|s| s.as_str()));
    pairs.push_text("dateFrom", &filters.date_from);
    pairs.push_text("dateTo", &filters.date_to);
    pairs.into_query_string()
}

pub async fn fetch_refunds(
    filters: &RefundFilters,
    page: PageRequest,
) -> Result<Paged<RefundResponse>, String> {
    let url = api_url(&format!("/api/refunds{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch refunds: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::RefundStatus;

    #[test]
    fn test_list_query_date_range() {
        let filters = RefundFilters {
            status: Some(RefundStatus::Paid),
            date_from: "2026-07-01".into(),
            date_to: "2026-07-31".into(),
        };
        assert_eq!(
            list_query(&filters, PageRequest::default()),
            "?pageNumber=1&pageSize=10&status=Paid&dateFrom=2026-07-01&dateTo=2026-07-31"
        );
    }
}
