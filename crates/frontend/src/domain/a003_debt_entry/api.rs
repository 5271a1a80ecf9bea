use super::ui::list::state::DebtEntryFilters;
use crate::shared::api_utils::{api_url, QueryPairs};
use contracts::domain::a003_debt_entry::response::DebtEntryResponse;
use contracts::shared::paging::{PageRequest, Paged};
use gloo_net::http::Request;

pub fn list_query(filters: &DebtEntryFilters, page: PageRequest) -> String {
    let mut pairs = QueryPairs::for_page(page);
    pairs.push_text("account", &filters.account);
    pairs.push_opt("status", filters.status.map(|s| s.as_str()));
    pairs.push_opt("billingPeriodId", filters.billing_period_id.as_deref());
    pairs.into_query_string()
}

pub async fn fetch_debt_entries(
    filters: &DebtEntryFilters,
    page: PageRequest,
) -> Result<Paged<DebtEntryResponse>, String> {
    let url = api_url(&format!("/api/debt_entries{}", list_query(filters, page)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch debt entries: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter_form::FilterForm;
    use contracts::enums::DebtEntryStatus;

    #[test]
    fn test_applied_status_reaches_the_query() {
        let mut form: FilterForm<DebtEntryFilters> = FilterForm::new();
        form.set_and_apply(|f| f.status = Some(DebtEntryStatus::Approved));
        let q = list_query(form.applied(), PageRequest::default());
        assert_eq!(q, "?pageNumber=1&pageSize=10&status=Approved");
    }

    #[test]
    fn test_unapplied_edits_never_reach_the_query() {
        let mut form: FilterForm<DebtEntryFilters> = FilterForm::new();
        form.set_and_apply(|f| f.status = Some(DebtEntryStatus::Approved));
        // The user types into the account box but does not hit Apply.
        form.edit(|f| f.account = "ACC-17".into());
        let q = list_query(form.applied(), PageRequest::default());
        assert!(!q.contains("account"));
        assert!(q.contains("status=Approved"));
    }

    #[test]
    fn test_reset_issues_an_unfiltered_query() {
        let mut form: FilterForm<DebtEntryFilters> = FilterForm::new();
        form.set_and_apply(|f| {
            f.status = Some(DebtEntryStatus::Approved);
            f.billing_period_id = Some("2026-06".into());
        });
        form.reset();
        // After reset the request must carry no filter keys at all.
        let q = list_query(form.applied(), PageRequest::default());
        assert_eq!(q, "?pageNumber=1&pageSize=10");
        assert!(!q.contains("status"));
    }

    #[test]
    fn test_period_filter() {
        let filters = DebtEntryFilters {
            account: String::new(),
            status: None,
            billing_period_id: Some("2026-06".into()),
        };
        let q = list_query(&filters, PageRequest::new(2, 25));
        assert_eq!(q, "?pageNumber=2&pageSize=25&billingPeriodId=2026-06");
    }
}
