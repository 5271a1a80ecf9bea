use crate::shared::icons::icon;
use contracts::shared::paging::PageMeta;
use leptos::prelude::*;

/// Reusable pagination strip: first/prev, "page / pages (count)", next/last,
/// page-size select. Pages are 1-based, matching the wire contract.
#[component]
pub fn PaginationControls(
    #[prop(into)] meta: Signal<PageMeta>,
    /// Callback when the page changes (1-based page number).
    on_page_change: Callback<usize>,
    /// Callback when the page size changes.
    on_page_size_change: Callback<usize>,
    /// Available page size options (defaults to [10, 25, 50, 100]).
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !meta.get().has_previous
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let m = meta.get();
                    if m.has_previous {
                        on_page_change.run(m.current_page - 1);
                    }
                }
                disabled=move || !meta.get().has_previous
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let m = meta.get();
                    format!("{} / {} ({})", m.current_page, m.total_pages.max(1), m.total_count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let m = meta.get();
                    if m.has_next {
                        on_page_change.run(m.current_page + 1);
                    }
                }
                disabled=move || !meta.get().has_next
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let m = meta.get();
                    if m.total_pages > 0 {
                        on_page_change.run(m.total_pages);
                    }
                }
                disabled=move || !meta.get().has_next
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(10);
                    on_page_size_change.run(val);
                }
                prop:value=move || meta.get().page_size.to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || meta.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
