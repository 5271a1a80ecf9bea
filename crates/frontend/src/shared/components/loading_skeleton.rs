use leptos::prelude::*;

/// Placeholder rows shown while a list loads for the first time.
///
/// Subsequent refreshes keep the stale table visible instead.
#[component]
pub fn LoadingSkeleton(
    /// Number of placeholder rows (default 8).
    #[prop(optional)]
    rows: Option<usize>,
) -> impl IntoView {
    let rows = rows.unwrap_or(8);

    view! {
        <div class="skeleton" aria-busy="true">
            {(0..rows)
                .map(|i| {
                    // Stagger widths a little so the block does not look like a barcode.
                    let width = 70 + (i * 7) % 25;
                    view! {
                        <div class="skeleton__row" style=format!("width: {width}%;")></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
