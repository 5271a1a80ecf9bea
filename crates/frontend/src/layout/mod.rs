pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use tabs::Tabs;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |        Tabs (content)        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <div class="app-main">
                    <Tabs />
                </div>
            </div>
        </div>
    }
}
