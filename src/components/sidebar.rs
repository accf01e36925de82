use yew::prelude::*;
use yew_router::prelude::*;

use super::app::Route;

/// Persistent side menu. Purely structural: highlights the active route
/// and navigates, nothing else.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    let item = |label: &str, icon: &str, target: Route| {
        let active = current.as_ref() == Some(&target);
        let classes = classes!("nav-item", active.then_some("nav-item-active"));
        html! {
            <Link<Route> to={target} {classes}>
                <span class="nav-icon">{ icon }</span>
                <span class="nav-label">{ label }</span>
            </Link<Route>>
        }
    };

    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">{"Freightboard"}</div>
            <div class="sidebar-menu">
                { item("Home", "🏠", Route::Home) }
                { item("Settings", "⚙️", Route::Settings) }
            </div>
        </nav>
    }
}
