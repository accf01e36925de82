use yew::prelude::*;
use yew_router::prelude::*;

use super::{CreateLoad, LoadDetail, LoadsTable, Settings, Sidebar};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/loads/create")]
    CreateLoad,
    #[at("/loads/:id")]
    LoadDetail { id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LoadsTable /> },
        Route::LoadDetail { id } => html! { <LoadDetail {id} /> },
        Route::CreateLoad => html! { <CreateLoad /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => html! { <div class="not-found">{"Page not found"}</div> },
    }
}

/// Shell: persistent sidebar plus the routed content region.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
