use yew::prelude::*;
use yew_router::prelude::*;

mod assets;
mod celebrate;
mod components;
mod config;
mod confetti;
mod evade;
mod garden;
mod pages;
mod state;

use pages::proposal::ProposalPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <ProposalPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    gloo_console::log!("valentine-garden starting");
    yew::Renderer::<App>::new().render();
}
