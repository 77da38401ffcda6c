use gloo_console::{log, warn};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod models {
    pub mod catalog;
}
pub mod content {
    pub mod projects;
    pub mod services;
}
pub mod state {
    pub mod contact;
    pub mod gallery;
    pub mod lightbox;
}
pub mod utils {
    pub mod window;
}
mod components {
    pub mod about;
    pub mod catalogue;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod legal;
    pub mod nav;
    pub mod realisations;
    pub mod scroll_top;
    pub mod services;
}
mod pages {
    pub mod home;
}

use content::projects::PROJECTS;
use content::services::SERVICES;
use models::catalog::dangling_projects;
use pages::home::Home;

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
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    use_effect_with_deps(
        move |_| {
            log!("NES site started, contact requests go to", config::get_contact_email());
            for project in dangling_projects(PROJECTS, SERVICES) {
                warn!(format!(
                    "Project {} ({}) points at unknown category '{}'",
                    project.id, project.title, project.category
                ));
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
