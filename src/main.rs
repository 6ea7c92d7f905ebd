use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod layout;
mod motion;
mod theme;
mod components {
    pub mod header;
    pub mod hero;
    pub mod features;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use layout::PageShell;
use pages::home::Home;
use theme::{ThemePreference, ThemeStore};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub initial_theme: ThemePreference,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <PageShell initial_theme={props.initial_theme}>
                <Switch<Route> render={switch} />
            </PageShell>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // Resolve the theme and mark <html> before the first render
    let initial_theme = ThemeStore::browser().initialize();

    info!("Starting application with {} theme", initial_theme);
    yew::Renderer::<App>::with_props(AppProps { initial_theme }).render();
}
