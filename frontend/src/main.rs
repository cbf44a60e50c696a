use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod config;
mod controller;
mod game_page;
mod home;
mod pick_panel;
mod styles;

use crate::{game_page::GamePage, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/games/:id")] Game { id: String },
}

#[function_component(Navigation)]
fn navigation() -> Html {
    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center">
                <Link<Route> to={Route::Home} classes={classes!(
                    "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
                    "transition-colors", "duration-200", "ease-in-out",
                    "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400"
                )}>
                    {"Game Picks"}
                </Link<Route>>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Navigation />
                <div class="pt-16">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Game { id } => html! { <GamePage {id} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
