// src/app.rs
use gloo::console::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{home::Home, profile::Profile, signin::SignIn};
use crate::studio::{MockStudio, Studio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[at("/signin")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Profile => html! { <Profile /> },
        Route::SignIn => html! { <SignIn /> },
        Route::NotFound => html! {
            <div class="page center">
                <h1 class="display">{ "page not found" }</h1>
                <Link<Route> to={Route::Home} classes={classes!("btn")}>{ "Back to Home" }</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let studio = use_state(|| MockStudio::builtin().map(Studio::new));

    match &*studio {
        Ok(studio) => html! {
            <ContextProvider<Studio> context={studio.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Studio>>
        },
        Err(e) => {
            error!(format!("studio data failed to load: {e}"));
            html! {
                <div class="page center">
                    <span class="code">{ format!("ERROR: {e}") }</span>
                </div>
            }
        }
    }
}

/// Studio data from context. `App` always provides it above the router.
#[hook]
pub fn use_studio() -> Option<Studio> {
    use_context::<Studio>()
}
