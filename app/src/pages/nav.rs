// src/pages/nav.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{scroll_to_section, use_profile_picture};
use crate::scroll::Section;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    /// Sticky bar pinned above every section; otherwise the hero's own nav.
    #[prop_or_default]
    pub sticky: bool,
    #[prop_or(true)]
    pub visible: bool,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let picture = use_profile_picture();

    let go = |section: Section| Callback::from(move |_: MouseEvent| scroll_to_section(section));
    let label = |s: &str| if props.sticky { s.to_lowercase() } else { s.to_uppercase() };

    let style = if props.sticky {
        format!(
            "transform: translateY({}); transition: transform 0.3s;",
            if props.visible { "0" } else { "-100%" }
        )
    } else {
        String::new()
    };

    html! {
        <nav class={classes!("nav", props.sticky.then_some("nav-sticky"))} style={style}>
            <div class="nav-links">
                <button onclick={go(Section::Pricing)}>{ label("packages") }</button>
                <button onclick={go(Section::Classes)}>{ label("classes") }</button>
                <button onclick={go(Section::Schedule)}>{ label("schedule") }</button>
                <button onclick={go(Section::Schedule)}>{ label("book now") }</button>
                <Link<Route> to={Route::SignIn}>{ label("sign in") }</Link<Route>>
            </div>
            <Link<Route> to={Route::Profile} classes={classes!("nav-profile")}>
                { avatar(picture.as_deref(), "avatar-sm") }
            </Link<Route>>
        </nav>
    }
}

/// Profile picture or a placeholder glyph.
pub fn avatar(picture: Option<&str>, class: &'static str) -> Html {
    match picture {
        Some(src) => html! { <img class={classes!("avatar", class)} src={src.to_string()} alt="Profile" /> },
        None => html! { <span class={classes!("avatar", "avatar-empty", class)}>{ "👤" }</span> },
    }
}
