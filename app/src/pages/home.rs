// src/pages/home.rs
//
// Landing page. Four full-screen layers sit fixed on top of the hero and
// slide up as the page scrolls; the spacer divs give the document its
// 4 × viewport scroll height.

use chrono::NaiveDate;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{use_studio, Route};
use crate::calendar::YearMonth;
use crate::carousel::{next_slide, prev_slide, track_offset};
use crate::hooks::{today, use_hash_navigation, use_scroll_frame};
use crate::pages::nav::NavBar;
use crate::pages::schedule::ScheduleSection;
use crate::scroll::Section;
use crate::studio::Studio;

const PAPER: &str = "#EBE9E4";
const INK: &str = "#2C2C2C";

pub fn layer_style(offset: f64, z: u32, background: &str) -> String {
    format!(
        "transform: translateY({offset:.3}vh); z-index: {z}; background-color: {background}; transition: transform 0.1s ease-out;"
    )
}

#[function_component(Home)]
pub fn home() -> Html {
    match use_studio() {
        Some(studio) => html! { <Landing {studio} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct StudioProps {
    pub studio: Studio,
}

#[function_component(Landing)]
fn landing(props: &StudioProps) -> Html {
    let frame = use_scroll_frame();
    use_hash_navigation();

    let slide = use_state(|| 0usize);
    let month = use_state(|| YearMonth::of(today()));
    let selected = use_state(|| None::<NaiveDate>);

    let cards = props.studio.classes().len();
    let on_prev = {
        let slide = slide.clone();
        Callback::from(move |_: MouseEvent| slide.set(prev_slide(*slide, cards)))
    };
    let on_next = {
        let slide = slide.clone();
        Callback::from(move |_: MouseEvent| slide.set(next_slide(*slide, cards)))
    };
    let on_month = {
        let month = month.clone();
        Callback::from(move |m: YearMonth| month.set(m))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |d: NaiveDate| selected.set(Some(d)))
    };

    html! {
        <div class="landing">
            <NavBar sticky=true visible={frame.show_nav} />

            <div class="screen"></div>

            <main class="layer hero" style={layer_style(0.0, 10, PAPER)}>
                <NavBar />
                <img class="logo" src="/pics/logo.png" alt="Body Lab Logo" />
                <div class="hero-images">
                    <img src="/fitness-workout-gym-equipment.jpg" alt="Fitness Training" />
                    <img src="/yoga-meditation-wellness-studio.jpg" alt="Wellness Studio" />
                </div>
            </main>

            <section id={Section::Classes.id()} class="layer" style={layer_style(frame.offsets.classes, 20, PAPER)}>
                <div class="container">
                    { heading("our classes", "Transform your body, elevate your energy.") }
                    <div class="carousel">
                        <button class="carousel-arrow left" onclick={on_prev}>{ "‹" }</button>
                        <button class="carousel-arrow right" onclick={on_next}>{ "›" }</button>
                        <div class="carousel-window">
                            <div class="carousel-track" style={format!("transform: translateX(-{}%);", track_offset(*slide))}>
                                { for props.studio.classes().iter().map(|c| html! {
                                    <div class="class-card">
                                        <div class="class-image"><img src={c.image.clone()} alt={c.name.clone()} /></div>
                                        <h3>{ c.name.clone() }</h3>
                                        <p>{ c.price.clone() }</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <ScheduleSection
                studio={props.studio.clone()}
                offset={frame.offsets.schedule}
                month={*month}
                selected={*selected}
                {on_month}
                {on_select}
            />

            <section id={Section::Pricing.id()} class="layer" style={layer_style(frame.offsets.pricing, 40, PAPER)}>
                <div class="container">
                    { heading("packages", "Choose the perfect plan for your wellness journey.") }
                    <div class="cards">
                        { for props.studio.packages().iter().map(|p| html! {
                            <div class={classes!("card", "package", p.highlighted.then_some("package-featured"))}>
                                if p.highlighted {
                                    <div class="badge">{ "Most Popular" }</div>
                                }
                                <h3>{ p.name.clone() }</h3>
                                <div class="price">{ p.price.clone() }</div>
                                <ul>
                                    { for p.perks.iter().map(|perk| html! { <li>{ perk.clone() }</li> }) }
                                </ul>
                                <Link<Route> to={Route::SignIn} classes={classes!("btn", "block")}>{ "Choose Plan" }</Link<Route>>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Footer.id()} class="layer footer" style={layer_style(frame.offsets.footer, 50, INK)}>
                <div class="container columns">
                    <div>
                        <h3>{ "Services" }</h3>
                        { for ["Mat Pilates", "Reformer Classes", "Private Sessions", "Group Classes"]
                            .iter()
                            .map(|s| html! { <a href={format!("/#{}", Section::Classes.id())}>{ *s }</a> }) }
                    </div>
                    <div>
                        <h3>{ "Body Lab" }</h3>
                        <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                        <Link<Route> to={Route::Profile}>{ "Profile" }</Link<Route>>
                        <Link<Route> to={Route::SignIn}>{ "Sign In" }</Link<Route>>
                    </div>
                    <div>
                        <h3>{ "10% off? Subscribe!" }</h3>
                        <p>
                            { "Join our mailing list and get 10% off your first class, plus stay updated on new classes, promotions, events and wellness tips." }
                        </p>
                        <input type="email" class="underline-input" placeholder="Enter your email here" />
                        <label class="check">
                            <input type="checkbox" id="newsletter" />
                            { "Yes, I want to be part of this mailing list." }
                        </label>
                    </div>
                </div>
            </section>

            <div class="screen"></div>
            <div class="screen"></div>
            <div class="screen"></div>
            <div class="screen"></div>
        </div>
    }
}

pub fn heading(title: &str, tagline: &str) -> Html {
    html! {
        <div class="section-heading">
            <h2 class="display">{ title }</h2>
            <p class="tagline">{ tagline }</p>
        </div>
    }
}
