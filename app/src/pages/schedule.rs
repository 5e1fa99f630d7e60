// src/pages/schedule.rs
use chrono::NaiveDate;
use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::calendar::{build_grid, DateKey, YearMonth, WEEKDAY_LABELS};
use crate::pages::home::{heading, layer_style};
use crate::scroll::Section;
use crate::studio::Studio;

#[derive(Properties, PartialEq)]
pub struct ScheduleSectionProps {
    pub studio: Studio,
    pub offset: f64,
    pub month: YearMonth,
    pub selected: Option<NaiveDate>,
    pub on_month: Callback<YearMonth>,
    pub on_select: Callback<NaiveDate>,
}

#[function_component(ScheduleSection)]
pub fn schedule_section(props: &ScheduleSectionProps) -> Html {
    let slot = use_state(|| None::<String>);

    let studio = &props.studio;
    let cells = build_grid(props.month, |k| studio.has_schedule(k), props.selected);
    let selected_key = props.selected.map(DateKey::of);
    let entries = selected_key
        .as_ref()
        .map(|k| studio.schedule_for(k))
        .unwrap_or(&[]);

    let on_prev = {
        let cb = props.on_month.clone();
        let month = props.month;
        Callback::from(move |_: MouseEvent| cb.emit(month.prev()))
    };
    let on_next = {
        let cb = props.on_month.clone();
        let month = props.month;
        Callback::from(move |_: MouseEvent| cb.emit(month.next()))
    };

    let on_request = {
        let slot = slot.clone();
        let key = selected_key.clone();
        Callback::from(move |_: MouseEvent| {
            log!(format!(
                "booking request: date={} slot={}",
                key.as_ref().map(DateKey::as_str).unwrap_or("-"),
                slot.as_deref().unwrap_or("-")
            ));
        })
    };

    html! {
        <section id={Section::Schedule.id()} class="layer" style={layer_style(props.offset, 30, "#EBE9E4")}>
            <div class="container">
                { heading("schedule", "Book your perfect class time.") }
                <div class="columns">
                    <div class="card tall">
                        <div class="month-bar">
                            <button class="ghost" onclick={on_prev}>{ "‹" }</button>
                            <h4>{ props.month.title() }</h4>
                            <button class="ghost" onclick={on_next}>{ "›" }</button>
                        </div>
                        <div class="grid7 weekdays">
                            { for WEEKDAY_LABELS.iter().map(|d| html! { <div>{ *d }</div> }) }
                        </div>
                        <div class="grid7">
                            { for cells.iter().map(|cell| match (cell.day, cell.date) {
                                (Some(day), Some(date)) => {
                                    let on_select = props.on_select.clone();
                                    let class = classes!(
                                        "day",
                                        cell.is_selected.then_some("day-selected"),
                                        cell.has_entries.then_some("day-busy"),
                                    );
                                    html! {
                                        <button class={class} onclick={Callback::from(move |_: MouseEvent| on_select.emit(date))}>
                                            { day.to_string() }
                                        </button>
                                    }
                                }
                                _ => html! { <div class="day-blank"></div> },
                            }) }
                        </div>
                    </div>

                    <div class="card tall">
                        <h3>{ "Booking Details" }</h3>
                        {
                            match &selected_key {
                                None => html! { <p class="muted">{ "Pick a date to see its classes." }</p> },
                                Some(key) if entries.is_empty() => html! {
                                    <p class="muted">{ format!("No classes scheduled on {key}.") }</p>
                                },
                                Some(key) => html! {
                                    <>
                                        <div class="muted">{ key.to_string() }</div>
                                        <ul class="entries">
                                            { for entries.iter().map(|e| html! {
                                                <li>
                                                    <strong>{ e.time.clone() }</strong>
                                                    { format!(" {} with {}", e.class_name, e.instructor) }
                                                    <span class="spots">{ format!("{} spots", e.spots) }</span>
                                                </li>
                                            }) }
                                        </ul>
                                    </>
                                },
                            }
                        }

                        <div class="label">{ "Time" }</div>
                        <div class="slots">
                            { for studio.time_slots().iter().map(|t| {
                                let slot = slot.clone();
                                let value = t.clone();
                                let active = slot.as_deref() == Some(t.as_str());
                                html! {
                                    <button
                                        class={classes!("slot", active.then_some("slot-active"))}
                                        onclick={Callback::from(move |_: MouseEvent| slot.set(Some(value.clone())))}
                                    >
                                        { t.clone() }
                                    </button>
                                }
                            }) }
                        </div>

                        <Link<Route> to={Route::SignIn} classes={classes!("btn", "block")}>
                            <span onclick={on_request}>{ "Request to Book" }</span>
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
