// src/pages/profile.rs
use gloo::console::{error, log, warn};
use gloo::file::callbacks::{read_as_bytes, FileReader};
use gloo::file::File;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::account::Account;
use crate::app::{use_studio, Route};
use crate::avatar::{avatars, size_label, UploadError};
use crate::hooks::use_profile_picture;
use crate::pages::home::StudioProps;
use crate::pages::nav::avatar;
use crate::scroll::Section;
use crate::studio::{BookingStatus, Transaction, TransactionStatus};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Bookings,
    Transactions,
}

const TABS: [Tab; 3] = [Tab::Overview, Tab::Bookings, Tab::Transactions];

fn tab_label(t: Tab) -> &'static str {
    match t {
        Tab::Overview => "Overview",
        Tab::Bookings => "Bookings",
        Tab::Transactions => "Transactions",
    }
}

fn booking_badge(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Completed => "badge-green",
        BookingStatus::Cancelled => "badge-red",
        BookingStatus::Upcoming => "badge-blue",
    }
}

fn transaction_badge(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "badge-green",
        TransactionStatus::Processed => "badge-yellow",
    }
}

#[function_component(Profile)]
pub fn profile() -> Html {
    match use_studio() {
        Some(studio) => html! { <Dashboard {studio} /> },
        None => html! {},
    }
}

#[function_component(Dashboard)]
fn dashboard(props: &StudioProps) -> Html {
    let studio = &props.studio;
    let tab = use_state(|| Tab::Overview);
    let account = use_state(|| Account::from_studio(&**studio));
    let pending_cancel = use_state(|| None::<String>);

    let picture = use_profile_picture();
    let upload_msg = use_state(|| None::<String>);
    // Keep FileReader alive until its callback fires
    let reader = use_state(|| None::<FileReader>);

    let on_upload = {
        let upload_msg = upload_msg.clone();
        let reader = reader.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else { return };
            let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
            input.set_value("");

            let file = File::from(file);
            let store = avatars();
            let mime = file.raw_mime_type();
            if let Err(err) = store.check(&mime, file.size()) {
                warn!(format!("rejected {}: {err}", file.name()));
                upload_msg.set(Some(err.to_string()));
                return;
            }

            let name = file.name();
            let upload_msg = upload_msg.clone();
            let task = read_as_bytes(&file, move |res| {
                let outcome = res
                    .map_err(|e| UploadError::Read {
                        name: name.clone(),
                        reason: e.to_string(),
                    })
                    .and_then(|bytes| store.upload(&mime, &bytes));
                match outcome {
                    Ok(_) => {
                        log!(format!("Profile picture uploaded: {name}"));
                        upload_msg.set(None);
                    }
                    Err(err) => {
                        error!(format!("profile picture upload failed: {err}"));
                        upload_msg.set(Some(err.to_string()));
                    }
                }
            });
            reader.set(Some(task));
        })
    };

    let on_remove = {
        let upload_msg = upload_msg.clone();
        Callback::from(move |_: MouseEvent| match avatars().remove() {
            Ok(()) => upload_msg.set(None),
            Err(err) => {
                error!(format!("could not remove profile picture: {err}"));
                upload_msg.set(Some(err.to_string()));
            }
        })
    };

    let on_confirm_cancel = {
        let account = account.clone();
        let pending_cancel = pending_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = (*pending_cancel).clone() {
                let mut next = (*account).clone();
                match next.cancel(&id) {
                    Ok(refund) => {
                        log!(format!("cancelled {id}, refunded {refund} credit(s)"));
                        account.set(next);
                    }
                    Err(err) => warn!(err.to_string()),
                }
            }
            pending_cancel.set(None);
        })
    };

    let on_keep = {
        let pending_cancel = pending_cancel.clone();
        Callback::from(move |_: MouseEvent| pending_cancel.set(None))
    };

    let ask_cancel = |id: &str| {
        let pending_cancel = pending_cancel.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| pending_cancel.set(Some(id.clone())))
    };

    let user = studio.profile();
    let transactions = studio.transactions();

    let body = match *tab {
        Tab::Overview => html! {
            <div class="stack">
                <div class="card">
                    <h2>{ "Account Details" }</h2>

                    <label class="label">{ "Profile Picture" }</label>
                    <div class="row">
                        <div class="avatar-frame">
                            { avatar(picture.as_deref(), "avatar-lg") }
                            if picture.is_some() {
                                <button class="avatar-remove" title="Remove" onclick={on_remove}>{ "×" }</button>
                            }
                        </div>
                        <div>
                            <label class="btn">
                                { if picture.is_some() { "Change Picture" } else { "Upload Picture" } }
                                <input type="file" accept="image/*" class="hidden" onchange={on_upload} />
                            </label>
                            <p class="small">{ format!("Max {}, JPG/PNG", size_label(&avatars().policy().max_bytes)) }</p>
                            if let Some(msg) = (*upload_msg).clone() {
                                <p class="small error">{ msg }</p>
                            }
                        </div>
                    </div>

                    <div class="details">
                        { detail("Full Name", &user.name) }
                        { detail("Email", &user.email) }
                        { detail("Phone Number", &user.phone) }
                        { detail("Member Since", &user.member_since) }
                    </div>
                </div>

                <div class="card">
                    <h2>{ "Remaining Credits" }</h2>
                    <div class="row spread">
                        <div>
                            <div class="big">{ account.remaining.to_string() }</div>
                            <div class="small">{ "Credits Remaining" }</div>
                        </div>
                        <div>
                            <div class="small">{ "Total Credits" }</div>
                            <div class="big">{ account.total.to_string() }</div>
                        </div>
                    </div>
                    <div class="bar">
                        <div class="bar-fill" style={format!("width: {:.1}%;", account.remaining_ratio() * 100.0)}></div>
                    </div>
                    <div class="row spread small">
                        <span>{ format!("Used: {}", account.used()) }</span>
                        <span>{ format!("Remaining: {}", account.remaining) }</span>
                    </div>
                </div>

                <div class="cards">
                    { stat(account.bookings.len().to_string(), "Total Bookings") }
                    { stat(transactions.len().to_string(), "Transactions") }
                    { stat(user.plan.clone(), "Current Plan") }
                </div>
            </div>
        },
        Tab::Bookings => html! {
            <div class="card">
                <div class="row spread">
                    <h2>{ "Booking History" }</h2>
                    <a class="btn" href={format!("/#{}", Section::Schedule.id())}>{ "Book" }</a>
                </div>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Booking ID" }</th>
                            <th>{ "Date & Time" }</th>
                            <th>{ "Class" }</th>
                            <th>{ "Instructor" }</th>
                            <th>{ "Credits" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for account.bookings.iter().map(|b| html! {
                            <tr>
                                <td>{ b.id.clone() }</td>
                                <td>{ format!("{} {}", b.date, b.time) }</td>
                                <td>{ b.class_name.clone() }</td>
                                <td>{ b.instructor.clone() }</td>
                                <td>{ b.credits.to_string() }</td>
                                <td><span class={classes!("badge", booking_badge(b.status))}>{ b.status.to_string() }</span></td>
                                <td>
                                    if b.status == BookingStatus::Upcoming {
                                        <button class="btn-danger" onclick={ask_cancel(&b.id)}>{ "Cancel" }</button>
                                    }
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        },
        Tab::Transactions => html! {
            <div class="card">
                <h2>{ "Transaction History" }</h2>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Transaction ID" }</th>
                            <th>{ "Date" }</th>
                            <th>{ "Type" }</th>
                            <th>{ "Description" }</th>
                            <th>{ "Amount" }</th>
                            <th>{ "Status" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for transactions.iter().map(transaction_row) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <div class="page">
            <nav class="topbar">
                <Link<Route> to={Route::Home}>{ "‹ Back to Home" }</Link<Route>>
                <img class="logo-sm" src="/pics/logo.png" alt="Body Lab Logo" />
            </nav>

            <div class="container">
                <h1>{ "Profile Dashboard" }</h1>
                <p class="muted">{ "Manage your account and view your activity" }</p>

                <div class="tabs">
                    { for TABS.iter().map(|t| {
                        let tab = tab.clone();
                        let t = *t;
                        html! {
                            <button
                                class={classes!("tab", (*tab == t).then_some("tab-active"))}
                                onclick={Callback::from(move |_: MouseEvent| tab.set(t))}
                            >
                                { tab_label(t) }
                            </button>
                        }
                    }) }
                </div>

                { body }
            </div>

            if let Some(booking) = pending_cancel.as_deref().and_then(|id| account.find(id)) {
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>{ "Cancel Booking" }</h3>
                        <p>{ format!("{} on {} at {}", booking.class_name, booking.date, booking.time) }</p>
                        <p class="small">{ "Are you sure you want to cancel this booking? Your credits will be refunded." }</p>
                        <div class="row">
                            <button class="btn-danger" onclick={on_confirm_cancel}>{ "Cancel" }</button>
                            <button class="ghost" onclick={on_keep}>{ "Keep" }</button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

fn detail(label: &str, value: &str) -> Html {
    html! {
        <div>
            <label class="label">{ label }</label>
            <p>{ value }</p>
        </div>
    }
}

fn stat(value: String, caption: &str) -> Html {
    html! {
        <div class="card stat">
            <div class="big">{ value }</div>
            <div class="small">{ caption }</div>
        </div>
    }
}

fn transaction_row(t: &Transaction) -> Html {
    html! {
        <tr>
            <td>{ t.id.clone() }</td>
            <td>{ t.date.to_string() }</td>
            <td>{ t.kind.clone() }</td>
            <td>{ t.description.clone() }</td>
            <td class={if t.is_refund() { "amount-out" } else { "amount-in" }}>{ t.amount.clone() }</td>
            <td><span class={classes!("badge", transaction_badge(t.status))}>{ t.status.to_string() }</span></td>
        </tr>
    }
}
