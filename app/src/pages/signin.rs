// src/pages/signin.rs
use gloo::console::log;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignInForm {
    pub phone: String,
    #[serde(skip_serializing)]
    pub otp: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl SignInForm {
    /// Sign-up additionally needs a name. Any non-empty OTP is accepted.
    pub fn is_complete(&self, sign_up: bool) -> bool {
        !self.phone.trim().is_empty()
            && !self.otp.trim().is_empty()
            && (!sign_up || !self.name.trim().is_empty())
    }
}

fn bind_input(form: UseStateHandle<SignInForm>, mutator: fn(&mut SignInForm, String)) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(i) = input {
            let mut f = (*form).clone();
            mutator(&mut f, i.value());
            form.set(f);
        }
    })
}

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let is_login = use_state(|| true);
    let form = use_state(SignInForm::default);
    let otp_sent = use_state(|| false);
    let navigator = use_navigator();

    let set_mode = |login: bool| {
        let is_login = is_login.clone();
        Callback::from(move |_: MouseEvent| is_login.set(login))
    };

    let on_submit = {
        let form = form.clone();
        let is_login = is_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete(!*is_login) {
                return;
            }
            let summary = serde_json::to_string(&*form).unwrap_or_default();
            log!(format!("Form submitted: {summary}"));
            if let Some(nav) = &navigator {
                nav.push(&Route::Profile);
            }
        })
    };

    let on_send_otp = {
        let form = form.clone();
        let otp_sent = otp_sent.clone();
        Callback::from(move |_: MouseEvent| {
            if form.phone.trim().is_empty() {
                return;
            }
            log!(format!("OTP requested for {}", form.phone.trim()));
            otp_sent.set(true);
        })
    };

    let on_name = bind_input(form.clone(), |f, v| f.name = v);
    let on_phone = bind_input(form.clone(), |f, v| f.phone = v);
    let on_otp = bind_input(form.clone(), |f, v| f.otp = v);

    let login = *is_login;

    html! {
        <div class="page center">
            <div class="narrow">
                <img class="logo" src="/pics/logo.png" alt="Body Lab Logo" />

                <div class="toggle">
                    <button class={classes!(login.then_some("toggle-on"))} onclick={set_mode(true)}>{ "Sign In" }</button>
                    <button class={classes!((!login).then_some("toggle-on"))} onclick={set_mode(false)}>{ "Sign Up" }</button>
                </div>

                <div class="card">
                    <h2>{ if login { "Welcome Back" } else { "Create Account" } }</h2>

                    <form onsubmit={on_submit}>
                        if !login {
                            <label for="name" class="label">{ "Full Name" }</label>
                            <input id="name" name="name" type="text" required=true
                                placeholder="Enter your full name"
                                value={form.name.clone()} oninput={on_name} />
                        }

                        <label for="phone" class="label">{ "Phone Number" }</label>
                        <input id="phone" name="phone" type="tel" required=true
                            placeholder="+62 812-3456-7890"
                            value={form.phone.clone()} oninput={on_phone} />

                        <label for="otp" class="label">{ "OTP Code" }</label>
                        <input id="otp" name="otp" type="text" required=true
                            inputmode="numeric" placeholder="Enter the code we sent you"
                            value={form.otp.clone()} oninput={on_otp} />

                        <button type="button" class="ghost block" onclick={on_send_otp}>{ "Send OTP" }</button>
                        if *otp_sent {
                            <p class="small">{ "Code sent. Check your messages." }</p>
                        }

                        <button type="submit" class="btn block">
                            { if login { "Sign In" } else { "Create Account" } }
                        </button>
                    </form>

                    if !login {
                        <p class="small center">
                            { "By creating an account, you agree to our Terms of Service and Privacy Policy." }
                        </p>
                    }

                    <p class="small center">
                        <Link<Route> to={Route::Home}>{ "‹ Back to Home" }</Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignInForm {
        SignInForm {
            phone: "+62 812".into(),
            otp: "123456".into(),
            name: String::new(),
        }
    }

    #[test]
    fn sign_in_needs_phone_and_otp() {
        assert!(filled().is_complete(false));
        assert!(!SignInForm { otp: " ".into(), ..filled() }.is_complete(false));
    }

    #[test]
    fn sign_up_also_needs_a_name() {
        assert!(!filled().is_complete(true));
        assert!(SignInForm { name: "Sarah".into(), ..filled() }.is_complete(true));
    }

    #[test]
    fn logged_form_omits_the_code() {
        let json = serde_json::to_string(&filled()).unwrap();
        assert_eq!(json, r#"{"phone":"+62 812"}"#);
    }
}
