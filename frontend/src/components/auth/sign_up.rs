use common::requests::SignUpRequest;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::orders::place_order::helpers::{event_value, show_toast};

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    SetFirstName(String),
    SetLastName(String),
    Submit,
    Succeeded(String),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct SignUpProps {
    /// Back to the sign-in form; also emitted after a successful sign-up.
    pub on_show_sign_in: Callback<()>,
}

#[derive(Default)]
pub struct SignUpForm {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    loading: bool,
    error: Option<String>,
}

impl Component for SignUpForm {
    type Message = Msg;
    type Properties = SignUpProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => self.email = value,
            Msg::SetPassword(value) => self.password = value,
            Msg::SetFirstName(value) => self.first_name = value,
            Msg::SetLastName(value) => self.last_name = value,
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                self.error = None;

                let request = SignUpRequest {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                    first_name: self.first_name.trim().to_string(),
                    last_name: self.last_name.trim().to_string(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::sign_up(&request).await {
                        Ok(response) => link.send_message(Msg::Succeeded(
                            response
                                .message
                                .unwrap_or_else(|| "User created successfully.".to_string()),
                        )),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
            }
            Msg::Succeeded(message) => {
                log!(message.clone());
                show_toast(&format!("{} You can sign in now.", message));
                *self = Self::default();
                ctx.props().on_show_sign_in.emit(());
            }
            Msg::Failed(reason) => {
                error!(format!("Sign-up failed: {}", reason));
                self.loading = false;
                self.error = Some(reason);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_show_sign_in = ctx.props().on_show_sign_in.reform(|_| ());

        html! {
            <form class="auth-card" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{ "Create account" }</h2>
                if let Some(message) = &self.error {
                    <div class="form-error" role="alert">{ message.clone() }</div>
                }
                <div class="field-row">
                    <div class="field">
                        <label class="field-label" for="signup-first-name">{ "First name" }</label>
                        <input
                            id="signup-first-name"
                            class="input-field"
                            value={self.first_name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetFirstName(event_value(e.target())))}
                        />
                    </div>
                    <div class="field">
                        <label class="field-label" for="signup-last-name">{ "Last name" }</label>
                        <input
                            id="signup-last-name"
                            class="input-field"
                            value={self.last_name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetLastName(event_value(e.target())))}
                        />
                    </div>
                </div>
                <label class="field-label" for="signup-email">{ "Email" }</label>
                <input
                    id="signup-email"
                    class="input-field"
                    type="email"
                    required=true
                    value={self.email.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetEmail(event_value(e.target())))}
                />
                <label class="field-label" for="signup-password">{ "Password" }</label>
                <input
                    id="signup-password"
                    class="input-field"
                    type="password"
                    required=true
                    value={self.password.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetPassword(event_value(e.target())))}
                />
                <button type="submit" class="btn primary" disabled={self.loading}>
                    { if self.loading { "Creating account..." } else { "Sign up" } }
                </button>
                <p class="auth-switch">
                    { "Already registered? " }
                    <button type="button" class="link-btn" onclick={on_show_sign_in}>{ "Sign in" }</button>
                </p>
            </form>
        }
    }
}
