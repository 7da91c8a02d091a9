use common::model::session::{Session, User};
use common::requests::SignInRequest;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::orders::place_order::helpers::event_value;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Succeeded(User, Session),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct SignInProps {
    pub on_signed_in: Callback<(User, Session)>,
    pub on_show_sign_up: Callback<()>,
}

pub struct SignInForm {
    email: String,
    password: String,
    loading: bool,
    error: Option<String>,
}

impl Component for SignInForm {
    type Message = Msg;
    type Properties = SignInProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => self.email = email,
            Msg::SetPassword(password) => self.password = password,
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                self.error = None;

                let request = SignInRequest {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::sign_in(&request).await {
                        Ok((user, session)) => link.send_message(Msg::Succeeded(user, session)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
            }
            Msg::Succeeded(user, session) => {
                log!(format!("Signed in as {}", user.email));
                self.loading = false;
                self.password.clear();
                ctx.props().on_signed_in.emit((user, session));
            }
            Msg::Failed(reason) => {
                error!(format!("Sign-in failed: {}", reason));
                self.loading = false;
                self.error = Some(reason);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_show_sign_up = ctx.props().on_show_sign_up.reform(|_| ());

        html! {
            <form class="auth-card" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{ "Sign in" }</h2>
                if let Some(message) = &self.error {
                    <div class="form-error" role="alert">{ message.clone() }</div>
                }
                <label class="field-label" for="signin-email">{ "Email" }</label>
                <input
                    id="signin-email"
                    class="input-field"
                    type="email"
                    required=true
                    value={self.email.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetEmail(event_value(e.target())))}
                />
                <label class="field-label" for="signin-password">{ "Password" }</label>
                <input
                    id="signin-password"
                    class="input-field"
                    type="password"
                    required=true
                    value={self.password.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetPassword(event_value(e.target())))}
                />
                <button type="submit" class="btn primary" disabled={self.loading}>
                    { if self.loading { "Signing in..." } else { "Sign in" } }
                </button>
                <p class="auth-switch">
                    { "No account yet? " }
                    <button type="button" class="link-btn" onclick={on_show_sign_up}>{ "Create one" }</button>
                </p>
            </form>
        }
    }
}
