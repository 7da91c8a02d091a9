//! Root component: holds the signed-in session in memory and switches between
//! the auth forms and the orders page, where the order wizard opens as a modal.

use common::model::session::{Session, User};
use gloo_console::log;
use yew::{html, Component, Context, Html};

use crate::components::auth::sign_in::SignInForm;
use crate::components::auth::sign_up::SignUpForm;
use crate::components::orders::history::OrderHistory;
use crate::components::orders::place_order::PlaceOrderModal;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    SignUp,
    Orders,
}

pub enum Msg {
    ShowPage(Page),
    SignedIn(User, Session),
    SignOut,
    OpenPlaceOrder,
    ClosePlaceOrder,
    OrderSubmitted,
}

pub struct App {
    page: Page,
    user: Option<User>,
    session: Option<Session>,
    place_order_open: bool,
    history_revision: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::SignIn,
            user: None,
            session: None,
            place_order_open: false,
            history_revision: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowPage(page) => self.page = page,
            Msg::SignedIn(user, session) => {
                self.user = Some(user);
                self.session = Some(session);
                self.page = Page::Orders;
            }
            Msg::SignOut => {
                log!("Signed out");
                self.user = None;
                self.session = None;
                self.place_order_open = false;
                self.page = Page::SignIn;
            }
            Msg::OpenPlaceOrder => self.place_order_open = true,
            Msg::ClosePlaceOrder => self.place_order_open = false,
            Msg::OrderSubmitted => self.history_revision += 1,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                <header class="app-header">
                    <span class="brand">{ "Procuroid" }</span>
                    <nav>
                        <button type="button" class="btn primary" onclick={link.callback(|_| Msg::OpenPlaceOrder)}>
                            { "Place Order" }
                        </button>
                        if let Some(user) = &self.user {
                            <span class="user-name">{ display_name(user) }</span>
                            <button type="button" class="btn secondary" onclick={link.callback(|_| Msg::SignOut)}>
                                { "Sign out" }
                            </button>
                        }
                    </nav>
                </header>
                <main class="app-main">
                    {
                        match (self.page, &self.session) {
                            (Page::Orders, Some(session)) => html! {
                                <OrderHistory session={session.clone()} revision={self.history_revision} />
                            },
                            (Page::SignUp, _) => html! {
                                <SignUpForm on_show_sign_in={link.callback(|_: ()| Msg::ShowPage(Page::SignIn))} />
                            },
                            _ => html! {
                                <SignInForm
                                    on_signed_in={link.callback(|(user, session): (User, Session)| Msg::SignedIn(user, session))}
                                    on_show_sign_up={link.callback(|_: ()| Msg::ShowPage(Page::SignUp))}
                                />
                            },
                        }
                    }
                </main>
                if self.place_order_open {
                    <PlaceOrderModal
                        session={self.session.clone()}
                        on_close={link.callback(|_: ()| Msg::ClosePlaceOrder)}
                        on_submitted={link.callback(|_: ()| Msg::OrderSubmitted)}
                    />
                }
            </div>
        }
    }
}

/// Name shown in the header: display name, else first and last name, else email.
fn display_name(user: &User) -> String {
    let metadata = &user.user_metadata;
    if !metadata.display_name.trim().is_empty() {
        return metadata.display_name.clone();
    }
    let full = format!("{} {}", metadata.first_name, metadata.last_name)
        .trim()
        .to_string();
    if full.is_empty() {
        user.email.clone()
    } else {
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::session::UserMetadata;

    fn user(metadata: UserMetadata) -> User {
        User {
            id: "u-1".to_string(),
            email: "buyer@example.com".to_string(),
            user_metadata: metadata,
        }
    }

    #[test]
    fn header_name_falls_back_to_email() {
        assert_eq!(display_name(&user(UserMetadata::default())), "buyer@example.com");
        assert_eq!(
            display_name(&user(UserMetadata::from_names("Ada", "Lovelace"))),
            "Ada Lovelace"
        );
    }
}
