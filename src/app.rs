//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::AuthClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::{AuthState, SessionContext};
use crate::util::config;
use crate::util::token_store;

/// Root application component.
///
/// Builds the session context, restores any persisted session, and sets up
/// client-side routing. The bare path and every unknown path land on the
/// login view; the dashboard guards itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = AuthClient::new(config::api_base_url(), token_store::shared_store());
    let session = SessionContext::new(client);

    // Restore-on-load: adopt the stored session only when both keys are
    // present and the token has not expired; otherwise normalize storage
    // back to signed-out.
    match session.client.restore() {
        Some(user) => session.auth.set(AuthState::signed_in(user)),
        None => session.auth.set(AuthState::signed_out()),
    }

    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bank-portal.css"/>
        <Title text="Bank Portal"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
