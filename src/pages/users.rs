//! Users page: the admin-only roster screen.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::users_list::UsersList;
use crate::state::session::Session;

/// Users page — wraps the roster table; visitors without a session are sent
/// back home.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    crate::util::auth::install_unauth_redirect(session, use_navigate());
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <div class="users-page">
            <h1>"Users"</h1>
            <UsersList/>
        </div>
    }
}
