//! Admin roster table listing every registered user.

#[cfg(test)]
#[path = "users_list_test.rs"]
mod users_list_test;

use leptos::prelude::*;

use crate::net::types::UserRole;
use crate::state::session::Session;
use crate::util::clock;

/// Render an ISO-8601 timestamp as a short date (e.g. `4/20/2025`).
///
/// Unrecognizable input passes through unchanged so a backend quirk still
/// shows something.
fn format_short_date(iso: &str) -> String {
    let date = clock::ymd_of_iso(iso);
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let month = month.trim_start_matches('0');
    let day = day.trim_start_matches('0');
    if year.len() != 4 || month.is_empty() || day.is_empty() {
        return iso.to_owned();
    }
    format!("{month}/{day}/{year}")
}

/// Roster table for the admin users page.
///
/// Fetches only when the current session is an admin; everyone else gets a
/// permission notice instead of an empty table.
#[component]
pub fn UsersList() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let users = LocalResource::new(move || {
        let admin = session.with(|s| s.is_admin_at(clock::now_ms()));
        async move {
            if admin {
                crate::net::api::fetch_users().await
            } else {
                None
            }
        }
    });

    let is_admin = move || session.with(|s| s.is_admin_at(clock::now_ms()));

    view! {
        <div class="users-list">
            <Show
                when=is_admin
                fallback=|| view! { <p class="users-list__denied">"Only administrators can view the user roster."</p> }
            >
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) => {
                                    view! {
                                        <table class="users-list__table">
                                            <thead>
                                                <tr>
                                                    <th>"Email"</th>
                                                    <th>"Role"</th>
                                                    <th>"Last Updated"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|u| {
                                                        let updated = u
                                                            .updated_at
                                                            .as_deref()
                                                            .map_or_else(String::new, format_short_date);
                                                        let role = match u.role {
                                                            UserRole::Admin => "ADMIN",
                                                            UserRole::User => "USER",
                                                        };
                                                        view! {
                                                            <tr>
                                                                <td>{u.email}</td>
                                                                <td>{role}</td>
                                                                <td>{updated}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! { <p class="users-list__error">"Failed to load users."</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </Show>
        </div>
    }
}
