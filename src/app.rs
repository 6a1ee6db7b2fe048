//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::pages::{
    exercises::ExercisesPage, home::HomePage, login::LoginPage, new_exercise::NewExercisePage,
    sets::SetsPage, signup::SignupPage, users::UsersPage, workout_detail::WorkoutDetailPage,
    workouts::WorkoutsPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session for the whole application: restores it from durable
/// storage once at startup and provides it to child components via context,
/// so there is exactly one session per application without any hidden
/// global.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/fitlog.css"/>
        <Title text="FitLog"/>

        <Router>
            <Nav/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                    <Route path=(StaticSegment("workouts"), ParamSegment("id")) view=WorkoutDetailPage/>
                    <Route path=StaticSegment("exercises") view=ExercisesPage/>
                    <Route path=(StaticSegment("exercises"), StaticSegment("new")) view=NewExercisePage/>
                    <Route path=StaticSegment("sets") view=SetsPage/>
                </Routes>
            </main>
        </Router>
    }
}
