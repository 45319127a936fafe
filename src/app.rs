use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::{
    ComingSoonPage, LandingPage, NotFoundPage, ToastContainer, provide_toast_context,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#0f172a"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-background text-foreground antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let toasts = provide_toast_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/travelai.css"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/landing-page") view=LandingPage />
                    <Route
                        path=path!("/user-authentication")
                        view=|| view! {
                            <ComingSoonPage
                                title="Create Your Account"
                                description="Sign up to save itineraries, invite friends and let the AI learn your travel style."
                            />
                        }
                    />
                    <Route
                        path=path!("/trip-planning-wizard")
                        view=|| view! {
                            <ComingSoonPage
                                title="Trip Planning Wizard"
                                description="Tell us where, when and how you like to travel, and get a day-by-day itinerary in minutes."
                            />
                        }
                    />
                </Routes>
            </main>
        </Router>

        <ToastContainer manager=toasts />
    }
}
