//! Not found page component
//!
//! Rendered by the router for any path it does not know.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::BRAND_NAME;
use crate::core::routes;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page Not Found | {}", BRAND_NAME) />

        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 glass rounded-full flex items-center justify-center">
                    <Icon name=icons::COMPASS class="w-12 h-12 opacity-60" />
                </div>

                <h1 class="text-6xl font-heading font-bold text-gradient-intelligent mb-4">"404"</h1>
                <h2 class="text-2xl font-heading font-semibold text-foreground mb-2">"Off the Map"</h2>
                <p class="text-muted-foreground font-caption mb-8 max-w-md mx-auto">
                    "We couldn't find the page you were looking for. It may have moved, or the link may be out of date."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=routes::HOME
                        attr:class="inline-flex items-center gap-2 px-6 py-3 bg-gradient-intelligent text-white font-caption font-medium rounded-xl hover:opacity-90 transition-opacity"
                    >
                        <Icon name=icons::HOME class="w-4 h-4" />
                        "Back to Home"
                    </A>
                    <A
                        href=routes::TRIP_PLANNING_WIZARD
                        attr:class="px-6 py-3 border border-border text-foreground hover:bg-muted/50 font-caption font-medium rounded-xl transition-colors"
                    >
                        "Plan a Trip"
                    </A>
                </div>
            </div>
        </div>
    }
}
