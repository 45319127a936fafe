//! Placeholder for routes reached from the landing page that have no
//! screen of their own yet

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::BRAND_NAME;
use crate::core::routes;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ComingSoonPage(
    /// Page heading, also used for the document title
    title: &'static str,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <Title text=format!("{} | {}", title, BRAND_NAME) />

        <div class="min-h-screen bg-gradient-to-br from-background via-slate-900 to-slate-800 flex items-center justify-center p-6">
            <div class="glass rounded-2xl p-10 max-w-lg w-full text-center space-y-6 shadow-prominent">
                <div class="w-16 h-16 rounded-2xl bg-gradient-intelligent flex items-center justify-center mx-auto ai-glow">
                    <Icon name=icons::SPARKLES class="w-7 h-7" />
                </div>
                <h1 class="text-3xl font-heading font-bold text-foreground">{title}</h1>
                <p class="text-muted-foreground font-caption leading-relaxed">{description}</p>
                <span class="inline-block px-3 py-1 rounded-full bg-accent/10 text-accent text-sm font-caption font-medium">
                    "Coming soon"
                </span>
                <div>
                    <A
                        href=routes::HOME
                        attr:class="inline-flex items-center gap-2 text-sm text-muted-foreground hover:text-foreground font-caption transition-colors"
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                        "Back to the landing page"
                    </A>
                </div>
            </div>
        </div>
    }
}
