use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::content::{FEATURES, Feature};
use crate::core::routes;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// Grid of product features with a closing call to action
#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let navigate = use_navigate();
    let on_free_trial = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate(routes::AUTHENTICATION, Default::default()))
    };
    let on_watch_demo =
        Callback::new(move |_: ()| navigate(routes::TRIP_PLANNING_WIZARD, Default::default()));

    view! {
        <section class="py-20 bg-gradient-to-b from-background to-slate-900/50">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 reveal-on-scroll">
                    <div class="flex items-center justify-center space-x-3 mb-6">
                        <div class="w-10 h-10 rounded-xl bg-gradient-intelligent flex items-center justify-center ai-glow">
                            <Icon name=icons::SPARKLES class="w-5 h-5" />
                        </div>
                        <span class="text-accent font-caption font-medium text-sm">"Powered by AI"</span>
                    </div>
                    <h2 class="text-4xl lg:text-5xl font-heading font-bold text-foreground mb-6">
                        "Everything You Need for"
                        <span class="text-gradient-intelligent block">"Perfect Travel Planning"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground font-caption max-w-3xl mx-auto leading-relaxed">
                        "From discovery to booking, our AI-powered platform handles every aspect of your journey with intelligent automation and personalized recommendations."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>

                <div class="text-center mt-16 reveal-on-scroll">
                    <div class="glass glass-hover rounded-2xl p-8 max-w-2xl mx-auto">
                        <h3 class="text-2xl font-heading font-semibold text-foreground mb-4">
                            "Ready to Experience AI-Powered Travel Planning?"
                        </h3>
                        <p class="text-muted-foreground font-caption mb-6">
                            "Join thousands of travelers who have discovered their perfect trips with our intelligent assistant."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <Button size=ButtonSize::Large on_click=on_free_trial class="interactive-scale px-8">
                                "Start Free Trial"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Large
                                on_click=on_watch_demo
                                class="px-8"
                            >
                                "Watch Demo"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let accent = feature.accent;
    let card_class = format!(
        "glass glass-hover relative rounded-2xl p-8 h-full border-l-4 transition-all duration-300 \
         hover:scale-105 hover:shadow-prominent {} {}",
        accent.border_class(),
        accent.bg_class()
    );

    view! {
        // Staggered reveal, 100ms apart
        <div class="group relative reveal-on-scroll" style=format!("transition-delay: {}ms", index * 100)>
            <div class=card_class>
                <div class="space-y-6">
                    <div class=format!(
                        "w-16 h-16 rounded-2xl flex items-center justify-center group-hover:scale-110 transition-transform duration-300 {}",
                        accent.bg_class()
                    )>
                        <Icon name=feature.icon class=format!("w-7 h-7 {}", accent.text_class()) />
                    </div>

                    <div class="space-y-3">
                        <h3 class="text-xl font-heading font-semibold text-foreground">{feature.title}</h3>
                        <p class="text-muted-foreground font-caption leading-relaxed">{feature.description}</p>
                    </div>

                    <div class="flex items-center space-x-2 text-sm font-caption font-medium">
                        <span class=accent.text_class()>"Learn more"</span>
                        <Icon
                            name=icons::ARROW_RIGHT
                            class=format!("w-4 h-4 group-hover:translate-x-1 transition-transform duration-200 {}", accent.text_class())
                        />
                    </div>
                </div>

                <div class="absolute inset-0 rounded-2xl bg-gradient-to-br from-transparent via-transparent to-white/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
            </div>
        </div>
    }
}
