//! Hero banner with the "Try AI Planning" demo

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::content::HERO_STATS;
use crate::core::{DEMO_DELAY_MS, DemoPlanner, routes};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, IconPosition};
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::run_after;

#[component]
pub fn HeroSection() -> impl IntoView {
    let navigate = use_navigate();

    let on_start_planning = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate(routes::AUTHENTICATION, Default::default()))
    };
    let on_try_demo =
        Callback::new(move |_: ()| navigate(routes::TRIP_PLANNING_WIZARD, Default::default()));

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden
                        bg-gradient-to-br from-background via-slate-900 to-slate-800">
            // Background decoration
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-20 left-20 w-72 h-72 bg-primary/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-20 right-20 w-96 h-96 bg-secondary/20 rounded-full blur-3xl animate-pulse delay-1000"></div>
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-80 h-80 bg-accent/10 rounded-full blur-3xl animate-pulse delay-500"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    // Copy and primary actions
                    <div class="space-y-8 landing-slide-in-left">
                        <div class="space-y-6">
                            <div class="flex items-center space-x-3 landing-fade-in-up landing-delay-200">
                                <div class="w-12 h-12 rounded-xl bg-gradient-intelligent flex items-center justify-center ai-glow">
                                    <Icon name=icons::BOT class="w-6 h-6" />
                                </div>
                                <span class="text-accent font-caption font-medium text-sm">
                                    "Powered by Advanced AI"
                                </span>
                            </div>

                            <h1 class="text-5xl lg:text-7xl font-heading font-bold leading-tight landing-fade-in-up landing-delay-300">
                                "Plan Your"
                                <span class="text-gradient-intelligent block">"Dream Trip"</span>
                                "with AI"
                            </h1>

                            <p class="text-xl text-muted-foreground font-caption leading-relaxed max-w-lg landing-fade-in-up landing-delay-500">
                                "Discover hidden gems, collaborate with friends, and create personalized itineraries with our intelligent travel assistant. Your perfect journey starts here."
                            </p>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4 landing-fade-in-up landing-delay-700">
                            <Button
                                size=ButtonSize::Large
                                icon=icons::PLANE
                                on_click=on_start_planning
                                class="interactive-scale text-lg px-8 py-4"
                            >
                                "Start Planning"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Large
                                icon=icons::PLAY
                                icon_position=IconPosition::Left
                                on_click=on_try_demo
                                class="interactive-scale text-lg px-8 py-4"
                            >
                                "Try Demo"
                            </Button>
                        </div>

                        // Social proof
                        <div class="flex items-center space-x-8 pt-8 landing-fade-in-up landing-delay-900">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-2xl font-heading font-bold text-gradient-intelligent">
                                                {stat.value}
                                            </div>
                                            <div class="text-sm text-muted-foreground font-caption">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative landing-slide-in-right landing-delay-400">
                        <AiDemoCard />

                        <div class="absolute -top-4 -right-4 w-8 h-8 bg-accent/20 rounded-full blur-sm animate-pulse" aria-hidden="true"></div>
                        <div class="absolute -bottom-4 -left-4 w-6 h-6 bg-secondary/20 rounded-full blur-sm animate-pulse delay-1000" aria-hidden="true"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Interactive card that "generates" trip ideas after a short delay
#[component]
fn AiDemoCard() -> impl IntoView {
    let planner = RwSignal::new(DemoPlanner::new());

    on_cleanup(move || {
        planner.try_update(|p| p.dispose());
    });

    let submit = Callback::new(move |_: ()| match planner.try_update(|p| p.submit()) {
        Some(Ok(ticket)) => run_after(DEMO_DELAY_MS, move || {
            planner.try_update(|p| p.complete(ticket));
        }),
        Some(Err(err)) => log!("AI demo submission ignored: {}", err),
        None => {}
    });

    let is_generating = Signal::derive(move || planner.with(|p| p.is_generating()));
    let submit_disabled = Signal::derive(move || !planner.with(|p| p.can_submit()));
    let has_results = move || planner.with(|p| !p.suggestions().is_empty());

    view! {
        <div class="glass glass-hover rounded-2xl p-8 shadow-prominent">
            <div class="space-y-6">
                <div class="flex items-center space-x-3 mb-6">
                    <div class="w-8 h-8 rounded-lg bg-gradient-intelligent flex items-center justify-center">
                        <Icon name=icons::SPARKLES class="w-4 h-4" />
                    </div>
                    <h3 class="text-xl font-heading font-semibold text-foreground">"Try AI Planning"</h3>
                </div>

                <div class="space-y-4">
                    <div>
                        <label for="ai-demo-destination" class="block text-sm font-caption font-medium text-foreground mb-2">
                            "Where do you want to go?"
                        </label>
                        <div class="relative">
                            <input
                                id="ai-demo-destination"
                                type="text"
                                placeholder="e.g., Goa, Kerala, Rajasthan..."
                                class="w-full p-4 bg-input border border-border rounded-xl text-foreground placeholder-muted-foreground font-caption
                                       focus:outline-none focus:ring-2 focus:ring-accent/50 focus:border-accent transition-colors duration-200"
                                prop:value=move || planner.with(|p| p.input().to_string())
                                on:input=move |ev| planner.update(|p| p.set_input(event_target_value(&ev)))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" {
                                        submit.run(());
                                    }
                                }
                            />
                            <div class="absolute right-3 top-1/2 -translate-y-1/2">
                                <Icon name=icons::MAP_PIN class="w-5 h-5 text-muted-foreground" />
                            </div>
                        </div>
                    </div>

                    <Button
                        size=ButtonSize::Large
                        icon=icons::WAND
                        on_click=submit
                        loading=is_generating
                        disabled=submit_disabled
                        class="w-full"
                    >
                        {move || if is_generating.get() { "Generating Ideas..." } else { "Get AI Suggestions" }}
                    </Button>
                </div>

                <Show when=has_results>
                    <div class="space-y-3 pt-4 border-t border-border/50 landing-fade-in-up">
                        <h4 class="text-sm font-caption font-medium text-accent">
                            {move || {
                                planner.with(|p| format!("AI Suggestions for {}:", p.destination().unwrap_or_default()))
                            }}
                        </h4>
                        {move || {
                            planner
                                .with(|p| p.suggestions().to_vec())
                                .into_iter()
                                .enumerate()
                                .map(|(index, suggestion)| {
                                    view! {
                                        <div
                                            class="p-4 bg-muted/30 rounded-lg border border-border/30 hover:border-accent/30 transition-colors duration-200 landing-slide-in-left"
                                            style=format!("animation-delay: {}ms", index * 100)
                                        >
                                            <div class="flex items-start justify-between">
                                                <div class="flex-1">
                                                    <h5 class="font-caption font-medium text-foreground text-sm">{suggestion.title}</h5>
                                                    <p class="text-xs text-muted-foreground font-caption mt-1">{suggestion.description}</p>
                                                    <div class="flex items-center space-x-4 mt-2">
                                                        <span class="text-xs text-accent font-caption">{suggestion.duration}</span>
                                                        <span class="text-xs text-success font-caption">{suggestion.budget}</span>
                                                        <span class="text-xs text-secondary font-caption">{suggestion.kind}</span>
                                                    </div>
                                                </div>
                                                <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 text-muted-foreground" />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
