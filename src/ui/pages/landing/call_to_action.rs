use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::content::{ADVERTISED_RATING, BENEFITS, NEWSLETTER_PERKS, PLATFORM_STATS};
use crate::core::testimonials::MAX_RATING;
use crate::core::{NEWSLETTER_DELAY_MS, NewsletterSignup, routes};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, IconPosition};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_toast_context;
use crate::ui::timers::run_after;

/// Closing pitch, newsletter signup and platform figures
#[component]
pub fn CallToActionSection() -> impl IntoView {
    let navigate = use_navigate();
    let on_start_planning = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate(routes::AUTHENTICATION, Default::default()))
    };
    let on_watch_demo =
        Callback::new(move |_: ()| navigate(routes::TRIP_PLANNING_WIZARD, Default::default()));

    view! {
        <section class="py-20 bg-gradient-to-br from-background via-slate-900 to-slate-800 relative overflow-hidden">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-10 left-10 w-64 h-64 bg-primary/10 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-10 right-10 w-80 h-80 bg-secondary/10 rounded-full blur-3xl animate-pulse delay-1000"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 reveal-on-scroll">
                        <div class="space-y-6">
                            <div class="flex items-center space-x-3">
                                <div class="w-12 h-12 rounded-xl bg-gradient-intelligent flex items-center justify-center ai-glow">
                                    <Icon name=icons::ROCKET class="w-6 h-6" />
                                </div>
                                <span class="text-accent font-caption font-medium text-sm">
                                    "Join 50,000+ Smart Travelers"
                                </span>
                            </div>
                            <h2 class="text-4xl lg:text-6xl font-heading font-bold leading-tight">
                                "Ready to Transform"
                                <span class="text-gradient-intelligent block">"Your Travel Experience?"</span>
                            </h2>
                            <p class="text-xl text-muted-foreground font-caption leading-relaxed">
                                "Start planning smarter trips today with AI-powered recommendations, collaborative tools, and 24/7 assistance. Your perfect journey is just one click away."
                            </p>
                        </div>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {BENEFITS
                                .iter()
                                .map(|benefit| {
                                    view! {
                                        <div class="flex items-center space-x-3">
                                            <div class="w-8 h-8 rounded-lg bg-accent/10 flex items-center justify-center">
                                                <Icon name=benefit.icon class="w-4 h-4 text-accent" />
                                            </div>
                                            <span class="text-foreground font-caption font-medium">{benefit.text}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <Button
                                size=ButtonSize::Large
                                icon=icons::ARROW_RIGHT
                                icon_position=IconPosition::Right
                                on_click=on_start_planning
                                class="interactive-scale text-lg px-8 py-4"
                            >
                                "Start Planning Now"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Large
                                icon=icons::PLAY
                                on_click=on_watch_demo
                                class="interactive-scale text-lg px-8 py-4"
                            >
                                "Watch Demo"
                            </Button>
                        </div>

                        <SocialProof />
                    </div>

                    <div class="relative reveal-on-scroll">
                        <NewsletterCard />
                        <div class="absolute -top-4 -right-4 w-8 h-8 bg-accent/20 rounded-full blur-sm animate-pulse" aria-hidden="true"></div>
                        <div class="absolute -bottom-4 -left-4 w-6 h-6 bg-secondary/20 rounded-full blur-sm animate-pulse delay-1000" aria-hidden="true"></div>
                    </div>
                </div>

                <div class="mt-20 text-center reveal-on-scroll">
                    <div class="glass glass-hover rounded-2xl p-8 max-w-4xl mx-auto">
                        <div class="grid grid-cols-2 lg:grid-cols-4 gap-8">
                            {PLATFORM_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-3xl font-heading font-bold text-gradient-intelligent mb-2">{stat.value}</div>
                                            <div class="text-sm text-muted-foreground font-caption">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-6 pt-6 border-t border-border/30">
            <div class="flex items-center space-x-2">
                <div class="flex -space-x-2" aria-hidden="true">
                    <div class="w-8 h-8 rounded-full bg-gradient-to-r from-primary to-secondary border-2 border-background"></div>
                    <div class="w-8 h-8 rounded-full bg-gradient-to-r from-secondary to-accent border-2 border-background"></div>
                    <div class="w-8 h-8 rounded-full bg-gradient-to-r from-accent to-primary border-2 border-background"></div>
                </div>
                <span class="text-sm text-muted-foreground font-caption">"Join 50K+ travelers"</span>
            </div>
            <div class="flex items-center space-x-1">
                {(0..MAX_RATING)
                    .map(|_| view! { <Icon name=icons::STAR class="w-4 h-4 star-filled" /> })
                    .collect_view()}
                <span class="text-sm text-muted-foreground font-caption ml-2">
                    {format!("{}/5 rating", ADVERTISED_RATING)}
                </span>
            </div>
        </div>
    }
}

/// Email capture with a simulated subscribe round-trip
#[component]
fn NewsletterCard() -> impl IntoView {
    let signup = RwSignal::new(NewsletterSignup::new());
    let toaster = use_toast_context();

    on_cleanup(move || {
        signup.try_update(|s| s.dispose());
    });

    let subscribe = Callback::new(move |_: ()| match signup.try_update(|s| s.submit()) {
        Some(Ok(ticket)) => run_after(NEWSLETTER_DELAY_MS, move || {
            let Some(Some(toast)) = signup.try_update(|s| s.complete(ticket)) else {
                return;
            };
            match toaster {
                Some(manager) => manager.show(toast),
                None => log!("{}: {}", toast.title, toast.message),
            }
        }),
        Some(Err(err)) => log!("Newsletter subscription ignored: {}", err),
        None => {}
    });

    let is_subscribing = Signal::derive(move || signup.with(|s| s.is_subscribing()));
    let subscribe_disabled = Signal::derive(move || !signup.with(|s| s.can_submit()));

    view! {
        <div class="glass glass-hover rounded-2xl p-8 shadow-prominent">
            <div class="space-y-6">
                <div class="text-center space-y-4">
                    <div class="w-16 h-16 rounded-2xl bg-gradient-intelligent flex items-center justify-center mx-auto ai-glow">
                        <Icon name=icons::MAIL class="w-7 h-7" />
                    </div>
                    <h3 class="text-2xl font-heading font-semibold text-foreground">"Get Travel Insights"</h3>
                    <p class="text-muted-foreground font-caption">
                        "Subscribe to receive AI-powered travel tips, hidden gem discoveries, and exclusive deals delivered to your inbox."
                    </p>
                </div>

                <div class="space-y-4">
                    <div class="relative">
                        <input
                            type="email"
                            aria-label="Email address"
                            placeholder="Enter your email address"
                            class="w-full p-4 bg-input border border-border rounded-xl text-foreground placeholder-muted-foreground font-caption
                                   focus:outline-none focus:ring-2 focus:ring-accent/50 focus:border-accent transition-colors duration-200"
                            prop:value=move || signup.with(|s| s.email().to_string())
                            on:input=move |ev| signup.update(|s| s.set_email(event_target_value(&ev)))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    subscribe.run(());
                                }
                            }
                        />
                        <div class="absolute right-3 top-1/2 -translate-y-1/2">
                            <Icon name=icons::MAIL class="w-5 h-5 text-muted-foreground" />
                        </div>
                    </div>

                    <Button
                        size=ButtonSize::Large
                        icon=icons::SEND
                        icon_position=IconPosition::Right
                        on_click=subscribe
                        loading=is_subscribing
                        disabled=subscribe_disabled
                        class="w-full"
                    >
                        {move || if is_subscribing.get() { "Subscribing..." } else { "Get Travel Tips" }}
                    </Button>
                </div>

                <p class="text-center text-xs text-muted-foreground font-caption">
                    "No spam, unsubscribe anytime. We respect your privacy."
                </p>

                <div class="space-y-3 pt-4 border-t border-border/30">
                    <h4 class="text-sm font-caption font-medium text-foreground">"What you'll get:"</h4>
                    <ul class="space-y-2">
                        {NEWSLETTER_PERKS
                            .iter()
                            .map(|perk| {
                                view! {
                                    <li class="flex items-center space-x-3">
                                        <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-success" />
                                        <span class="text-sm text-muted-foreground font-caption">{*perk}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
