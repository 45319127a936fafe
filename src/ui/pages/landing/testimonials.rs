//! Auto-rotating testimonial carousel

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::content::{ADVERTISED_RATING, TRUST_INDICATORS};
use crate::core::testimonials::MAX_RATING;
use crate::core::{TestimonialRecord, TestimonialStore};
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::RepeatingTimer;

#[component]
pub fn TestimonialsCarousel(store: StoredValue<TestimonialStore>) -> impl IntoView {
    let rotation = RwSignal::new(store.with_value(|s| s.rotation()));
    let mode = Memo::new(move |_| rotation.with(|r| r.mode()));
    let timer = RepeatingTimer::new();

    // One interval per play period; pausing drops it, resuming arms a fresh one
    Effect::new(move |_| {
        let period = rotation.with_untracked(|r| r.interval());
        timer.sync(mode.get(), period, move || {
            rotation.try_update(|r| r.advance(period));
        });
    });

    let current = Memo::new(move |_| {
        rotation.with(|r| store.with_value(|s| s.current(r).cloned()))
    });
    let count = store.with_value(|s| s.len().get());

    let go_to = move |index: usize| {
        if let Some(Err(err)) = rotation.try_update(|r| r.go_to(index)) {
            log!("Ignoring testimonial navigation: {}", err);
        }
    };

    view! {
        <section class="py-20 bg-gradient-to-b from-slate-900/50 to-background">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16 reveal-on-scroll">
                    <div class="flex items-center justify-center space-x-3 mb-6">
                        <div class="w-10 h-10 rounded-xl bg-gradient-intelligent flex items-center justify-center ai-glow">
                            <Icon name=icons::HEART class="w-5 h-5" />
                        </div>
                        <span class="text-accent font-caption font-medium text-sm">"Loved by Travelers"</span>
                    </div>
                    <h2 class="text-4xl lg:text-5xl font-heading font-bold text-foreground mb-6">
                        "What Our"
                        <span class="text-gradient-intelligent block">"Travelers Say"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground font-caption max-w-3xl mx-auto leading-relaxed">
                        "Join thousands of satisfied travelers who have discovered amazing experiences with our AI-powered planning platform."
                    </p>
                </div>

                <div
                    class="relative max-w-4xl mx-auto"
                    on:mouseenter=move |_| {
                        rotation.update(|r| {
                            r.pause();
                        });
                    }
                    on:mouseleave=move |_| {
                        rotation.update(|r| {
                            r.resume();
                        });
                    }
                >
                    // Re-rendered per record so the enter animation replays
                    {move || current.get().map(|record| view! { <TestimonialCard record=record /> })}

                    <div class="flex items-center justify-center mt-8 space-x-4">
                        <button
                            class="w-12 h-12 glass glass-hover rounded-full flex items-center justify-center interactive-scale"
                            aria-label="Previous testimonial"
                            on:click=move |_| rotation.update(|r| r.previous())
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-5 h-5 text-foreground" />
                        </button>

                        <div class="flex space-x-2">
                            {(0..count)
                                .map(|index| {
                                    view! {
                                        <button
                                            class=move || {
                                                if rotation.with(|r| r.current_index()) == index {
                                                    "w-8 h-3 rounded-full bg-accent transition-all duration-300"
                                                } else {
                                                    "w-3 h-3 rounded-full bg-muted-foreground/30 hover:bg-muted-foreground/50 transition-all duration-300"
                                                }
                                            }
                                            aria-label=format!("Go to testimonial {}", index + 1)
                                            on:click=move |_| go_to(index)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            class="w-12 h-12 glass glass-hover rounded-full flex items-center justify-center interactive-scale"
                            aria-label="Next testimonial"
                            on:click=move |_| rotation.update(|r| r.next())
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5 text-foreground" />
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mt-16 reveal-on-scroll">
                    {TRUST_INDICATORS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="glass glass-hover rounded-xl p-6 text-center">
                                    <div class=format!(
                                        "w-12 h-12 rounded-xl flex items-center justify-center mx-auto mb-3 {}",
                                        item.accent.bg_class()
                                    )>
                                        <Icon name=item.icon class=format!("w-6 h-6 {}", item.accent.text_class()) />
                                    </div>
                                    <h4 class="font-heading font-semibold text-foreground mb-1">{item.title}</h4>
                                    <p class="text-sm text-muted-foreground font-caption">{item.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="text-center text-sm text-muted-foreground font-caption mt-8">
                    {format!("Rated {}/5 by our travelers", ADVERTISED_RATING)}
                </p>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(record: TestimonialRecord) -> impl IntoView {
    let stars = (0..MAX_RATING)
        .map(|position| {
            let class = if record.rating.is_filled(position) {
                "w-5 h-5 star-filled"
            } else {
                "w-5 h-5 opacity-30"
            };
            view! { <Icon name=icons::STAR class=class /> }
        })
        .collect_view();

    view! {
        <div class="glass rounded-3xl p-8 lg:p-12 shadow-prominent testimonial-enter">
            <div class="flex flex-col lg:flex-row items-center lg:items-start gap-8">
                <div class="flex-shrink-0 text-center lg:text-left">
                    <div class="relative inline-block">
                        <img
                            src=record.avatar
                            alt=record.name
                            class="w-20 h-20 rounded-full object-cover border-4 border-accent/20"
                            loading="lazy"
                        />
                        {record
                            .verified
                            .then(|| {
                                view! {
                                    <div
                                        class="absolute -bottom-1 -right-1 w-6 h-6 bg-success rounded-full flex items-center justify-center"
                                        title="Verified traveler"
                                    >
                                        <Icon name=icons::CHECK class="w-3 h-3" />
                                    </div>
                                }
                            })}
                    </div>
                    <div class="mt-4">
                        <h4 class="font-heading font-semibold text-foreground text-lg">{record.name}</h4>
                        <p class="text-muted-foreground font-caption text-sm">{record.location}</p>
                        <div class="flex items-center justify-center lg:justify-start mt-2" aria-label=format!("{} out of {} stars", record.rating.value(), MAX_RATING)>
                            {stars}
                        </div>
                    </div>
                </div>

                <div class="flex-1">
                    <div class="relative">
                        <Icon name=icons::QUOTE class="absolute -top-4 -left-2 w-8 h-8 opacity-20" />
                        <blockquote class="text-lg lg:text-xl text-foreground font-caption leading-relaxed mb-6 relative z-10">
                            {format!("\u{201c}{}\u{201d}", record.text)}
                        </blockquote>
                    </div>

                    <div class="flex flex-wrap items-center gap-4">
                        <div class="flex items-center space-x-2 px-3 py-1 bg-accent/10 rounded-full">
                            <Icon name=icons::MAP_PIN class="w-4 h-4 text-accent" />
                            <span class="text-accent font-caption text-sm font-medium">{record.destination}</span>
                        </div>
                        <div class="flex items-center space-x-2 px-3 py-1 bg-secondary/10 rounded-full">
                            <Icon name=icons::TAG class="w-4 h-4 text-secondary" />
                            <span class="text-secondary font-caption text-sm font-medium">{record.trip_type}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
