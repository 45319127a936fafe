//! Landing page
//!
//! Sections, top to bottom:
//! - Hero with the simulated AI planning demo
//! - Feature showcase grid
//! - Testimonials carousel with autoplay
//! - Call to action with the newsletter form
//! - Footer
//!
//! Entrance animations are CSS-only; elements marked `reveal-on-scroll`
//! fade in once they enter the viewport.

mod call_to_action;
mod features;
mod footer;
mod hero;
mod styles;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::TestimonialStore;
use crate::core::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::core::seo::{CANONICAL_URL, structured_data_script};

use call_to_action::CallToActionSection;
use features::FeatureShowcase;
use footer::Footer;
use hero::HeroSection;
use styles::{LandingStyles, ScrollAnimationScript};
use testimonials::TestimonialsCarousel;

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = StoredValue::new(TestimonialStore::builtin());

    // Start from the top on every visit
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <SeoMeta store=store />

        <div class="min-h-screen bg-background overflow-x-hidden landing-page-enter">
            <HeroSection />
            <FeatureShowcase />
            <TestimonialsCarousel store=store />
            <CallToActionSection />
            <Footer />

            <LandingStyles />
            <ScrollAnimationScript />
        </div>
    }
}

/// Title, description, social cards and JSON-LD
#[component]
fn SeoMeta(store: StoredValue<TestimonialStore>) -> impl IntoView {
    let json_ld = store.with_value(|s| structured_data_script(s, CANONICAL_URL));

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="AI travel planner, trip planning, hidden gems, group travel, itinerary, travel assistant, India travel" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=CANONICAL_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        <Link rel="canonical" href=CANONICAL_URL />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}
