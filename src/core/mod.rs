//! Core domain models and page logic for the TravelAI Pro landing page

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod notification;
pub mod seo;
pub mod simulation;
pub mod testimonials;
#[cfg(test)]
mod tests;

pub use carousel::{
    AUTOPLAY_INTERVAL, CarouselError, PlaybackMode, RotationController, RotationState,
};
pub use content::{DemoSuggestion, demo_suggestions, routes};
pub use notification::{Toast, ToastKind};
pub use simulation::{
    DEMO_DELAY_MS, DemoPlanner, NEWSLETTER_DELAY_MS, NewsletterSignup, SimulatedRequest,
    SubmitError, Ticket,
};
pub use testimonials::{ContentError, Rating, TestimonialRecord, TestimonialStore};
