//! Application pages
//!
//! - Landing page (served at `/` and `/landing-page`)
//! - Placeholders for the sign-up and trip planning flows
//! - Not found page

mod coming_soon;
mod landing;
mod not_found;

pub use coming_soon::ComingSoonPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
