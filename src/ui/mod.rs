pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod timers;

pub use icon::{Icon, icons};
pub use notifications::{ToastContainer, ToastManager, provide_toast_context, use_toast_context};
pub use pages::{ComingSoonPage, LandingPage, NotFoundPage};
pub use timers::{RepeatingTimer, run_after};
