//! Simulated form submissions
//!
//! The hero "Try AI Planning" demo and the newsletter form both pretend to
//! talk to a backend: submitting sets a busy flag, a fixed delay later a
//! canned result appears and the flag clears. Nothing leaves the browser.
//!
//! Every accepted submission hands out a [`Ticket`]. Completion is applied
//! only for the ticket currently in flight on a form that has not been
//! disposed, so a delayed callback firing after the view is gone does
//! nothing.

use super::content::{DemoSuggestion, demo_suggestions};
use super::notification::Toast;

/// Delay before the demo shows its suggestions
pub const DEMO_DELAY_MS: u32 = 2000;

/// Delay before the newsletter confirms a subscription
pub const NEWSLETTER_DELAY_MS: u32 = 1500;

/// Duration of the subscription confirmation toast
pub const SUBSCRIBED_TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("A submission is already in progress")]
    Busy,

    #[error("Form has been disposed")]
    Disposed,
}

/// Handle for one accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Busy flag plus ticket bookkeeping shared by the simulated forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatedRequest {
    generation: u64,
    in_flight: Option<u64>,
    disposed: bool,
}

impl SimulatedRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        if self.disposed {
            return Err(SubmitError::Disposed);
        }
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        Ok(Ticket(self.generation))
    }

    /// Clear the busy flag if `ticket` is the live submission.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.disposed || self.in_flight != Some(ticket.0) {
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Owning view is gone; later completions are ignored.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = None;
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// State of the hero's "Try AI Planning" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoPlanner {
    input: String,
    request: SimulatedRequest,
    pending_destination: Option<String>,
    destination: Option<String>,
    suggestions: Vec<DemoSuggestion>,
}

impl DemoPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn is_generating(&self) -> bool {
        self.request.is_busy()
    }

    pub fn can_submit(&self) -> bool {
        !is_blank(&self.input) && !self.request.is_busy() && !self.request.is_disposed()
    }

    pub fn submit(&mut self) -> Result<Ticket, SubmitError> {
        if is_blank(&self.input) {
            return Err(SubmitError::EmptyInput);
        }
        let ticket = self.request.begin()?;
        self.pending_destination = Some(self.input.trim().to_string());
        Ok(ticket)
    }

    /// Deliver the canned suggestions. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if !self.request.complete(ticket) {
            return false;
        }
        self.destination = self.pending_destination.take();
        self.suggestions = demo_suggestions().to_vec();
        true
    }

    /// Destination the current suggestions were generated for
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn suggestions(&self) -> &[DemoSuggestion] {
        &self.suggestions
    }

    pub fn dispose(&mut self) {
        self.request.dispose();
        self.pending_destination = None;
    }
}

/// State of the call-to-action newsletter form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    email: String,
    request: SimulatedRequest,
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn is_subscribing(&self) -> bool {
        self.request.is_busy()
    }

    pub fn can_submit(&self) -> bool {
        !is_blank(&self.email) && !self.request.is_busy() && !self.request.is_disposed()
    }

    pub fn submit(&mut self) -> Result<Ticket, SubmitError> {
        if is_blank(&self.email) {
            return Err(SubmitError::EmptyInput);
        }
        self.request.begin()
    }

    /// Finish the subscription, clearing the field and returning the
    /// confirmation toast. `None` for stale tickets.
    pub fn complete(&mut self, ticket: Ticket) -> Option<Toast> {
        if !self.request.complete(ticket) {
            return None;
        }
        self.email.clear();
        Some(subscribed_toast())
    }

    pub fn dispose(&mut self) {
        self.request.dispose();
    }
}

pub fn subscribed_toast() -> Toast {
    Toast::success(
        "Subscribed!",
        "You'll receive travel tips and updates from TravelAI Pro.",
    )
    .with_duration(SUBSCRIBED_TOAST_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::ToastKind;

    #[test]
    fn test_request_lifecycle() {
        let mut request = SimulatedRequest::new();
        assert!(!request.is_busy());

        let ticket = request.begin().unwrap();
        assert!(request.is_busy());
        assert_eq!(request.begin(), Err(SubmitError::Busy));

        assert!(request.complete(ticket));
        assert!(!request.is_busy());
        assert!(!request.complete(ticket));
    }

    #[test]
    fn test_request_tickets_are_distinct() {
        let mut request = SimulatedRequest::new();
        let first = request.begin().unwrap();
        request.complete(first);
        let second = request.begin().unwrap();
        assert_ne!(first, second);

        // An old ticket cannot finish the new submission
        assert!(!request.complete(first));
        assert!(request.is_busy());
    }

    #[test]
    fn test_request_dispose() {
        let mut request = SimulatedRequest::new();
        let ticket = request.begin().unwrap();
        request.dispose();
        assert!(!request.complete(ticket));
        assert_eq!(request.begin(), Err(SubmitError::Disposed));
    }

    #[test]
    fn test_demo_blank_input_rejected() {
        let mut demo = DemoPlanner::new();
        assert!(!demo.can_submit());
        assert_eq!(demo.submit(), Err(SubmitError::EmptyInput));

        demo.set_input("   \t ");
        assert!(!demo.can_submit());
        assert_eq!(demo.submit(), Err(SubmitError::EmptyInput));
        assert!(!demo.is_generating());
        assert!(demo.suggestions().is_empty());
    }

    #[test]
    fn test_demo_generates_suggestions() {
        let mut demo = DemoPlanner::new();
        demo.set_input("  Kerala ");
        assert!(demo.can_submit());

        let ticket = demo.submit().unwrap();
        assert!(demo.is_generating());
        assert!(!demo.can_submit());

        // Editing the input while busy does not change the requested destination
        demo.set_input("Goa");
        assert!(demo.complete(ticket));
        assert!(!demo.is_generating());
        assert_eq!(demo.destination(), Some("Kerala"));
        assert_eq!(demo.suggestions().len(), 3);
        assert_eq!(demo.suggestions()[0].title, "Hidden Temple Trail");
    }

    #[test]
    fn test_demo_completion_after_dispose_is_noop() {
        let mut demo = DemoPlanner::new();
        demo.set_input("Rajasthan");
        let ticket = demo.submit().unwrap();
        demo.dispose();

        assert!(!demo.complete(ticket));
        assert!(demo.suggestions().is_empty());
        assert_eq!(demo.destination(), None);
        assert!(!demo.can_submit());
    }

    #[test]
    fn test_newsletter_flow() {
        let mut signup = NewsletterSignup::new();
        assert_eq!(signup.submit(), Err(SubmitError::EmptyInput));

        signup.set_email("traveler@example.com");
        let ticket = signup.submit().unwrap();
        assert!(signup.is_subscribing());
        assert_eq!(signup.submit(), Err(SubmitError::Busy));

        let toast = signup.complete(ticket).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Subscribed!");
        assert_eq!(toast.duration_ms, Some(SUBSCRIBED_TOAST_MS));
        assert_eq!(signup.email(), "");
        assert!(!signup.is_subscribing());
    }

    #[test]
    fn test_newsletter_stale_completion() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("a@b.c");
        let ticket = signup.submit().unwrap();
        signup.dispose();
        assert_eq!(signup.complete(ticket), None);
        assert_eq!(signup.email(), "a@b.c");
    }
}
