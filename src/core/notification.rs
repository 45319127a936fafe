//! Toast notification payloads
//!
//! Mirrors the `{type, title, message, duration}` shape accepted by the
//! page-wide toast service.

use serde::Serialize;

/// Default auto-dismiss delay
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Warning,
    Error,
    Info,
    Ai,
}

impl ToastKind {
    /// Icon shown next to the toast title
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Warning => "alert-triangle",
            ToastKind::Error => "x-circle",
            ToastKind::Info => "info",
            ToastKind::Ai => "bot",
        }
    }

    /// (container, icon) accent classes
    pub fn classes(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Success => ("border-l-success bg-success/5", "text-success"),
            ToastKind::Warning => ("border-l-warning bg-warning/5", "text-warning"),
            ToastKind::Error => ("border-l-error bg-error/5", "text-error"),
            ToastKind::Info => ("border-l-primary bg-primary/5", "text-primary"),
            ToastKind::Ai => ("border-l-accent bg-accent/5 ai-glow", "text-accent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// `None` keeps the toast until it is closed by hand
    #[serde(rename = "duration")]
    pub duration_ms: Option<u32>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, message)
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration() {
        let toast = Toast::new(ToastKind::Info, "Heads up", "Something happened");
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
    }

    #[test]
    fn test_duration_overrides() {
        assert_eq!(Toast::success("a", "b").with_duration(4000).duration_ms, Some(4000));
    }

    #[test]
    fn test_payload_shape() {
        let toast = Toast::success("Subscribed!", "Thanks").with_duration(4000);
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "success",
                "title": "Subscribed!",
                "message": "Thanks",
                "duration": 4000
            })
        );
    }

    #[test]
    fn test_ai_kind_styling() {
        let (container, icon) = ToastKind::Ai.classes();
        assert!(container.contains("ai-glow"));
        assert_eq!(icon, "text-accent");
        assert_eq!(ToastKind::Ai.icon(), "bot");
    }
}
