//! Static marketing copy for the landing page

/// Navigation targets reached from the landing page
pub mod routes {
    pub const HOME: &str = "/";
    pub const LANDING: &str = "/landing-page";
    pub const AUTHENTICATION: &str = "/user-authentication";
    pub const TRIP_PLANNING_WIZARD: &str = "/trip-planning-wizard";
}

pub const BRAND_NAME: &str = "TravelAI Pro";
pub const PAGE_TITLE: &str = "TravelAI Pro - AI-Powered Travel Planning Platform";
pub const PAGE_DESCRIPTION: &str = "Transform your travel experience with TravelAI Pro. AI-powered trip planning, hidden gems discovery, group collaboration, and 24/7 assistance. Start planning smarter trips today.";

/// One canned result of the hero demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSuggestion {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub budget: &'static str,
    pub kind: &'static str,
}

const DEMO_SUGGESTIONS: [DemoSuggestion; 3] = [
    DemoSuggestion {
        id: 1,
        title: "Hidden Temple Trail",
        description: "Discover ancient temples off the beaten path with local guides",
        duration: "3 days",
        budget: "₹15,000",
        kind: "Cultural",
    },
    DemoSuggestion {
        id: 2,
        title: "Sunset Photography Tour",
        description: "Capture breathtaking golden hour moments at scenic viewpoints",
        duration: "1 day",
        budget: "₹3,500",
        kind: "Adventure",
    },
    DemoSuggestion {
        id: 3,
        title: "Local Food Experience",
        description: "Authentic street food tour with cooking class experience",
        duration: "Half day",
        budget: "₹2,000",
        kind: "Culinary",
    },
];

pub fn demo_suggestions() -> &'static [DemoSuggestion] {
    &DEMO_SUGGESTIONS
}

/// Accent colour family used by cards and badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
    Warning,
    Success,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Secondary => "text-secondary",
            Accent::Accent => "text-accent",
            Accent::Warning => "text-warning",
            Accent::Success => "text-success",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary/10",
            Accent::Secondary => "bg-secondary/10",
            Accent::Accent => "bg-accent/10",
            Accent::Warning => "bg-warning/10",
            Accent::Success => "bg-success/10",
        }
    }

    pub fn border_class(self) -> &'static str {
        match self {
            Accent::Primary => "border-primary/20",
            Accent::Secondary => "border-secondary/20",
            Accent::Accent => "border-accent/20",
            Accent::Warning => "border-warning/20",
            Accent::Success => "border-success/20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "compass",
        title: "Hidden Gems Discovery",
        description: "AI-powered recommendations for off-the-beaten-path destinations that match your interests and travel style.",
        accent: Accent::Accent,
    },
    Feature {
        icon: "users",
        title: "Group Collaboration",
        description: "Plan together with friends and family using real-time voting, shared wishlists, and collaborative decision-making.",
        accent: Accent::Secondary,
    },
    Feature {
        icon: "mic",
        title: "Voice Assistant",
        description: "Natural language planning with multi-language support. Just speak your travel dreams and watch them come to life.",
        accent: Accent::Primary,
    },
    Feature {
        icon: "shield",
        title: "Emergency Copilot",
        description: "24/7 safety assistance with SOS features, real-time alerts, and emergency contact integration for peace of mind.",
        accent: Accent::Warning,
    },
    Feature {
        icon: "bar-chart-3",
        title: "Smart Budget Planning",
        description: "Interactive budget visualization with cost optimization suggestions and real-time expense tracking.",
        accent: Accent::Success,
    },
    Feature {
        icon: "globe",
        title: "Multi-Language Support",
        description: "Travel confidently anywhere with real-time translation, local customs guidance, and cultural insights.",
        accent: Accent::Accent,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const BENEFITS: [Benefit; 4] = [
    Benefit { icon: "zap", text: "Plan trips 10x faster with AI" },
    Benefit { icon: "users", text: "Collaborate with friends seamlessly" },
    Benefit { icon: "shield", text: "24/7 emergency assistance" },
    Benefit { icon: "sparkles", text: "Discover hidden gems everywhere" },
];

pub const NEWSLETTER_PERKS: [&str; 3] = [
    "Weekly AI travel insights",
    "Hidden gem recommendations",
    "Exclusive travel deals",
];

/// Headline figure with a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "50K+", label: "Happy Travelers" },
    Stat { value: "1M+", label: "Trips Planned" },
    Stat { value: "4.9★", label: "User Rating" },
];

pub const PLATFORM_STATS: [Stat; 4] = [
    Stat { value: "1M+", label: "Trips Planned" },
    Stat { value: "50K+", label: "Happy Travelers" },
    Stat { value: "4.9★", label: "User Rating" },
    Stat { value: "24/7", label: "AI Support" },
];

/// Rating advertised across the page
pub const ADVERTISED_RATING: &str = "4.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustIndicator {
    pub icon: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub accent: Accent,
}

pub const TRUST_INDICATORS: [TrustIndicator; 4] = [
    TrustIndicator {
        icon: "shield",
        title: "SSL Secured",
        caption: "Bank-level security",
        accent: Accent::Success,
    },
    TrustIndicator {
        icon: "award",
        title: "IATA Certified",
        caption: "Travel industry approved",
        accent: Accent::Primary,
    },
    TrustIndicator {
        icon: "clock",
        title: "24/7 Support",
        caption: "Always here to help",
        accent: Accent::Accent,
    },
    TrustIndicator {
        icon: "refresh-cw",
        title: "Free Cancellation",
        caption: "Flexible booking terms",
        accent: Accent::Secondary,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLinkGroup {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_LINK_GROUPS: [FooterLinkGroup; 3] = [
    FooterLinkGroup {
        heading: "Product",
        links: &[
            "AI Trip Planner",
            "Hidden Gems",
            "Group Planning",
            "Voice Assistant",
            "Emergency Copilot",
        ],
    },
    FooterLinkGroup {
        heading: "Company",
        links: &["About Us", "Careers", "Press", "Blog", "Contact"],
    },
    FooterLinkGroup {
        heading: "Support",
        links: &[
            "Help Center",
            "Privacy Policy",
            "Terms of Service",
            "Cookie Policy",
            "GDPR",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_suggestions_fixture() {
        let suggestions = demo_suggestions();
        assert_eq!(suggestions.len(), 3);
        let ids: HashSet<u32> = suggestions.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(suggestions[2].kind, "Culinary");
    }

    #[test]
    fn test_routes_are_absolute() {
        for route in [
            routes::HOME,
            routes::LANDING,
            routes::AUTHENTICATION,
            routes::TRIP_PLANNING_WIZARD,
        ] {
            assert!(route.starts_with('/'), "{route} should be absolute");
        }
    }

    #[test]
    fn test_feature_titles_unique() {
        let titles: HashSet<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn test_accent_classes_match_family() {
        assert_eq!(Accent::Warning.text_class(), "text-warning");
        assert_eq!(Accent::Warning.bg_class(), "bg-warning/10");
        assert_eq!(Accent::Warning.border_class(), "border-warning/20");
    }

    #[test]
    fn test_footer_groups_have_links() {
        assert!(FOOTER_LINK_GROUPS.iter().all(|g| !g.links.is_empty()));
    }
}
