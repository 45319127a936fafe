use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons, without .svg)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(into, default = "w-5 h-5".into())]
    class: String,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon names used across the site
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BOT: &str = "bot";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const HEART: &str = "heart";
    pub const HOME: &str = "home";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const PLANE: &str = "plane";
    pub const PLAY: &str = "play";
    pub const QUOTE: &str = "quote";
    pub const ROCKET: &str = "rocket";
    pub const SEND: &str = "send";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const TAG: &str = "tag";
    pub const WAND: &str = "wand-2";
    pub const X: &str = "x";
    pub const COMPASS: &str = "compass";
}
