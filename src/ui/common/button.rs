use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Gradient-filled call to action
    Default,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Medium,
    Large,
}

/// Which side of the label the icon sits on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconPosition {
    Left,
    Right,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-gradient-intelligent text-white hover:opacity-90",
            ButtonVariant::Outline => {
                "border border-border text-foreground bg-transparent hover:bg-muted/50"
            }
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "px-4 py-2 text-sm",
            ButtonSize::Large => "px-6 py-3 text-base",
        }
    }
}

/// Type-safe button component with variants, sizes and a loading state
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name shown next to the label
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(default = IconPosition::Left)]
    icon_position: IconPosition,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!(
        "inline-flex items-center justify-center gap-2 rounded-xl font-caption font-medium \
         transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.class(),
        size.class()
    );
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    // The spinner takes the icon's slot on the left while loading
    let leading_icon = move || {
        if loading.get() {
            view! { <Icon name=icons::LOADER class="w-4 h-4 animate-spin" /> }.into_any()
        } else if let (Some(icon_name), IconPosition::Left) = (icon, icon_position) {
            view! { <Icon name=icon_name class="w-4 h-4" /> }.into_any()
        } else {
            ().into_any()
        }
    };

    let trailing_icon = move || match (icon, icon_position) {
        (Some(icon_name), IconPosition::Right) if !loading.get() => {
            view! { <Icon name=icon_name class="w-4 h-4" /> }.into_any()
        }
        _ => ().into_any(),
    };

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() && !disabled.get_untracked() {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            {leading_icon}
            {children()}
            {trailing_icon}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert!(ButtonVariant::Default.class().contains("bg-gradient-intelligent"));
        assert!(ButtonVariant::Outline.class().contains("border"));
        assert_ne!(ButtonVariant::Default.class(), ButtonVariant::Outline.class());
    }
}
