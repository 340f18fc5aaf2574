use log::debug;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than a stored "dark" means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the theme the button switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
        debug!("theme set to {}", theme.as_str());
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let stored = use_local_storage::<String>(config::THEME_STORAGE_KEY.to_string());
    let theme = Theme::from_stored((*stored).as_deref());

    use_effect_with_deps(
        |theme| {
            apply_theme(*theme);
            || ()
        },
        theme,
    );

    let onclick = {
        let stored = stored.clone();
        Callback::from(move |_: MouseEvent| {
            stored.set(theme.toggled().as_str().to_string());
        })
    };

    html! {
        <button class="theme-toggle" title="切换主题" onclick={onclick}>
            { theme.toggle_icon() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_maps_to_theme() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggling_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
    }
}
