use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::effects::scroll_to_section;

const NAV_LINKS: &[(&str, &str)] = &[
    ("功能", "features"),
    ("服务", "services"),
    ("价格", "pricing"),
    ("下载", "download"),
];

pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                                is_scrolled.set(is_past_threshold(scroll_y));
                            }
                        }
                    });
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    // Initial state when the page loads already scrolled
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(is_past_threshold(scroll_y));
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link_click = |section: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(section);
        })
    };

    let links_class = classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"));

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <style>{ NAV_CSS }</style>
            <div class="nav-container">
                <a href="#top" class="nav-logo" onclick={link_click("top")}>
                    {"MCP 服务中心"}
                </a>
                <div class={links_class}>
                    { for NAV_LINKS.iter().map(|&(label, section)| html! {
                        <a href={format!("#{}", section)} class="nav-link" onclick={link_click(section)}>
                            { label }
                        </a>
                    }) }
                </div>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button class="menu-toggle" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 1000;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(20px);
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .navbar.scrolled {
        background: rgba(255, 255, 255, 0.95);
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
    }
    [data-theme="dark"] .navbar {
        background: rgba(18, 18, 20, 0.9);
    }
    [data-theme="dark"] .navbar.scrolled {
        background: rgba(18, 18, 20, 0.95);
    }
    .nav-container {
        max-width: 1200px;
        height: 70px;
        margin: 0 auto;
        padding: 0 24px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.2rem;
        color: var(--text-primary);
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 32px;
    }
    .nav-link {
        color: var(--text-primary);
        text-decoration: none;
    }
    .nav-actions {
        display: flex;
        align-items: center;
        gap: 8px;
    }
    .theme-toggle, .menu-toggle {
        background: none;
        border: none;
        font-size: 22px;
        cursor: pointer;
        color: var(--text-primary);
    }
    .menu-toggle {
        display: none;
    }
    @media (max-width: 768px) {
        .menu-toggle {
            display: block;
        }
        .nav-links {
            position: fixed;
            top: 70px;
            left: -100%;
            width: 100%;
            height: calc(100vh - 70px);
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(20px);
            flex-direction: column;
            align-items: center;
            justify-content: flex-start;
            padding-top: 50px;
            transition: left 0.3s ease;
        }
        .nav-links.mobile-menu-open {
            left: 0;
        }
    }
"#;
