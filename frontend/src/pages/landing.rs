use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::catalog::{CatalogLoader, CatalogTargets, JsonCatalogSource, ListKind, TargetView};
use crate::components::phone_mockup::PhoneMockup;
use crate::components::service_grid::ServiceGrid;
use crate::config;
use crate::effects::{anchor_callback, use_count_up, use_scroll_reveal};

const FEATURES: &[(&str, &str, &str)] = &[
    ("🔌", "即插即用", "复制服务地址到支持 MCP 的客户端，无需部署即可使用。"),
    ("⚡", "远程直连", "所有服务均通过 SSE / Streamable HTTP 远程提供，低延迟稳定可用。"),
    ("🧩", "丰富生态", "出行、地图、搜索、办公、金融，一站式聚合常用能力。"),
    ("🔒", "安全可控", "推荐服务使用您自己的密钥，调用数据不经过第三方。"),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("19+", "可用服务"),
    ("12", "限时免费"),
    ("24/7", "在线运行"),
];

struct Plan {
    name: &'static str,
    amount: &'static str,
    period: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "体验版",
        amount: "0",
        period: "元/月",
        features: &["全部限时免费服务", "每日 100 次调用", "社区支持"],
        featured: false,
    },
    Plan {
        name: "专业版",
        amount: "29",
        period: "元/月",
        features: &["全部免费与推荐服务", "每日 5000 次调用", "优先支持"],
        featured: true,
    },
    Plan {
        name: "团队版",
        amount: "99",
        period: "元/月",
        features: &["不限调用次数", "自定义远程服务", "专属技术支持"],
        featured: false,
    },
];

/// Inline style of a pricing card given which card, if any, is hovered.
///
/// Hovering dims every other non-featured card; the hovered card and the
/// featured card keep their resting style.
pub fn pricing_card_style(index: usize, featured: bool, hovered: Option<usize>) -> &'static str {
    match hovered {
        Some(h) if h != index && !featured => {
            "opacity: 0.7; transform: translateY(0px) scale(0.95); transition: opacity 0.3s ease, transform 0.3s ease;"
        }
        _ if featured => {
            "opacity: 1; transform: translateY(0px) scale(1.05); transition: opacity 0.3s ease, transform 0.3s ease;"
        }
        _ => "opacity: 1; transform: translateY(0px) scale(1); transition: opacity 0.3s ease, transform 0.3s ease;",
    }
}

fn entrance_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: translateY(0); transition: opacity 0.8s ease, transform 0.8s ease;"
    } else {
        "opacity: 0; transform: translateY(30px);"
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    // Number of hero blocks revealed so far: title, subtitle, buttons.
    let stage = use_state(|| 0usize);

    {
        let stage = stage.setter();
        use_effect_with_deps(
            move |_| {
                let timeouts: Vec<Timeout> = config::HERO_DELAYS_MS
                    .iter()
                    .enumerate()
                    .map(|(index, &delay)| {
                        let stage = stage.clone();
                        Timeout::new(delay, move || stage.set(index + 1))
                    })
                    .collect();
                move || drop(timeouts)
            },
            (),
        );
    }

    html! {
        <section class="hero" id="top">
            <div class="container hero-container">
                <div class="hero-content">
                    <h1 class="hero-title" style={entrance_style(*stage >= 1)}>
                        {"让 AI 连接一切"}
                    </h1>
                    <p class="hero-subtitle" style={entrance_style(*stage >= 2)}>
                        {"精选远程 MCP 服务，一行地址接入购票、地图、搜索、图表等能力。"}
                    </p>
                    <div class="hero-buttons" style={entrance_style(*stage >= 3)}>
                        <a href="#services" class="btn btn-primary" onclick={anchor_callback("services")}>
                            {"浏览服务"}
                        </a>
                        <a href="#download" class="btn btn-secondary" onclick={anchor_callback("download")}>
                            {"下载客户端"}
                        </a>
                    </div>
                </div>
                <PhoneMockup />
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features" id="features">
            <div class="container">
                <h2 class="section-title">{"为什么选择我们"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|&(icon, title, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{ icon }</div>
                            <h3>{ title }</h3>
                            <p>{ text }</p>
                        </div>
                    }) }
                </div>
                <div class="highlights">
                    { for HIGHLIGHTS.iter().map(|&(figure, label)| html! {
                        <div class="highlight-card">
                            <span class="highlight-figure">{ figure }</span>
                            <span class="highlight-label">{ label }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

/// The two service grids, filled by the catalog loader.
#[function_component(Services)]
fn services() -> Html {
    let free_view = use_state(|| TargetView::Loading);
    let recommended_view = use_state(|| TargetView::Loading);

    let loader = {
        let free = free_view.setter();
        let recommended = recommended_view.setter();
        use_memo(
            move |_| {
                let targets = CatalogTargets::new()
                    .with(ListKind::Free, Rc::new(free))
                    .with(ListKind::Recommended, Rc::new(recommended));
                CatalogLoader::new(Rc::new(JsonCatalogSource::bundled()), targets)
            },
            (),
        )
    };

    {
        let loader = loader.clone();
        use_effect_with_deps(
            move |_| {
                loader.spawn_load();
                || ()
            },
            (),
        );
    }

    let on_retry = loader.retry_callback();

    html! {
        <section class="services" id="services">
            <div class="container">
                <h2 class="section-title">{"MCP 服务"}</h2>
                <div class="service-category">
                    <h3 class="category-title">{"🎁 限时免费"}</h3>
                    <ServiceGrid
                        kind={ListKind::Free}
                        view={(*free_view).clone()}
                        on_retry={on_retry.clone()}
                    />
                </div>
                <div class="service-category">
                    <h3 class="category-title">{"⭐ 推荐服务"}</h3>
                    <ServiceGrid
                        kind={ListKind::Recommended}
                        view={(*recommended_view).clone()}
                        on_retry={on_retry}
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section class="pricing" id="pricing">
            <div class="container">
                <h2 class="section-title">{"价格方案"}</h2>
                <div class="pricing-grid">
                    { for PLANS.iter().enumerate().map(|(index, plan)| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <div
                                class={classes!("pricing-card", plan.featured.then(|| "featured"))}
                                style={pricing_card_style(index, plan.featured, *hovered)}
                                onmouseenter={onmouseenter}
                                onmouseleave={onmouseleave}
                            >
                                <h3>{ plan.name }</h3>
                                <div class="price">
                                    <span class="currency">{"¥"}</span>
                                    <span class="amount">{ plan.amount }</span>
                                    <span class="period">{ plan.period }</span>
                                </div>
                                <ul>
                                    { for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Download)]
fn download() -> Html {
    html! {
        <section class="download" id="download">
            <div class="container">
                <h2 class="section-title">{"立即开始"}</h2>
                <p>{"在任何支持 MCP 的客户端中添加服务地址即可使用。"}</p>
                <div class="download-buttons">
                    <a class="download-btn" href="#services" onclick={anchor_callback("services")}>
                        {"查看服务地址"}
                    </a>
                </div>
            </div>
            <footer class="footer">
                <p>{"© 2025 MCP 服务中心"}</p>
            </footer>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_scroll_reveal();
    use_count_up();

    html! {
        <div class="landing-page">
            <style>{ SITE_CSS }</style>
            <Hero />
            <Features />
            <Services />
            <Pricing />
            <Download />
        </div>
    }
}

const SITE_CSS: &str = r#"
    :root {
        --primary: #4f6cf7;
        --gradient-primary: linear-gradient(135deg, #4f6cf7 0%, #8a5cf6 100%);
        --text-primary: #1d1d1f;
        --text-secondary: #6e6e73;
        --surface: #ffffff;
        --background: #f5f7fb;
    }
    [data-theme="dark"] {
        --text-primary: #f5f5f7;
        --text-secondary: #a1a1a6;
        --surface: #1e1e22;
        --background: #121214;
    }
    body {
        margin: 0;
        background: var(--background);
        color: var(--text-primary);
        font-family: -apple-system, BlinkMacSystemFont, "PingFang SC", "Microsoft YaHei", sans-serif;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 24px;
    }
    .section-title {
        font-size: 2.2rem;
        text-align: center;
        margin-bottom: 3rem;
    }
    .hero {
        padding: 140px 0 80px;
    }
    .hero-container {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 48px;
    }
    .hero-title {
        font-size: 3.2rem;
        margin: 0 0 1rem;
    }
    .hero-subtitle {
        font-size: 1.2rem;
        color: var(--text-secondary);
    }
    .btn {
        display: inline-block;
        padding: 12px 28px;
        border-radius: 12px;
        text-decoration: none;
        margin-right: 12px;
        font-weight: 500;
    }
    .btn-primary {
        background: var(--gradient-primary);
        color: white;
    }
    .btn-secondary {
        border: 1px solid var(--primary);
        color: var(--primary);
    }
    .phone-mockup {
        width: 280px;
        min-height: 520px;
        border-radius: 36px;
        background: var(--surface);
        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.15);
        padding: 24px 16px;
        transition: transform 0.2s ease;
        cursor: pointer;
    }
    .message {
        padding: 10px 14px;
        border-radius: 16px;
        margin-bottom: 12px;
        font-size: 0.9rem;
    }
    .message-user {
        background: var(--primary);
        color: white;
        margin-left: 40px;
    }
    .message-assistant {
        background: var(--background);
        margin-right: 40px;
    }
    .features, .services, .pricing, .download {
        padding: 80px 0;
    }
    .features-grid, .highlights {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 24px;
    }
    .highlights {
        margin-top: 48px;
    }
    .feature-card, .highlight-card, .pricing-card {
        background: var(--surface);
        border-radius: 20px;
        padding: 32px;
        box-shadow: 0 8px 30px rgba(0, 0, 0, 0.06);
    }
    .highlight-card {
        text-align: center;
    }
    .highlight-figure {
        display: block;
        font-size: 2.4rem;
        font-weight: 700;
        color: var(--primary);
    }
    .service-category {
        margin-bottom: 56px;
    }
    .mcp-services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
        gap: 20px;
    }
    .mcp-service-card {
        background: var(--surface);
        border-radius: 16px;
        padding: 20px;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
        cursor: pointer;
    }
    .mcp-service-card:hover {
        transform: translateY(-8px);
        box-shadow: 0 12px 40px rgba(0, 0, 0, 0.12);
    }
    .mcp-service-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 10px;
    }
    .mcp-service-name {
        margin: 0;
        font-size: 1.1rem;
    }
    .mcp-service-category {
        font-size: 0.75rem;
        padding: 4px 10px;
        border-radius: 999px;
    }
    .free-service-badge {
        background: rgba(52, 199, 89, 0.15);
        color: #1f9d48;
    }
    .recommended-service-badge {
        background: rgba(79, 108, 247, 0.15);
        color: var(--primary);
    }
    .mcp-service-description {
        color: var(--text-secondary);
        font-size: 0.9rem;
        line-height: 1.6;
        margin: 0;
    }
    .loading-placeholder, .error-message {
        grid-column: 1 / -1;
        text-align: center;
        padding: 40px;
        color: var(--text-secondary);
    }
    .retry-button {
        margin-top: 10px;
        padding: 8px 16px;
        background: var(--gradient-primary);
        color: white;
        border: none;
        border-radius: 8px;
        cursor: pointer;
        font-weight: 500;
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 24px;
        align-items: center;
    }
    .pricing-card.featured {
        border: 2px solid var(--primary);
    }
    .amount {
        font-size: 3rem;
        font-weight: 700;
    }
    .download {
        text-align: center;
    }
    .download-btn {
        display: inline-block;
        padding: 14px 32px;
        border-radius: 12px;
        background: var(--gradient-primary);
        color: white;
        text-decoration: none;
    }
    .footer {
        margin-top: 80px;
        color: var(--text-secondary);
        font-size: 0.85rem;
    }
    @media (max-width: 768px) {
        .hero-container {
            flex-direction: column;
        }
        .hero-title {
            font-size: 2.2rem;
        }
    }
"#;
