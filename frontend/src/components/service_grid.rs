use gloo_timers::callback::Timeout;
use log::info;
use yew::functional::UseStateSetter;
use yew::prelude::*;

use crate::catalog::loader::LOADING_TEXT;
use crate::catalog::{ErrorPanel, ListKind, RenderTarget, Service, TargetView};
use crate::config;

const PRESSED_TRANSFORM: &str = "translateY(-12px) scale(1.02)";
const SETTLED_TRANSFORM: &str = "translateY(-8px)";

/// A grid's view lives in component state; the loader writes through the
/// state setter.
impl RenderTarget for UseStateSetter<TargetView> {
    fn show(&self, view: TargetView) {
        self.set(view);
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceGridProps {
    pub kind: ListKind,
    pub view: TargetView,
    pub on_retry: Callback<()>,
}

#[function_component(ServiceGrid)]
pub fn service_grid(props: &ServiceGridProps) -> Html {
    let content = match &props.view {
        TargetView::Loading => placeholder(LOADING_TEXT),
        TargetView::Placeholder(text) => placeholder(text),
        TargetView::Cards { kind, services } => html! {
            <>
                { for services.iter().map(|service| html! {
                    <ServiceCard service={service.clone()} kind={*kind} />
                }) }
            </>
        },
        TargetView::Error(panel) => html! {
            <ErrorPanelView panel={panel.clone()} on_retry={props.on_retry.clone()} />
        },
    };

    html! {
        <div id={props.kind.target_id()} class="mcp-services-grid">
            { content }
        </div>
    }
}

fn placeholder(text: &str) -> Html {
    html! {
        <div class="loading-placeholder">
            <p>{ text }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub kind: ListKind,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let lift = use_state(|| None::<&'static str>);

    // Visual feedback only; a card does not open its endpoint.
    let onclick = {
        let lift = lift.clone();
        let name = props.service.name.clone();
        Callback::from(move |_: MouseEvent| {
            info!("点击了服务: {}", name);
            lift.set(Some(PRESSED_TRANSFORM));
            let lift = lift.clone();
            Timeout::new(config::CARD_PRESS_MS, move || {
                lift.set(Some(SETTLED_TRANSFORM));
            })
            .forget();
        })
    };

    let style = (*lift)
        .map(|transform| format!("transform: {};", transform))
        .unwrap_or_default();

    html! {
        <div class="mcp-service-card" style={style} onclick={onclick}>
            <div class="mcp-service-header">
                <h4 class="mcp-service-name">{ &props.service.name }</h4>
                <span class={classes!("mcp-service-category", props.kind.badge_class())}>
                    { &props.service.category }
                </span>
            </div>
            <p class="mcp-service-description">{ &props.service.description }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelViewProps {
    pub panel: ErrorPanel,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorPanelView)]
pub fn error_panel_view(props: &ErrorPanelViewProps) -> Html {
    let onclick = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="error-message">
            <h4>{ props.panel.title() }</h4>
            <p>{ &props.panel.message }</p>
            <button class="retry-button" onclick={onclick}>{ props.panel.retry_label() }</button>
        </div>
    }
}
