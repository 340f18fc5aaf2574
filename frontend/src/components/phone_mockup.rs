use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

const REST_TRANSFORM: &str = "rotate(5deg)";
const POP_TRANSFORM: &str = "rotate(0deg) scale(1.1)";

#[derive(Clone, Copy, PartialEq)]
enum Sender {
    User,
    Assistant,
}

impl Sender {
    fn class(self) -> &'static str {
        match self {
            Sender::User => "message-user",
            Sender::Assistant => "message-assistant",
        }
    }
}

const MESSAGES: &[(Sender, &str)] = &[
    (Sender::User, "帮我查一下明天北京到上海的高铁票"),
    (Sender::Assistant, "已通过 12306 服务查询到 23 趟列车，最早一班 06:30 发车。"),
    (Sender::User, "再看看上海明天的天气"),
    (Sender::Assistant, "上海明天多云，18~25℃，适合出行。"),
];

/// Mockup follows the cursor at a twentieth of its offset from center.
pub fn tilt_transform(pointer: (f64, f64), center: (f64, f64)) -> String {
    let dx = (pointer.0 - center.0) / 20.0;
    let dy = (pointer.1 - center.1) / 20.0;
    format!("{} translate({}px, {}px)", REST_TRANSFORM, dx, dy)
}

pub fn message_delay_ms(index: usize) -> u32 {
    index as u32 * config::MESSAGE_STAGGER_MS + config::MESSAGE_FIRST_DELAY_MS
}

fn message_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: translateY(0); transition: opacity 0.5s ease, transform 0.5s ease;"
    } else {
        "opacity: 0; transform: translateY(20px);"
    }
}

#[function_component(PhoneMockup)]
pub fn phone_mockup() -> Html {
    let node = use_node_ref();
    let transform = use_state(|| REST_TRANSFORM.to_string());
    let shown = use_state(|| 0usize);

    {
        let shown = shown.setter();
        use_effect_with_deps(
            move |_| {
                let timeouts: Vec<Timeout> = (0..MESSAGES.len())
                    .map(|index| {
                        let shown = shown.clone();
                        Timeout::new(message_delay_ms(index), move || shown.set(index + 1))
                    })
                    .collect();
                move || drop(timeouts)
            },
            (),
        );
    }

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let center = (
                    rect.left() + rect.width() / 2.0,
                    rect.top() + rect.height() / 2.0,
                );
                let pointer = (e.client_x() as f64, e.client_y() as f64);
                transform.set(tilt_transform(pointer, center));
            }
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(REST_TRANSFORM.to_string()))
    };

    let onclick = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| {
            transform.set(POP_TRANSFORM.to_string());
            let transform = transform.clone();
            Timeout::new(config::PHONE_POP_MS, move || {
                transform.set(REST_TRANSFORM.to_string());
            })
            .forget();
        })
    };

    html! {
        <div
            class="phone-mockup"
            ref={node}
            style={format!("transform: {};", *transform)}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
            onclick={onclick}
        >
            <div class="phone-screen">
                { for MESSAGES.iter().enumerate().map(|(index, &(sender, text))| html! {
                    <div class={classes!("message", sender.class())} style={message_style(index < *shown)}>
                        { text }
                    </div>
                }) }
            </div>
        </div>
    }
}
