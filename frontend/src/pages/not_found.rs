use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"页面不存在"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"返回首页"}
            </Link<Route>>
        </div>
    }
}
