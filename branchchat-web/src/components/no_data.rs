use crate::routes::MainRoute;
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct NoDataMessageProps {
    pub message: String,
    pub link_text: String,
}

/// Centered empty-state message with a way back to the reviews overview.
#[function_component(NoDataMessage)]
pub fn no_data_message(props: &NoDataMessageProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-64 gap-4">
            <p class="text-lg text-base-content/70">{ props.message.clone() }</p>
            <Link<MainRoute> to={MainRoute::Reviews} classes="btn btn-primary btn-sm">
                { props.link_text.clone() }
            </Link<MainRoute>>
        </div>
    }
}
