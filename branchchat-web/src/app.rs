use crate::models::theme::ThemeStore;
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (theme, _dispatch) = use_store::<ThemeStore>();

    // Reflect the stored theme on the document element whenever it changes
    {
        let dark = theme.dark;
        use_effect_with(dark, move |_| {
            ThemeStore::apply(dark);
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
