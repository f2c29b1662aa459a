use crate::models::theme::ThemeStore;
use i18nrs::yew::use_translation;
use std::rc::Rc;
use yew::{Callback, Html, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let (i18n, ..) = use_translation();
    let (theme, dispatch) = use_store::<ThemeStore>();

    let toggle_theme = Callback::from(move |_: yew::MouseEvent| {
        dispatch.reduce(|theme| Rc::new(theme.toggled()));
    });

    // Sun in dark mode (switch to light), moon in light mode
    let theme_icon = if theme.dark {
        IconId::HeroiconsSolidSun
    } else {
        IconId::HeroiconsSolidMoon
    };

    html! {
        <button
            class="btn btn-ghost btn-circle"
            onclick={toggle_theme}
            aria-label={i18n.t("theme.selector")}
        >
            <Icon icon_id={theme_icon} class="h-5 w-5" />
        </button>
    }
}
