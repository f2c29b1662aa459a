use crate::components::language_selector::LanguageSelector;
use crate::components::theme_toggle::ThemeToggle;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <nav class="navbar sticky top-0 z-50 justify-between bg-base-300 shadow-lg px-4 sm:px-8">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg font-bold">
                { i18n.t("app.title") }
            </Link<MainRoute>>
            <div class="flex items-center gap-2">
                <Link<MainRoute> to={MainRoute::Reviews} classes="btn btn-ghost btn-sm">
                    { i18n.t("nav.reviews") }
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                    { i18n.t("nav.login") }
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-outline btn-sm">
                    { i18n.t("nav.signup") }
                </Link<MainRoute>>
                <LanguageSelector />
                <ThemeToggle />
                <Link<MainRoute> to={MainRoute::Chat} classes="btn btn-warning btn-sm font-semibold">
                    { i18n.t("nav.start_chatting") }
                </Link<MainRoute>>
            </div>
        </nav>
    }
}
