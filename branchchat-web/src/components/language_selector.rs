use crate::language;
use i18nrs::yew::use_translation;
use yew::prelude::*;

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = i18n.get_current_language().to_string();

    let active_flag = language::get_language_info(&current).map_or("🌐", |info| info.flag);

    let supported = language::supported_languages();
    let mut languages: Vec<_> = supported.values().cloned().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <span>{ active_flag }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-40">
                { for languages.into_iter().map(|info| {
                    let is_active = info.code == current;
                    let set_language = set_language.clone();
                    let code = info.code;
                    html! {
                        <li key={info.code}>
                            <button
                                class={if is_active { "active" } else { "" }}
                                type="button"
                                onclick={Callback::from(move |_| set_language.emit(code.to_string()))}
                            >
                                <span>{ info.flag }</span>
                                <span>{ info.native_name }</span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
