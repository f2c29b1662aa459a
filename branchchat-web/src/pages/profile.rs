use crate::api::ChatbotClient;
use crate::components::{Loading, Navbar};
use crate::scope::RequestScope;
use crate::sections::{self, Section};
use shared::models::BankProfileData;
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const LOAD_FAILED: &str = "فشل في تحميل بيانات البنك أو الملف الشخصي.";

/// Institution profile browser: free-text sections merged with the
/// structured dataset, searchable, rendered as an accordion.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile_text = use_state(String::new);
    let bank_data = use_state(BankProfileData::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<&'static str>);
    let search = use_state(String::new);
    let expanded = use_state(HashSet::<String>::new);

    // Fetch both profile payloads on mount
    {
        let profile_text = profile_text.clone();
        let bank_data = bank_data.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            let scope = RequestScope::new();
            let continuation = scope.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                let profile_result = client.institution_profile().await;
                let data_result = client.bank_profile_data().await;

                if !continuation.is_alive() {
                    return;
                }

                match (profile_result, data_result) {
                    (Ok(profile), Ok(data)) => {
                        profile_text.set(profile.profile);
                        bank_data.set(data);
                        error.set(None);
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        web_sys::console::error_1(
                            &format!("Error loading institution profile: {err}").into(),
                        );
                        error.set(Some(LOAD_FAILED));
                    }
                }
                loading.set(false);
            });
            move || scope.cancel()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |title: String| {
            let mut next = (*expanded).clone();
            if !next.remove(&title) {
                next.insert(title);
            }
            expanded.set(next);
        })
    };

    if *loading {
        return html! {
            <>
                <Navbar />
                <div class="flex justify-center items-center h-screen">
                    <Loading />
                </div>
            </>
        };
    }

    if let Some(message) = *error {
        return html! {
            <>
                <Navbar />
                <div class="alert alert-error m-4">{ message }</div>
            </>
        };
    }

    let mut all_sections: Vec<Section> = sections::parse_sections(&profile_text);
    all_sections.extend(sections::structured_sections(&bank_data));
    let visible = sections::search_sections(&all_sections, &search);

    html! {
        <>
            <Navbar />
            <div class="container mx-auto p-6">
                <h1 class="text-3xl font-bold mb-4">{"الملف الشخصي للبنك"}</h1>

                <div class="mb-4 relative">
                    <Icon
                        icon_id={IconId::HeroiconsOutlineMagnifyingGlass}
                        class="absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 text-base-content/50"
                    />
                    <input
                        type="text"
                        class="input input-bordered pl-10 w-full"
                        placeholder="بحث في جميع الأقسام..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                </div>

                <div class="space-y-4">
                    { for visible.iter().map(|section| {
                        let title = section.title.clone();
                        let is_expanded = expanded.contains(&title);
                        let toggle = {
                            let on_toggle = on_toggle.clone();
                            let title = title.clone();
                            Callback::from(move |_: MouseEvent| on_toggle.emit(title.clone()))
                        };
                        let chevron = if is_expanded {
                            IconId::HeroiconsOutlineChevronUp
                        } else {
                            IconId::HeroiconsOutlineChevronDown
                        };
                        html! {
                            <div class="border border-base-300 rounded overflow-hidden" key={section.title.clone()}>
                                <div
                                    class="flex items-center justify-between p-4 bg-base-200 cursor-pointer"
                                    onclick={toggle}
                                >
                                    <span class="font-semibold">{ section.title.clone() }</span>
                                    <Icon icon_id={chevron} class="h-4 w-4" />
                                </div>
                                if is_expanded {
                                    <ul class="py-2 px-4 list-disc list-inside space-y-1">
                                        { for section.items.iter().map(|item| html! {
                                            <li>{ item.clone() }</li>
                                        })}
                                    </ul>
                                }
                            </div>
                        }
                    })}
                </div>
            </div>
        </>
    }
}
