use crate::actions::ActionPhase;
use crate::api::ChatbotClient;
use crate::routes::MainRoute;
use crate::scope::RequestScope;
use crate::sessions::{DeleteOutcome, SessionStore};
use chrono::Utc;
use shared::models::{ChatSummary, Timestamp};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or(None)]
    pub active_chat: Option<i64>,
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message("Are you sure you want to delete this chat?")
                .ok()
        })
        .unwrap_or(false)
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let navigator = use_navigator();

    let store = use_state(SessionStore::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Phases live in refs so rapid re-clicks hit the same guard; the
    // state mirrors exist only to re-render buttons
    let create_phase = use_mut_ref(ActionPhase::default);
    let delete_phase = use_mut_ref(ActionPhase::default);
    let create_view = use_state(ActionPhase::default);
    let deleting_id = use_state(|| None::<i64>);

    // Fetch existing chats once
    {
        let store = store.clone();
        let loading = loading.clone();
        let error = error.clone();
        let active = props.active_chat;
        use_effect_with((), move |()| {
            let scope = RequestScope::new();
            let continuation = scope.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                match client.list_chats().await {
                    Ok(sessions) => {
                        if continuation.is_alive() {
                            let mut next = SessionStore::default();
                            next.replace(sessions);
                            next.set_active(active);
                            store.set(next);
                            error.set(None);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error fetching chats: {err}").into());
                        if continuation.is_alive() {
                            error.set(Some(format!("Failed to load chats: {err}")));
                        }
                    }
                }
                if continuation.is_alive() {
                    loading.set(false);
                }
            });
            move || scope.cancel()
        });
    }

    // Keep the active flag in sync with the open session
    {
        let store = store.clone();
        use_effect_with(props.active_chat, move |active| {
            let mut next = (*store).clone();
            next.set_active(*active);
            store.set(next);
            || ()
        });
    }

    let on_create = {
        let store = store.clone();
        let create_phase = create_phase.clone();
        let create_view = create_view.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if !create_phase.borrow_mut().begin() {
                return;
            }
            create_view.set(ActionPhase::InFlight);

            let store = store.clone();
            let create_phase = create_phase.clone();
            let create_view = create_view.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                match client.create_chat().await {
                    Ok(created) => {
                        let mut next = (*store).clone();
                        next.push_created(ChatSummary {
                            id: created.id,
                            created_at: Timestamp(Utc::now()),
                        });
                        store.set(next);
                        create_phase.borrow_mut().settle();
                        error.set(None);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error creating chat: {err}").into());
                        create_phase.borrow_mut().fail();
                        error.set(Some(format!("Failed to create chat: {err}")));
                    }
                }
                create_view.set(*create_phase.borrow());
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        let delete_phase = delete_phase.clone();
        let deleting_id = deleting_id.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |chat_id: i64| {
            // the open session cannot be deleted
            if store.active() == Some(chat_id) {
                return;
            }
            if !confirm_delete() {
                return;
            }
            if !delete_phase.borrow_mut().begin() {
                return;
            }
            deleting_id.set(Some(chat_id));

            let store = store.clone();
            let delete_phase = delete_phase.clone();
            let deleting_id = deleting_id.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                match client.delete_chat(chat_id).await {
                    Ok(()) => {
                        let mut next = (*store).clone();
                        let outcome = next.remove(chat_id);
                        store.set(next);
                        delete_phase.borrow_mut().settle();
                        error.set(None);

                        // the last chat disappearing sends the user home
                        if outcome == (DeleteOutcome::Removed { emptied: true }) {
                            if let Some(nav) = &navigator {
                                nav.push(&MainRoute::Home);
                            }
                            on_close.emit(());
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error deleting chat: {err}").into());
                        delete_phase.borrow_mut().fail();
                        error.set(Some(format!("Failed to delete chat: {err}")));
                    }
                }
                deleting_id.set(None);
            });
        })
    };

    let on_select = {
        let navigator = navigator;
        let on_close = props.on_close.clone();
        Callback::from(move |chat_id: i64| {
            if let Some(nav) = &navigator {
                nav.push(&MainRoute::ChatSession {
                    chat_id: chat_id.to_string(),
                });
            }
            on_close.emit(());
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let translate = if props.open {
        "translate-x-0"
    } else {
        "-translate-x-full"
    };

    html! {
        <aside class={classes!(
            "fixed", "inset-y-0", "left-0", "z-50", "w-64",
            "bg-base-200", "border-r", "border-base-300",
            "transform", "transition-transform", "duration-200", "ease-in-out",
            translate
        )}>
            <div class="flex flex-col h-full p-4">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-lg font-semibold">{"Chats"}</h2>
                    <button class="btn btn-ghost btn-sm btn-circle" type="button" onclick={on_close_click}>
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="h-4 w-4" />
                    </button>
                </div>

                <button
                    class="btn btn-outline btn-sm mb-4 gap-2"
                    type="button"
                    onclick={on_create}
                    disabled={create_view.is_in_flight()}
                >
                    <Icon icon_id={IconId::HeroiconsOutlinePlusCircle} class="h-4 w-4" />
                    { if create_view.is_in_flight() { "Creating…" } else { "New Chat" } }
                </button>

                {
                    (*error)
                        .clone()
                        .map_or_else(
                            || html! {},
                            |message| html! {
                                <div class="alert alert-error text-sm mb-4">{ message }</div>
                            },
                        )
                }

                <div class="flex-1 overflow-y-auto">
                    if *loading {
                        <p class="text-center text-sm text-base-content/60">{"Loading chats…"}</p>
                    } else if store.is_empty() {
                        <p class="text-center text-sm text-base-content/60">
                            {"No chats yet. Create one above."}
                        </p>
                    } else {
                        <ul class="space-y-2">
                            { for store.sessions().iter().enumerate().map(|(index, session)| {
                                let chat_id = session.id;
                                let is_active = store.active() == Some(chat_id);
                                let is_deleting = *deleting_id == Some(chat_id);
                                let select = {
                                    let on_select = on_select.clone();
                                    Callback::from(move |_: MouseEvent| on_select.emit(chat_id))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |event: MouseEvent| {
                                        event.stop_propagation();
                                        on_delete.emit(chat_id);
                                    })
                                };
                                let class = if is_active {
                                    classes!("btn", "btn-secondary", "btn-sm", "w-full", "justify-start", "gap-2", "pr-8")
                                } else {
                                    classes!("btn", "btn-ghost", "btn-sm", "w-full", "justify-start", "gap-2", "pr-8")
                                };
                                html! {
                                    <li class="relative group" key={chat_id}>
                                        <button class={class} type="button" onclick={select}>
                                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-4 w-4" />
                                            { format!("Chat {}", index + 1) }
                                        </button>
                                        <button
                                            class="btn btn-ghost btn-xs btn-circle absolute right-1 top-1/2 -translate-y-1/2 opacity-0 group-hover:opacity-100 transition-opacity"
                                            type="button"
                                            disabled={is_deleting}
                                            onclick={delete}
                                        >
                                            { if is_deleting {
                                                html! { "…" }
                                            } else {
                                                html! { <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-4 w-4 text-error" /> }
                                            }}
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                </div>
            </div>
        </aside>
    }
}
