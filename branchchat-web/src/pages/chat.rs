use crate::api::ChatbotClient;
use crate::components::{ChatInput, MessageBubble, Overview, Sidebar, ThinkingMessage};
use crate::routes::MainRoute;
use crate::scope::RequestScope;
use crate::transcript::{SubmitOutcome, Transcript};
use gloo_timers::callback::Timeout;
use shared::models::{MessageSender, SendMessageRequest};
use wasm_bindgen::{JsCast, closure::Closure};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ErrorEvent, MessageEvent, WebSocket};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq, Eq)]
pub struct ChatPageProps {
    #[prop_or(None)]
    pub chat_id: Option<String>,
}

type SocketClosures = (
    Closure<dyn FnMut(MessageEvent)>,
    Closure<dyn FnMut(ErrorEvent)>,
);

#[function_component(ChatPage)]
pub fn chat_page(props: &ChatPageProps) -> Html {
    let navigator = use_navigator();
    let chat_id = props
        .chat_id
        .as_ref()
        .and_then(|value| value.parse::<i64>().ok());

    let sidebar_open = use_state(|| false);
    let question = use_state(String::new);
    let busy_notice = use_state(|| None::<&'static str>);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    // The transcript lives in a ref so socket listeners always see the
    // latest state; `revision` drives re-renders after each mutation.
    let transcript = use_mut_ref(Transcript::default);
    let revision = use_state(|| 0u32);
    let socket = use_mut_ref(|| None::<WebSocket>);

    // A non-numeric session id in the route falls back to the default
    // chat route instead of rendering a broken view.
    {
        let invalid = props.chat_id.is_some() && chat_id.is_none();
        let navigator = navigator.clone();
        use_effect_with(invalid, move |is_invalid| {
            if *is_invalid
                && let Some(nav) = &navigator
            {
                nav.push(&MainRoute::Chat);
            }
            || ()
        });
    }

    // Load persisted history when the session changes
    {
        let transcript = transcript.clone();
        let revision = revision.clone();
        let navigator = navigator.clone();
        use_effect_with(chat_id, move |id| {
            *transcript.borrow_mut() = Transcript::default();
            revision.set((*revision).wrapping_add(1));

            let scope = RequestScope::new();
            if let Some(chat_id) = *id {
                let continuation = scope.clone();
                spawn_local(async move {
                    let client = ChatbotClient::shared();
                    match client.chat_messages(chat_id).await {
                        Ok(history) => {
                            if continuation.is_alive() {
                                *transcript.borrow_mut() = Transcript::from_history(&history);
                                revision.set((*revision).wrapping_add(1));
                            }
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error loading messages: {err}").into(),
                            );
                            // the session is unknown to the backend, so
                            // fall back to the default chat route
                            if continuation.is_alive()
                                && let Some(nav) = &navigator
                            {
                                nav.push(&MainRoute::Chat);
                            }
                        }
                    }
                });
            }
            move || scope.cancel()
        });
    }

    // Open the streaming socket once and tear it down on unmount
    {
        let transcript = transcript.clone();
        let revision = revision.clone();
        let socket = socket.clone();
        use_effect_with((), move |()| {
            let client = ChatbotClient::shared();
            let mut closures: Option<SocketClosures> = None;

            match WebSocket::new(client.socket_url()) {
                Ok(ws) => {
                    let on_message = {
                        let transcript = transcript.clone();
                        let revision = revision.clone();
                        Closure::<dyn FnMut(MessageEvent)>::wrap(Box::new(
                            move |event: MessageEvent| {
                                if let Some(frame) = event.data().as_string() {
                                    transcript.borrow_mut().apply_chunk(&frame);
                                    revision.set((*revision).wrapping_add(1));
                                }
                            },
                        ))
                    };

                    let on_error = {
                        let transcript = transcript.clone();
                        let revision = revision.clone();
                        Closure::<dyn FnMut(ErrorEvent)>::wrap(Box::new(
                            move |event: ErrorEvent| {
                                web_sys::console::error_1(
                                    &format!("WebSocket error: {}", event.message()).into(),
                                );
                                transcript.borrow_mut().fail();
                                revision.set((*revision).wrapping_add(1));
                            },
                        ))
                    };

                    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
                    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
                    closures = Some((on_message, on_error));
                    *socket.borrow_mut() = Some(ws);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to open websocket: {err:?}").into());
                }
            }

            move || {
                if let Some(ws) = socket.borrow_mut().take() {
                    let _ = ws.close();
                }
                drop(closures);
            }
        });
    }

    let on_submit = {
        let transcript = transcript.clone();
        let revision = revision.clone();
        let question = question.clone();
        let busy_notice = busy_notice.clone();
        let notice_timer = notice_timer.clone();
        let socket = socket.clone();
        Callback::from(move |text: String| {
            match transcript.borrow_mut().submit(&text) {
                SubmitOutcome::EmptyInput => return,
                SubmitOutcome::Busy => {
                    busy_notice.set(Some(
                        "Please wait for the assistant to finish responding.",
                    ));
                    let notice = busy_notice.clone();
                    *notice_timer.borrow_mut() =
                        Some(Timeout::new(2_500, move || notice.set(None)));
                    return;
                }
                SubmitOutcome::Accepted => {}
            }
            question.set(String::new());
            revision.set((*revision).wrapping_add(1));

            let outbound = text.trim().to_string();
            let sent = {
                let socket_ref = socket.borrow();
                match socket_ref.as_ref() {
                    Some(ws) if ws.ready_state() == WebSocket::OPEN => {
                        Some(ws.send_with_str(&outbound).is_ok())
                    }
                    _ => None,
                }
            };

            match sent {
                Some(true) => {}
                Some(false) => {
                    transcript.borrow_mut().fail();
                    revision.set((*revision).wrapping_add(1));
                }
                // socket not open: request/response fallback
                None => {
                    if let Some(chat_id) = chat_id {
                        let transcript = transcript.clone();
                        let revision = revision.clone();
                        spawn_local(async move {
                            let client = ChatbotClient::shared();
                            let request = SendMessageRequest {
                                chat_id,
                                user_message: outbound,
                            };
                            match client.send_message(&request).await {
                                Ok(messages) => {
                                    let reply = messages
                                        .iter()
                                        .rev()
                                        .find(|message| message.sender == MessageSender::Bot)
                                        .map(|message| message.content.clone());
                                    match reply {
                                        Some(content) => {
                                            transcript.borrow_mut().settle_with(&content);
                                        }
                                        None => transcript.borrow_mut().fail(),
                                    }
                                }
                                Err(err) => {
                                    web_sys::console::error_1(
                                        &format!("Error sending message: {err}").into(),
                                    );
                                    transcript.borrow_mut().fail();
                                }
                            }
                            revision.set((*revision).wrapping_add(1));
                        });
                    } else {
                        transcript.borrow_mut().fail();
                        revision.set((*revision).wrapping_add(1));
                    }
                }
            }
        })
    };

    let on_question_change = {
        let question = question.clone();
        Callback::from(move |value: String| question.set(value))
    };

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |()| sidebar_open.set(!*sidebar_open))
    };

    let on_menu_click = {
        let toggle_sidebar = toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| toggle_sidebar.emit(()))
    };

    let current = transcript.borrow().clone();
    let _ = *revision;

    let bottom_ref = use_node_ref();
    {
        let bottom_ref = bottom_ref.clone();
        use_effect_with(current.entries().len(), move |_| {
            if let Some(element) = bottom_ref.cast::<web_sys::Element>() {
                element.scroll_into_view();
            }
            || ()
        });
    }

    html! {
        <div class="flex h-screen bg-base-100 overflow-hidden">
            <Sidebar
                open={*sidebar_open}
                on_close={toggle_sidebar.clone()}
                active_chat={chat_id}
            />

            if *sidebar_open {
                <div
                    class="fixed inset-0 bg-black/50 z-30"
                    onclick={on_menu_click.clone()}
                />
            }

            <div class="flex flex-col flex-1 overflow-hidden">
                <header class="flex items-center gap-3 px-4 py-3 border-b border-base-300">
                    <button class="btn btn-ghost btn-sm btn-circle" type="button" onclick={on_menu_click}>
                        <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
                    </button>
                    <h1 class="text-lg font-semibold">{"BranchChat"}</h1>
                </header>

                <div class="flex-1 overflow-y-auto p-4 space-y-4">
                    if current.is_empty() {
                        <Overview />
                    }
                    { for current.entries().iter().cloned().map(|entry| {
                        let key = entry.id.to_string();
                        html! { <MessageBubble {entry} key={key} /> }
                    })}
                    if current.is_thinking() {
                        <ThinkingMessage />
                    }
                    <div ref={bottom_ref} />
                </div>

                {
                    (*busy_notice).map_or_else(
                        || html! {},
                        |notice| html! {
                            <div class="alert alert-warning rounded-none text-sm py-2">{ notice }</div>
                        },
                    )
                }

                <div class="px-4 py-3">
                    <div class="w-full max-w-3xl mx-auto">
                        <ChatInput
                            question={(*question).clone()}
                            on_change={on_question_change}
                            on_submit={on_submit}
                            disabled={current.is_awaiting()}
                            show_suggestions={current.is_empty()}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
