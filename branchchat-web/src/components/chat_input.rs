use web_sys::HtmlTextAreaElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};
use yew_icons::{Icon, IconId};

struct SuggestedAction {
    title: &'static str,
    action: &'static str,
}

const SUGGESTED_ACTIONS: [SuggestedAction; 2] = [
    SuggestedAction {
        title: "إنشاء تقرير تعريفي شامل عن البنك",
        action: "أنت محلل خبير متخصص في المؤسسات المالية. استخدم بيانات الموقع الرسمي للبنك لتوليد ملف تعريفي مؤسسي منظم يشمل: نظرة عامة، الخدمات والمنتجات، القيادة والحوكمة، آخر التطورات، المسؤولية الاجتماعية، التحول الرقمي، ومعلومات الاتصال.",
    },
    SuggestedAction {
        title: "ما هي العملات التي يمكنني إيداع أموالي في الحساب الجاري؟",
        action: "ما هي العملات التي يمكنني إيداع أموالي في الحساب الجاري",
    },
];

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub question: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(true)]
    pub show_suggestions: bool,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        let question = props.question.clone();
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                on_submit.emit(question.clone());
            }
        })
    };

    let on_send = {
        let on_submit = props.on_submit.clone();
        let question = props.question.clone();
        Callback::from(move |_: yew::MouseEvent| on_submit.emit(question.clone()))
    };

    html! {
        <div class="relative w-full flex flex-col gap-4">
            if props.show_suggestions {
                <div class="hidden md:grid sm:grid-cols-2 gap-2 w-full">
                    { for SUGGESTED_ACTIONS.iter().map(|suggested| {
                        let on_submit = props.on_submit.clone();
                        let action = suggested.action;
                        html! {
                            <button
                                class="btn btn-ghost border border-base-300 rounded-xl px-4 py-3 text-sm h-auto justify-start items-start text-left"
                                type="button"
                                onclick={Callback::from(move |_| on_submit.emit(action.to_string()))}
                            >
                                <span class="font-medium">{ suggested.title }</span>
                            </button>
                        }
                    })}
                </div>
            }

            <textarea
                class={classes!(
                    "textarea", "textarea-bordered", "w-full",
                    "min-h-[4rem]", "resize-none", "rounded-xl", "text-base"
                )}
                placeholder="Send a message..."
                value={props.question.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
                rows="3"
            />

            <button
                class="btn btn-circle btn-sm absolute bottom-2 right-2"
                type="button"
                onclick={on_send}
                disabled={props.disabled || props.question.is_empty()}
            >
                <Icon icon_id={IconId::HeroiconsOutlineArrowUp} class="h-4 w-4" />
            </button>
        </div>
    }
}
