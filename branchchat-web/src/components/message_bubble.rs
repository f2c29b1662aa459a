use crate::transcript::{ChatEntry, Role};
use yew::{Html, Properties, classes, function_component, html};

const fn role_classes(role: Role) -> &'static str {
    match role {
        Role::User => "bg-primary text-primary-content",
        Role::Assistant => "bg-base-200 text-base-content",
    }
}

const fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageBubbleProps {
    pub entry: ChatEntry,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let alignment = match props.entry.role {
        Role::User => "items-end",
        Role::Assistant => "items-start",
    };

    html! {
        <div class={classes!("flex", "flex-col", "gap-1", alignment)}>
            <span class="text-xs text-base-content/60 font-semibold">
                { role_label(props.entry.role) }
            </span>
            <div class={classes!(
                "rounded-xl", "px-4", "py-3", "shadow-sm", "max-w-2xl",
                "whitespace-pre-wrap",
                role_classes(props.entry.role)
            )}>
                { props.entry.content.clone() }
            </div>
        </div>
    }
}

#[function_component(ThinkingMessage)]
pub fn thinking_message() -> Html {
    html! {
        <div class="text-xs text-base-content/70 animate-pulse py-2">
            {"Assistant is thinking…"}
        </div>
    }
}
