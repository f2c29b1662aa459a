use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

/// Welcome panel shown while a session has no messages yet.
#[function_component(Overview)]
pub fn overview() -> Html {
    html! {
        <div class="flex-grow flex items-center justify-center">
            <div class="rounded-xl p-6 flex flex-col gap-8 leading-relaxed text-center max-w-xl mt-16">
                <p class="flex flex-row justify-center gap-4 items-center">
                    <Icon icon_id={IconId::HeroiconsOutlineCpuChip} class="h-11 w-11" />
                    <span>{"+"}</span>
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleOvalLeft} class="h-11 w-11" />
                </p>
                <p>
                    {"Welcome to "}<strong>{"BranchChat"}</strong><br />
                    {"Your AI-powered assistant for all your banking needs."}
                </p>
            </div>
        </div>
    }
}
