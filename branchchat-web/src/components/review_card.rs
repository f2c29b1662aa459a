use shared::models::{Review, Sentiment};
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ReviewCardProps {
    pub review: Review,
}

fn maps_link(location: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        String::from(js_sys::encode_uri_component(location))
    )
}

const fn sentiment_dot(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "bg-success",
        Sentiment::Neutral => "bg-base-300",
        Sentiment::Negative => "bg-error",
    }
}

#[function_component(ReviewCard)]
pub fn review_card(props: &ReviewCardProps) -> Html {
    let review = &props.review;

    html! {
        <article class="relative flex flex-col justify-between p-6 rounded-lg shadow-sm bg-base-100 border border-base-300 hover:shadow-md transition-shadow duration-200">
            <div class="flex items-center mb-3 gap-2">
                <Icon icon_id={IconId::HeroiconsSolidStar} class="h-6 w-6 text-warning" />
                <span class="text-2xl font-semibold">{ review.stars }</span>
            </div>

            <p class="mb-4 leading-relaxed text-base">{ review.review.clone() }</p>

            <div class="flex flex-col space-y-1 text-sm text-base-content/60">
                <span>{ format!("المراجع: {}", review.reviewer) }</span>
                <span>{ format!("الموقع: {}", review.location) }</span>
                <span>
                    {"المصدر: "}
                    <a
                        href={maps_link(&review.location)}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="link link-primary"
                    >
                        {"عرض على خرائط جوجل"}
                    </a>
                </span>
            </div>

            {
                review.sentiment.map_or_else(
                    || html! {},
                    |sentiment| html! {
                        <div class="absolute top-4 left-4 flex items-center gap-1">
                            <span class={yew::classes!("inline-block", "w-3", "h-3", "rounded-full", sentiment_dot(sentiment))} aria-hidden="true" />
                            <span class="text-xs font-medium">{ sentiment.as_str() }</span>
                        </div>
                    },
                )
            }

            <div
                class="absolute top-4 right-4 flex items-center justify-center badge badge-primary w-8 h-8 rounded-full text-sm font-semibold"
                aria-label={format!("تقييم {}", review.stars)}
            >
                { review.stars }
            </div>
        </article>
    }
}
