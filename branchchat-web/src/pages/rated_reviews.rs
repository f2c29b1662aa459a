use crate::api::ChatbotClient;
use crate::components::{Navbar, ReviewCard};
use crate::engine::{self, ReviewFilter};
use crate::routes::MainRoute;
use crate::scope::RequestScope;
use shared::models::{Review, Sentiment};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct RatedReviewsPageProps {
    pub star: String,
}

fn parse_star(raw: &str) -> Option<u8> {
    raw.parse::<u8>().ok().filter(|star| (1..=5).contains(star))
}

fn parse_sentiment(raw: &str) -> Option<Sentiment> {
    Sentiment::iter().find(|sentiment| sentiment.as_str() == raw)
}

/// Server-filtered review browser: star, sentiment, and location criteria
/// are conjunctive and every change re-fetches from the backend.
#[function_component(RatedReviewsPage)]
pub fn rated_reviews_page(props: &RatedReviewsPageProps) -> Html {
    let initial_star = parse_star(&props.star);

    let filter_stars = use_state(move || initial_star);
    let filter_sentiment = use_state(|| None::<Sentiment>);
    let filter_location = use_state(|| None::<String>);
    let filtered = use_state(Vec::<Review>::new);
    let locations = use_state(Vec::<String>::new);

    // Fetch the unfiltered set once to populate the location dropdown
    {
        let locations = locations.clone();
        use_effect_with((), move |()| {
            let scope = RequestScope::new();
            let continuation = scope.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                match client.reviews(&ReviewFilter::default()).await {
                    Ok(reviews) => {
                        if continuation.is_alive() {
                            locations.set(engine::unique_locations(&reviews));
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch reviews for locations list: {err}").into(),
                        );
                    }
                }
            });
            move || scope.cancel()
        });
    }

    // Re-fetch whenever any filter changes
    {
        let filtered = filtered.clone();
        let deps = (
            *filter_stars,
            *filter_sentiment,
            (*filter_location).clone(),
        );
        use_effect_with(deps, move |(stars, sentiment, location)| {
            let filter = ReviewFilter {
                stars: *stars,
                sentiment: *sentiment,
                location: location.clone(),
            };
            let scope = RequestScope::new();
            let continuation = scope.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                match client.reviews(&filter).await {
                    Ok(reviews) => {
                        if continuation.is_alive() {
                            // re-apply the conjunctive filter locally so the
                            // rendered set honours every active criterion even
                            // if the backend ignores a parameter
                            filtered.set(filter.apply(&reviews));
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch filtered reviews: {err}").into(),
                        );
                    }
                }
            });
            move || scope.cancel()
        });
    }

    let on_stars_change = {
        let filter_stars = filter_stars.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                filter_stars.set(parse_star(&select.value()));
            }
        })
    };

    let on_sentiment_change = {
        let filter_sentiment = filter_sentiment.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                filter_sentiment.set(parse_sentiment(&select.value()));
            }
        })
    };

    let on_location_change = {
        let filter_location = filter_location.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                filter_location.set((value != "All").then_some(value));
            }
        })
    };

    let star_display = (*filter_stars).map_or_else(|| "-".to_string(), |star| star.to_string());

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Navbar />

            <header class="w-full py-6 shadow bg-primary text-primary-content">
                <div class="max-w-5xl mx-auto flex items-center justify-between px-6">
                    <h2 class="flex items-center space-x-3 gap-3">
                        <span class="text-3xl font-semibold">{ star_display }</span>
                        <Icon icon_id={IconId::HeroiconsSolidStar} class="w-7 h-7" />
                        <span class="text-xl font-medium">{"التصفية حسب التقييم والسمات والموقع"}</span>
                    </h2>

                    <Link<MainRoute> to={MainRoute::Reviews} classes="btn btn-sm">
                        {"العودة لرئيسية المراجعات"}
                    </Link<MainRoute>>
                </div>
            </header>

            <section class="bg-base-200 border-b border-base-300 py-6">
                <div class="max-w-5xl mx-auto flex flex-wrap gap-4 px-6">
                    <div class="flex flex-col">
                        <label class="text-sm font-medium mb-1">{"التقييم"}</label>
                        <select class="select select-bordered select-sm" onchange={on_stars_change}>
                            <option value="0" selected={filter_stars.is_none()}>{"الكل"}</option>
                            { for (1..=5u8).map(|star| html! {
                                <option
                                    value={star.to_string()}
                                    selected={*filter_stars == Some(star)}
                                    key={star}
                                >
                                    { format!("{star} نجوم") }
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="flex flex-col">
                        <label class="text-sm font-medium mb-1">{"الاتجاه (Sentiment)"}</label>
                        <select class="select select-bordered select-sm" onchange={on_sentiment_change}>
                            <option value="All" selected={filter_sentiment.is_none()}>{"الكل"}</option>
                            { for Sentiment::iter().map(|sentiment| html! {
                                <option
                                    value={sentiment.as_str()}
                                    selected={*filter_sentiment == Some(sentiment)}
                                    key={sentiment.as_str()}
                                >
                                    { sentiment.as_str() }
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="flex flex-col">
                        <label class="text-sm font-medium mb-1">{"الموقع"}</label>
                        <select class="select select-bordered select-sm" onchange={on_location_change}>
                            <option value="All" selected={filter_location.is_none()}>{"الكل"}</option>
                            { for locations.iter().map(|location| html! {
                                <option
                                    value={location.clone()}
                                    selected={filter_location.as_deref() == Some(location)}
                                    key={location.clone()}
                                >
                                    { location.clone() }
                                </option>
                            })}
                        </select>
                    </div>
                </div>
            </section>

            <main class="flex-1 overflow-y-auto py-10 px-6">
                <div class="max-w-5xl mx-auto">
                    if filtered.is_empty() {
                        <div class="flex flex-col items-center justify-center h-64">
                            <p class="text-lg text-base-content/70">
                                {"لا توجد مراجعات تطابق المعايير المحددة."}
                            </p>
                        </div>
                    } else {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for filtered.iter().filter(|review| !review.review.is_empty()).cloned().map(|review| {
                                html! { <ReviewCard {review} /> }
                            })}
                        </div>
                    }
                </div>
            </main>
        </div>
    }
}
