use crate::components::{BarChart, Navbar, NoDataMessage, ReviewCard};
use crate::engine::ChartPoint;
use crate::{datasets, engine};
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub struct BranchReviewsPageProps {
    pub branch: String,
}

fn decode_branch(raw: &str) -> String {
    js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}

/// Per-branch detail page: review cards plus the vote distribution chart.
#[function_component(BranchReviewsPage)]
pub fn branch_reviews_page(props: &BranchReviewsPageProps) -> Html {
    let branch = decode_branch(&props.branch);

    let reviews = use_state(|| {
        datasets::load_reviews().unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("Failed to load reviews: {err}").into());
            Vec::new()
        })
    });
    let votes = use_state(|| {
        datasets::load_vote_tallies().unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("Failed to load vote tallies: {err}").into());
            Vec::new()
        })
    });

    // Start at the top when landing from the branch grid
    use_effect_with((), |()| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    let branch_reviews = engine::reviews_for_branch(&reviews, &branch);
    let distribution = engine::vote_distribution(&votes, &branch);

    let chart_points: Vec<ChartPoint> = distribution
        .iter()
        .map(|point| ChartPoint {
            label: format!("{}★", point.star),
            value: point.count as f32,
        })
        .collect();
    let max_count = distribution
        .iter()
        .map(|point| point.count)
        .max()
        .unwrap_or(0)
        .max(1) as f32;

    html! {
        <div class="flex flex-col min-h-screen bg-base-100">
            <Navbar />

            <section class="w-full flex flex-col bg-base-100">
                <div class="flex justify-between items-center px-8 py-6 border-b border-base-300">
                    <h2 class="text-3xl font-semibold">
                        { format!("مراجعات فرع “{branch}”") }
                    </h2>
                </div>

                <div class="flex-1 px-8 py-6">
                    if branch_reviews.is_empty() {
                        <NoDataMessage
                            message="لا توجد تقييمات لهذا الفرع حاليًا."
                            link_text="العودة إلى قائمة الفروع"
                        />
                    } else {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for branch_reviews.iter().filter(|review| !review.review.is_empty()).cloned().map(|review| {
                                html! { <ReviewCard {review} /> }
                            })}
                        </div>
                    }
                </div>
            </section>

            <section class="w-full flex flex-col bg-base-200 py-8">
                <h3 class="text-3xl font-semibold mb-6 text-center">
                    { format!("توزيع التصويت لفرع “{branch}”") }
                </h3>

                <div class="flex-1 px-8 pb-8">
                    if distribution.is_empty() {
                        <NoDataMessage
                            message="لا توجد بيانات تصويت لهذا الفرع."
                            link_text="العودة إلى قائمة الفروع"
                        />
                    } else {
                        <BarChart points={chart_points} max_value={max_count} />
                    }
                </div>
            </section>
        </div>
    }
}
