use crate::components::{BarChart, Navbar};
use crate::routes::MainRoute;
use crate::{datasets, engine};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Reviews summary dashboard over the bundled datasets.
#[function_component(ReviewsPage)]
pub fn reviews_page() -> Html {
    // bundled datasets are parsed once at mount
    let stars = use_state(|| {
        datasets::load_star_ratings().unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("Failed to load star ratings: {err}").into());
            Vec::new()
        })
    });
    let reviews = use_state(|| {
        datasets::load_reviews().unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("Failed to load reviews: {err}").into());
            Vec::new()
        })
    });

    let total_reviews = reviews.len();
    let average_rating = engine::average_stars(&reviews);
    let branches_reviewed = engine::unique_branches(&reviews);
    let distribution = engine::star_distribution(&reviews);
    let chart_points = engine::branch_chart_points(&stars);

    html! {
        <div class="flex flex-col min-h-screen bg-base-100">
            <Navbar />

            <section class="hero py-24 bg-base-300">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-4xl sm:text-5xl font-bold mb-4">{"Branch Reviews"}</h1>
                    <p class="text-lg sm:text-xl text-base-content/70">{"Discover Our Branch Ratings"}</p>
                </div>
            </section>

            <section class="w-full py-16 flex flex-col items-center bg-base-100">
                <h2 class="text-3xl font-semibold mb-8">{"Reviews Overview"}</h2>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-8 w-3/4">
                    <div class="flex flex-col items-center">
                        <span class="text-xl font-medium">{"Average Rating"}</span>
                        <span class="mt-2 text-4xl font-bold">
                            { format!("{average_rating:.1} / 5 ") }
                            <span class="text-warning">{"★"}</span>
                        </span>
                    </div>
                    <div class="flex flex-col items-center">
                        <span class="text-xl font-medium">{"Total Reviews"}</span>
                        <span class="mt-2 text-4xl font-bold">{ total_reviews }</span>
                    </div>
                    <div class="flex flex-col items-center">
                        <span class="text-xl font-medium">{"Branches Reviewed"}</span>
                        <span class="mt-2 text-4xl font-bold">{ branches_reviewed }</span>
                    </div>
                </div>

                <div class="mt-12 w-3/4">
                    <span class="text-xl font-medium">{"Rating Distribution"}</span>
                    <ul class="mt-4 space-y-2">
                        { for (1..=5u8).rev().map(|star| {
                            let count = distribution[usize::from(star) - 1];
                            let percent = if total_reviews > 0 {
                                count as f64 / total_reviews as f64 * 100.0
                            } else {
                                0.0
                            };
                            html! {
                                <li class="flex items-center" key={star}>
                                    <span class="w-16">
                                        { star }
                                        <span class="text-warning">{"★"}</span>
                                    </span>
                                    <div class="flex-1 h-5 rounded-full overflow-hidden bg-base-300">
                                        <div
                                            class="h-full rounded-full bg-warning"
                                            style={format!("width: {percent}%")}
                                        />
                                    </div>
                                    <span class="ml-3 w-8 text-right">{ count }</span>
                                </li>
                            }
                        })}
                    </ul>
                </div>
            </section>

            <section class="w-full py-16 px-8 bg-base-200">
                <BarChart
                    points={chart_points}
                    max_value={5.0}
                    title="Average Rating by Branch"
                />
            </section>

            <section class="flex-grow py-12 px-6 bg-base-100">
                <h2 class="text-2xl font-semibold mb-6">{"Branch Ratings"}</h2>

                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    { for stars.iter().map(|entry| {
                        let branch = entry.location.clone();
                        html! {
                            <Link<MainRoute>
                                to={MainRoute::BranchReviews { branch }}
                                classes="card bg-base-200 shadow-md hover:shadow-lg transition-shadow"
                                key={entry.location.clone()}
                            >
                                <div class="card-body">
                                    <div class="w-full h-24 rounded flex items-center justify-center bg-base-300">
                                        <span class="text-lg font-bold px-2">{ entry.location.clone() }</span>
                                    </div>
                                    <p class="text-lg font-medium">{ entry.location.clone() }</p>
                                    <span class="text-warning">{ format!("★ {:.1}", entry.star) }</span>
                                </div>
                            </Link<MainRoute>>
                        }
                    })}
                </div>
            </section>
        </div>
    }
}
