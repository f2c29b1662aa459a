use crate::auth;
use crate::components::Navbar;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Fallback view for unmatched routes.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let is_authenticated = auth::stored_token().is_some();

    html! {
        <>
            <Navbar />

            <div class="flex flex-col items-center justify-center min-h-screen px-4 bg-base-100">
                <div class="max-w-md text-center">
                    <h1 class="text-5xl font-extrabold mb-4">{"404"}</h1>
                    <p class="mb-6 text-base-content/70">
                        {"Oops! We can't find that page. Our friendly chatbot must have lost its way."}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<MainRoute> to={MainRoute::Home} classes="btn btn-warning font-semibold">
                            {"Go Home"}
                        </Link<MainRoute>>
                        if is_authenticated {
                            <Link<MainRoute> to={MainRoute::Chat} classes="btn btn-primary font-semibold">
                                {"Ask the Bot"}
                            </Link<MainRoute>>
                        }
                    </div>
                </div>
            </div>
        </>
    }
}
