use crate::components::Navbar;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

const HOW_IT_WORKS: [(u8, &str, &str); 3] = [
    (
        1,
        "Ask Anything",
        "Type your question about balance, transfers, or services.",
    ),
    (
        2,
        "AI-Powered Reply",
        "Our model fetches the best answers securely from our database.",
    ),
    (
        3,
        "Get It Done",
        "Follow simple instructions or links to complete your task.",
    ),
];

/// Public landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="flex flex-col bg-base-100 text-base-content">
            <Navbar />

            <section class="hero min-h-screen">
                <div class="hero-content flex-col md:flex-row-reverse gap-12">
                    <div class="text-center md:text-left max-w-xl space-y-6">
                        <h1 class="text-4xl md:text-6xl font-extrabold">
                            {"Your Virtual Bank Assistant"}<br />{"Available 24/7"}
                        </h1>
                        <p class="text-lg md:text-xl text-base-content/70">
                            {"Ask anything about your account, transactions, or services—and get instant, secure answers."}
                        </p>
                        <Link<MainRoute> to={MainRoute::Chat} classes="btn btn-primary btn-lg rounded-full">
                            {"Launch Chatbot"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </section>

            <section id="features" class="py-16 bg-base-200">
                <div class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8 px-4">
                    <div class="card bg-base-100 shadow hover:shadow-lg transition">
                        <div class="card-body">
                            <h3 class="card-title text-primary">{"🔒 Secure"}</h3>
                            <p>{"Your data is encrypted end-to-end and never shared."}</p>
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow hover:shadow-lg transition">
                        <div class="card-body">
                            <h3 class="card-title text-primary">{"⚡ Instant"}</h3>
                            <p>{"Get answers in seconds, no waiting on hold."}</p>
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow hover:shadow-lg transition">
                        <div class="card-body">
                            <h3 class="card-title text-primary">{"🤖 Smart"}</h3>
                            <p>{"Powered by AI, it understands your questions in natural language."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="py-16 flex flex-col items-center justify-center px-4">
                <h2 class="text-3xl font-bold mb-8 text-primary">{"How It Works"}</h2>
                <div class="max-w-4xl w-full grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for HOW_IT_WORKS.iter().map(|(step, title, desc)| html! {
                        <div class="text-center" key={*step}>
                            <div class="mx-auto w-16 h-16 flex items-center justify-center bg-primary text-primary-content rounded-full text-xl font-bold mb-4">
                                { *step }
                            </div>
                            <h3 class="text-xl font-semibold mb-2">{ *title }</h3>
                            <p class="text-base-content/70">{ *desc }</p>
                        </div>
                    })}
                </div>
            </section>

            <footer id="contact" class="footer footer-center py-8 bg-base-200 text-base-content/70">
                <div>
                    <p>
                        {"Need more help? Reach out to our support team at "}
                        <a href="mailto:support@branchchat.example" class="link link-primary">
                            {"support@branchchat.example"}
                        </a>
                    </p>
                    <p>{"© 2025 BranchChat"}</p>
                </div>
            </footer>
        </div>
    }
}
