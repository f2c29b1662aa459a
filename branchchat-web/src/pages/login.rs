use crate::actions::ActionPhase;
use crate::api::ChatbotClient;
use crate::components::Navbar;
use crate::routes::MainRoute;
use crate::{auth, validation};
use reqwest::StatusCode;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let phase = use_mut_ref(ActionPhase::default);
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let phase = phase.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();

            if let Some(message) = validation::validate_login(&email_value, &password_value) {
                error_handle.set(Some(message));
                return;
            }
            if !phase.borrow_mut().begin() {
                return;
            }
            loading_handle.set(true);
            error_handle.set(None);

            let phase = phase.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = ChatbotClient::shared();
                let request = LoginRequest {
                    username: email_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        phase.borrow_mut().settle();
                        auth::persist_token(&response.access_token);
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Chat);
                        }
                    }
                    Err(err) => {
                        phase.borrow_mut().fail();
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| match status {
                                StatusCode::UNAUTHORIZED => {
                                    "Your email or password is incorrect.".to_string()
                                }
                                _ => format!("Login failed: {status}"),
                            },
                        );
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <>
            <Navbar />

            <div class="flex flex-col lg:flex-row items-center justify-center min-h-screen bg-base-200">
                <div class="w-full lg:w-1/2 p-8">
                    <h3 class="text-3xl font-bold mb-4">{"Welcome to BranchChat"}</h3>
                    <p class="mb-6">{"Your 24/7 virtual assistant for all banking needs. Get instant support on:"}</p>
                    <ul class="list-disc pl-5 space-y-2">
                        <li>{"Account balances and recent transactions"}</li>
                        <li>{"Branch and ATM locations"}</li>
                        <li>{"Loan and service inquiries"}</li>
                    </ul>
                </div>

                <form class="card w-full lg:w-1/3 shadow-lg bg-base-100 m-4" onsubmit={onsubmit}>
                    <div class="card-body">
                        <h2 class="card-title text-2xl justify-center">{"Login to Your Account"}</h2>

                        if let Some(message) = &*error {
                            <div class="alert alert-error">
                                <span>{message.clone()}</span>
                            </div>
                        }

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{"Email Address"}</span>
                            </label>
                            <input
                                id="email"
                                class="input input-bordered"
                                type="email"
                                required=true
                                placeholder="you@branchchat.example"
                                value={(*email).clone()}
                                oninput={on_email_change}
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{"Password"}</span>
                            </label>
                            <input
                                id="password"
                                class="input input-bordered"
                                type="password"
                                required=true
                                placeholder="••••••••"
                                value={(*password).clone()}
                                oninput={on_password_change}
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                                {if is_busy { "Signing in..." } else { "Log In" }}
                            </button>
                        </div>

                        <p class="text-center text-sm mt-2">
                            {"Don't have an account? "}
                            <Link<MainRoute> to={MainRoute::Signup} classes="link link-primary">
                                {"Sign Up"}
                            </Link<MainRoute>>
                        </p>
                    </div>
                </form>
            </div>
        </>
    }
}
