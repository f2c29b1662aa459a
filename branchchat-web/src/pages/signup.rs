use crate::actions::ActionPhase;
use crate::api::ChatbotClient;
use crate::components::Navbar;
use crate::routes::MainRoute;
use crate::validation;
use shared::models::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let phase = use_mut_ref(ActionPhase::default);
    let navigator = use_navigator();

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let phase = phase.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = (*full_name).clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let confirm_value = (*confirm_password).clone();

            if let Some(message) = validation::validate_signup(
                &name_value,
                &email_value,
                &password_value,
                &confirm_value,
            ) {
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
                let request = SignupRequest {
                    name: name_value,
                    email: email_value,
                    password: password_value,
                };
                match client.signup(&request).await {
                    Ok(_) => {
                        phase.borrow_mut().settle();
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Login);
                        }
                    }
                    Err(err) => {
                        phase.borrow_mut().fail();
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| format!("Signup failed: {status}"),
                        );
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <>
            <Navbar />

            <div class="flex flex-col lg:flex-row items-center justify-center min-h-screen bg-base-200">
                <div class="w-full lg:w-1/2 p-8">
                    <h3 class="text-3xl font-bold mb-4">{"Join BranchChat"}</h3>
                    <p class="mb-6">{"Create your secure account and enjoy:"}</p>
                    <ul class="list-disc pl-5 space-y-2">
                        <li>{"Fast, 24/7 chatbot support"}</li>
                        <li>{"Secure access to balances and transactions"}</li>
                        <li>{"Exclusive online services and offers"}</li>
                    </ul>
                </div>

                <form class="card w-full lg:w-1/3 shadow-lg bg-base-100 m-4" onsubmit={onsubmit}>
                    <div class="card-body">
                        <h2 class="card-title text-2xl justify-center">{"Create Account"}</h2>

                        if let Some(message) = &*error {
                            <div class="alert alert-error">
                                <span>{message.clone()}</span>
                            </div>
                        }

                        <div class="form-control">
                            <label class="label" for="fullName">
                                <span class="label-text">{"Full Name"}</span>
                            </label>
                            <input
                                id="fullName"
                                class="input input-bordered"
                                type="text"
                                required=true
                                placeholder="Your Name"
                                value={(*full_name).clone()}
                                oninput={text_input(&full_name)}
                            />
                        </div>

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
                                oninput={text_input(&email)}
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
                                oninput={text_input(&password)}
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="confirmPassword">
                                <span class="label-text">{"Confirm Password"}</span>
                            </label>
                            <input
                                id="confirmPassword"
                                class="input input-bordered"
                                type="password"
                                required=true
                                placeholder="••••••••"
                                value={(*confirm_password).clone()}
                                oninput={text_input(&confirm_password)}
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                {if is_busy { "Creating account..." } else { "Sign Up" }}
                            </button>
                        </div>

                        <p class="text-center text-sm mt-2">
                            {"Already have an account? "}
                            <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                                {"Log In"}
                            </Link<MainRoute>>
                        </p>
                    </div>
                </form>
            </div>
        </>
    }
}
