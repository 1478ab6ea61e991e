//! Login route. Validates the credentials locally, exchanges them for the
//! session triple, and is the only place that writes the session store. On
//! success the user is sent home after a short confirmation pause.

use crate::components::{Alert, AlertKind, AppShell, Button, PasswordField, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::forms::{LoginForm, field_error, normalize_email};
use crate::features::auth::types::LoginRequest;
use crate::features::session::state::use_session;
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use validator::Validate;

/// Pause between the success alert and the navigation home.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
/// Captures login form input for the async action without borrowing signals.
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let request = LoginRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        };
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    session.set_user(
                        response.user.email,
                        response.user.role,
                        response.access_token,
                    );
                    set_success.set(Some("Signed in successfully.".to_string()));
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(paths::HOME, Default::default());
                    });
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let form = LoginForm {
            email: normalize_email(&email.get_untracked()),
            password: password.get_untracked(),
        };

        match form.validate() {
            Ok(()) => {
                set_email_error.set(None);
                set_password_error.set(None);
                login_action.dispatch(LoginInput {
                    email: form.email,
                    password: form.password,
                });
            }
            Err(errors) => {
                set_email_error.set(field_error(&errors, "email"));
                set_password_error.set(field_error(&errors, "password"));
            }
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-center text-2xl font-semibold text-gray-900 dark:text-white">
                    "Sign in"
                </h1>
                <div class="space-y-5">
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="name@example.com"
                        set_value=set_email
                        error=email_error
                    />
                    <PasswordField
                        id="password"
                        label="Password"
                        set_value=set_password
                        error=password_error
                    />
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign in"
                    </Button>
                </div>
                <div class="mt-4 text-center">
                    <A
                        href=paths::FORGOT_PASSWORD
                        {..}
                        class="text-sm text-blue-700 hover:underline dark:text-blue-400"
                    >
                        "Forgot your password?"
                    </A>
                </div>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
