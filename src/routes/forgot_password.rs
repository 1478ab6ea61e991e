//! Forgot-password route. Validates the email locally, asks the backend to
//! send a reset link, and stays on the screen so the user can retry or go
//! back to sign in.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::forms::{ForgotPasswordForm, field_error, normalize_email};
use crate::features::auth::types::ForgotPasswordRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use validator::Validate;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let forgot_action = Action::new_local(move |email: &String| {
        let request = ForgotPasswordRequest {
            email: email.clone(),
        };
        async move { client::forgot_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = forgot_action.value().get() {
            match result {
                Ok(()) => {
                    set_success.set(Some(
                        "A password reset link has been sent to your email.".to_string(),
                    ));
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let form = ForgotPasswordForm {
            email: normalize_email(&email.get_untracked()),
        };

        match form.validate() {
            Ok(()) => {
                set_email_error.set(None);
                forgot_action.dispatch(form.email);
            }
            Err(errors) => set_email_error.set(field_error(&errors, "email")),
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-6 text-center">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Recover password"
                    </h1>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                        "Enter your email and we will send you a link to reset your password."
                    </p>
                </div>
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
                    <Button button_type="submit" disabled=forgot_action.pending()>
                        "Send reset link"
                    </Button>
                </div>
                <div class="mt-4 text-center">
                    <A
                        href=paths::LOGIN
                        {..}
                        class="text-sm text-blue-700 hover:underline dark:text-blue-400"
                    >
                        "Back to sign in"
                    </A>
                </div>
                {move || {
                    forgot_action
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
