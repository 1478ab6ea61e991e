//! Reset-password route, driven by a token captured from the route. The token
//! is checked before the form is usable: `Pending` on load, `Validating`
//! while the check is in flight, then `Valid` or `Invalid`. An invalid token
//! shows an error and returns the user to the forgot-password screen after a
//! fixed delay. A failed submission keeps the form usable for a retry.

use crate::components::{Alert, AlertKind, AppShell, Button, PasswordField, Spinner};
use crate::features::auth::client;
use crate::features::auth::forms::{ResetPasswordForm, field_error};
use crate::features::auth::types::{ResetPasswordRequest, ValidateResetTokenRequest};
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use validator::Validate;

/// Pause between the success alert and the navigation back to sign-in.
const REDIRECT_DELAY_MS: u32 = 2_000;
/// Pause before an invalid token sends the user to the forgot-password screen.
const INVALID_TOKEN_REDIRECT_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
/// Lifecycle of the reset token on this screen.
enum TokenStatus {
    Pending,
    Validating,
    Valid,
    Invalid,
    Submitted,
}

#[derive(Clone)]
/// Captures the validated token and new password for the async action.
struct ResetInput {
    token: String,
    password: String,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let (status, set_status) = signal(TokenStatus::Pending);
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let token = Signal::derive(move || params.read().get("token"));

    let validate_action = Action::new_local(move |token: &String| {
        let request = ValidateResetTokenRequest {
            token: token.clone(),
        };
        async move { client::validate_reset_token(&request).await }
    });

    let reset_action = Action::new_local(move |input: &ResetInput| {
        let request = ResetPasswordRequest {
            token: input.token.clone(),
            password: input.password.clone(),
        };
        async move { client::reset_password(&request).await }
    });

    let navigate_for_missing = navigate.clone();
    Effect::new(move |_| {
        if status.get() != TokenStatus::Pending {
            return;
        }

        match token.get() {
            Some(value) if !value.is_empty() => {
                set_status.set(TokenStatus::Validating);
                validate_action.dispatch(value);
            }
            _ => {
                set_status.set(TokenStatus::Invalid);
                set_error.set(Some(
                    "The reset link is missing its token. Request a new one.".to_string(),
                ));
                let navigate = navigate_for_missing.clone();
                spawn_local(async move {
                    TimeoutFuture::new(INVALID_TOKEN_REDIRECT_MS).await;
                    navigate(paths::FORGOT_PASSWORD, Default::default());
                });
            }
        }
    });

    let navigate_for_invalid = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = validate_action.value().get() {
            match result {
                Ok(()) => set_status.set(TokenStatus::Valid),
                Err(_) => {
                    set_status.set(TokenStatus::Invalid);
                    set_error.set(Some(
                        "This reset link is invalid or has expired. Request a new one."
                            .to_string(),
                    ));
                    let navigate = navigate_for_invalid.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(INVALID_TOKEN_REDIRECT_MS).await;
                        navigate(paths::FORGOT_PASSWORD, Default::default());
                    });
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    set_status.set(TokenStatus::Submitted);
                    set_success.set(Some("Your password has been reset.".to_string()));
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(paths::LOGIN, Default::default());
                    });
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if status.get_untracked() != TokenStatus::Valid {
            return;
        }
        set_error.set(None);
        set_success.set(None);

        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };

        match form.validate() {
            Ok(()) => {
                set_password_error.set(None);
                set_confirm_error.set(None);

                let Some(token_value) = token.get_untracked() else {
                    return;
                };
                reset_action.dispatch(ResetInput {
                    token: token_value,
                    password: form.password,
                });
            }
            Err(errors) => {
                set_password_error.set(field_error(&errors, "password"));
                set_confirm_error.set(field_error(&errors, "confirm_password"));
            }
        }
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <div class="mb-6 text-center">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Reset password"
                    </h1>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                        "Enter your new password."
                    </p>
                </div>
                <Show
                    when=move || {
                        matches!(status.get(), TokenStatus::Pending | TokenStatus::Validating)
                    }
                    fallback=|| ()
                >
                    <div class="flex justify-center"><Spinner /></div>
                </Show>
                <Show when=move || status.get() == TokenStatus::Valid fallback=|| ()>
                    <form on:submit=on_submit>
                        <div class="space-y-5">
                            <PasswordField
                                id="password"
                                label="New password"
                                autocomplete="new-password"
                                set_value=set_password
                                error=password_error
                            />
                            <PasswordField
                                id="confirm_password"
                                label="Confirm new password"
                                autocomplete="new-password"
                                set_value=set_confirm_password
                                error=confirm_error
                            />
                            <Button button_type="submit" disabled=reset_action.pending()>
                                "Reset password"
                            </Button>
                        </div>
                        {move || {
                            reset_action
                                .pending()
                                .get()
                                .then_some(view! { <div class="mt-4"><Spinner /></div> })
                        }}
                    </form>
                </Show>
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
            </div>
        </AppShell>
    }
}
