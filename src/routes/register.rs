//! Registration route. The role selector renders only for an admin session;
//! everyone else registers with the default role no matter what the form
//! carried. On success the user is prompted to verify their email and sent
//! back to sign in.

use crate::components::{Alert, AlertKind, AppShell, Button, PasswordField, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::forms::{RegisterForm, effective_role, field_error, normalize_email};
use crate::features::auth::types::RegisterRequest;
use crate::features::session::state::{ROLE_ADMIN, ROLE_CUSTOMER, use_session};
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use validator::Validate;

/// Pause between the success alert and the navigation back to sign-in.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (role, set_role) = signal(ROLE_CUSTOMER.to_string());
    let (name_error, set_name_error) = signal::<Option<String>>(None);
    let (lastname_error, set_lastname_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let is_admin = session.is_admin;

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    set_success.set(Some(
                        "Registration successful. Check your email to verify your account."
                            .to_string(),
                    ));
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
        set_error.set(None);
        set_success.set(None);

        let form = RegisterForm {
            name: name.get_untracked().trim().to_string(),
            lastname: lastname.get_untracked().trim().to_string(),
            email: normalize_email(&email.get_untracked()),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            role: role.get_untracked(),
        };

        match form.validate() {
            Ok(()) => {
                set_name_error.set(None);
                set_lastname_error.set(None);
                set_email_error.set(None);
                set_password_error.set(None);
                set_confirm_error.set(None);

                let session_role = session.session.get_untracked().map(|current| current.role);
                register_action.dispatch(RegisterRequest {
                    name: form.name,
                    lastname: form.lastname,
                    email: form.email,
                    password: form.password,
                    confirm_password: form.confirm_password,
                    role: effective_role(session_role.as_deref(), &form.role),
                });
            }
            Err(errors) => {
                set_name_error.set(field_error(&errors, "name"));
                set_lastname_error.set(field_error(&errors, "lastname"));
                set_email_error.set(field_error(&errors, "email"));
                set_password_error.set(field_error(&errors, "password"));
                set_confirm_error.set(field_error(&errors, "confirm_password"));
            }
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-center text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create account"
                </h1>
                <div class="space-y-5">
                    <TextField
                        id="name"
                        label="Name"
                        autocomplete="given-name"
                        set_value=set_name
                        error=name_error
                    />
                    <TextField
                        id="lastname"
                        label="Last name"
                        autocomplete="family-name"
                        set_value=set_lastname
                        error=lastname_error
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="name@example.com"
                        set_value=set_email
                        error=email_error
                    />
                    <Show when=move || is_admin.get() fallback=|| ()>
                        <div>
                            <label
                                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                for="role"
                            >
                                "Role"
                            </label>
                            <select
                                id="role"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                                on:change=move |event| set_role.set(event_target_value(&event))
                            >
                                <option value=ROLE_CUSTOMER selected>"Customer"</option>
                                <option value=ROLE_ADMIN>"Admin"</option>
                            </select>
                        </div>
                    </Show>
                    <PasswordField
                        id="password"
                        label="Password"
                        autocomplete="new-password"
                        set_value=set_password
                        error=password_error
                    />
                    <PasswordField
                        id="confirm_password"
                        label="Confirm password"
                        autocomplete="new-password"
                        set_value=set_confirm_password
                        error=confirm_error
                    />
                    <Button button_type="submit" disabled=register_action.pending()>
                        "Create account"
                    </Button>
                </div>
                {move || {
                    register_action
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
