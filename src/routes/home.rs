//! Landing page. Shows who is signed in; everything else lives behind the
//! backend, so this stays minimal.

use crate::components::AppShell;
use crate::features::session::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;
    let email = Signal::derive(move || {
        session
            .session
            .get()
            .map(|current| current.email)
            .unwrap_or_default()
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto text-center space-y-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Welcome to AuthSystem"
                </h1>
                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        view! {
                            <p class="text-gray-600 dark:text-gray-400">
                                "Sign in to your account or create a new one to get started."
                            </p>
                            <div class="flex justify-center gap-4">
                                <A
                                    href=paths::LOGIN
                                    {..}
                                    class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                                >
                                    "Sign in"
                                </A>
                                <A
                                    href=paths::REGISTER
                                    {..}
                                    class="px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                                >
                                    "Sign up"
                                </A>
                            </div>
                        }
                    }
                >
                    <p class="text-gray-600 dark:text-gray-400">
                        "Signed in as "
                        <span class="font-medium text-gray-900 dark:text-gray-200">
                            {move || email.get()}
                        </span> "."
                    </p>
                </Show>
            </div>
        </AppShell>
    }
}
