use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Static screen shown after registration: the account exists but must be
/// verified by email before signing in.
#[component]
pub fn RegisterConfirmationPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto text-center space-y-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Check your email"
                </h1>
                <p class="text-gray-600 dark:text-gray-400">
                    "We sent you a confirmation link. Verify your email address, then sign in."
                </p>
                <A
                    href=paths::LOGIN
                    {..}
                    class="inline-block px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                >
                    "Back to sign in"
                </A>
            </div>
        </AppShell>
    }
}
