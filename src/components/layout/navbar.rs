//! Top navigation bar. Reads the session context to render the anonymous or
//! authenticated chrome and is the only place besides the login screen that
//! mutates the session: signing out clears the triple and its persisted
//! mirror, then returns home.

use crate::features::session::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Greeting shown for an authenticated user, derived from the email local part.
fn greeting(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    format!("Hi, {local}")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);

    let is_authenticated = session.is_authenticated;
    let is_admin = session.is_admin;
    let email = Signal::derive(move || {
        session
            .session
            .get()
            .map(|current| current.email)
            .unwrap_or_default()
    });
    let role = Signal::derive(move || {
        session
            .session
            .get()
            .map(|current| current.role)
            .unwrap_or_default()
    });

    let on_logout = move |_| {
        session.clear_user();
        set_menu_open.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(paths::HOME);
        }
    };

    view! {
        <nav class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
            <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                <A
                    href=paths::HOME
                    {..}
                    class="text-xl font-bold text-blue-700 dark:text-blue-400"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "AuthSystem"
                </A>
                <div class="flex items-center space-x-4">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <A
                                    href=paths::LOGIN
                                    {..}
                                    class="py-2 px-3 text-sm font-medium text-gray-900 rounded-lg hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                >
                                    "Sign in"
                                </A>
                                <A
                                    href=paths::REGISTER
                                    {..}
                                    class="py-2 px-3 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                                >
                                    "Sign up"
                                </A>
                            }
                        }
                    >
                        <div class="relative">
                            <button
                                type="button"
                                class="flex items-center py-2 px-3 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                                aria-expanded=move || menu_open.get().to_string()
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {move || greeting(&email.get())}
                                <span class="material-symbols-outlined ml-1 text-base">
                                    "expand_more"
                                </span>
                            </button>
                            <div
                                class="absolute right-0 mt-2 w-56 rounded-lg border border-gray-200 bg-white shadow-lg dark:border-gray-700 dark:bg-gray-800 z-10"
                                class:hidden=move || !menu_open.get()
                            >
                                <div class="px-4 py-2 border-b border-gray-100 dark:border-gray-700">
                                    <p class="text-sm font-medium text-gray-700 dark:text-gray-300">
                                        {move || email.get()}
                                    </p>
                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                        {move || format!("Role: {}", role.get())}
                                    </p>
                                </div>
                                <Show when=move || is_admin.get() fallback=|| ()>
                                    <A
                                        href=paths::REGISTER
                                        {..}
                                        class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Register user"
                                    </A>
                                </Show>
                                <A
                                    href=paths::HOME
                                    {..}
                                    class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "My profile"
                                </A>
                                <A
                                    href=paths::HOME
                                    {..}
                                    class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Dashboard"
                                </A>
                                <button
                                    type="button"
                                    class="block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-gray-100 dark:text-red-400 dark:hover:bg-gray-700"
                                    on:click=on_logout
                                >
                                    "Sign out"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
