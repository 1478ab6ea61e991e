use crate::app_lib::build_info;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let short_hash = if commit.len() > 7 { &commit[0..7] } else { commit };

    view! {
        <footer class="bg-white border-t border-gray-200 dark:bg-gray-900 dark:border-gray-700">
            <div class="mx-auto max-w-screen-xl px-4 py-6 flex items-center justify-between">
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "© 2024 AuthSystem"
                    <span class="ml-2 text-xs text-gray-400 dark:text-gray-500">{short_hash}</span>
                </p>
                <div class="flex space-x-6">
                    <a
                        href="/privacy"
                        class="text-sm text-gray-500 hover:text-blue-700 dark:text-gray-400 dark:hover:text-blue-400"
                    >
                        "Privacy policy"
                    </a>
                    <a
                        href="/terms"
                        class="text-sm text-gray-500 hover:text-blue-700 dark:text-gray-400 dark:hover:text-blue-400"
                    >
                        "Terms of service"
                    </a>
                </div>
            </div>
        </footer>
    }
}
