//! Labeled form inputs with an inline error slot. Screens map schema
//! failures to the matching field's `error` signal; the input itself never
//! validates anything.

use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
const ERROR_CLASS: &str = "mt-1 text-sm text-red-600 dark:text-red-400";

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<&'static str>,
    set_value: WriteSignal<String>,
    #[prop(optional, into, default = Signal::from(None))] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div>
            <label class=LABEL_CLASS for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=INPUT_CLASS
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or("")
                on:input=move |event| set_value.set(event_target_value(&event))
            />
            {move || error.get().map(|message| view! { <p class=ERROR_CLASS>{message}</p> })}
        </div>
    }
}

/// Password input with a visibility toggle next to the field.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(optional, into)] autocomplete: Option<&'static str>,
    set_value: WriteSignal<String>,
    #[prop(optional, into, default = Signal::from(None))] error: Signal<Option<String>>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div>
            <label class=LABEL_CLASS for=id>
                {label}
            </label>
            <div class="flex gap-3 items-center">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class=INPUT_CLASS
                    autocomplete=autocomplete.unwrap_or("current-password")
                    on:input=move |event| set_value.set(event_target_value(&event))
                />
                <button
                    type="button"
                    class="p-2 text-gray-500 hover:text-blue-700 dark:text-gray-400 dark:hover:text-blue-400"
                    aria-label="Toggle password visibility"
                    on:click=move |_| set_visible.update(|value| *value = !*value)
                >
                    <span class="material-symbols-outlined">
                        {move || if visible.get() { "visibility_off" } else { "visibility" }}
                    </span>
                </button>
            </div>
            {move || error.get().map(|message| view! { <p class=ERROR_CLASS>{message}</p> })}
        </div>
    }
}
