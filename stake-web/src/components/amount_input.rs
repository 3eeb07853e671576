//! Labelled numeric input bound to an optional amount

use leptos::prelude::*;

use crate::utils::constants::AMOUNT_PLACEHOLDER;

/// A numeric field. Without `on_input` it is rendered read-only.
#[component]
pub fn AmountInput(
    label: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let readonly = on_input.is_none();

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type="number"
                class="form-input"
                placeholder=AMOUNT_PLACEHOLDER
                readonly=readonly
                prop:value=move || value.get().unwrap_or_default()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
        </label>
    }
}
