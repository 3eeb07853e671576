//! Submission status line

use leptos::prelude::*;
use lib_stake::SubmissionState;

#[component]
pub fn StatusMessage(#[prop(into)] state: Signal<SubmissionState>) -> impl IntoView {
    move || {
        state.with(|state| {
            let class = match state {
                SubmissionState::Succeeded(_) => "success",
                SubmissionState::Failed(_) => "error",
                _ => "info",
            };
            state.status_text().map(|text| {
                let text = text.to_string();
                view! { <p class=class>{text}</p> }
            })
        })
    }
}
