//! Navigation bar with the wallet button

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ConnectButton;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Stake"</span>
                </A>
                <ConnectButton/>
            </div>
        </nav>
    }
}
