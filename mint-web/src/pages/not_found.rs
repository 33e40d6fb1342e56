use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="mint-container">
            <div class="card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="subtitle">"The page you're looking for doesn't exist."</p>
                <A href="/mint">
                    <span class="btn">"Go to Mint"</span>
                </A>
            </div>
        </div>
    }
}
