use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"Nothing left on this plate."</p>
            <a href="/" class="back-link">"Return home"</a>
        </div>
    }
}
