use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <a href="/" class="site-brand">
                    <span class="site-brand-mark">"🍃"</span>
                    <span class="site-brand-name">"WasteLoop"</span>
                </a>
                <div class="site-nav-links">
                    <a href="/collections/suggestions">"Ideas"</a>
                    <a href="/collections/products">"Marketplace"</a>
                    <a href="/collections/badges">"Achievements"</a>
                </div>
            </div>
        </nav>
    }
}
