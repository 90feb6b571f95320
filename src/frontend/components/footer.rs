use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer-brand">"🍃 WasteLoop"</p>
            <p class="site-footer-tagline">"Leftovers, upcycled."</p>
        </footer>
    }
}
