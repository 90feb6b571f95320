use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

/// Runs the hook once, if there is one
pub fn activate(hook: Option<&Callback<()>>) {
    if let Some(hook) = hook {
        hook.run(());
    }
}

/// "View all" control of a collection.
///
/// With `href` it is a plain link, so it navigates without any client code.
/// Without a hook, activating it has no callback effect.
#[component]
pub fn ViewAllControl(
    #[prop(optional_no_strip, into)] on_view_all: Option<Callback<()>>,
    #[prop(optional_no_strip, into)] href: Option<String>,
) -> impl IntoView {
    match href {
        Some(href) => view! {
            <a class="view-all" href=href on:click=move |_| activate(on_view_all.as_ref())>
                "View all →"
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class="view-all"
                on:click=move |_| activate(on_view_all.as_ref())
            >
                "View all →"
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_activate_runs_hook_once_per_call() {
        Owner::new().with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();
            let hook = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

            activate(Some(&hook));
            assert_eq!(calls.load(Ordering::SeqCst), 1);

            activate(Some(&hook));
            activate(Some(&hook));
            assert_eq!(calls.load(Ordering::SeqCst), 3);
        });
    }

    #[test]
    fn test_activate_without_hook_is_inert() {
        activate(None);
    }

    #[test]
    fn test_control_renders_button_without_href() {
        Owner::new().with(|| {
            let html = view! { <ViewAllControl /> }.to_html();
            assert!(html.contains("<button"));
            assert!(html.contains("class=\"view-all\""));
            assert!(html.contains("View all"));
        });
    }

    #[test]
    fn test_control_renders_link_with_href() {
        Owner::new().with(|| {
            let html = view! { <ViewAllControl href="/collections/badges".to_string() /> }
                .to_html();
            assert!(html.contains("<a"));
            assert!(html.contains("href=\"/collections/badges\""));
            assert!(!html.contains("<button"));
        });
    }
}
