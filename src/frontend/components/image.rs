use leptos::prelude::*;

/// Shipped placeholder graphic, served from the static directory
pub const FALLBACK_SRC: &str = "/static/img/placeholder.svg";

/// Inline `onerror` handler for server-rendered pages, where no client code
/// runs: marks the frame as fallback and swaps in the placeholder, once.
pub fn fallback_onerror() -> String {
    format!(
        "this.onerror=null;this.parentNode.dataset.state='fallback';this.src='{}';this.className='media-image media-image--fallback'",
        FALLBACK_SRC
    )
}

/// Load state of a single image. `Loaded` and `Fallback` are terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MediaState {
    #[default]
    Loading,
    Loaded,
    Fallback,
}

impl MediaState {
    pub fn loaded(self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            other => other,
        }
    }

    pub fn failed(self) -> Self {
        match self {
            Self::Loading => Self::Fallback,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Fallback => "fallback",
        }
    }
}

/// Fixed placeholder graphic, needs no network request
#[component]
pub fn MediaPlaceholder(#[prop(optional, into)] label: String) -> impl IntoView {
    view! {
        <div class="media-fallback" role="img" aria-label=label>
            <span class="media-fallback-glyph">"🍃"</span>
        </div>
    }
}

/// Image that swaps itself for the placeholder when the source fails to load.
///
/// The failure stays local. On a server-rendered page the inline `onerror`
/// attribute does the swap; when mounted on the client the `error` event also
/// flips `state`. Pass `state` to observe or drive the transitions from outside.
#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] state: Option<RwSignal<MediaState>>,
) -> impl IntoView {
    let initial = if src.trim().is_empty() {
        MediaState::Fallback
    } else {
        MediaState::Loading
    };
    let state = state.unwrap_or_else(|| RwSignal::new(initial));
    if initial == MediaState::Fallback {
        state.set(MediaState::Fallback);
    }

    view! {
        <div class=format!("media-frame {}", class) data-state=move || state.get().as_str()>
            {move || {
                if state.get() == MediaState::Fallback {
                    view! { <MediaPlaceholder label=alt.clone() /> }.into_any()
                } else {
                    view! {
                        <img
                            src=src.clone()
                            alt=alt.clone()
                            class="media-image"
                            loading="lazy"
                            onerror=fallback_onerror()
                            on:load=move |_| state.update(|s| *s = s.loaded())
                            on:error=move |_| state.update(|s| *s = s.failed())
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
