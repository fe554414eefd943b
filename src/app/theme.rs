use leptos::prelude::*;

use crate::theme::{Theme, ThemePreference};

#[cfg(not(feature = "hydrate"))]
use crate::theme::DetachedHost as Host;
#[cfg(feature = "hydrate")]
use browser::BrowserThemeHost as Host;

#[cfg(feature = "hydrate")]
mod browser {
    use codee::string::FromToStringCodec;
    use leptos::prelude::*;
    use leptos_use::{storage::use_local_storage, use_preferred_dark};

    use crate::theme::{with_marker, Theme, ThemeHost, THEME_STORAGE_KEY};

    #[derive(Clone, Copy)]
    pub struct BrowserThemeHost {
        stored: Signal<String>,
        set_stored: WriteSignal<String>,
        prefers_dark: Signal<bool>,
    }

    impl BrowserThemeHost {
        /// Needs a reactive owner for the storage and media query hooks.
        pub fn new() -> Self {
            let (stored, set_stored, _) =
                use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
            Self {
                stored,
                set_stored,
                prefers_dark: use_preferred_dark(),
            }
        }
    }

    impl Default for BrowserThemeHost {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ThemeHost for BrowserThemeHost {
        fn load(&self) -> Option<String> {
            let value = self.stored.get_untracked();
            (!value.is_empty()).then_some(value)
        }

        fn store(&self, value: &str) {
            self.set_stored.set(value.to_string());
        }

        fn prefers_dark(&self) -> bool {
            self.prefers_dark.get_untracked()
        }

        fn mark_root(&self, theme: Theme) {
            let Some(root) = document().document_element() else {
                log::warn!("no document element to mark");
                return;
            };
            root.set_class_name(&with_marker(&root.class_name(), theme));
        }
    }
}

/// Handle to the session's theme, created once by the root component and
/// handed to every component that reads or flips it.
#[derive(Clone, Copy)]
pub struct ThemeController {
    pref: RwSignal<ThemePreference>,
    host: Host,
}

impl ThemeController {
    /// Must be called inside a component so the storage hooks have an owner.
    pub fn new() -> Self {
        Self {
            pref: RwSignal::new(ThemePreference::new()),
            host: Host::new(),
        }
    }

    pub fn initialize(self) {
        self.pref.update(|p| {
            p.initialize(&self.host);
        });
    }

    pub fn toggle(self) {
        self.pref.update(|p| {
            p.toggle(&self.host);
        });
    }

    /// Current mode, tracked.
    pub fn mode(self) -> Theme {
        self.pref.with(|p| p.get())
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ThemeToggle(theme: ThemeController) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-3 py-1 rounded-md border border-slate-300 dark:border-slate-700 hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors duration-200"
            aria-label=move || format!("Switch to {} mode", theme.mode().toggled())
            on:click=move |_| theme.toggle()
        >
            {move || match theme.mode() {
                Theme::Light => "☾",
                Theme::Dark => "☀",
            }}
        </button>
    }
}
