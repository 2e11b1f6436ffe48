use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::portfolio::CONFIG;

const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur bg-background/80 border-b border-muted/20 shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#top" class="text-xl font-bold text-primary">
                    {CONFIG.personal_info.name.clone()}
                </a>
                <nav class="hidden md:flex items-center gap-x-6">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <a href=*href class="hover:text-primary transition-colors">
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");

        // Pick up the persisted choice once after hydration
        Effect::watch(
            || (),
            move |_, _, _| {
                set_theme(stored.get_untracked());
            },
            true,
        );

        Effect::new(move |_| {
            let theme = theme.get();
            set_stored.set(theme);
            if let Some(root) = document().document_element() {
                let class_list = root.class_list();
                let _ = match theme {
                    Theme::Light => class_list.add_1("light"),
                    Theme::Dark => class_list.remove_1("light"),
                };
            }
        });
    }

    view! {
        <button
            class="text-xl px-2 py-1 rounded-md border border-muted/30 hover:border-primary transition-colors"
            aria-label="Toggle theme"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().icon()}
        </button>
    }
}
