use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_use::use_interval_fn;

use crate::portfolio::CONFIG;

#[cfg(feature = "hydrate")]
const TYPE_TICK_MS: u64 = 100;
// How long a fully-typed role stays on screen, in ticks
const HOLD_TICKS: u32 = 20;

/// Typewriter cycle for the hero roles: type out, hold, delete, advance.
/// Pure so the cycle can be tested tick by tick without a timer.
#[derive(Debug, Clone)]
struct TypingText {
    roles: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

impl TypingText {
    fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn current_len(&self) -> usize {
        self.roles
            .get(self.index)
            .map(|r| r.chars().count())
            .unwrap_or(0)
    }

    // Char-indexed, not byte-indexed, so multi-byte role names stay valid
    fn display(&self) -> String {
        self.roles
            .get(self.index)
            .map(|r| r.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    fn tick(&mut self) {
        if self.roles.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                if self.shown < self.current_len() {
                    self.shown += 1;
                } else {
                    self.phase = Phase::Holding(HOLD_TICKS);
                }
            }
            Phase::Holding(0) => self.phase = Phase::Deleting,
            Phase::Holding(n) => self.phase = Phase::Holding(n - 1),
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                } else {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let info = &CONFIG.personal_info;
    // Server render shows the first role in full; the interval takes over
    // after hydration
    let first_role = CONFIG.roles.first().cloned().unwrap_or_default();
    let (typed, set_typed) = signal(first_role);

    #[cfg(feature = "hydrate")]
    {
        let machine = StoredValue::new(TypingText::new(CONFIG.roles.clone()));
        let _ = use_interval_fn(
            move || {
                machine.update_value(|m| m.tick());
                set_typed(machine.with_value(|m| m.display()));
            },
            TYPE_TICK_MS,
        );
    }

    view! {
        <section
            id="top"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 -z-10 hero-glow"></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
                <p class="text-lg sm:text-xl text-primary font-medium mb-4">"Hello, I'm"</p>
                <h1 class="text-5xl sm:text-7xl lg:text-8xl font-bold mb-6 text-gradient">
                    {info.name.clone()}
                </h1>
                <div class="text-2xl sm:text-3xl lg:text-4xl font-semibold text-muted mb-6 h-12">
                    <span>{typed}</span>
                    <span class="cursor-blink">"|"</span>
                </div>
                <p class="text-lg text-muted max-w-2xl mx-auto mb-10">{info.tagline.clone()}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href=info.resume_url.clone()
                        download="cv.pdf"
                        class="px-8 py-3 rounded-full bg-primary text-background font-semibold shadow-lg hover:opacity-90 transition-opacity"
                    >
                        "Download CV"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 rounded-full border border-primary text-primary font-semibold hover:bg-primary/10 transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <a href="#about" class="inline-block mt-16 text-muted animate-bounce" aria-label="Scroll down">
                    "↓"
                </a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(roles: &[&str]) -> TypingText {
        TypingText::new(roles.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut m = machine(&["abc"]);
        assert_eq!(m.display(), "");
        m.tick();
        assert_eq!(m.display(), "a");
        m.tick();
        assert_eq!(m.display(), "ab");
        m.tick();
        assert_eq!(m.display(), "abc");
    }

    #[test]
    fn test_holds_after_full_word_then_deletes() {
        let mut m = machine(&["ab"]);
        m.tick();
        m.tick();
        assert_eq!(m.display(), "ab");

        // Enter hold, wait it out
        for _ in 0..=HOLD_TICKS + 1 {
            m.tick();
            assert_eq!(m.display(), "ab");
        }
        m.tick();
        assert_eq!(m.display(), "a");
        m.tick();
        assert_eq!(m.display(), "");
    }

    fn ticks_until(m: &mut TypingText, want: &str) -> usize {
        for i in 1..=1000 {
            m.tick();
            if m.display() == want {
                return i;
            }
        }
        panic!("never displayed {want:?}");
    }

    #[test]
    fn test_advances_to_next_role_and_wraps() {
        let mut m = machine(&["a", "b"]);
        // type + enter hold + countdown + leave hold + delete + advance + type
        let expected = 1 + 1 + HOLD_TICKS as usize + 1 + 1 + 1 + 1;
        assert_eq!(ticks_until(&mut m, "b"), expected);

        // Full second cycle wraps back to the first role
        ticks_until(&mut m, "a");
        assert_eq!(m.display(), "a");
    }

    #[test]
    fn test_display_is_char_indexed() {
        let mut m = machine(&["Développeur"]);
        m.tick();
        m.tick();
        m.tick();
        assert_eq!(m.display(), "Dév");
    }

    #[test]
    fn test_empty_roles_do_not_panic() {
        let mut m = machine(&[]);
        for _ in 0..100 {
            m.tick();
        }
        assert_eq!(m.display(), "");
    }
}
