use leptos::prelude::*;

use super::about::SectionHeader;
use crate::portfolio::CONFIG;

#[component]
pub fn Contact() -> impl IntoView {
    let info = &CONFIG.personal_info;

    view! {
        <section id="contact" class="py-20">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Open to collaboration and interesting conversations"
                />
                <div class="card p-8">
                    <p class="text-lg text-primary font-medium mb-2">{info.status.clone()}</p>
                    <p class="text-muted mb-6">
                        "Whether you want to discuss an engineering challenge, explore a collaboration, or share an exciting opportunity, I'd love to hear from you."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href=format!("mailto:{}", info.email)
                            class="px-6 py-3 rounded-md bg-primary/20 text-primary font-medium border border-primary/30 hover:bg-primary/30 transition-colors"
                        >
                            {format!("📧 {}", info.email)}
                        </a>
                        {info
                            .booking_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-6 py-3 rounded-md border border-muted/30 text-muted font-medium hover:border-primary hover:text-primary transition-colors"
                                    >
                                        "📅 Book a call"
                                    </a>
                                }
                            })}
                    </div>
                    <div class="flex justify-center gap-4 mt-8">
                        {info
                            .social_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-2xl text-muted hover:text-primary transition-colors"
                                        aria-label=link.platform.label()
                                    >
                                        <i class=link.platform.icon_class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-muted/20 text-center text-sm text-muted">
            <p>{format!("© {}", CONFIG.personal_info.name)}</p>
            <p class="mt-1">"Built with Rust & Leptos · build " {env!("BUILD_TIME")}</p>
        </footer>
    }
}
