use leptos::prelude::*;

use crate::portfolio::CONFIG;

#[component]
pub fn About() -> impl IntoView {
    let info = &CONFIG.personal_info;
    let paragraphs = info
        .bio
        .split("\n\n")
        .map(|p| p.to_string())
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader title="About Me" subtitle="Who I am and what I do" />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div>
                        {paragraphs
                            .into_iter()
                            .map(|p| {
                                view! { <p class="text-base leading-relaxed text-muted mb-4">{p}</p> }
                            })
                            .collect_view()}
                        <p class="text-sm text-primary font-medium">
                            {format!("{} · {}", info.status, info.location)}
                        </p>
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {CONFIG
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="card p-6 text-center">
                                        <div class="text-3xl font-bold text-primary mb-1">
                                            {stat.value.clone()}
                                        </div>
                                        <div class="text-sm text-muted">{stat.label.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid md:grid-cols-2 gap-12 mt-16">
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Education"</h3>
                        {CONFIG
                            .education
                            .iter()
                            .map(|edu| {
                                view! {
                                    <div class="card p-6 mb-4">
                                        <div class="font-bold">{edu.degree.clone()}</div>
                                        <div class="text-primary">{edu.school.clone()}</div>
                                        <div class="text-sm text-muted">
                                            {format!("{} · {}", edu.period, edu.description)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Certifications"</h3>
                        <ul class="space-y-2">
                            {CONFIG
                                .certifications
                                .iter()
                                .map(|cert| {
                                    view! {
                                        <li class="flex items-start gap-2 text-muted">
                                            <span class="text-green">"✓"</span>
                                            {cert.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl sm:text-5xl font-bold mb-4 text-gradient">{title}</h2>
            <p class="text-muted max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
