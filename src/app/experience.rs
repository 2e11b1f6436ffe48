use leptos::prelude::*;

use super::about::SectionHeader;
use crate::period::duration_label;
use crate::portfolio::{Experience, ExperienceRole, CONFIG};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    title="Work Experience"
                    subtitle="My professional journey and career highlights"
                />
                <div class="relative timeline">
                    <div class="space-y-12">
                        {CONFIG
                            .experiences
                            .iter()
                            .map(|exp| view! { <ExperienceCard exp=exp.clone() /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(exp: Experience) -> impl IntoView {
    let roles = exp.roles().to_vec();
    let company = exp.company.clone();
    let company_header = match exp.company_url.clone() {
        Some(url) => view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer nofollow"
                class="text-primary font-semibold hover:underline"
            >
                {company}
            </a>
        }
        .into_any(),
        None => view! { <span class="text-primary font-semibold">{company}</span> }.into_any(),
    };

    view! {
        <div class="card p-6 relative timeline-entry">
            <div class="flex flex-wrap items-baseline justify-between gap-2 mb-4">
                {company_header}
                <span class="text-sm text-muted">{exp.location.clone()}</span>
            </div>
            <div class="space-y-6">
                {roles
                    .into_iter()
                    .map(|role| view! { <RoleEntry role /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RoleEntry(role: ExperienceRole) -> impl IntoView {
    // Empty label means the period didn't parse; drop the annotation rather
    // than showing a broken duration
    let duration = duration_label(&role.period);

    view! {
        <div>
            <div class="flex flex-wrap items-baseline justify-between gap-2">
                <h4 class="font-bold">{role.title}</h4>
                <div class="text-sm text-muted shrink-0">
                    {role.period}
                    {(!duration.is_empty())
                        .then(|| view! { <span>" · " {duration.clone()}</span> })}
                </div>
            </div>
            <p class="text-muted mt-1 mb-2">{role.description}</p>
            <ul class="space-y-1">
                {role
                    .achievements
                    .into_iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start gap-2 text-sm text-muted">
                                <span class="text-green shrink-0">"✓"</span>
                                {achievement}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
