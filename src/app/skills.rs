use leptos::prelude::*;

use super::about::SectionHeader;
use crate::portfolio::CONFIG;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-surface/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader title="Skills" subtitle="Technologies and tools I work with" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CONFIG
                        .skills
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="card p-6">
                                    <h3 class="text-lg font-bold mb-4">{category.category.clone()}</h3>
                                    {category
                                        .items
                                        .iter()
                                        .map(|item| {
                                            let width = format!("width: {}%", item.level.min(100));
                                            view! {
                                                <div class="mb-3">
                                                    <div class="flex justify-between text-sm mb-1">
                                                        <span>{item.name.clone()}</span>
                                                        <span class="text-muted">
                                                            {format!("{}%", item.level)}
                                                        </span>
                                                    </div>
                                                    <div class="h-2 rounded-full bg-muted/20">
                                                        <div
                                                            class="h-2 rounded-full bg-primary"
                                                            style=width
                                                        ></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
