use leptos::prelude::*;

use super::about::SectionHeader;
use crate::portfolio::{
    filter_projects, hide_links, sort_projects, ImageFit, Project, ProjectLinkType, ProjectStatus,
    StatusFilter, CONFIG,
};

// Featured-only view shows at most this many cards
const FEATURED_LIMIT: usize = 3;

fn link_icon(link_type: ProjectLinkType) -> &'static str {
    match link_type {
        ProjectLinkType::Website => "extra-link",
        ProjectLinkType::Github => "devicon-github-plain",
        ProjectLinkType::Appstore => "devicon-apple-original",
        ProjectLinkType::Playstore => "devicon-android-plain",
        ProjectLinkType::CaseStudy => "extra-download",
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let all_sorted = StoredValue::new(sort_projects(&CONFIG.projects));
    let total = CONFIG.projects.len();
    let featured_count = CONFIG
        .projects
        .iter()
        .filter(|p| p.featured)
        .count()
        .min(FEATURED_LIMIT);

    let (show_all, set_show_all) = signal(false);
    let (filter, set_filter) = signal(StatusFilter::All);

    let visible = move || {
        all_sorted.with_value(|sorted| {
            if show_all.get() {
                filter_projects(sorted, filter.get())
            } else {
                sorted
                    .iter()
                    .filter(|p| p.featured)
                    .take(FEATURED_LIMIT)
                    .cloned()
                    .collect()
            }
        })
    };

    view! {
        <section id="projects" class="py-20 bg-surface/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="Some of my recent work that I'm proud of"
                />
                {move || {
                    show_all
                        .get()
                        .then(|| {
                            view! {
                                <div class="flex flex-wrap justify-center gap-2 mb-8">
                                    {StatusFilter::ALL
                                        .iter()
                                        .map(|f| {
                                            let f = *f;
                                            view! {
                                                <button
                                                    class=move || {
                                                        if filter.get() == f {
                                                            "px-4 py-1.5 rounded-full text-sm font-medium bg-primary text-background"
                                                        } else {
                                                            "px-4 py-1.5 rounded-full text-sm font-medium border border-muted/30 text-muted hover:border-primary"
                                                        }
                                                    }
                                                    on:click=move |_| set_filter(f)
                                                >
                                                    {f.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
                {(total > featured_count)
                    .then(|| {
                        view! {
                            <div class="text-center mt-12">
                                <button
                                    class="px-8 py-3 rounded-full bg-primary text-background font-semibold shadow-lg hover:opacity-90 transition-opacity"
                                    on:click=move |_| {
                                        set_show_all.update(|s| *s = !*s);
                                        set_filter(StatusFilter::All);
                                    }
                                >
                                    {move || {
                                        if show_all.get() {
                                            "Show Less".to_string()
                                        } else {
                                            format!("View All Projects ({total})")
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let hidden_links = hide_links(&project);
    let image = project.image.clone();
    let image_class = match project.image_fit {
        ImageFit::Contain => "w-full h-48 object-contain p-6",
        ImageFit::Cover => "w-full h-48 object-cover",
    };

    let badges = view! {
        <div class="absolute top-3 right-3 flex flex-col items-end gap-2 z-10">
            {project
                .featured
                .then(|| {
                    view! {
                        <span class="px-2.5 py-1 rounded-full text-xs font-semibold bg-primary text-background shadow-lg">
                            "★ Featured"
                        </span>
                    }
                })}
            {(project.status != ProjectStatus::Live)
                .then(|| {
                    view! {
                        <span class="px-2.5 py-1 rounded-full text-xs font-medium bg-muted/80 text-background shadow-lg">
                            {project.status.label()}
                        </span>
                    }
                })}
        </div>
    };

    let links = if hidden_links {
        view! {
            <div class="flex items-center gap-1.5 mt-4 pt-3 border-t border-muted/20 text-muted text-xs">
                <span>"🔒"</span>
                "Available on request"
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="flex flex-wrap gap-3 mt-4 pt-3 border-t border-muted/20">
                {project
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url.clone()
                                target="_blank"
                                rel="noopener noreferrer nofollow"
                                title=link.label.clone()
                                class="flex items-center gap-1.5 text-sm text-primary hover:underline"
                            >
                                <i class=link_icon(link.link_type)></i>
                                {link.label.clone()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="card overflow-hidden h-full flex flex-col group relative">
            <div class="relative h-48 bg-muted/10 overflow-hidden">
                {match image {
                    Some(src) => {
                        view! { <img src=src alt=project.title.clone() class=image_class /> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="absolute inset-0 flex items-center justify-center text-5xl text-muted/40">
                                "🗀"
                            </div>
                        }
                            .into_any()
                    }
                }} {badges}
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-xl font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-sm text-muted mb-4 flex-1">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 rounded-full text-xs font-medium bg-primary/10 text-primary">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {links}
            </div>
        </div>
    }
}
