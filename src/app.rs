mod about;
mod contact;
mod experience;
mod hero;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::CONFIG;

use about::About;
use contact::{Contact, Footer};
use experience::ExperienceSection;
use hero::Hero;
use navbar::Navbar;
use projects::ProjectsSection;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let site = &CONFIG.site_metadata;

    view! {
        <Title text=site.title.clone() />
        <Meta name="description" content=site.description.clone() />
        <Meta name="keywords" content=site.keywords.join(", ") />
        <Meta property="og:title" content=site.title.clone() />
        <Meta property="og:description" content=site.description.clone() />
        <Meta property="og:locale" content=site.locale.clone() />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Skills />
        <ExperienceSection />
        <ProjectsSection />
        <Contact />
    }
}
