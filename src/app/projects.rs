use leptos::{ev::KeyboardEvent, prelude::*};

use crate::{content::ProjectEntry, links::Section};

const TAG_CLASS: &str =
    "px-2 py-1 bg-slate-700/50 text-slate-300 rounded text-xs border border-slate-600/50";

/// Cards report the clicked project through `on_select`; which project is
/// open is decided by the owner of that callback.
#[component]
pub fn Projects(
    projects: &'static [ProjectEntry],
    on_select: Callback<&'static ProjectEntry>,
) -> impl IntoView {
    view! {
        <section
            id=Section::Projects.anchor()
            class="py-20 px-6 bg-linear-to-b from-slate-900 to-slate-800 border-t border-slate-700/50"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-white mb-16">"Featured Projects"</h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project on_select /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(
    project: &'static ProjectEntry,
    on_select: Callback<&'static ProjectEntry>,
) -> impl IntoView {
    let preview = project.tech_preview();
    let on_keydown = move |ev: KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            on_select.run(project);
        }
    };

    view! {
        <div
            role="button"
            tabindex="0"
            on:click=move |_| on_select.run(project)
            on:keydown=on_keydown
            class="group relative p-6 rounded-lg border border-slate-700/50 bg-linear-to-br from-slate-800 to-slate-800/50 hover:border-cyan-500/50 hover:shadow-2xl hover:shadow-cyan-500/10 transition-all cursor-pointer"
        >
            <div class="relative z-10">
                <h3 class="text-xl font-bold text-white mb-2 group-hover:text-cyan-400 transition-colors">
                    {project.title}
                </h3>
                <p class="text-sm font-semibold text-cyan-400 mb-3">{project.role}</p>
                <p class="text-slate-300 text-sm mb-5 leading-relaxed">{project.short_desc}</p>

                <div class="mb-6">
                    <div class="flex flex-wrap gap-2">
                        {preview
                            .shown
                            .iter()
                            .map(|tech| view! { <span class=TAG_CLASS>{*tech}</span> })
                            .collect_view()}
                        {preview
                            .overflow
                            .map(|n| view! { <span class=TAG_CLASS>{format!("+{n}")}</span> })}
                    </div>
                </div>

                <span class="inline-flex items-center gap-2 text-cyan-400 hover:text-cyan-300 font-semibold text-sm group-hover:gap-3 transition-all">
                    "Read Case Study"
                    <span aria-hidden="true">"↗"</span>
                </span>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::content::PORTFOLIO;

    fn render_card(project: &'static ProjectEntry) -> String {
        Owner::new().with(|| {
            let on_select = Callback::new(|_: &'static ProjectEntry| ());
            view! { <ProjectCard project on_select /> }.to_html()
        })
    }

    #[test]
    fn card_truncates_tech_stack() {
        let project = PORTFOLIO.project(1).unwrap();
        let html = render_card(project);
        for tech in &project.tech_stack[..4] {
            assert!(html.contains(&format!(">{tech}<")), "{tech}");
        }
        assert!(!html.contains(">FFmpeg<"));
        assert!(!html.contains(">React<"));
        assert!(html.contains(">+2<"));
    }

    #[test]
    fn one_card_per_project_in_order() {
        let html = Owner::new().with(|| {
            let on_select = Callback::new(|_: &'static ProjectEntry| ());
            view! { <Projects projects=PORTFOLIO.projects on_select /> }.to_html()
        });
        assert_eq!(html.matches("role=\"button\"").count(), PORTFOLIO.projects.len());
        let positions = PORTFOLIO
            .projects
            .iter()
            .map(|p| html.find(p.title).expect("card title rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn render_is_stable() {
        let project = PORTFOLIO.project(2).unwrap();
        assert_eq!(render_card(project), render_card(project));
    }
}
