use leptos::prelude::*;

use crate::content::ProjectEntry;

const HEADING_CLASS: &str = "text-cyan-400 font-semibold mb-3 text-sm uppercase tracking-wide";

/// Detail overlay for one project. Unlike the card it lists the whole tech
/// stack.
#[component]
pub fn ProjectModal(project: &'static ProjectEntry, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4">
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-modal-title"
                class="bg-slate-800 border border-slate-700/50 rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto"
            >
                <div class="sticky top-0 bg-linear-to-b from-slate-800 to-slate-800/50 border-b border-slate-700/50 p-6 flex justify-between items-start">
                    <div>
                        <h2 id="project-modal-title" class="text-2xl font-bold text-white">
                            {project.title}
                        </h2>
                        <p class="text-cyan-400 text-sm mt-1 font-semibold">{project.role}</p>
                    </div>
                    <button
                        class="text-slate-400 hover:text-white transition-colors text-2xl leading-none"
                        aria-label="Close project details"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6 space-y-8">
                    <div>
                        <h3 class=HEADING_CLASS>"Overview"</h3>
                        <p class="text-slate-300 whitespace-pre-wrap text-sm leading-relaxed">
                            {project.full_description}
                        </p>
                    </div>

                    <div>
                        <h3 class=HEADING_CLASS>"Key Metrics"</h3>
                        <ul class="space-y-2">
                            {project
                                .key_metrics
                                .iter()
                                .map(|metric| {
                                    view! {
                                        <li class="text-slate-300 text-sm flex gap-3">
                                            <span class="text-cyan-400 shrink-0">"✓"</span>
                                            <span>{*metric}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class=HEADING_CLASS>"Tech Stack"</h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .tech_stack
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 bg-slate-700/50 text-slate-300 rounded-full text-sm border border-slate-600/50">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::content::PORTFOLIO;

    fn render(project: &'static ProjectEntry) -> String {
        Owner::new().with(|| {
            view! { <ProjectModal project on_close=Callback::new(|_: ()| ()) /> }.to_html()
        })
    }

    #[test]
    fn modal_lists_full_tech_stack() {
        let project = PORTFOLIO.project(1).unwrap();
        let html = render(project);
        for tech in project.tech_stack {
            assert!(html.contains(&format!(">{tech}<")), "{tech}");
        }
        assert!(!html.contains(">+2<"));
    }

    #[test]
    fn modal_shows_only_its_project() {
        let project = PORTFOLIO.project(3).unwrap();
        let html = render(project);
        for metric in project.key_metrics {
            // "<2s latency" is escaped in markup
            let escaped = metric.replace('<', "&lt;");
            assert!(html.contains(&escaped), "{metric}");
        }
        for other in PORTFOLIO.projects.iter().filter(|p| p.id != project.id) {
            assert!(!html.contains(other.title));
            assert!(!html.contains(other.key_metrics[0]));
        }
    }
}
