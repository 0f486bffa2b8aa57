use leptos::prelude::*;

use crate::{content::ExperienceEntry, links::Section};

#[component]
pub fn Experience(entries: &'static [ExperienceEntry]) -> impl IntoView {
    view! {
        <section
            id=Section::Experience.anchor()
            class="py-20 px-6 bg-slate-900 border-t border-slate-700/50"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-white mb-16">"Experience"</h2>

                <div class="space-y-8">
                    {entries.iter().map(|job| view! { <ExperienceCard job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(job: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="group relative p-6 rounded-lg border border-slate-700/50 bg-linear-to-br from-slate-800/50 to-slate-800/30 hover:border-cyan-500/30 hover:bg-slate-800/60 transition-all">
            <div class="relative z-10">
                <div class="flex flex-col sm:flex-row sm:items-start sm:justify-between mb-3">
                    <div>
                        <h3 class="text-xl font-bold text-white">{job.title}</h3>
                        <p class="text-cyan-400 font-semibold text-sm">{job.company}</p>
                    </div>
                    <p class="text-sm text-slate-400 mt-2 sm:mt-0">{job.period}</p>
                </div>
                <p class="text-sm text-slate-400 mb-4">{job.location}</p>
                <ul class="space-y-2">
                    {job
                        .bullets
                        .iter()
                        .map(|bullet| {
                            view! {
                                <li class="text-slate-300 text-sm flex gap-3">
                                    <span class="text-cyan-400 shrink-0 mt-1">"→"</span>
                                    <span>{*bullet}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::content::PORTFOLIO;

    fn render() -> String {
        Owner::new().with(|| view! { <Experience entries=PORTFOLIO.experience /> }.to_html())
    }

    #[test]
    fn entries_and_bullets_in_store_order() {
        let html = render();
        let mut cursor = 0;
        for job in PORTFOLIO.experience {
            for text in [job.title, job.company, job.period, job.location]
                .into_iter()
                .chain(job.bullets.iter().copied())
            {
                let at = html[cursor..]
                    .find(text)
                    .unwrap_or_else(|| panic!("{text} missing or out of order"));
                cursor += at + text.len();
            }
        }
    }

    #[test]
    fn period_is_shown_verbatim() {
        assert!(render().contains(">Jul 2024 – Feb 2025<"));
    }

    #[test]
    fn render_is_stable() {
        assert_eq!(render(), render());
    }
}
