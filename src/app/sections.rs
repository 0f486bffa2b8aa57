use leptos::prelude::*;

use crate::{content::SkillCategory, links::Section};

#[component]
pub fn About(paragraphs: &'static [&'static str]) -> impl IntoView {
    view! {
        <section
            id=Section::About.anchor()
            class="py-20 px-6 bg-slate-900 border-t border-slate-700/50"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-white mb-12">"About"</h2>
                <div class="space-y-6 text-slate-300 text-lg leading-relaxed">
                    {paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One card per category, skills listed in the order they were authored.
#[component]
pub fn Skills(categories: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <section
            id=Section::Skills.anchor()
            class="py-20 px-6 bg-linear-to-b from-slate-800 to-slate-900"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-white mb-16">"Technical Stack"</h2>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {categories
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="p-6 rounded-lg border border-slate-700/50 bg-linear-to-br from-slate-800 to-slate-800/50 hover:border-cyan-500/50 transition-all">
                                    <h3 class="text-lg font-semibold text-cyan-400 mb-4">
                                        {category.label}
                                    </h3>
                                    <div class="flex flex-wrap gap-3">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 bg-slate-700/50 text-slate-300 rounded-full text-sm border border-slate-600/50 hover:border-cyan-500/50 hover:text-cyan-400 transition-all">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::content::PORTFOLIO;

    fn render_skills() -> String {
        Owner::new().with(|| view! { <Skills categories=PORTFOLIO.skills /> }.to_html())
    }

    #[test]
    fn skills_follow_store_order() {
        let html = render_skills();
        let mut cursor = 0;
        for category in PORTFOLIO.skills {
            for skill in category.skills {
                let tag = format!(">{skill}<");
                let at = html[cursor..]
                    .find(&tag)
                    .unwrap_or_else(|| panic!("{skill} missing or out of order"));
                cursor += at + tag.len();
            }
        }
    }

    #[test]
    fn skills_are_not_duplicated() {
        let html = render_skills();
        for category in PORTFOLIO.skills {
            for skill in category.skills {
                assert_eq!(html.matches(&format!(">{skill}<")).count(), 1, "{skill}");
            }
        }
    }

    #[test]
    fn about_paragraphs_in_order() {
        let html = Owner::new().with(|| view! { <About paragraphs=PORTFOLIO.about /> }.to_html());
        assert!(html.contains("id=\"about\""));
        let first = html.find("I specialize").expect("first paragraph");
        let last = html.find("When I").expect("last paragraph");
        assert!(first < last);
    }

    #[test]
    fn render_is_stable() {
        assert_eq!(render_skills(), render_skills());
    }
}
