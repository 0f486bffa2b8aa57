use leptos::prelude::*;

use crate::{
    content::PORTFOLIO,
    links::{mailto_href, Section, TOP_ANCHOR},
    state::MenuState,
};

const DESKTOP_LINK: &str = "text-slate-300 hover:text-cyan-400 transition-colors";
const MOBILE_LINK: &str = "block text-slate-300 hover:text-cyan-400";

fn nav_links(class: &'static str) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a href=section.href() class=class>
                    {section.label()}
                </a>
            }
        })
        .collect_view()
}

/// Fixed top bar. Following a nav link leaves the mobile menu as it is; only
/// the menu button changes it.
#[component]
pub fn Header(#[prop(into)] menu: Signal<MenuState>, on_toggle: Callback<()>) -> impl IntoView {
    let identity = &PORTFOLIO.identity;
    let is_open = move || menu.get().is_open();

    view! {
        <header class="fixed top-0 w-full z-50 bg-linear-to-b from-slate-900 via-slate-900 to-slate-900/80 backdrop-blur-md border-b border-slate-700/50">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a
                    href=format!("#{TOP_ANCHOR}")
                    class="text-xl font-bold bg-linear-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent"
                >
                    {identity.initials()}
                </a>

                <nav class="hidden md:flex items-center gap-8 text-sm">
                    {nav_links(DESKTOP_LINK)}
                    <a
                        href=mailto_href(identity.email)
                        class="px-4 py-2 bg-linear-to-r from-cyan-500 to-blue-600 text-white rounded-lg text-xs font-semibold hover:shadow-lg hover:shadow-cyan-500/30 transition-all"
                    >
                        "Let's Talk"
                    </a>
                </nav>

                <button
                    class="md:hidden text-slate-300 text-2xl leading-none"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| on_toggle.run(())
                >
                    {move || if is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=is_open>
                <div class="md:hidden bg-slate-800 border-t border-slate-700/50 p-6 space-y-4">
                    {nav_links(MOBILE_LINK)}
                </div>
            </Show>
        </header>
    }
}
