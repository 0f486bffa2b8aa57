use leptos::prelude::*;

use crate::{
    content::PORTFOLIO,
    links::{Section, TOP_ANCHOR},
};

#[component]
pub fn Hero() -> impl IntoView {
    let identity = &PORTFOLIO.identity;

    view! {
        <section
            id=TOP_ANCHOR
            class="relative pt-32 pb-20 px-6 bg-linear-to-br from-slate-900 via-slate-900 to-slate-800 overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-cyan-500/10 rounded-full blur-3xl"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-blue-500/10 rounded-full blur-3xl"></div>
            </div>

            <div class="max-w-4xl mx-auto relative z-10">
                <div class="space-y-6">
                    <h1 class="text-6xl md:text-7xl font-bold text-white leading-tight">
                        {identity.name}
                    </h1>
                    <p class="text-xl md:text-2xl bg-linear-to-r from-cyan-400 via-blue-400 to-purple-400 bg-clip-text text-transparent font-semibold">
                        {identity.headline}
                    </p>
                    <p class="text-lg text-slate-300 max-w-2xl leading-relaxed">
                        {PORTFOLIO.summary}
                    </p>
                </div>

                <div class="flex flex-col sm:flex-row gap-4 mt-12">
                    <a
                        href=Section::Projects.href()
                        class="px-8 py-4 bg-linear-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-semibold hover:shadow-2xl hover:shadow-cyan-500/30 transition-all inline-flex items-center gap-2 justify-center sm:justify-start"
                    >
                        "View My Work"
                        <span aria-hidden="true">"→"</span>
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="px-8 py-4 border border-slate-600 text-slate-300 rounded-lg font-semibold hover:bg-slate-800 hover:border-slate-500 transition-all text-center"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
