use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    content::PORTFOLIO,
    links::{github_url, linkedin_url, mailto_href, phone_display, tel_href, Section},
    state::{ContactState, Field, SubmissionTicket, SUBMITTED_BANNER_DURATION},
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-slate-800 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:border-cyan-500 focus:ring-1 focus:ring-cyan-500 transition-all";
const LABEL_CLASS: &str = "block text-sm font-semibold text-slate-300 mb-2";
const CHANNEL_CLASS: &str =
    "flex items-center gap-3 text-slate-300 hover:text-cyan-400 transition-colors group";

/// Local-only contact form. Nothing is sent anywhere; an accepted submission
/// raises a confirmation banner that drops again after
/// [`SUBMITTED_BANNER_DURATION`].
///
/// The revert timer belongs to this component: a newer submission stops the
/// pending timeout before scheduling its own, and the one left pending is
/// cleared when the component is disposed.
/// `use_timeout_fn`'s `start` overwrites its handle without clearing the old
/// timeout, so at most one timeout may be pending when it is called.
fn restart_timer(stop: &impl Fn(), start: &impl Fn(SubmissionTicket), ticket: SubmissionTicket) {
    stop();
    start(ticket);
}

#[component]
pub fn Contact(
    #[prop(into)] state: Signal<ContactState>,
    on_input: Callback<(Field, String)>,
    on_submit: Callback<(), Option<SubmissionTicket>>,
    on_expire: Callback<SubmissionTicket>,
) -> impl IntoView {
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: SubmissionTicket| on_expire.run(ticket),
        SUBMITTED_BANNER_DURATION.as_millis() as f64,
    );

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(ticket) = on_submit.run(()) {
            restart_timer(&stop, &start, ticket);
        }
    };

    let value_of = move |field: Field| move || state.with(|s| s.form.get(field).to_string());
    let edit = move |field: Field| move |ev: Event| on_input.run((field, event_target_value(&ev)));

    let identity = &PORTFOLIO.identity;

    view! {
        <section
            id=Section::Contact.anchor()
            class="py-20 px-6 bg-slate-900 border-t border-slate-700/50"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-white mb-4">"Let's Work Together"</h2>
                <p class="text-slate-400 mb-12">
                    "Have a project in mind? Let's build something amazing."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                    <form class="space-y-6" on:submit=handle_submit>
                        <div>
                            <label for="contact-name" class=LABEL_CLASS>
                                "Name"
                            </label>
                            <input
                                id="contact-name"
                                type="text"
                                class=INPUT_CLASS
                                placeholder="Your name"
                                prop:value=value_of(Field::Name)
                                on:input=edit(Field::Name)
                            />
                        </div>
                        <div>
                            <label for="contact-email" class=LABEL_CLASS>
                                "Email"
                            </label>
                            <input
                                id="contact-email"
                                type="email"
                                class=INPUT_CLASS
                                placeholder="your@email.com"
                                prop:value=value_of(Field::Email)
                                on:input=edit(Field::Email)
                            />
                        </div>
                        <div>
                            <label for="contact-message" class=LABEL_CLASS>
                                "Message"
                            </label>
                            <textarea
                                id="contact-message"
                                rows="5"
                                class=format!("{INPUT_CLASS} resize-none")
                                placeholder="Your message..."
                                prop:value=value_of(Field::Message)
                                on:input=edit(Field::Message)
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full px-6 py-3 bg-linear-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-semibold hover:shadow-lg hover:shadow-cyan-500/30 transition-all"
                        >
                            "Send Message"
                        </button>
                        <Show when=move || state.with(ContactState::submitted)>
                            <div
                                role="status"
                                class="p-4 bg-cyan-500/10 border border-cyan-500/50 rounded-lg text-cyan-400 text-sm"
                            >
                                "✓ Message received! I'll get back to you within 24 hours."
                            </div>
                        </Show>
                    </form>

                    <div class="space-y-8">
                        <div>
                            <h3 class="text-cyan-400 font-semibold mb-6 text-sm uppercase tracking-wide">
                                "Contact"
                            </h3>
                            <div class="space-y-4">
                                <a href=mailto_href(identity.email) class=CHANNEL_CLASS>
                                    <span class="text-cyan-400" aria-hidden="true">"✉"</span>
                                    <span>{identity.email}</span>
                                </a>
                                <a href=tel_href(identity.phone) class=CHANNEL_CLASS>
                                    <span class="text-cyan-400" aria-hidden="true">"☎"</span>
                                    <span>{phone_display(identity.phone)}</span>
                                </a>
                                <a
                                    href=linkedin_url(identity.linkedin)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=CHANNEL_CLASS
                                >
                                    <span class="text-cyan-400" aria-hidden="true">"in"</span>
                                    <span>"LinkedIn"</span>
                                </a>
                                <a
                                    href=github_url(identity.github)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=CHANNEL_CLASS
                                >
                                    <span class="text-cyan-400" aria-hidden="true">"⌥"</span>
                                    <span>"GitHub"</span>
                                </a>
                            </div>
                        </div>

                        <div class="p-6 rounded-lg bg-linear-to-br from-cyan-500/10 to-blue-500/10 border border-cyan-500/20">
                            <p class="text-slate-300 text-sm leading-relaxed">
                                {PORTFOLIO.contact_blurb}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
