mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod modal;
mod projects;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{ProjectEntry, PORTFOLIO},
    state::{ContactState, Field, MenuState, Selection, SubmissionTicket},
    structured_data::person_json_ld,
};

use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use modal::ProjectModal;
use projects::Projects;
use sections::{About, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-slate-900 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let identity = &PORTFOLIO.identity;

    view! {
        <Title text=format!("{} - {}", identity.name, identity.title) />
        <Meta name="description" content=identity.headline />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Every piece of transient UI state on the page, together with the
/// transitions children may request.
#[derive(Clone, Copy)]
struct PageState {
    menu: RwSignal<MenuState>,
    selection: RwSignal<Selection>,
    contact: RwSignal<ContactState>,
    toggle_menu: Callback<()>,
    select_project: Callback<&'static ProjectEntry>,
    dismiss_project: Callback<()>,
    edit_field: Callback<(Field, String)>,
    submit_contact: Callback<(), Option<SubmissionTicket>>,
    expire_banner: Callback<SubmissionTicket>,
}

impl PageState {
    fn new() -> Self {
        let menu = RwSignal::new(MenuState::default());
        let selection = RwSignal::new(Selection::default());
        let contact = RwSignal::new(ContactState::default());

        let toggle_menu = Callback::new(move |_: ()| {
            menu.update(MenuState::toggle);
            log::debug!("mobile menu now {:?}", menu.get_untracked());
        });

        let select_project = Callback::new(move |project: &'static ProjectEntry| {
            log::debug!("opening project {}", project.id);
            selection.update(|s| s.select(project));
        });
        let dismiss_project = Callback::new(move |_: ()| {
            selection.update(Selection::dismiss);
        });

        let edit_field = Callback::new(move |(field, value): (Field, String)| {
            contact.update(|c| c.set_field(field, value));
        });
        let submit_contact = Callback::new(move |_: ()| {
            let ticket = contact.try_update(ContactState::submit).flatten();
            if ticket.is_none() {
                log::debug!("contact form incomplete, ignoring submit");
            }
            ticket
        });
        let expire_banner = Callback::new(move |ticket: SubmissionTicket| {
            contact.update(|c| c.expire(ticket));
        });

        Self {
            menu,
            selection,
            contact,
            toggle_menu,
            select_project,
            dismiss_project,
            edit_field,
            submit_contact,
            expire_banner,
        }
    }
}

/// Root of the page. Owns the [`PageState`] and hands the sections read-only
/// signals plus callbacks for the transitions they may request.
#[component]
fn PortfolioPage() -> impl IntoView {
    let page = PageState::new();

    view! {
        <script type="application/ld+json" inner_html=person_json_ld(&PORTFOLIO)></script>
        <div class="min-h-screen bg-slate-900 text-white">
            <Header menu=page.menu on_toggle=page.toggle_menu />
            <Hero />
            <About paragraphs=PORTFOLIO.about />
            <Skills categories=PORTFOLIO.skills />
            <Experience entries=PORTFOLIO.experience />
            <Projects projects=PORTFOLIO.projects on_select=page.select_project />
            <Contact
                state=page.contact
                on_input=page.edit_field
                on_submit=page.submit_contact
                on_expire=page.expire_banner
            />
            <Footer portfolio={&PORTFOLIO} />
            <SelectedProject page />
        </div>
    }
}

/// Detail modal for the selected project, absent while nothing is selected.
#[component]
fn SelectedProject(page: PageState) -> impl IntoView {
    move || {
        page.selection
            .get()
            .project()
            .map(|project| view! { <ProjectModal project on_close=page.dismiss_project /> })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    fn render_modal(page: PageState) -> String {
        view! { <SelectedProject page /> }.to_html()
    }

    #[test]
    fn no_modal_until_a_card_is_activated() {
        Owner::new().with(|| {
            let page = PageState::new();
            assert!(!render_modal(page).contains("role=\"dialog\""));
        });
    }

    #[test]
    fn activated_card_opens_only_its_project() {
        Owner::new().with(|| {
            let page = PageState::new();
            for project in PORTFOLIO.projects {
                page.select_project.run(project);
                assert_eq!(page.selection.get_untracked(), Selection::Selected(project));

                let html = render_modal(page);
                assert!(html.contains("role=\"dialog\""));
                assert!(html.contains(project.title));
                for other in PORTFOLIO.projects.iter().filter(|p| p.id != project.id) {
                    assert!(!html.contains(other.title), "{} leaked", other.title);
                }
            }
        });
    }

    #[test]
    fn dismiss_removes_modal() {
        Owner::new().with(|| {
            let page = PageState::new();
            for project in PORTFOLIO.projects {
                page.select_project.run(project);
                page.dismiss_project.run(());
                assert_eq!(page.selection.get_untracked(), Selection::None);
                assert!(!render_modal(page).contains("role=\"dialog\""));
            }
        });
    }

    #[test]
    fn submit_needs_every_field() {
        Owner::new().with(|| {
            let page = PageState::new();
            assert!(page.submit_contact.run(()).is_none());

            page.edit_field.run((Field::Name, "Ada".to_string()));
            page.edit_field.run((Field::Email, "a@b.com".to_string()));
            assert!(page.submit_contact.run(()).is_none());
            assert_eq!(page.contact.get_untracked().form.name, "Ada");
            assert!(!page.contact.get_untracked().submitted());

            page.edit_field.run((Field::Message, "hi".to_string()));
            let ticket = page.submit_contact.run(()).expect("complete form");
            let contact = page.contact.get_untracked();
            assert!(contact.submitted());
            assert_eq!(contact.form, Default::default());

            page.expire_banner.run(ticket);
            assert!(!page.contact.get_untracked().submitted());
        });
    }

    #[test]
    fn menu_toggle_through_callback() {
        Owner::new().with(|| {
            let page = PageState::new();
            page.toggle_menu.run(());
            assert!(page.menu.get_untracked().is_open());
            page.toggle_menu.run(());
            assert!(!page.menu.get_untracked().is_open());
        });
    }
}
