use leptos::prelude::*;

use crate::content::Portfolio;

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    let notice = format!(
        "© {} {}. {}",
        portfolio.copyright_year, portfolio.identity.name, portfolio.footer_tagline
    );

    view! {
        <footer class="py-8 px-6 bg-slate-950 border-t border-slate-800 text-slate-400 text-sm text-center">
            <div class="max-w-6xl mx-auto">
                <p>{notice}</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::content::PORTFOLIO;

    fn render() -> String {
        Owner::new().with(|| view! { <Footer portfolio={&PORTFOLIO} /> }.to_html())
    }

    #[test]
    fn copyright_uses_pinned_year() {
        assert!(render()
            .contains(">© 2025 Rishabh Tyagi. Crafted with attention to detail.<"));
    }

    #[test]
    fn render_is_stable() {
        assert_eq!(render(), render());
    }
}
