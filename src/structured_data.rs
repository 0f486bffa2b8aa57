//! schema.org `Person` description embedded in the page body for crawlers.

use serde::Serialize;

use crate::{
    content::Portfolio,
    links::{github_url, linkedin_url, mailto_href, tel_href},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    job_title: &'a str,
    description: &'a str,
    email: String,
    telephone: String,
    same_as: [String; 2],
    knows_about: Vec<&'a str>,
}

/// JSON-LD for the portfolio owner, safe to place inside a `<script>` element.
pub fn person_json_ld(portfolio: &Portfolio) -> String {
    let identity = &portfolio.identity;
    let tel = tel_href(identity.phone);
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: identity.name,
        job_title: identity.title,
        description: identity.headline,
        email: mailto_href(identity.email),
        telephone: tel.trim_start_matches("tel:").to_string(),
        same_as: [linkedin_url(identity.linkedin), github_url(identity.github)],
        knows_about: portfolio
            .skills
            .iter()
            .flat_map(|c| c.skills.iter().copied())
            .collect(),
    };
    // serializing plain strings and arrays can't fail
    let json = serde_json::to_string(&person).unwrap_or_default();
    json.replace("</", "<\\/")
}
