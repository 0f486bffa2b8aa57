//! Link targets: in-page anchors and the outbound contact channels.

/// Fragment id of the hero section, used by the header monogram.
pub const TOP_ANCHOR: &str = "top";

/// Country dialing code prepended to the stored phone number.
pub const DIAL_CODE: &str = "+91";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// `tel:` link in international format. Only digits of the stored number are
/// kept; the display text is built separately by [`phone_display`].
pub fn tel_href(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    format!("tel:{DIAL_CODE}{digits}")
}

pub fn phone_display(phone: &str) -> String {
    format!("{DIAL_CODE} {phone}")
}

pub fn linkedin_url(handle: &str) -> String {
    format!("https://linkedin.com/in/{handle}")
}

pub fn github_url(user: &str) -> String {
    format!("https://github.com/{user}")
}
