//! Transient UI state and its transitions.
//!
//! These types know nothing about the view layer. Components hold them in
//! signals and only change them through the methods below.

use std::time::Duration;

use crate::content::ProjectEntry;

/// How long the "message received" banner stays up after a submission.
pub const SUBMITTED_BANNER_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Project currently shown in the detail modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(&'static ProjectEntry),
}

impl Selection {
    pub fn select(&mut self, project: &'static ProjectEntry) {
        *self = Self::Selected(project);
    }

    pub fn dismiss(&mut self) {
        *self = Self::None;
    }

    pub fn project(self) -> Option<&'static ProjectEntry> {
        match self {
            Self::None => None,
            Self::Selected(p) => Some(p),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// No format checks, every field just has to be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Identifies one accepted submission, so a revert scheduled for an older
/// submission can be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    submitted: bool,
    issued: u64,
}

impl ContactState {
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Accepts the form if it is complete: fields are cleared, the banner is
    /// raised, and a ticket for the pending revert is handed back. An
    /// incomplete form leaves everything untouched.
    pub fn submit(&mut self) -> Option<SubmissionTicket> {
        if !self.form.is_complete() {
            return None;
        }
        self.form = ContactForm::default();
        self.submitted = true;
        self.issued += 1;
        Some(SubmissionTicket(self.issued))
    }

    /// Lowers the banner unless a newer submission has been accepted since
    /// `ticket` was issued.
    pub fn expire(&mut self, ticket: SubmissionTicket) {
        if ticket.0 == self.issued {
            self.submitted = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    fn filled(name: &str, email: &str, message: &str) -> ContactState {
        let mut state = ContactState::default();
        state.set_field(Field::Name, name.to_string());
        state.set_field(Field::Email, email.to_string());
        state.set_field(Field::Message, message.to_string());
        state
    }

    #[test]
    fn menu_toggle_parity() {
        for n in 0..7 {
            let mut menu = MenuState::default();
            for _ in 0..n {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn selecting_each_project() {
        for project in PORTFOLIO.projects {
            let mut sel = Selection::default();
            sel.select(project);
            let shown = sel.project().expect("should be selected");
            assert_eq!(shown.id, project.id);
            assert_eq!(shown.full_description, project.full_description);
        }
    }

    #[test]
    fn reselect_replaces_selection() {
        let mut sel = Selection::default();
        sel.select(&PORTFOLIO.projects[0]);
        sel.select(&PORTFOLIO.projects[2]);
        assert_eq!(sel.project().map(|p| p.id), Some(PORTFOLIO.projects[2].id));
    }

    #[test]
    fn dismiss_always_clears() {
        let mut sel = Selection::default();
        sel.dismiss();
        assert_eq!(sel, Selection::None);
        for project in PORTFOLIO.projects {
            sel.select(project);
            sel.dismiss();
            assert!(sel.project().is_none());
        }
    }

    #[test]
    fn incomplete_submit_is_noop() {
        for state in [
            filled("", "a@b.com", "hi"),
            filled("Ada", "", "hi"),
            filled("Ada", "a@b.com", ""),
        ] {
            let mut after = state.clone();
            assert!(after.submit().is_none());
            assert!(!after.submitted());
            assert_eq!(after, state);
        }
    }

    #[test]
    fn email_shape_is_not_checked() {
        let mut state = filled("Ada", "not an email", "hi");
        assert!(state.submit().is_some());
    }

    #[test]
    fn complete_submit_clears_and_reverts() {
        let mut state = filled("Ada", "a@b.com", "hi");
        let ticket = state.submit().expect("complete form is accepted");
        assert_eq!(state.form, ContactForm::default());
        assert!(state.submitted());
        assert_eq!(SUBMITTED_BANNER_DURATION, Duration::from_secs(5));

        state.expire(ticket);
        assert!(!state.submitted());
    }

    #[test]
    fn latest_submission_supersedes() {
        let mut state = filled("Ada", "a@b.com", "hi");
        let first = state.submit().unwrap();
        state.set_field(Field::Name, "Grace".to_string());
        state.set_field(Field::Email, "g@h.com".to_string());
        state.set_field(Field::Message, "again".to_string());
        let second = state.submit().unwrap();
        assert_ne!(first, second);

        state.expire(first);
        assert!(state.submitted(), "stale revert must not hide the banner");
        state.expire(second);
        assert!(!state.submitted());
    }

    #[test]
    fn typing_updates_single_field() {
        let mut state = ContactState::default();
        state.set_field(Field::Email, "a".to_string());
        state.set_field(Field::Email, "a@".to_string());
        assert_eq!(state.form.get(Field::Email), "a@");
        assert_eq!(state.form.get(Field::Name), "");
        assert_eq!(state.form.get(Field::Message), "");
    }
}
