//! Login / sign-up modal model.
//!
//! The modal is presentation only. Its forms are uncontrolled: inputs keep
//! whatever the user types, nothing is validated and nothing is sent.

use std::str::FromStr;

use crate::error::{Result, VizError};

/// One of the two mutually exclusive modal tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

impl AuthTab {
    /// Tabs in display order
    pub const ALL: [AuthTab; 2] = [AuthTab::Login, AuthTab::SignUp];

    /// Stable identifier used for tab values and element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::SignUp => "signup",
        }
    }

    /// Label shown on the tab selector
    pub fn label(&self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::SignUp => "Sign Up",
        }
    }

    /// The form shown under this tab
    pub fn form(&self) -> &'static AuthForm {
        match self {
            AuthTab::Login => &LOGIN_FORM,
            AuthTab::SignUp => &SIGN_UP_FORM,
        }
    }
}

impl FromStr for AuthTab {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "login" => Ok(AuthTab::Login),
            "signup" => Ok(AuthTab::SignUp),
            other => Err(VizError::UnknownTab(other.to_string())),
        }
    }
}

/// HTML input type of a form field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

/// A single labelled input in an auth form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: Option<&'static str>,
}

/// Static description of one tab's form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FormField],
    pub submit_label: &'static str,
}

impl AuthForm {
    /// Submit button handler.
    ///
    /// No backend exists, so submission is accepted and dropped.
    pub fn submit(&self) {
        tracing::debug!(tab = self.tab.as_str(), "Auth form submitted (no-op)");
    }
}

const EMAIL_FIELD: FormField = FormField {
    id: "email",
    label: "Email",
    kind: InputKind::Email,
    placeholder: Some("john@example.com"),
};

const PASSWORD_FIELD: FormField = FormField {
    id: "password",
    label: "Password",
    kind: InputKind::Password,
    placeholder: None,
};

const NAME_FIELD: FormField = FormField {
    id: "name",
    label: "Name",
    kind: InputKind::Text,
    placeholder: Some("John Doe"),
};

pub static LOGIN_FORM: AuthForm = AuthForm {
    tab: AuthTab::Login,
    title: "Login",
    description: "Enter your credentials to access your account.",
    fields: &[EMAIL_FIELD, PASSWORD_FIELD],
    submit_label: "Login",
};

pub static SIGN_UP_FORM: AuthForm = AuthForm {
    tab: AuthTab::SignUp,
    title: "Sign Up",
    description: "Create a new account to get started.",
    fields: &[NAME_FIELD, EMAIL_FIELD, PASSWORD_FIELD],
    submit_label: "Sign Up",
};

/// State of an open auth modal.
///
/// Lives only as long as the modal is mounted, so every open starts again
/// on the login tab.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AuthModalState {
    tab: AuthTab,
}

impl AuthModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    /// Select a tab. Returns `true` if the selection changed.
    pub fn select(&mut self, tab: AuthTab) -> bool {
        if self.tab == tab {
            return false;
        }
        tracing::debug!(from = self.tab.as_str(), to = tab.as_str(), "Switched auth tab");
        self.tab = tab;
        true
    }

    /// Form for the selected tab
    pub fn visible_form(&self) -> &'static AuthForm {
        self.tab.form()
    }

    /// Whether the tab's content panel is shown
    pub fn is_visible(&self, tab: AuthTab) -> bool {
        self.tab == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(form: &AuthForm) -> Vec<&'static str> {
        form.fields.iter().map(|f| f.id).collect()
    }

    #[test]
    fn default_tab_is_login() {
        assert_eq!(AuthModalState::new().tab(), AuthTab::Login);
        assert_eq!(AuthTab::default(), AuthTab::Login);
    }

    #[test]
    fn tab_identifiers_and_labels() {
        assert_eq!(AuthTab::Login.as_str(), "login");
        assert_eq!(AuthTab::SignUp.as_str(), "signup");
        assert_eq!(AuthTab::Login.label(), "Login");
        assert_eq!(AuthTab::SignUp.label(), "Sign Up");
    }

    #[test]
    fn parse_tab() {
        assert_eq!("login".parse::<AuthTab>(), Ok(AuthTab::Login));
        assert_eq!("signup".parse::<AuthTab>(), Ok(AuthTab::SignUp));
        assert_eq!(
            "sign-up".parse::<AuthTab>(),
            Err(VizError::UnknownTab("sign-up".to_string()))
        );
    }

    #[test]
    fn select_reports_change() {
        let mut modal = AuthModalState::new();
        assert!(!modal.select(AuthTab::Login));
        assert!(modal.select(AuthTab::SignUp));
        assert!(!modal.select(AuthTab::SignUp));
        assert!(modal.is_visible(AuthTab::SignUp));
        assert!(!modal.is_visible(AuthTab::Login));
    }

    #[test]
    fn exactly_one_panel_visible() {
        let mut modal = AuthModalState::new();
        for selected in AuthTab::ALL {
            modal.select(selected);
            let visible: Vec<_> = AuthTab::ALL
                .into_iter()
                .filter(|t| modal.is_visible(*t))
                .collect();
            assert_eq!(visible, vec![selected]);
            assert_eq!(modal.visible_form().tab, selected);
        }
    }

    #[test]
    fn login_form_fields() {
        let form = AuthTab::Login.form();
        assert_eq!(ids(form), vec!["email", "password"]);
        assert_eq!(form.submit_label, "Login");
        assert_eq!(form.fields[0].kind, InputKind::Email);
        assert_eq!(form.fields[0].placeholder, Some("john@example.com"));
        assert_eq!(form.fields[1].kind, InputKind::Password);
        assert_eq!(form.fields[1].placeholder, None);
    }

    #[test]
    fn sign_up_form_fields() {
        let form = AuthTab::SignUp.form();
        assert_eq!(ids(form), vec!["name", "email", "password"]);
        assert_eq!(form.title, "Sign Up");
        assert_eq!(form.description, "Create a new account to get started.");
        assert_eq!(form.fields[0].kind, InputKind::Text);
    }

    #[test]
    fn input_kind_strings() {
        assert_eq!(InputKind::Text.as_str(), "text");
        assert_eq!(InputKind::Email.as_str(), "email");
        assert_eq!(InputKind::Password.as_str(), "password");
    }
}
