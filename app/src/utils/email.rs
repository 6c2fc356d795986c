//! Identities of the notification emails the league sends.
//!
//! Each template exists as an HTML and a plain-text file named after
//! [`EmailTemplate::name`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailTemplate {
    ConfirmEmail,
    ChangePrimaryEmail,
    NotifyCurrentPrimaryEmail,
    PasswordReset,
    ContactForm,
    ConfirmTeamApplication,
    ChangeFixture,
    ResultEntered,
    ResultRemoved,
    AnnounceNextMatch,
    RemindMatchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Html,
    Text,
}

impl TemplateFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateFormat::Html => "html",
            TemplateFormat::Text => "txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown email template: {0}")]
pub struct UnknownTemplate(pub String);

impl EmailTemplate {
    pub const ALL: [EmailTemplate; 11] = [
        EmailTemplate::ConfirmEmail,
        EmailTemplate::ChangePrimaryEmail,
        EmailTemplate::NotifyCurrentPrimaryEmail,
        EmailTemplate::PasswordReset,
        EmailTemplate::ContactForm,
        EmailTemplate::ConfirmTeamApplication,
        EmailTemplate::ChangeFixture,
        EmailTemplate::ResultEntered,
        EmailTemplate::ResultRemoved,
        EmailTemplate::AnnounceNextMatch,
        EmailTemplate::RemindMatchResult,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EmailTemplate::ConfirmEmail => "ConfirmEmail",
            EmailTemplate::ChangePrimaryEmail => "ChangePrimaryEmail",
            EmailTemplate::NotifyCurrentPrimaryEmail => "NotifyCurrentPrimaryEmail",
            EmailTemplate::PasswordReset => "PasswordReset",
            EmailTemplate::ContactForm => "ContactForm",
            EmailTemplate::ConfirmTeamApplication => "ConfirmTeamApplication",
            EmailTemplate::ChangeFixture => "ChangeFixture",
            EmailTemplate::ResultEntered => "ResultEntered",
            EmailTemplate::ResultRemoved => "ResultRemoved",
            EmailTemplate::AnnounceNextMatch => "AnnounceNextMatch",
            EmailTemplate::RemindMatchResult => "RemindMatchResult",
        }
    }

    pub fn file_name(&self, format: TemplateFormat) -> String {
        format!("{}.{}", self.name(), format.extension())
    }
}

impl fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmailTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailTemplate::ALL
            .into_iter()
            .find(|template| template.name() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
