use std::collections::HashMap;

use serde::Deserialize;

use crate::AsStr;

/// Everything the identity provider hands over for a single page render.
///
/// Every field is defaulted: a section whose data is missing simply renders
/// nothing.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderContext {
    pub page_id: String,
    pub realm: Realm,
    pub social: Option<Social>,
    pub url: Urls,
    pub username_hidden: bool,
    pub registration_disabled: bool,
    pub is_app_initiated_action: bool,
    pub login: Login,
    pub auth: Auth,
    pub messages_per_field: MessagesPerField,
    pub message: Option<Message>,
    pub locale: Option<Locale>,
    pub messages: HashMap<String, String>,
}

impl RenderContext {
    pub fn providers(&self) -> &[Provider] {
        self.social
            .as_ref()
            .map(|s| s.providers.as_slice())
            .unwrap_or_default()
    }

    pub fn languages(&self) -> &[Language] {
        self.locale
            .as_ref()
            .map(|l| l.supported.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Realm {
    pub display_name: String,
    pub password: bool,
    pub remember_me: bool,
    pub registration_allowed: bool,
    pub reset_password_allowed: bool,
    pub login_with_email_allowed: bool,
    pub registration_email_as_username: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Social {
    pub providers: Vec<Provider>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Provider {
    pub alias: String,
    pub display_name: String,
    pub icon_classes: Option<String>,
    pub login_url: String,
    pub provider_id: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Urls {
    pub login_action: String,
    pub login_reset_credentials_url: String,
    pub registration_url: String,
    pub login_restart_flow_url: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Login {
    pub username: Option<String>,
    pub remember_me: Option<Flag>,
}

impl Login {
    pub fn remember_me(&self) -> bool {
        self.remember_me.as_ref().is_some_and(Flag::is_on)
    }
}

/// A checkbox value as the identity provider reports it: either a boolean or
/// the submitted form value (`"on"`).
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn is_on(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(s) => !s.is_empty(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Auth {
    pub show_username: bool,
    pub show_reset_credentials: bool,
    pub attempted_username: Option<String>,
    pub show_try_another_way_link: bool,
    pub selected_credential: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct MessagesPerField(HashMap<String, String>);

impl MessagesPerField {
    pub fn new(errors: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self(
            errors
                .into_iter()
                .map(|(field, error)| (field.into(), error.into()))
                .collect(),
        )
    }

    pub fn exists_error(&self, fields: &[&str]) -> bool {
        self.get_first_error(fields).is_some()
    }

    /// Error of the first field, in the given order, that has one.
    pub fn get_first_error(&self, fields: &[&str]) -> Option<&str> {
        fields
            .iter()
            .filter_map(|f| self.0.get(*f))
            .map(String::as_str)
            .find(|e| !e.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AsStr for MessageKind {
    fn as_str(&self) -> &str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default)]
    pub summary: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    pub current_language_tag: String,
    pub supported: Vec<Language>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub language_tag: String,
    pub label: String,
    pub url: String,
}
