//! Stand-in contexts used to preview pages without a running identity
//! provider.

use std::fs;
use std::path::Path;

use log::debug;
use url::Url;

use super::model::{
    Auth, Language, Locale, Login, Provider, Realm, RenderContext, Social, Urls,
};

pub fn load(path: &Path) -> crate::Result<RenderContext> {
    debug!("Loading preview context from {}", path.display());
    let raw = fs::read_to_string(path)?;
    let ctx = serde_json::from_str(&raw)?;
    Ok(ctx)
}

/// A typical first visit: password login with registration, reset and
/// remember-me enabled, two social providers and two languages.
pub fn login(base: &Url) -> RenderContext {
    RenderContext {
        page_id: crate::login::PAGE_ID.to_string(),
        realm: Realm {
            display_name: "Crypto Insights".to_string(),
            password: true,
            remember_me: true,
            registration_allowed: true,
            reset_password_allowed: true,
            login_with_email_allowed: true,
            registration_email_as_username: false,
        },
        social: Some(Social {
            providers: vec![
                provider(base, "github", "GitHub", "fa-brands fa-github"),
                provider(base, "twitter", "Twitter", "fa-brands fa-twitter"),
            ],
        }),
        url: Urls {
            login_action: link(base, "login-actions/authenticate"),
            login_reset_credentials_url: link(base, "login-actions/reset-credentials"),
            registration_url: link(base, "login-actions/registration"),
            login_restart_flow_url: link(base, "login-actions/restart"),
        },
        login: Login::default(),
        auth: Auth::default(),
        locale: Some(Locale {
            current_language_tag: "en".to_string(),
            supported: vec![
                language(base, "en", "English"),
                language(base, "de", "Deutsch"),
            ],
        }),
        ..RenderContext::default()
    }
}

fn provider(base: &Url, alias: &str, display_name: &str, icon_classes: &str) -> Provider {
    Provider {
        alias: alias.to_string(),
        display_name: display_name.to_string(),
        icon_classes: Some(icon_classes.to_string()),
        login_url: link(base, &format!("broker/{alias}/login")),
        provider_id: alias.to_string(),
    }
}

fn language(base: &Url, tag: &str, label: &str) -> Language {
    Language {
        language_tag: tag.to_string(),
        label: label.to_string(),
        url: link(base, &format!("?kc_locale={tag}")),
    }
}

fn link(base: &Url, path: &str) -> String {
    base.join(path)
        .map(String::from)
        .unwrap_or_else(|_| path.to_string())
}
