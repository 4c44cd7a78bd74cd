use std::collections::HashMap;

use maud::Markup;

use crate::context::{Language, RenderContext};
use crate::sanitize::Sanitizer;

const EN: &[(&str, &str)] = &[
    ("loginTitle", "Sign in to {0}"),
    ("loginAccountTitle", "Sign in to your account"),
    ("username", "Username"),
    ("usernameOrEmail", "Username or email"),
    ("email", "Email"),
    ("password", "Password"),
    ("rememberMe", "Remember me"),
    ("doForgotPassword", "Forgot Password?"),
    ("doLogIn", "Sign In"),
    ("noAccount", "New user?"),
    ("doRegister", "Register"),
    ("restartLoginTooltip", "Restart login"),
    ("requiredFields", "Required fields"),
    ("doTryAnotherWay", "Try Another Way"),
    ("identity-provider-login-label", "Or sign in with"),
    ("languages", "Languages"),
    ("showPassword", "Show password"),
];

/// Message lookup for one render: context overrides first, then the built-in
/// English bundle, then the key itself.
#[derive(Clone, Copy)]
pub struct I18n<'a> {
    overrides: &'a HashMap<String, String>,
    languages: &'a [Language],
    sanitizer: &'a dyn Sanitizer,
}

impl<'a> I18n<'a> {
    pub fn new(ctx: &'a RenderContext, sanitizer: &'a dyn Sanitizer) -> Self {
        Self {
            overrides: &ctx.messages,
            languages: ctx.languages(),
            sanitizer,
        }
    }

    fn lookup<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        if let Some(text) = self.overrides.get(key) {
            return text;
        }

        EN.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .unwrap_or(key)
    }

    /// Fills `{n}` placeholders in a single pass, so argument text is never
    /// substituted again.
    pub fn msg_str(&self, key: &str, args: &[&str]) -> String {
        let mut text = String::new();
        let mut rest = self.lookup(key);

        while let Some(start) = rest.find('{') {
            text.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let arg = after.find('}').and_then(|end| {
                let arg = after[..end].parse::<usize>().ok().and_then(|i| args.get(i))?;
                Some((arg, end))
            });
            match arg {
                Some((arg, end)) => {
                    text.push_str(arg);
                    rest = &after[end + 1..];
                }
                None => {
                    text.push('{');
                    rest = after;
                }
            }
        }

        text.push_str(rest);
        text
    }

    /// Message texts may carry markup, so they go through the sanitizer.
    pub fn msg(&self, key: &str) -> Markup {
        self.sanitizer.sanitize(self.lookup(key))
    }

    pub fn enabled_languages(&self) -> &'a [Language] {
        self.languages
    }

    pub fn sanitizer(&self) -> &'a dyn Sanitizer {
        self.sanitizer
    }
}
