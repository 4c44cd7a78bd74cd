use maud::{Markup, Render, html};

use crate::context::{Provider, RenderContext};
use crate::i18n::I18n;
use crate::markup::PasswordToggle;
use crate::sanitize::Sanitizer;
use crate::template::Template;
use crate::ui::UiState;

use super::CREDENTIAL_FIELDS;

const LABEL_CLASS: &str = "text-gray-300";
const INPUT_CLASS: &str = "w-full rounded-md px-3 py-2 bg-black/30 border border-orange-500/30 text-gray-100 focus:border-orange-500 focus:ring-orange-500";
const INPUT_ERROR_CLASS: &str = "kc-input-error-message text-sm text-red-500";
const SOCIAL_SECTION_CLASS: &str = "kc-social-section mt-6 space-y-3";
const SOCIAL_LIST_CLASS: &str = "kc-social-links flex flex-col gap-2";
const SOCIAL_LIST_GRID_CLASS: &str = "kc-social-grid grid grid-cols-2";
const SOCIAL_LINK_CLASS: &str = "kc-social-item flex items-center justify-center gap-2 rounded-md px-4 py-2 bg-zinc-800 border border-zinc-700 hover:bg-zinc-700";
const SOCIAL_GRID_ITEM_CLASS: &str = "kc-social-grid-item";

const PASSWORD_INPUT_ID: &str = "password";
const SUBMIT_HANDLER: &str = "on submit add @disabled to #kc-login";

/// Credential form rendered inside the page shell.
pub struct LoginPage<'a> {
    ctx: &'a RenderContext,
    i18n: I18n<'a>,
    ui: UiState,
}

impl<'a> LoginPage<'a> {
    pub fn new(ctx: &'a RenderContext, sanitizer: &'a dyn Sanitizer) -> Self {
        Self {
            ctx,
            i18n: I18n::new(ctx, sanitizer),
            ui: UiState::default().with_remember(ctx.login.remember_me()),
        }
    }

    pub fn with_ui(mut self, ui: UiState) -> Self {
        self.ui = ui;
        self
    }

    pub fn title(&self) -> String {
        self.i18n
            .msg_str("loginTitle", &[self.ctx.realm.display_name.as_str()])
    }

    pub fn template(&self) -> Template<'a> {
        let realm = &self.ctx.realm;

        Template::new(self.ctx, self.i18n, self.form())
            .display_message(!self.ctx.messages_per_field.exists_error(&CREDENTIAL_FIELDS))
            .header(self.i18n.msg("loginAccountTitle"))
            .display_info(
                realm.password && realm.registration_allowed && !self.ctx.registration_disabled,
            )
            .info(self.registration())
            .social_providers(self.social_providers())
    }

    /// First matching flag wins: username only, then username or email,
    /// then email.
    fn username_label(&self) -> Markup {
        let realm = &self.ctx.realm;

        if !realm.login_with_email_allowed {
            self.i18n.msg("username")
        } else if !realm.registration_email_as_username {
            self.i18n.msg("usernameOrEmail")
        } else {
            self.i18n.msg("email")
        }
    }

    fn input_error(&self) -> Option<Markup> {
        self.ctx
            .messages_per_field
            .get_first_error(&CREDENTIAL_FIELDS)
            .map(|error| {
                html! {
                    span #input-error .(INPUT_ERROR_CLASS) aria-live="polite" {
                        (self.i18n.sanitizer().sanitize(error))
                    }
                }
            })
    }

    fn form(&self) -> Markup {
        let ctx = self.ctx;
        let realm = &ctx.realm;
        let has_error = ctx.messages_per_field.exists_error(&CREDENTIAL_FIELDS);
        let input_error = self.input_error();

        html! {
            div #kc-form {
                div #kc-form-wrapper {
                    @if realm.password {
                        form #kc-form-login ."space-y-4"
                            action=(ctx.url.login_action)
                            method="post"
                            _=(SUBMIT_HANDLER)
                        {
                            @if !ctx.username_hidden {
                                div ."space-y-2" {
                                    label .(LABEL_CLASS) for="username" { (self.username_label()) }
                                    input #username .(INPUT_CLASS)
                                        tabindex="2"
                                        name="username"
                                        value=(ctx.login.username.as_deref().unwrap_or_default())
                                        type="text"
                                        autofocus
                                        autocomplete="username"
                                        aria-invalid=(has_error);
                                    @if let Some(error) = &input_error {
                                        (error)
                                    }
                                }
                            }

                            div ."space-y-2" {
                                label .(LABEL_CLASS) for=(PASSWORD_INPUT_ID) { (self.i18n.msg("password")) }
                                div .relative {
                                    input #(PASSWORD_INPUT_ID) .(INPUT_CLASS) .pr-10
                                        tabindex="3"
                                        name="password"
                                        type=(self.ui.password_input_type())
                                        required
                                        autocomplete="current-password"
                                        aria-invalid=(has_error);
                                    @if ctx.username_hidden {
                                        @if let Some(error) = &input_error {
                                            (error)
                                        }
                                    }
                                    (PasswordToggle::new(PASSWORD_INPUT_ID, self.ui.show_password()))
                                }
                            }

                            div ."flex items-center space-x-2" {
                                @if realm.remember_me && !ctx.username_hidden {
                                    div #kc-form-options ."flex items-center space-x-2" {
                                        input #rememberMe ."h-4 w-4 accent-orange-500"
                                            tabindex="5"
                                            type="checkbox"
                                            name="rememberMe"
                                            checked[self.ui.remember()];
                                        label .(LABEL_CLASS) for="rememberMe" { (self.i18n.msg("rememberMe")) }
                                    }
                                }
                            }

                            div #kc-form-buttons ."flex items-center justify-between" {
                                @if realm.reset_password_allowed {
                                    span {
                                        a ."text-sm text-orange-400 hover:text-orange-300 hover:underline"
                                            tabindex="6"
                                            href=(ctx.url.login_reset_credentials_url)
                                        {
                                            (self.i18n.msg("doForgotPassword"))
                                        }
                                    }
                                }
                                input #id-hidden-input
                                    type="hidden"
                                    name="credentialId"
                                    value=[ctx.auth.selected_credential.as_deref()];
                                button #kc-login
                                    ."px-4 py-2 rounded-md text-white bg-gradient-to-r from-orange-600 to-red-600"
                                    ."hover:from-orange-500 hover:to-red-500 disabled:opacity-50"
                                    tabindex="7"
                                    disabled[self.ui.submit_disabled()]
                                    name="login"
                                    type="submit"
                                {
                                    (self.i18n.msg_str("doLogIn", &[]))
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn social_providers(&self) -> Option<Markup> {
        let providers = self.ctx.providers();
        if !self.ctx.realm.password || providers.is_empty() {
            return None;
        }

        let grid = providers.len() > 3;
        let list_class = if grid {
            format!("{SOCIAL_LIST_CLASS} {SOCIAL_LIST_GRID_CLASS}")
        } else {
            SOCIAL_LIST_CLASS.to_string()
        };

        Some(html! {
            div #kc-social-providers .(SOCIAL_SECTION_CLASS) {
                hr ."border-zinc-700";
                h2 ."text-center text-sm text-gray-400" { (self.i18n.msg("identity-provider-login-label")) }
                ul .(list_class) {
                    @for provider in providers {
                        li { (SocialProvider::new(provider, grid, self.i18n.sanitizer())) }
                    }
                }
            }
        })
    }

    fn registration(&self) -> Markup {
        html! {
            div #kc-registration-container {
                div #kc-registration ."text-center text-sm text-gray-400" {
                    span {
                        (self.i18n.msg("noAccount")) " "
                        a ."text-orange-400 hover:underline" tabindex="8" href=(self.ctx.url.registration_url) {
                            (self.i18n.msg("doRegister"))
                        }
                    }
                }
            }
        }
    }
}

impl Render for LoginPage<'_> {
    fn render(&self) -> Markup {
        self.template().render()
    }
}

struct SocialProvider<'a> {
    provider: &'a Provider,
    grid: bool,
    sanitizer: &'a dyn Sanitizer,
}

impl<'a> SocialProvider<'a> {
    fn new(provider: &'a Provider, grid: bool, sanitizer: &'a dyn Sanitizer) -> Self {
        Self {
            provider,
            grid,
            sanitizer,
        }
    }
}

impl Render for SocialProvider<'_> {
    fn render(&self) -> Markup {
        let p = self.provider;
        let icon_classes = p.icon_classes.as_deref().filter(|c| !c.is_empty());
        let link_class = if self.grid {
            format!("{SOCIAL_LINK_CLASS} {SOCIAL_GRID_ITEM_CLASS}")
        } else {
            SOCIAL_LINK_CLASS.to_string()
        };

        html! {
            a .(link_class) id={ "social-" (p.alias) } type="button" href=(p.login_url) {
                @if let Some(icon_classes) = icon_classes {
                    i ."kc-social-provider-logo" .(icon_classes) aria-hidden="true" {}
                }
                span ."kc-social-provider-name" .kc-social-icon-text[icon_classes.is_some()] {
                    (self.sanitizer.sanitize(&p.display_name))
                }
            }
        }
    }
}
