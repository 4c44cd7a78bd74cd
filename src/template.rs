use maud::{Markup, Render, html};

use crate::AsStr;
use crate::context::{Message, MessageKind, RenderContext};
use crate::i18n::I18n;
use crate::markup::{EMPTY, Icon};

/// Page shell shared by every login page: language picker, header row,
/// status banner and the slots a page fills in.
pub struct Template<'a> {
    ctx: &'a RenderContext,
    i18n: I18n<'a>,
    document_title: Option<String>,
    display_info: bool,
    display_message: bool,
    display_required_fields: bool,
    header: Markup,
    social_providers: Option<Markup>,
    info: Option<Markup>,
    children: Markup,
}

impl<'a> Template<'a> {
    pub fn new(ctx: &'a RenderContext, i18n: I18n<'a>, children: impl Render) -> Self {
        Self {
            ctx,
            i18n,
            document_title: None,
            display_info: false,
            display_message: true,
            display_required_fields: false,
            header: EMPTY.render(),
            social_providers: None,
            info: None,
            children: children.render(),
        }
    }

    pub fn document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    pub fn display_info(mut self, display: bool) -> Self {
        self.display_info = display;
        self
    }

    pub fn display_message(mut self, display: bool) -> Self {
        self.display_message = display;
        self
    }

    pub fn display_required_fields(mut self, display: bool) -> Self {
        self.display_required_fields = display;
        self
    }

    pub fn header(mut self, header: impl Render) -> Self {
        self.header = header.render();
        self
    }

    pub fn social_providers(mut self, node: Option<Markup>) -> Self {
        self.social_providers = node;
        self
    }

    pub fn info(mut self, info: impl Render) -> Self {
        self.info = Some(info.render());
        self
    }

    pub fn title(&self) -> String {
        self.document_title.clone().unwrap_or_else(|| {
            self.i18n
                .msg_str("loginTitle", &[self.ctx.realm.display_name.as_str()])
        })
    }

    /// Warnings raised while the user is inside an application initiated
    /// action are not shown.
    fn visible_message(&self) -> Option<&'a Message> {
        if !self.display_message {
            return None;
        }

        self.ctx
            .message
            .as_ref()
            .filter(|m| m.kind != MessageKind::Warning || !self.ctx.is_app_initiated_action)
    }

    fn header_node(&self) -> Markup {
        let auth = &self.ctx.auth;

        let node = if !(auth.show_username && !auth.show_reset_credentials) {
            html! {
                h2 #kc-page-title ."text-2xl font-bold text-center mb-6 text-orange-400" {
                    (self.header)
                }
            }
        } else {
            html! {
                div #kc-username ."flex items-center justify-between" {
                    span #kc-attempted-username ."text-lg font-medium" {
                        (auth.attempted_username.as_deref().unwrap_or_default())
                    }
                    a #reset-login
                        ."text-sm px-3 py-1 rounded-md border border-orange-500/30 hover:bg-orange-500/10"
                        href=(self.ctx.url.login_restart_flow_url)
                        aria-label=(self.i18n.msg_str("restartLoginTooltip", &[]))
                    {
                        (self.i18n.msg("restartLoginTooltip"))
                    }
                }
            }
        };

        if !self.display_required_fields {
            return node;
        }

        html! {
            div ."flex items-center justify-between" {
                span ."subtitle text-sm text-gray-400" {
                    span ."required text-red-500" { "*" }
                    (self.i18n.msg("requiredFields"))
                }
                (node)
            }
        }
    }
}

impl Render for Template<'_> {
    fn render(&self) -> Markup {
        let sanitizer = self.i18n.sanitizer();

        html! {
            div ."relative min-h-screen flex items-center justify-center p-4" {
                (Background)

                div #kc-card
                    ."w-full max-w-lg bg-black/50 text-gray-100 backdrop-blur-sm z-10"
                    ."rounded-xl border border-orange-500/30"
                {
                    div ."flex flex-col items-center space-y-4 p-6 pb-2" {
                        div ."flex w-full justify-end items-center" {
                            @if self.i18n.enabled_languages().len() > 1 {
                                (LanguagePicker(self.i18n))
                            }
                        }
                        (Logo)
                    }

                    div ."p-6 pt-0" {
                        header ."mb-4" { (self.header_node()) }

                        @if let Some(message) = self.visible_message() {
                            (Alert::new(message, sanitizer.sanitize(&message.summary)))
                        }

                        (self.children)

                        @if self.ctx.auth.show_try_another_way_link {
                            (TryAnotherWay(self.ctx, self.i18n))
                        }

                        @if let Some(social_providers) = &self.social_providers {
                            (social_providers)
                        }

                        @if self.display_info {
                            div #kc-info ."mt-4" {
                                @if let Some(info) = &self.info {
                                    (info)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct Alert<'a> {
    message: &'a Message,
    body: Markup,
}

impl<'a> Alert<'a> {
    fn new(message: &'a Message, body: Markup) -> Self {
        Self { message, body }
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        let kind = self.message.kind;
        let (tone, icon) = match kind {
            MessageKind::Success => ("border-green-500/50 text-green-400", Icon::CircleCheck),
            MessageKind::Warning => ("border-yellow-500/50 text-yellow-400", Icon::CircleExclamation),
            MessageKind::Error => ("border-red-500/50 text-red-500", Icon::CircleExclamation),
            MessageKind::Info => ("border-blue-500/50 text-blue-400", Icon::CircleInfo),
        };

        html! {
            div #kc-alert ."relative w-full rounded-lg border p-4 mb-4 flex gap-3" .(tone) role="alert" {
                (icon)
                div {
                    h5 ."mb-1 font-medium capitalize" { (kind.as_str()) }
                    div ."text-sm" { (self.body) }
                }
            }
        }
    }
}

struct TryAnotherWay<'a>(&'a RenderContext, I18n<'a>);

impl Render for TryAnotherWay<'_> {
    fn render(&self) -> Markup {
        html! {
            form #kc-select-try-another-way-form ."mt-4" action=(self.0.url.login_action) method="post" {
                input type="hidden" name="tryAnotherWay" value="on";
                button ."p-0 text-orange-400 hover:underline" type="submit" {
                    (self.1.msg("doTryAnotherWay"))
                }
            }
        }
    }
}

struct LanguagePicker<'a>(I18n<'a>);

impl Render for LanguagePicker<'_> {
    fn render(&self) -> Markup {
        html! {
            details #kc-locale .relative {
                summary ."list-none cursor-pointer h-8 w-8 flex items-center justify-center text-gray-400 hover:text-gray-100" {
                    (Icon::Globe)
                    span .sr-only { (self.0.msg("languages")) }
                }
                ul ."absolute right-0 mt-2 py-1 w-40 rounded-md bg-zinc-900 border border-orange-500/30 z-20"
                    role="menu"
                {
                    @for (i, language) in self.0.enabled_languages().iter().enumerate() {
                        li role="none" {
                            a ."block px-4 py-2 text-sm hover:bg-zinc-800"
                                role="menuitem"
                                id={ "language-" (i + 1) }
                                href=(language.url)
                            {
                                (language.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

struct Background;

impl Render for Background {
    fn render(&self) -> Markup {
        html! {
            div ."absolute inset-0 bg-gradient-to-br from-orange-900 via-red-900 to-blue-900 z-0" {
                div ."absolute inset-0 bg-grid" {}
            }
        }
    }
}

struct Logo;

impl Render for Logo {
    fn render(&self) -> Markup {
        html! {
            div ."relative w-24 h-24" {
                svg ."w-full h-full" viewBox="0 0 100 100" fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                    aria-label="Crypto notification logo"
                {
                    defs {
                        linearGradient id="logoGradient" x1="0%" y1="0%" x2="100%" y2="100%" {
                            stop offset="0%" stop-color="#FF4500" {}
                            stop offset="50%" stop-color="#8B0000" {}
                            stop offset="100%" stop-color="#00008B" {}
                        }
                    }
                    circle cx="50" cy="50" r="48" fill="url(#logoGradient)" stroke="#FFA500" stroke-width="4" {}
                    path d="M25 50C25 36.2 36.2 25 50 25C63.8 25 75 36.2 75 50V65H25V50Z" fill="white" {}
                    circle cx="50" cy="70" r="5" fill="white" {}
                }
                i ."fa-brands fa-bitcoin absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-4xl text-yellow-500" {}
            }
        }
    }
}
