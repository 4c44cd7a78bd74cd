use maud::{Markup, Render, html};

use crate::markup::{Icon, PasswordToggle};
use crate::ui::UiState;

pub const TITLE: &str = "Welcome back";

const INPUT_CLASS: &str = "w-full rounded-md px-3 py-2 bg-zinc-800 border border-zinc-700 text-white";
const OUTLINE_BUTTON_CLASS: &str = "w-full flex items-center justify-center rounded-md px-4 py-2 bg-zinc-800 border border-zinc-700 hover:bg-zinc-700";
const PASSWORD_INPUT_ID: &str = "password";

/// Self-contained marketing login card. Posts back to `/demo`.
#[derive(Default)]
pub struct StandaloneLoginForm {
    username: String,
    ui: UiState,
}

impl StandaloneLoginForm {
    pub fn new(username: impl Into<String>, ui: UiState) -> Self {
        Self {
            username: username.into(),
            ui,
        }
    }
}

impl Render for StandaloneLoginForm {
    fn render(&self) -> Markup {
        html! {
            div ."min-h-screen bg-black flex items-center justify-center p-4" {
                div #demo-card ."w-full max-w-md bg-zinc-900 text-white rounded-xl border border-zinc-800" {
                    div ."p-6 space-y-1" {
                        h1 ."text-2xl font-bold" { (TITLE) }
                        p ."text-zinc-400" { "Login to access real-time crypto insights" }
                    }

                    div ."p-6 pt-0" {
                        form #demo-form ."space-y-4" action="/demo" method="post" {
                            div ."space-y-2" {
                                label for="username" { "Username or Email" }
                                input #username .(INPUT_CLASS)
                                    type="text"
                                    name="username"
                                    value=(self.username)
                                    placeholder="Enter your username or email"
                                    required;
                            }
                            div ."space-y-2" {
                                label for=(PASSWORD_INPUT_ID) { "Password" }
                                div .relative {
                                    input #(PASSWORD_INPUT_ID) .(INPUT_CLASS) .pr-10
                                        type=(self.ui.password_input_type())
                                        name="password"
                                        placeholder="Enter your password"
                                        required;
                                    (PasswordToggle::new(PASSWORD_INPUT_ID, self.ui.show_password()))
                                }
                            }
                            div ."flex items-center space-x-2" {
                                input #remember ."h-4 w-4" type="checkbox" name="remember" checked[self.ui.remember()];
                                label ."text-sm font-medium leading-none" for="remember" { "Remember me" }
                            }
                            button ."w-full rounded-md px-4 py-2 bg-blue-600 hover:bg-blue-700" type="submit" {
                                "Log in"
                            }
                        }
                    }

                    div ."p-6 pt-0 flex flex-col space-y-4" {
                        div .relative {
                            div ."absolute inset-0 flex items-center" {
                                span ."w-full border-t border-zinc-700" {}
                            }
                            div ."relative flex justify-center text-xs uppercase" {
                                span ."bg-zinc-900 px-2 text-zinc-400" { "Or continue with" }
                            }
                        }
                        div ."flex space-x-4" {
                            button .(OUTLINE_BUTTON_CLASS) type="button" {
                                span ."mr-2" { (Icon::Github) }
                                "Github"
                            }
                            button .(OUTLINE_BUTTON_CLASS) type="button" {
                                span ."mr-2" { (Icon::Twitter) }
                                "Twitter"
                            }
                        }
                        p ."text-center text-sm text-zinc-400" {
                            "Don't have an account? "
                            a ."text-blue-500 hover:underline" href="#" { "Sign up" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_render_empty_card() {
        let actual = StandaloneLoginForm::default().render().into_string();

        assert!(actual.contains(r#"<h1 class="text-2xl font-bold">Welcome back</h1>"#));
        assert!(actual.contains(r#"action="/demo" method="post""#));
        assert!(actual.contains(r#"name="username" value="""#));
        assert!(actual.contains(r#"type="password" name="password""#));
        assert!(actual.contains(r#"name="remember">"#));
        assert!(actual.contains("Or continue with"));
    }

    #[test]
    fn should_keep_submitted_values() {
        let ui = UiState::default().with_remember(true);

        let actual = StandaloneLoginForm::new("jdoe", ui).render().into_string();

        assert!(actual.contains(r#"name="username" value="jdoe""#));
        assert!(actual.contains(r#"name="remember" checked>"#));
        assert!(actual.contains(r#"type="password" name="password""#));
    }

    #[test]
    fn should_toggle_password_like_login_page() {
        let mut ui = UiState::default();
        ui.toggle_password();

        let actual = StandaloneLoginForm::new("", ui).render().into_string();

        assert!(actual.contains(r#"type="text" name="password""#));
        assert!(actual.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn should_escape_username() {
        let actual = StandaloneLoginForm::new(r#""><script>"#, UiState::default())
            .render()
            .into_string();

        assert!(actual.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }
}
