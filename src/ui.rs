/// Outcome of a submit attempt on a form guarded against double submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Post,
    Ignored,
}

/// Client-side state of a login form. Each flag is owned by a single
/// control; none of them affects another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    show_password: bool,
    submit_disabled: bool,
    remember: bool,
}

impl UiState {
    pub fn with_remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_remember(&mut self) {
        self.remember = !self.remember;
    }

    /// The first submit disables the button and lets the POST through; any
    /// later submit on the same page is dropped.
    pub fn submit(&mut self) -> Submission {
        if self.submit_disabled {
            return Submission::Ignored;
        }

        self.submit_disabled = true;
        Submission::Post
    }
}
