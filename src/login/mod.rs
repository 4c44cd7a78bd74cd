pub mod markup;

pub use markup::LoginPage;

pub const PAGE_ID: &str = "login.ftl";

/// Fields whose errors are reported together under the credential inputs.
const CREDENTIAL_FIELDS: [&str; 2] = ["username", "password"];
