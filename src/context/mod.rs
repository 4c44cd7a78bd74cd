pub mod mock;
pub mod model;

pub use model::{
    Auth, Language, Locale, Login, Message, MessageKind, MessagesPerField, Provider, Realm,
    RenderContext, Social, Urls,
};
