use maud::{Markup, PreEscaped, Render};

/// Turns text supplied by the identity provider into markup that is safe to
/// insert into a page.
pub trait Sanitizer {
    fn sanitize(&self, dirty: &str) -> Markup;
}

const FORMATTING_TAGS: &[&str] = &["b", "strong", "i", "em", "br", "p", "ul", "ol", "li", "span"];
const VOID_TAGS: &[&str] = &["br"];

enum Tag {
    Open(&'static str),
    Close(&'static str),
    SelfClosing(&'static str),
}

/// Escapes everything, then re-admits a fixed set of formatting tags when
/// they appear without attributes. Output is always balanced: closing tags
/// with no open counterpart are dropped and tags left open are closed.
#[derive(Clone)]
pub struct AllowList {
    tags: &'static [&'static str],
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            tags: FORMATTING_TAGS,
        }
    }
}

impl AllowList {
    fn allowed(&self, name: &str) -> Option<&'static str> {
        self.tags.iter().copied().find(|t| *t == name)
    }

    /// Reads an allowed tag at the start of `rest`, which begins with `<`.
    fn tag(&self, rest: &str) -> Option<(Tag, usize)> {
        let end = rest.find('>')?;
        let inner = &rest[1..end];

        let tag = if let Some(name) = inner.strip_prefix('/') {
            Tag::Close(self.allowed(name)?)
        } else if let Some(name) = inner.strip_suffix('/') {
            Tag::SelfClosing(self.allowed(name.trim_end())?)
        } else {
            Tag::Open(self.allowed(inner)?)
        };

        Some((tag, end + 1))
    }
}

fn escape(text: &str) -> String {
    text.render().into_string()
}

impl Sanitizer for AllowList {
    fn sanitize(&self, dirty: &str) -> Markup {
        let mut clean = String::with_capacity(dirty.len());
        let mut open: Vec<&'static str> = Vec::new();
        let mut text_start = 0;
        let mut cursor = 0;

        while let Some(offset) = dirty[cursor..].find('<') {
            let at = cursor + offset;
            let Some((tag, len)) = self.tag(&dirty[at..]) else {
                cursor = at + 1;
                continue;
            };

            clean.push_str(&escape(&dirty[text_start..at]));
            match tag {
                Tag::Open(name) | Tag::SelfClosing(name) if VOID_TAGS.contains(&name) => {
                    clean.push_str(&format!("<{name}>"));
                }
                Tag::Open(name) => {
                    clean.push_str(&format!("<{name}>"));
                    open.push(name);
                }
                Tag::SelfClosing(name) => clean.push_str(&format!("<{name}></{name}>")),
                Tag::Close(name) => {
                    if let Some(pos) = open.iter().rposition(|t| *t == name) {
                        for t in open.drain(pos..).rev() {
                            clean.push_str(&format!("</{t}>"));
                        }
                    }
                }
            }

            cursor = at + len;
            text_start = cursor;
        }

        clean.push_str(&escape(&dirty[text_start..]));
        for t in open.into_iter().rev() {
            clean.push_str(&format!("</{t}>"));
        }

        PreEscaped(clean)
    }
}
