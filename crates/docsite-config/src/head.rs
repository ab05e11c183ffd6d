//! Head directives injected into every rendered page.
//!
//! A directive is written as a tuple: `[tag, attributes]` or
//! `[tag, attributes, content]`. Only `meta`, `link` and `script` are
//! recognized; the renderer emits directives in declaration order.

use indexmap::IndexMap;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// Element name of a head directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadTag {
    /// `<meta>`
    Meta,
    /// `<link>`
    Link,
    /// `<script>`
    Script,
}

impl HeadTag {
    /// Parse a tag name, returning `None` for tags outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "meta" => Some(Self::Meta),
            "link" => Some(Self::Link),
            "script" => Some(Self::Script),
            _ => None,
        }
    }

    /// Tag name as written in HTML.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Link => "link",
            Self::Script => "script",
        }
    }
}

impl std::fmt::Display for HeadTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Attribute value: either text or a boolean flag (`defer: true`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute.
    Flag(bool),
    /// Text attribute.
    Text(String),
}

impl AttrValue {
    /// Text value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Flag value, if this is a boolean attribute.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// A validated head directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadDirective {
    tag: HeadTag,
    attributes: IndexMap<String, AttrValue>,
    content: Option<String>,
}

impl HeadDirective {
    pub(crate) fn new(
        tag: HeadTag,
        attributes: IndexMap<String, AttrValue>,
        content: Option<String>,
    ) -> Self {
        Self {
            tag,
            attributes,
            content,
        }
    }

    pub fn tag(&self) -> HeadTag {
        self.tag
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }

    /// Look up a single attribute.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Inner content (inline script body), if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Serialize for HeadDirective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.tag)?;
        tuple.serialize_element(&self.attributes)?;
        if let Some(content) = &self.content {
            tuple.serialize_element(content)?;
        }
        tuple.end()
    }
}
