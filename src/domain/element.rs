// UI element tree - composable render primitives

/// A leaf element displaying fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A container that stacks its children vertically.
///
/// Views own one of these and delegate child appends to it; there is no
/// element base class to inherit from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerticalLayout {
    children: Vec<Element>,
}

impl VerticalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Label(Label),
    Layout(VerticalLayout),
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Element::Label(label)
    }
}

impl From<VerticalLayout> for Element {
    fn from(layout: VerticalLayout) -> Self {
        Element::Layout(layout)
    }
}

impl Element {
    /// Append this element's markup to `out`. Text content is escaped.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Element::Label(label) => {
                out.push_str("<span class=\"label\">");
                escape_into(label.text(), out);
                out.push_str("</span>");
            }
            Element::Layout(layout) => {
                out.push_str("<div class=\"vertical-layout\">");
                for child in layout.children() {
                    child.write_html(out);
                }
                out.push_str("</div>");
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}
