/// Source text of a fetched page. Empty when the fetch failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPage(String);

impl RawPage {
    pub fn new(html: String) -> Self {
        RawPage(html)
    }

    pub fn empty() -> Self {
        RawPage(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RawPage {
    fn from(value: &str) -> Self {
        RawPage(value.to_string())
    }
}

/// Pretty-printed `<body>` subtree, still carrying tags and indentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyText(String);

impl BodyText {
    pub fn new(text: String) -> Self {
        BodyText(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BodyText {
    fn from(value: &str) -> Self {
        BodyText(value.to_string())
    }
}
