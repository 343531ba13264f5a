// Symbol sequence for one half (date or time) of a template

/// Symbols joined by separator text.
///
/// The first symbol is never prefixed, so a sequence never starts with a
/// separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Sequence {
    text: String,
}

impl Sequence {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Return a copy with `symbol` appended after `joint`
    pub fn with(&self, joint: &str, symbol: &str) -> Self {
        let mut text = self.text.clone();
        if !text.is_empty() {
            text.push_str(joint);
        }
        text.push_str(symbol);
        Self { text }
    }

    /// Return a copy with every character in `variants` replaced by `literal`
    pub fn rewritten(&self, variants: &[char], literal: &str) -> Self {
        Self {
            text: self.text.replace(variants, literal),
        }
    }
}
