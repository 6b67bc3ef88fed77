/// One level of indentation in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Two or four spaces; other widths render as two.
    Spaces(u8),
    Tab,
}

impl Indent {
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(4) => "    ",
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
