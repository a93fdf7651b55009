//! Language mode switches.

/// Optional syntax toggles, resolved once before scanning begins.
///
/// All switches default to off.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LanguageMode {
    /// Emit a `NewLine` token when a line ends after a token that can end
    /// a statement, so explicit `;` becomes optional.
    pub auto_semicolons: bool,
    /// Reserve `class` and `extends` as keywords.
    pub object_oriented: bool,
    /// Scan `=>` and accept `function (params) => expr`.
    pub arrow_functions: bool,
}

impl LanguageMode {
    #[must_use]
    pub fn with_auto_semicolons(mut self, enabled: bool) -> Self {
        self.auto_semicolons = enabled;
        self
    }

    #[must_use]
    pub fn with_object_oriented(mut self, enabled: bool) -> Self {
        self.object_oriented = enabled;
        self
    }

    #[must_use]
    pub fn with_arrow_functions(mut self, enabled: bool) -> Self {
        self.arrow_functions = enabled;
        self
    }
}
