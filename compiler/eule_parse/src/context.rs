//! Parse context flags.
//!
//! The context is saved and restored around every function body and loop
//! body, which makes it a stack of function contexts where each entry carries
//! its own loop state: entering a function starts from a fresh context, so a
//! loop outside the function never legitimizes a `break` inside it.

use eule_ir::FunctionKind;

/// Context flags for parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    /// Top-level script code.
    pub const SCRIPT: Self = Self(0);

    /// Inside a function body. Makes `return` valid.
    pub const IN_FUNCTION: Self = Self(1 << 0);

    /// Inside a loop body of the current function.
    /// Makes `break` and `continue` valid.
    pub const IN_LOOP: Self = Self(1 << 1);

    /// Inside a generator body. Makes `yield` valid.
    pub const ALLOW_YIELD: Self = Self(1 << 2);

    /// The context a function body of the given kind starts with.
    pub const fn for_function(kind: FunctionKind) -> Self {
        match kind {
            FunctionKind::Sync | FunctionKind::Async => Self::IN_FUNCTION,
            FunctionKind::SyncGenerator | FunctionKind::AsyncGenerator => {
                Self::IN_FUNCTION.with(Self::ALLOW_YIELD)
            }
        }
    }

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    pub const fn in_loop(self) -> bool {
        self.has(Self::IN_LOOP)
    }

    #[inline]
    pub const fn in_function(self) -> bool {
        self.has(Self::IN_FUNCTION)
    }

    #[inline]
    pub const fn allows_yield(self) -> bool {
        self.has(Self::ALLOW_YIELD)
    }
}

#[cfg(test)]
mod tests;
