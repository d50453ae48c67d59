//! Recursion guard, owned by a single encode call.

use tracing::debug;

use crate::{Error, Result};

pub(crate) struct Context {
    max_depth: usize,
    depth: usize,
    // substitutions on the current path, containers included
    chain: usize,
}

impl Context {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
            chain: 0,
        }
    }

    /// Runs `f` one container level deeper. The level is released on every
    /// exit path, errors included.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.depth += 1;
        if self.depth > self.max_depth {
            debug!(max_depth = self.max_depth, "maximum nesting depth exceeded");
            self.depth -= 1;
            return Err(Error::MaxDepthExceeded(self.max_depth));
        }
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Runs `f` on a substitute produced by a hook or the fallback. All
    /// substitutes on one path from the root share the depth limit, whether or
    /// not containers sit between them.
    pub(crate) fn substituted<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.chain += 1;
        if self.chain > self.max_depth {
            debug!(max_depth = self.max_depth, "substitution chain exceeded depth limit");
            self.chain -= 1;
            return Err(Error::MaxDepthExceeded(self.max_depth));
        }
        let result = f(self);
        self.chain -= 1;
        result
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.depth
    }

    #[cfg(test)]
    fn chain(&self) -> usize {
        self.chain
    }
}
