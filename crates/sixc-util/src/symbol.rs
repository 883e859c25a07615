//! Identifier interning.
//!
//! The teacher pattern this is grounded on interns into a process-wide
//! `DashMap` behind a `LazyLock`. That is exactly the shared, global
//! mutable state this single-threaded compiler's resource model forbids
//! (every compilation owns its own state), so interning here is scoped to
//! an `Interner` instance instead: one per `compile()` call, dropped with
//! everything else when the call returns.

use rustc_hash::FxHashMap;

/// An interned identifier. Cheap to copy and compare; meaningless outside
/// the `Interner` that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl From<u32> for Symbol {
    fn from(index: u32) -> Self {
        Symbol(index)
    }
}

/// Owns the string storage for one compilation's identifiers.
#[derive(Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.lookup.get(name) {
            return sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        let boxed: Box<str> = name.into();
        self.strings.push(boxed.clone());
        self.lookup.insert(boxed, sym);
        sym
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_interns_to_same_symbol() {
        let mut interner = Interner::new();
        let a = interner.intern("count");
        let b = interner.intern("count");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_names_intern_distinctly() {
        let mut interner = Interner::new();
        let a = interner.intern("x");
        let b = interner.intern("y");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = Interner::new();
        let sym = interner.intern("total");
        assert_eq!(interner.resolve(sym), "total");
    }

    #[test]
    fn interners_are_independent() {
        let mut one = Interner::new();
        let mut two = Interner::new();
        let a = one.intern("x");
        let b = two.intern("x");
        assert_eq!(one.resolve(a), two.resolve(b));
    }
}
