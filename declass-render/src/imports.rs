//! Referenced-type collection and import-list resolution.

use std::collections::BTreeSet;

use declass_model::{ClassRef, LineSeparator};
use indexmap::IndexMap;

/// Types referenced during one render, keyed by the simple name of their
/// outermost base type.
///
/// Every registration is recorded so later same-simple-name references can
/// be detected as collisions, but only entries that actually earn an
/// `import` line (imports enabled, not `java.lang`, not the main type's own
/// package) are emitted by [`flush`](ImportSet::flush). Single-use per
/// render: flushing clears the set.
#[derive(Debug, Clone)]
pub struct ImportSet {
    main_package: String,
    enabled: bool,
    entries: IndexMap<String, Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    qualified: String,
    importable: bool,
}

/// Package every compilation unit imports implicitly.
const DEFAULT_IMPORT_PACKAGE: &str = "java.lang";

impl ImportSet {
    /// Create an empty set scoped to the main type's package.
    pub fn new(main_package: impl Into<String>, enabled: bool) -> Self {
        Self {
            main_package: main_package.into(),
            enabled,
            entries: IndexMap::new(),
        }
    }

    /// Register a referenced type, resolving arrays and nested member types
    /// down to their outermost non-array base.
    ///
    /// Returns `true` only when the base type will receive an import line.
    /// Registering the same base twice is idempotent; a second base with
    /// the same simple name but a different qualified name is a collision
    /// and is recorded without displacing the first.
    pub fn register(&mut self, class: &ClassRef) -> bool {
        let base = class.outermost();
        let simple = base.simple_name().to_string();

        if let Some(entry) = self.entries.get(&simple) {
            if entry.qualified == base.qualified {
                return entry.importable;
            }
            return false;
        }

        let importable = self.enabled
            && base.package_name() != DEFAULT_IMPORT_PACKAGE
            && base.package_name() != self.main_package;

        self.entries.insert(
            simple,
            Entry {
                qualified: base.qualified,
                importable,
            },
        );
        importable
    }

    /// True when references to this type must render fully qualified:
    /// imports are disabled, or an earlier registration claimed the simple
    /// name for a different type.
    pub fn requires_qualification(&self, class: &ClassRef) -> bool {
        if !self.enabled {
            return true;
        }

        let base = class.outermost();
        match self.entries.get(base.simple_name()) {
            Some(entry) => entry.qualified != base.qualified,
            None => false,
        }
    }

    /// Emit the import block: one `import <qualified>;` line per surviving
    /// entry, sorted lexicographically by line text, followed by one blank
    /// separator line when non-empty. Clears the set.
    pub fn flush(&mut self, separator: LineSeparator) -> String {
        let lines: BTreeSet<String> = self
            .entries
            .values()
            .filter(|entry| entry.importable)
            .map(|entry| format!("import {};", entry.qualified))
            .collect();

        self.entries.clear();

        if lines.is_empty() {
            return String::new();
        }

        let sep = separator.as_str();
        let mut block = String::new();
        for line in lines {
            block.push_str(&line);
            block.push_str(sep);
        }
        block.push_str(sep);
        block
    }

    /// Number of recorded entries (including non-importable ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
