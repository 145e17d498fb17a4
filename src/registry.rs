//! The test registry.
//!
//! A [`TestRegistry`] maps test names to [`TestEntry`] values and remembers the
//! order in which the names were first registered.
//!
//! Besides explicitly built registries there is one process wide registry,
//! reachable through [`global`] and the free functions of this module. It is
//! created lazily on first access and starts out with every test declared via
//! [`test_case!`](crate::test_case). Static declarations are collected at link
//! time, so their relative order across compilation units is unspecified.
//! A test must never assume it can observe another test's registration.

use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError},
};

use tracing::warn;

use crate::test::{StaticTest, TestEntry, TestFnHandle};

/// Every test declared through [`test_case!`](crate::test_case).
#[linkme::distributed_slice]
pub static STATIC_TESTS: [StaticTest];

static GLOBAL_REGISTRY: LazyLock<Mutex<TestRegistry>> = LazyLock::new(|| {
    let mut registry = TestRegistry::new();
    for test in STATIC_TESTS {
        registry.register(test.name, TestFnHandle::from_const_fn(test.body));
    }
    Mutex::new(registry)
});

/// A collection of named tests with a stable registration order.
///
/// Registering a name twice replaces the earlier body but keeps the name at
/// its first position, so every name in [`registered_order`] resolves to
/// exactly one entry.
///
/// [`registered_order`]: TestRegistry::registered_order
#[derive(Debug, Default, Clone)]
pub struct TestRegistry {
    by_name: HashMap<Cow<'static, str>, Arc<TestEntry>>,
    order: Vec<Cow<'static, str>>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        body: impl Into<TestFnHandle>,
    ) {
        let name = name.into();
        let entry = Arc::new(TestEntry::new(name.clone(), body));
        match self.by_name.insert(name.clone(), entry) {
            Some(_) => warn!(test = %name, "test registered twice, keeping the latest body"),
            None => self.order.push(name),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Arc<TestEntry>> {
        self.by_name.get(name)
    }

    pub fn registered_order(&self) -> &[Cow<'static, str>] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate the entries in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<TestEntry>> {
        self.order.iter().map(|name| &self.by_name[name])
    }
}

/// Lock the process wide registry.
///
/// A poisoned lock is recovered: the registry holds no invariant a panicking
/// registration could break halfway.
pub fn global() -> MutexGuard<'static, TestRegistry> {
    GLOBAL_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

pub fn register(name: impl Into<Cow<'static, str>>, body: impl Into<TestFnHandle>) {
    global().register(name, body);
}

pub fn lookup(name: &str) -> Option<Arc<TestEntry>> {
    global().lookup(name).cloned()
}

pub fn registered_order() -> Vec<Cow<'static, str>> {
    global().registered_order().to_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::*;

    #[test]
    fn keeps_registration_order() {
        let registry = registry![
            "c" => || (),
            "a" => || (),
            "b" => || (),
        ];

        assert_eq!(registry.registered_order(), ["c", "a", "b"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_of_unknown_name_is_none() {
        let registry = registry!["known" => || ()];
        assert!(registry.lookup("known").is_some());
        assert!(registry.lookup("unknown").is_none());
        assert!(TestRegistry::new().lookup("").is_none());
    }

    #[test]
    fn duplicate_registration_overwrites_and_dedupes() {
        let journal = Journal::default();
        let mut registry = TestRegistry::new();
        registry.register("dup", journal.record("first"));
        registry.register("other", || ());
        registry.register("dup", journal.record("second"));

        assert_eq!(registry.registered_order(), ["dup", "other"]);
        let entry = registry.lookup("dup").expect("registered");
        assert!(entry.call().0.is_ok());
        assert_eq!(journal.entries(), ["second"]);

        let names: Vec<_> = registry.iter().map(|entry| entry.name()).collect();
        assert_eq!(names, ["dup", "other"]);
    }

    crate::test_case!("registry statically declared", fn statically_declared() {});

    #[test]
    fn global_registry_contains_static_tests() {
        statically_declared();
        assert!(lookup("registry statically declared").is_some());
        assert!(
            registered_order()
                .iter()
                .any(|name| name == "registry statically declared")
        );
    }

    #[test]
    fn explicit_registration_reaches_global_registry() {
        register("registry explicit registration", || ());
        let entry = lookup("registry explicit registration").expect("just registered");
        assert_eq!(entry.name(), "registry explicit registration");
    }
}
