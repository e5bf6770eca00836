//! Per-thread caches of constructed ICU formatters.
//!
//! Building an ICU formatter loads locale data, so each thread keeps the
//! formatters it has built, keyed by locale and options. Caches are plain
//! `RefCell<Vec<_>>`s behind `thread_local!`: no locking, and a cache hit
//! returns exactly what a fresh formatter would.

use std::cell::RefCell;
use std::thread::LocalKey;

/// A thread-local list of `(key, formatter)` pairs.
pub(crate) type Cache<K, V> = RefCell<Vec<(K, V)>>;

/// Run `f` with the formatter cached under `key`, building it on first use.
///
/// A failed build is not cached, so the next call retries.
pub(crate) fn with_cached<K, V, E, R>(
    cache: &'static LocalKey<Cache<K, V>>,
    key: K,
    build: impl FnOnce(&K) -> Result<V, E>,
    f: impl FnOnce(&V) -> R,
) -> Result<R, E>
where
    K: PartialEq + 'static,
    V: 'static,
{
    cache.with_borrow_mut(|entries| {
        if let Some((_, formatter)) = entries.iter().find(|(k, _)| *k == key) {
            return Ok(f(formatter));
        }
        let formatter = build(&key)?;
        let result = f(&formatter);
        entries.push((key, formatter));
        Ok(result)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    thread_local! {
        static LENGTHS: Cache<&'static str, usize> = const { RefCell::new(Vec::new()) };
    }

    #[test]
    fn builds_once_per_key() {
        let builds = Cell::new(0);
        let build = |key: &&'static str| -> Result<usize, ()> {
            builds.set(builds.get() + 1);
            Ok(key.len())
        };
        assert_eq!(with_cached(&LENGTHS, "abc", build, |n| *n), Ok(3));
        assert_eq!(with_cached(&LENGTHS, "abc", build, |n| *n), Ok(3));
        assert_eq!(with_cached(&LENGTHS, "de", build, |n| *n), Ok(2));
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn failed_builds_are_retried() {
        thread_local! {
            static FAILING: Cache<u8, u8> = const { RefCell::new(Vec::new()) };
        }
        assert_eq!(with_cached(&FAILING, 1, |_| Err("no data"), |v| *v), Err("no data"));
        assert_eq!(with_cached(&FAILING, 1, |k| Ok::<_, &str>(*k), |v| *v), Ok(1));
    }
}
