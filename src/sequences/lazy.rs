//! Functionality for lazy-loading per-key data off disk into memory.
//!
//! The main functionality is the generic [`LazyLoader`]. This is generic over the loading
//! function and the key type. It owns the open reader in a [`RefCell`], and memoizes every
//! loaded value so each key is loaded at most once.
//!
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::TwoBitError;

/// A lazy-loader function that takes a reader type `R` and
/// uses it to load in data of type `T`.
type LoaderFunc<R, T, K> = Box<dyn Fn(&mut R, &K) -> Result<T, TwoBitError>>;

/// Lazy loader, which uses [`RefCell`] to store the mutable reader and the cache of
/// already loaded data.
///
/// # Generics
///  * `R`: the reader type.
///  * `T`: the data type.
///  * `K`: the key type.
///
///  * `reader`: the open reader type (e.g. a buffered 2-bit file).
///  * `loader`: a function that takes a key type `K` and an open reader,
///              and retrieves the right data of type `T`.
///  * `cache`: the data loaded so far, by key.
///
/// The reader is shared by every key, so a [`LazyLoader`] is not [`Sync`]: use one per thread.
pub struct LazyLoader<R, T, K>
where
    K: std::fmt::Debug,
    T: std::fmt::Debug,
{
    reader: RefCell<R>,
    loader: LoaderFunc<R, T, K>,
    cache: RefCell<HashMap<K, Rc<T>>>,
}

impl<R, T, K> std::fmt::Debug for LazyLoader<R, T, K>
where
    K: std::fmt::Debug,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyLoader")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<R, T, K> LazyLoader<R, T, K>
where
    K: std::fmt::Debug,
    T: std::fmt::Debug,
    K: Clone + Eq + Hash,
{
    pub fn new<F>(reader: R, loader: F) -> LazyLoader<R, T, K>
    where
        F: Fn(&mut R, &K) -> Result<T, TwoBitError> + 'static,
    {
        LazyLoader {
            reader: RefCell::new(reader),
            loader: Box::new(loader),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Return a `bool` indicating whether the specified `key` is cached.
    pub fn is_loaded(&self, key: &K) -> bool {
        self.cache.borrow().contains_key(key)
    }

    /// Clear out the cache.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// The number of cached keys.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Load the data corresponding to `key`
    ///
    /// Loads the data associated with a key using the `loader` function,
    /// unless it was loaded before.
    ///
    /// # Returns
    /// Returns a [`Result<Rc<T>, TwoBitError>`]. Failed loads are not cached.
    pub fn get_data(&self, key: &K) -> Result<Rc<T>, TwoBitError> {
        if let Some(data) = self.cache.borrow().get(key) {
            return Ok(Rc::clone(data));
        }
        let data = {
            let mut reader = self.reader.borrow_mut();
            Rc::new((self.loader)(&mut reader, key)?)
        };
        self.cache
            .borrow_mut()
            .insert(key.clone(), Rc::clone(&data));
        Ok(data)
    }

    /// Run `func` with exclusive access to the underlying reader, e.g. to read
    /// data that should not be cached.
    ///
    /// # Panics
    /// Panics if called re-entrantly from inside `func` or the loader.
    pub fn with_reader<V, F>(&self, func: F) -> Result<V, TwoBitError>
    where
        F: FnOnce(&mut R) -> Result<V, TwoBitError>,
    {
        let mut reader = self.reader.borrow_mut();
        func(&mut reader)
    }
}
