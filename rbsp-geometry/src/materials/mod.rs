// Copyright (C) 2019 Oscar Shrimpton

// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
// more details.

// You should have received a copy of the GNU General Public License along
// with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Resolves a face's shader name to materials

use std::collections::HashMap;

mod fs;

pub use self::fs::{FsTextureResolver, LoadedTexture, DEFAULT_EXTENSIONS};

/// Something that can turn a shader or texture name into materials.
///
/// Called once per face, so the same name is usually asked for many times.
/// An empty list is a valid answer.
pub trait MaterialResolver {
    type Handle: Clone;

    fn resolve(&mut self, name: &str) -> Vec<Self::Handle>;
}

/// Never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl MaterialResolver for NullResolver {
    type Handle = ();

    fn resolve(&mut self, _name: &str) -> Vec<()> {
        Vec::new()
    }
}

/// Remembers the materials found for each name, including finding none.
#[derive(Debug, Clone)]
pub struct MaterialCache<H> {
    entries: HashMap<String, Vec<H>>,
}

impl<H> MaterialCache<H> {
    pub fn new() -> MaterialCache<H> {
        MaterialCache {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[H]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// The cached materials for `name`, calling `compute` only if there aren't any yet.
    pub fn get_or_insert_with<F>(&mut self, name: &str, compute: F) -> &[H]
    where
        F: FnOnce(&str) -> Vec<H>,
    {
        if !self.entries.contains_key(name) {
            let materials = compute(name);
            self.entries.insert(name.to_owned(), materials);
        }

        &self.entries[name]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<H> Default for MaterialCache<H> {
    fn default() -> Self {
        MaterialCache::new()
    }
}

/// Wraps another resolver so each name is only resolved once.
pub struct CachedResolver<R: MaterialResolver> {
    inner: R,
    cache: MaterialCache<R::Handle>,
}

impl<R: MaterialResolver> CachedResolver<R> {
    pub fn new(inner: R) -> CachedResolver<R> {
        CachedResolver {
            inner,
            cache: MaterialCache::new(),
        }
    }

    pub fn cache(&self) -> &MaterialCache<R::Handle> {
        &self.cache
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: MaterialResolver> MaterialResolver for CachedResolver<R> {
    type Handle = R::Handle;

    fn resolve(&mut self, name: &str) -> Vec<R::Handle> {
        let inner = &mut self.inner;
        self.cache
            .get_or_insert_with(name, |name| inner.resolve(name))
            .to_vec()
    }
}
