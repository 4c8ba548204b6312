use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::CacheError;
use crate::model::{CacheKey, RoutePolyline};

/// durable mapping from [`CacheKey`] to the route fetched for it.
///
/// the cache lives in memory during a run and is written to a single JSON
/// object file by [`RouteCache::persist`]. only successful fetches are
/// stored; a key without a route is simply absent. since a rerun skips every
/// key already present, the cache file doubles as the resume point of an
/// interrupted run.
#[derive(Debug, Clone)]
pub struct RouteCache {
    path: PathBuf,
    routes: BTreeMap<CacheKey, RoutePolyline>,
}

impl RouteCache {
    /// an empty cache that will persist to `path`
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            routes: BTreeMap::new(),
        }
    }

    /// reads the cache stored at `path`. a missing file is an empty cache.
    ///
    /// # Arguments
    ///
    /// * `path` - location of the JSON cache file
    ///
    /// # Returns
    ///
    /// * the cache, bound to `path` for later calls to [`RouteCache::persist`]
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let filepath = path.to_string_lossy().to_string();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no route cache found at {path:?}, starting empty");
                return Ok(Self::new(path));
            }
            Err(source) => {
                return Err(CacheError::ReadError {
                    filepath: filepath.clone(),
                    source,
                })
            }
        };
        let stored: BTreeMap<CacheKey, Option<RoutePolyline>> =
            serde_json::from_reader(BufReader::new(file))
                .map_err(|source| CacheError::DeserializeError { filepath, source })?;

        let n_stored = stored.len();
        let routes = stored
            .into_iter()
            .filter_map(|(key, route)| route.map(|r| (key, r)))
            .collect::<BTreeMap<_, _>>();
        if routes.len() < n_stored {
            log::debug!(
                "dropped {} null entries from route cache {path:?}",
                n_stored - routes.len()
            );
        }
        log::info!("loaded {} cached routes from {path:?}", routes.len());
        Ok(Self {
            path: path.to_path_buf(),
            routes,
        })
    }

    /// writes the full mapping to disk. the JSON is written to a sibling
    /// temporary file which then replaces the cache file in a single rename,
    /// so an interrupted write leaves the previous store intact.
    pub fn persist(&self) -> Result<(), CacheError> {
        let filepath = self.path.to_string_lossy().to_string();
        let write_err = |source: std::io::Error| CacheError::WriteError {
            filepath: filepath.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp_path = self.staging_path();
        let file = File::create(&tmp_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.routes).map_err(|source| {
            CacheError::SerializeError {
                filepath: filepath.clone(),
                source,
            }
        })?;
        writer.flush().map_err(write_err)?;
        writer.get_ref().sync_all().map_err(write_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        log::debug!("persisted {} routes to {:?}", self.routes.len(), self.path);
        Ok(())
    }

    pub fn get(&self, key: &CacheKey) -> Option<&RoutePolyline> {
        self.routes.get(key)
    }

    /// stores a route, replacing any route already stored at this key
    pub fn put(&mut self, key: CacheKey, route: RoutePolyline) {
        self.routes.insert(key, route);
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.routes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CacheKey, &RoutePolyline)> {
        self.routes.iter()
    }

    /// cached routes whose key was built with the given routing profile
    pub fn routes_for_profile<'a>(
        &'a self,
        profile: &'a str,
    ) -> impl Iterator<Item = &'a RoutePolyline> + 'a {
        self.routes
            .iter()
            .filter(move |(key, _)| key.profile() == profile)
            .map(|(_, route)| route)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
