use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate the [`syn::Path`] under which a `pk_*` crate is reachable from the
/// crate invoking a proc-macro.
///
/// Derived code must name `pk_reflect` items, but users may depend on the
/// facade crate `propkit` instead of `pk_reflect` itself.
///
/// # Example
///
/// ```rust
/// # use pk_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("pk_reflect"));
/// ```
///
/// Reading the manifest is not cheap: call once per macro invocation and
/// pass the resulting path around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested name begins with `pk_` and the caller depends on the
///    facade `propkit`, return `::propkit::short_name`
///    (e.g. `pk_reflect` -> `::propkit::reflect`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// Inside `pk_reflect` itself the fallback is correct because the crate root
/// declares `extern crate self as pk_reflect;`.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "propkit";
const CRATE_PREFIX: &str = "pk_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn absolute_path(segments: &[&str]) -> syn::Path {
        let text: String = segments.iter().map(|s| format!("::{s}")).collect();
        syn::parse_str(&text).unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute_path(&[name]));
        }
        match name.strip_prefix(CRATE_PREFIX) {
            Some(module) if deps.contains_key(FACADE_NAME) => {
                Some(Self::absolute_path(&[FACADE_NAME, module]))
            }
            _ => None,
        }
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// the caller's Cargo.toml. See the type-level documentation for the
    /// resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::absolute_path(&[name])
    }

    /// Run `func` against the caller's parsed Cargo.toml.
    ///
    /// Manifests are cached per path and re-read only when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        let names: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", names.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(Box::<str>::from(text)).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest("[dependencies]\npk_reflect = \"0.0.1\"\npropkit = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("pk_reflect")), "::pk_reflect");
    }

    #[test]
    fn facade_dependency_maps_short_name() {
        let m = manifest("[dependencies]\npropkit = { path = \"../..\" }\n");
        assert_eq!(path_string(&m.get_crate_path("pk_reflect")), "::propkit::reflect");
    }

    #[test]
    fn dev_dependencies_are_searched() {
        let m = manifest("[dev-dependencies]\npropkit = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("pk_reflect")), "::propkit::reflect");
    }

    #[test]
    fn unknown_crate_falls_back_to_absolute_path() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_string(&m.get_crate_path("pk_reflect")), "::pk_reflect");
    }
}
