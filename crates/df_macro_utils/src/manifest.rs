use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a `df_*` crate as seen from the
/// caller's Cargo.toml.
///
/// Derive macros emit absolute paths such as `::df_reflect::Reflect`, but the
/// invoking crate may only depend on the `df_core` facade. This helper picks
/// the path that actually resolves.
///
/// # Example
///
/// ```rust
/// # use df_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("df_reflect"));
/// ```
///
/// The cost of this operation is not low, the caller should store the result
/// and call it once per proc-macro invocation.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `df_` and the target crate depends
///    on the facade `df_core`, return `::df_core::short_name`
///    (e.g. `df_reflect` -> `::df_core::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate that derives on its own types should add
/// `extern crate self as df_reflect;` in its root so the fallback resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "df_core";
const CRATE_PREFIX: &str = "df_";

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

    /// Build a [`Manifest`] from the text of a `Cargo.toml`.
    #[cfg(test)]
    fn parse(text: &str) -> Option<Self> {
        Some(Self {
            manifest: Document::parse(Box::<str>::from(text)).ok()?,
            modified_time: SystemTime::UNIX_EPOCH,
        })
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and re-read only when the
    /// file's modified time changes.
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

    fn path_to_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    fn resolve(text: &str, name: &str) -> String {
        let manifest = Manifest::parse(text).unwrap();
        path_to_string(&manifest.get_crate_path(name))
    }

    #[test]
    fn direct_dependency() {
        let text = "[dependencies]\ndf_reflect = { path = \"../df_reflect\" }\n";
        assert_eq!(resolve(text, "df_reflect"), "::df_reflect");
    }

    #[test]
    fn through_facade() {
        let text = "[dependencies]\ndf_core = \"0.0.1\"\n";
        assert_eq!(resolve(text, "df_reflect"), "::df_core::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let text = "[dev-dependencies]\ndf_core = \"0.0.1\"\n";
        assert_eq!(resolve(text, "df_reflect"), "::df_core::reflect");
        assert_eq!(resolve("[package]\nname = \"x\"\n", "df_reflect"), "::df_reflect");
    }
}
