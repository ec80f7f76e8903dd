use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// Chains several [`AssetProvider`]s into a single gpui [`AssetSource`].
///
/// Providers are consulted in order; the first hit wins. This lets an
/// application layer its own assets over the bundled vitrine ones.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        for provider in &self.providers {
            let asset = provider.get(path);

            if asset.is_some() {
                return Ok(asset);
            }
        }

        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|assets| assets.list(path).into_iter())
            .flatten()
            .collect())
    }
}

pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

#[cfg(all(test, feature = "assets"))]
mod tests {
    use super::*;
    use crate::assets::VitrineAssets;

    #[test]
    fn test_bundled_icons_resolve() {
        let source = crate::assets!(VitrineAssets);

        for kind in [
            crate::assets::VitrineIconKind::Checkmark,
            crate::assets::VitrineIconKind::CaretDown,
            crate::assets::VitrineIconKind::Close,
            crate::assets::VitrineIconKind::Globe,
        ] {
            let loaded = source.load(kind.path().as_ref()).unwrap();
            assert!(loaded.is_some(), "missing bundled icon {}", kind.path());
        }
    }

    #[test]
    fn test_empty_path_is_not_an_error() {
        let source = crate::assets!(VitrineAssets);
        assert!(source.load("").unwrap().is_none());
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let source = crate::assets!(VitrineAssets);
        assert!(source.load("icons/does_not_exist.svg").is_err());
    }
}
