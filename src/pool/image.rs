//! Image descriptors and the immutable pool the game draws from.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One photo the game can show.
///
/// A zero width or height means probing failed. That is a degraded but
/// valid descriptor: layout code treats it as square.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    /// Create a descriptor with known dimensions.
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Create a descriptor whose dimensions are unknown.
    pub fn without_dimensions(url: impl Into<String>) -> Self {
        Self::new(url, 0, 0)
    }

    /// Whether both dimensions were probed successfully.
    #[must_use]
    pub fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height, or 1.0 when either dimension is unknown.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.has_dimensions() {
            f64::from(self.width) / f64::from(self.height)
        } else {
            1.0
        }
    }
}

/// Identity of an image within an [`ImagePool`].
///
/// Two deck slots hold the same picture exactly when their ids are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the image in its pool.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// The list of images supplied to a session.
///
/// Built once and never mutated. Descriptors repeating an earlier URL are
/// dropped so that id identity is URL identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePool {
    images: Vec<ImageDescriptor>,
}

impl ImagePool {
    pub fn new(descriptors: impl IntoIterator<Item = ImageDescriptor>) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut images: Vec<ImageDescriptor> = Vec::new();
        for descriptor in descriptors {
            if !seen.insert(descriptor.url.clone()) {
                log::debug!("dropping duplicate image {}", descriptor.url);
                continue;
            }
            images.push(descriptor);
        }
        Self { images }
    }

    /// An empty pool. The game renders nothing for it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ImageDescriptor> {
        self.images.get(id.index())
    }

    /// All ids in pool order.
    pub fn ids(&self) -> impl Iterator<Item = ImageId> {
        (0..self.images.len() as u32).map(ImageId)
    }

    /// Iterate over `(id, descriptor)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ImageId, &ImageDescriptor)> {
        self.images
            .iter()
            .enumerate()
            .map(|(i, image)| (ImageId(i as u32), image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(ImageDescriptor::new("/a.jpg", 1600, 800).aspect_ratio(), 2.0);
        assert_eq!(ImageDescriptor::new("/b.jpg", 600, 1200).aspect_ratio(), 0.5);
    }

    #[test]
    fn test_zero_dimensions_are_square() {
        let image = ImageDescriptor::without_dimensions("/c.jpg");
        assert!(!image.has_dimensions());
        assert_eq!(image.aspect_ratio(), 1.0);

        let half = ImageDescriptor::new("/d.jpg", 640, 0);
        assert!(!half.has_dimensions());
        assert_eq!(half.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_pool_drops_duplicate_urls() {
        let pool = ImagePool::new(vec![
            ImageDescriptor::new("/1.avif", 10, 10),
            ImageDescriptor::new("/2.avif", 10, 10),
            ImageDescriptor::new("/1.avif", 20, 20),
        ]);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(ImageId::new(0)).unwrap().width, 10);
        assert_eq!(pool.get(ImageId::new(1)).unwrap().url, "/2.avif");
        assert!(pool.get(ImageId::new(2)).is_none());
    }

    #[test]
    fn test_pool_dedup_keeps_first_of_many() {
        let pool = ImagePool::new(
            (0..1000).map(|i| ImageDescriptor::new(format!("/{}.avif", i % 100), i, i)),
        );
        assert_eq!(pool.len(), 100);
        assert_eq!(pool.get(ImageId::new(42)).unwrap().width, 42);
    }

    #[test]
    fn test_pool_ids() {
        let pool = ImagePool::new((0..3).map(|i| ImageDescriptor::without_dimensions(format!("/{i}.png"))));
        let ids: Vec<_> = pool.ids().collect();
        assert_eq!(ids, vec![ImageId(0), ImageId(1), ImageId(2)]);
        assert_eq!(format!("{}", ids[2]), "Image(2)");
    }

    #[test]
    fn test_empty_pool() {
        let pool = ImagePool::empty();
        assert!(pool.is_empty());
        assert_eq!(pool.ids().count(), 0);
    }
}
