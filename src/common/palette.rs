use image::Rgb;
use rand::Rng;

use crate::common::ClassCatalog;

/// Per-class display colours for the rendering collaborator.
///
/// Generated once per run and passed around explicitly, never stored as
/// process-wide state. One colour per catalog entry.
#[derive(Debug, Clone)]
pub struct Palette {
    colours: Vec<Rgb<u8>>,
}

impl Palette {
    /// Generates a uniform random colour per class.
    pub fn generate(num_classes: usize) -> Self {
        let mut rng = rand::thread_rng();
        let colours = (0..num_classes)
            .map(|_| Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]))
            .collect();
        Self { colours }
    }

    pub fn for_catalog(catalog: &ClassCatalog) -> Self {
        Self::generate(catalog.num_classes())
    }

    pub fn colour(&self, class_id: usize) -> Option<Rgb<u8>> {
        self.colours.get(class_id).copied()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
