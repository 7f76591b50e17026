use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is empty")]
    EmptyCatalog,
}

/// Informational grouping for catalog entries. Not used by any lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Quantum,
    Atomic,
    Molecular,
    Virus,
    Cell,
    Object,
    Animal,
    Human,
    Earth,
    Planet,
    Star,
    Space,
}

/// One real-world object with a characteristic size.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    /// Characteristic size in meters, strictly positive and finite.
    pub size_meters: f64,
    pub description: &'static str,
    /// CSS hex color (`#rrggbb`), used only when drawing.
    pub color: &'static str,
    pub category: Category,
}

const fn entry(
    name: &'static str,
    size_meters: f64,
    description: &'static str,
    color: &'static str,
    category: Category,
) -> CatalogEntry {
    CatalogEntry {
        name,
        size_meters,
        description,
        color,
        category,
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    // Subatomic & atomic
    entry("Planck Length", 1.6e-35, "The smallest measurable length in physics", "#ff00ff", Category::Quantum),
    entry("Proton", 8.4e-16, "Subatomic particle in the nucleus of an atom", "#ff0080", Category::Quantum),
    entry("Hydrogen Atom", 1.2e-10, "The smallest and most abundant atom in the universe", "#ff4080", Category::Atomic),
    entry("Water Molecule", 2.8e-10, "H₂O - Essential for all known life", "#4080ff", Category::Atomic),
    // Molecular & cellular
    entry("DNA Width", 2e-9, "Double helix structure carrying genetic information", "#00ff80", Category::Molecular),
    entry("Virus (HIV)", 1.2e-7, "One of the smallest viruses", "#ff8040", Category::Virus),
    entry("Bacteria (E. coli)", 2e-6, "Common bacteria found in intestines", "#80ff40", Category::Cell),
    entry("Red Blood Cell", 8e-6, "Carries oxygen throughout the body", "#ff4040", Category::Cell),
    entry("Human Egg Cell", 1.2e-4, "Largest human cell, visible to naked eye", "#ffff80", Category::Cell),
    // Small organisms
    entry("Grain of Sand", 5e-4, "Fine sand particle", "#d4a574", Category::Object),
    entry("Human Hair Width", 7e-5, "Diameter of a single hair strand", "#8b7355", Category::Object),
    entry("Dust Mite", 3e-4, "Microscopic arachnid living in house dust", "#c0c0c0", Category::Animal),
    entry("Flea", 2e-3, "Tiny jumping insect", "#404040", Category::Animal),
    entry("Ant", 5e-3, "Common worker ant", "#8b4513", Category::Animal),
    entry("Honeybee", 1.5e-2, "Important pollinator", "#ffd700", Category::Animal),
    // Medium organisms
    entry("Hummingbird", 0.08, "Smallest bird species", "#00ff00", Category::Animal),
    entry("Mouse", 0.1, "Common small rodent", "#808080", Category::Animal),
    entry("Baseball", 0.074, "Standard baseball diameter", "#ffffff", Category::Object),
    entry("Cat", 0.46, "Domestic feline", "#ff8040", Category::Animal),
    entry("Human (average)", 1.7, "Average human height", "#ffd0a0", Category::Human),
    entry("Door", 2.0, "Standard door height", "#8b4513", Category::Object),
    // Large organisms & objects
    entry("Giraffe", 5.5, "Tallest land animal", "#daa520", Category::Animal),
    entry("Elephant (African)", 6.5, "Largest land animal", "#808080", Category::Animal),
    entry("School Bus", 11.0, "Standard school bus length", "#ffff00", Category::Object),
    entry("Blue Whale", 30.0, "Largest animal ever known", "#4169e1", Category::Animal),
    entry("Statue of Liberty", 93.0, "Height including pedestal", "#80ff80", Category::Object),
    entry("Football Field", 110.0, "Length of American football field", "#00ff00", Category::Object),
    // Massive objects
    entry("Eiffel Tower", 330.0, "Iconic Parisian landmark", "#8b7355", Category::Object),
    entry("Empire State Building", 443.0, "New York City skyscraper", "#c0c0c0", Category::Object),
    entry("Burj Khalifa", 828.0, "Tallest building in the world", "#c0c0c0", Category::Object),
    entry("Mount Everest", 8849.0, "Tallest mountain on Earth", "#ffffff", Category::Earth),
    entry("Mariana Trench", 11034.0, "Deepest ocean trench", "#000080", Category::Earth),
    // Planetary & cosmic
    entry("Earth Diameter", 12_742_000.0, "Our home planet", "#4169e1", Category::Planet),
    entry("Jupiter Diameter", 139_820_000.0, "Largest planet in solar system", "#daa520", Category::Planet),
    entry("Sun Diameter", 1_392_700_000.0, "Our star", "#ffff00", Category::Star),
    entry("Solar System", 2.87e13, "Diameter including Kuiper Belt", "#808080", Category::Space),
    entry("Light Year", 9.461e15, "Distance light travels in one year", "#ffffff", Category::Space),
    entry("Milky Way Galaxy", 1e21, "Our galaxy, containing billions of stars", "#e0e0ff", Category::Space),
    entry("Observable Universe", 8.8e26, "The limit of what we can observe", "#000020", Category::Space),
];

/// Read-only view over a table of catalog entries, in insertion order.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Catalog {
    pub const fn new(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    pub const fn builtin() -> Self {
        Self::new(CATALOG)
    }

    #[inline]
    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static CatalogEntry> {
        self.entries.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static CatalogEntry> {
        self.index_of(name).map(|i| &self.entries[i])
    }

    /// Entry indices ordered by size, smallest first. Equal sizes keep
    /// catalog order.
    pub fn sorted_by_size(&self) -> Vec<usize> {
        size_order(self.entries)
    }

    pub fn nearest(&self, reference_scale: f64) -> Result<&'static CatalogEntry, CatalogError> {
        find_nearest(self.entries, reference_scale)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Indices of `entries` ordered by size, smallest first, ties in slice order.
pub fn size_order(entries: &[CatalogEntry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[a].size_meters.total_cmp(&entries[b].size_meters));
    order
}

/// Absolute difference of base-10 logarithms.
#[inline]
pub fn log_distance(a: f64, b: f64) -> f64 {
    (a.log10() - b.log10()).abs()
}

/// Index of the entry closest to `reference_scale` in order of magnitude.
/// The first minimal entry wins on ties.
pub fn nearest_index(entries: &[CatalogEntry], reference_scale: f64) -> Result<usize, CatalogError> {
    let mut best: Option<(usize, f64)> = None;
    for (i, e) in entries.iter().enumerate() {
        let d = log_distance(e.size_meters, reference_scale);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i).ok_or(CatalogError::EmptyCatalog)
}

pub fn find_nearest(
    entries: &[CatalogEntry],
    reference_scale: f64,
) -> Result<&CatalogEntry, CatalogError> {
    nearest_index(entries, reference_scale).map(|i| &entries[i])
}
