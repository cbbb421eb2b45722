//! Binary menu genome and its item-name encoding.

use crate::catalog::Catalog;
use crate::ga::Genome;
use std::collections::HashSet;

/// Binary inclusion vector over the catalog: gene `i` is `true` when the
/// item at catalog position `i` is on the menu.
pub type MenuGenome = Genome<bool>;

/// Decodes a genome into the names of the selected items, in catalog order.
///
/// # Panics
/// Panics if the genome length differs from the catalog size.
pub fn decode_selection(genome: &MenuGenome, catalog: &Catalog) -> Vec<String> {
    assert_eq!(
        genome.len(),
        catalog.len(),
        "genome length must match catalog size"
    );
    genome
        .genes()
        .iter()
        .enumerate()
        .filter(|(_, &selected)| selected)
        .map(|(i, _)| catalog.item(i).to_string())
        .collect()
}

/// Encodes item names as an inclusion genome over `catalog`.
///
/// Names without a catalog position have no gene to set and are ignored.
pub fn encode_selection<S: AsRef<str>>(items: &[S], catalog: &Catalog) -> MenuGenome {
    let selected: HashSet<&str> = items.iter().map(|s| s.as_ref()).collect();
    Genome::new(
        catalog
            .items()
            .iter()
            .map(|item| selected.contains(item.as_str()))
            .collect(),
    )
}
