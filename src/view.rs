// Text rendering of the catalog. Pure formatting, no I/O.

use crate::catalog::BreedCatalog;
use std::collections::BTreeSet;

/// Number of breed names printed on each row of the breed list.
pub const BREEDS_PER_ROW: usize = 5;

/// Render every breed in sorted order, `BREEDS_PER_ROW` per row, in columns
/// as wide as the longest name, followed by a total count line.
pub fn render(catalog: &BreedCatalog) -> String {
    let names: Vec<&str> = catalog.breeds().collect();
    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Available Dog Breeds:\n---------------------\n");
    for row in names.chunks(BREEDS_PER_ROW) {
        let line = row
            .iter()
            .map(|name| format!("{name:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&format!("\nTotal: {} breeds\n", names.len()));
    out
}

/// Numbered list of the sub-breeds of `breed`.
pub fn render_sub_breeds(breed: &str, sub_breeds: &BTreeSet<String>) -> String {
    let mut out = format!("Available sub-breeds for {breed}:\n");
    for (i, sub_breed) in sub_breeds.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, sub_breed));
    }
    out
}
