use crate::swatch::Swatch;
use image::Rgb;
use std::collections::{hash_map::Entry, HashMap};

/// Tally how often each distinct color appears in the pixel sequence.
///
/// The returned pairs are in first-seen order. A plain `HashMap` iterates in
/// arbitrary order, so the counts live in an insertion-ordered vector and the
/// map only holds each color's index into it. That order is what breaks ties
/// later: of two colors with equal counts, the one scanned earlier wins.
pub(crate) fn count_colors<'a, I>(pixels: I) -> Vec<(Rgb<u8>, u32)>
where
    I: IntoIterator<Item = &'a Rgb<u8>>,
{
    let mut indices: HashMap<Rgb<u8>, usize> = HashMap::new();
    let mut counts: Vec<(Rgb<u8>, u32)> = Vec::new();

    for pixel in pixels {
        match indices.entry(*pixel) {
            Entry::Occupied(entry) => counts[*entry.get()].1 += 1,
            Entry::Vacant(entry) => {
                entry.insert(counts.len());
                counts.push((*pixel, 1));
            }
        }
    }

    counts
}

/// Select the `num_colors` most frequent colors, descending by count.
///
/// The sort is stable over first-seen-ordered input, so equal counts keep
/// their scan order. Asking for more colors than exist returns them all.
pub(crate) fn most_common(mut counts: Vec<(Rgb<u8>, u32)>, num_colors: usize) -> Vec<Swatch> {
    counts.sort_by(|(_, lhs), (_, rhs)| rhs.cmp(lhs));
    counts.truncate(num_colors);

    counts
        .into_iter()
        .map(|(Rgb([r, g, b]), count)| Swatch::new((r, g, b), count))
        .collect()
}
