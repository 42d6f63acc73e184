//! Gene-level mutation operators.
//!
//! Operators are free functions over a borrowed [`Gene`], in the same shape
//! as the selection/crossover operators of a generational driver. Each is a
//! total transformation: it either applies fully or is a deliberate no-op
//! under its guard condition, never a partial edit. A full pass over a gene
//! is run by [`mutate_gene`], which rolls each applicable operator
//! independently in a fixed order, so several operators can fire in one
//! call and the order below is part of the observable behavior.

use crate::config::MutationChances;
use crate::genetics::encoding::{random_chars, EncodingType, Gene};
use log::trace;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Hard cap on string gene length growth; duplication and insertion refuse
/// to start from a string at or past this length.
pub const MAX_STRING_LEN: usize = 1000;

/// Chance gate shared by every operator: fires iff
/// `chance * multiplier > roll` for a uniform roll in `[0, 100)`.
pub(crate) fn fires<R: Rng>(chance: f64, multiplier: f64, rng: &mut R) -> bool {
    chance * multiplier > rng.gen_range(0.0..100.0)
}

/// Replace the gene's data with a fresh random value (all variants)
pub fn uniform<R: Rng>(gene: &mut Gene, rng: &mut R) {
    gene.set_random_data(rng);
}

/// Invert a boolean gene
pub fn flip(gene: &mut Gene) {
    if let Gene::Boolean { data } = gene {
        *data = !*data;
    }
}

/// Snap a numeric gene to one of its bounds, chosen uniformly.
/// Requires both bounds; otherwise a no-op.
pub fn boundary<R: Rng>(gene: &mut Gene, rng: &mut R) {
    match gene {
        Gene::Integer {
            data,
            min: Some(min),
            max: Some(max),
        } => *data = if rng.gen() { *min } else { *max },
        Gene::Float {
            data,
            min: Some(min),
            max: Some(max),
        } => *data = if rng.gen() { *min } else { *max },
        _ => {}
    }
}

/// Perturb a numeric gene by a draw from `Normal(0, sigma)`. Integer genes
/// truncate the draw. With both bounds defined the change is applied only
/// when the result stays inside `[min, max]`; unbounded genes always apply.
pub fn gaussian<R: Rng>(gene: &mut Gene, sigma: f64, rng: &mut R) {
    let dist = match Normal::new(0.0, sigma) {
        Ok(d) => d,
        Err(_) => return,
    };
    let change = dist.sample(rng);

    match gene {
        Gene::Integer { data, min, max } => {
            let change = change.trunc() as i64;
            let candidate = data.saturating_add(change);
            match (min, max) {
                (Some(lo), Some(hi)) => {
                    if *lo <= candidate && candidate <= *hi {
                        *data = candidate;
                    }
                }
                _ => *data = candidate,
            }
        }
        Gene::Float { data, min, max } => {
            let candidate = *data + change;
            match (min, max) {
                (Some(lo), Some(hi)) => {
                    if *lo <= candidate && candidate <= *hi {
                        *data = candidate;
                    }
                }
                _ => *data = candidate,
            }
        }
        _ => {}
    }
}

/// Replace one uniformly chosen character with a random charset character.
/// No-op on an empty string.
pub fn bitstring<R: Rng>(gene: &mut Gene, rng: &mut R) {
    if let Gene::Str { data, charset } = gene {
        let mut chars: Vec<char> = data.chars().collect();
        if chars.is_empty() {
            return;
        }
        let pos = rng.gen_range(0..chars.len());
        if let Some(replacement) = random_chars(charset, 1, rng).chars().next() {
            chars[pos] = replacement;
            *data = chars.into_iter().collect();
        }
    }
}

/// Double the string (`data + data`) while below the growth cap
pub fn duplication(gene: &mut Gene) {
    if let Gene::Str { data, .. } = gene {
        let len = data.chars().count();
        if len > 0 && len < MAX_STRING_LEN {
            let copy = data.clone();
            data.push_str(&copy);
        }
    }
}

/// Remove a uniformly chosen substring `[begin, end)`; the range may be
/// empty, making this a no-op.
pub fn deletion<R: Rng>(gene: &mut Gene, rng: &mut R) {
    if let Gene::Str { data, .. } = gene {
        let len = data.chars().count();
        let begin = rng.gen_range(0..=len);
        let end = rng.gen_range(begin..=len);
        *data = delete_slice(data, begin, end);
    }
}

/// Drop the character range `[begin, end)` (indices in chars)
pub(crate) fn delete_slice(data: &str, begin: usize, end: usize) -> String {
    data.chars()
        .enumerate()
        .filter(|(i, _)| *i < begin || *i >= end)
        .map(|(_, c)| c)
        .collect()
}

/// Splice 1-10 random charset characters in at a uniformly chosen index.
/// Only the starting length is checked against the growth cap.
pub fn insertion<R: Rng>(gene: &mut Gene, rng: &mut R) {
    if let Gene::Str { data, charset } = gene {
        let mut chars: Vec<char> = data.chars().collect();
        if chars.len() >= MAX_STRING_LEN {
            return;
        }
        let count = rng.gen_range(1..=10);
        let index = if chars.is_empty() {
            0
        } else {
            rng.gen_range(0..=chars.len())
        };
        let fresh: Vec<char> = random_chars(charset, count, rng).chars().collect();
        chars.splice(index..index, fresh);
        *data = chars.into_iter().collect();
    }
}

/// Transpose two uniformly chosen character positions (which may coincide).
/// Requires length >= 2.
pub fn swap<R: Rng>(gene: &mut Gene, rng: &mut R) {
    if let Gene::Str { data, .. } = gene {
        let mut chars: Vec<char> = data.chars().collect();
        if chars.len() < 2 {
            return;
        }
        let a = rng.gen_range(0..chars.len());
        let b = rng.gen_range(0..chars.len());
        chars.swap(a, b);
        *data = chars.into_iter().collect();
    }
}

/// Run one chance-gated mutation pass over a gene.
///
/// Operator order per variant (fixed, observable):
/// - Boolean: uniform, flip
/// - Integer/Float: uniform, boundary, gaussian
/// - String: uniform, bitstring, duplication, deletion, insertion, swap
pub fn mutate_gene<R: Rng>(
    gene: &mut Gene,
    chances: &MutationChances,
    multiplier: f64,
    rng: &mut R,
) {
    if fires(chances.uniform, multiplier, rng) {
        trace!("gene mutation: uniform");
        uniform(gene, rng);
    }

    match gene.encoding_type() {
        EncodingType::Boolean => {
            if fires(chances.flip, multiplier, rng) {
                trace!("gene mutation: flip");
                flip(gene);
            }
        }
        EncodingType::Integer | EncodingType::Float => {
            if fires(chances.boundary, multiplier, rng) {
                trace!("gene mutation: boundary");
                boundary(gene, rng);
            }
            if fires(chances.gaussian, multiplier, rng) {
                trace!("gene mutation: gaussian");
                gaussian(gene, chances.gaussian_sigma, rng);
            }
        }
        EncodingType::String => {
            if fires(chances.bitstring, multiplier, rng) {
                trace!("gene mutation: bitstring");
                bitstring(gene, rng);
            }
            if fires(chances.duplication, multiplier, rng) {
                trace!("gene mutation: duplication");
                duplication(gene);
            }
            if fires(chances.deletion, multiplier, rng) {
                trace!("gene mutation: deletion");
                deletion(gene, rng);
            }
            if fires(chances.insertion, multiplier, rng) {
                trace!("gene mutation: insertion");
                insertion(gene, rng);
            }
            if fires(chances.swap, multiplier, rng) {
                trace!("gene mutation: swap");
                swap(gene, rng);
            }
        }
    }
}
