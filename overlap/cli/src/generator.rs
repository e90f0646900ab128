//! Pseudorandom family generator, CLI-only (never part of the library's public API).
//!
//! Ported from the reference `gen.c`: builds an inclusion tree by recursively
//! partitioning the ground set into a bounded number of classes, then layers extra
//! sets over each partition as random unions of its classes. The random unions never
//! overlap the partition classes they're built from, which is what keeps the generated
//! family from collapsing into one big connected component every time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use setfamily::Family;

/// Draws `s` random bits, returns them alongside how many were set.
fn randtab(rng: &mut ChaCha8Rng, s: usize) -> (Vec<bool>, usize) {
    let mut bits = Vec::with_capacity(s);
    let mut count = 0;
    for _ in 0..s {
        let bit = rng.gen_bool(0.5);
        if bit {
            count += 1;
        }
        bits.push(bit);
    }
    (bits, count)
}

/// Unions the member-sets of `family` selected by `bits`.
fn unionsets(family: &[Vec<usize>], bits: &[bool]) -> Vec<usize> {
    let mut members = Vec::new();
    for (set, &selected) in family.iter().zip(bits) {
        if selected {
            members.extend_from_slice(set);
        }
    }
    members.sort_unstable();
    members.dedup();
    members
}

/// Adds `nbr` sets to `f`, each a random union of a proper, non-trivial subset of
/// `f2`'s sets. No-op if `f2` has fewer than three sets (too small to pick a proper
/// non-trivial subset from).
fn gen1(f: &mut Family, f2: &[Vec<usize>], nbr: usize, rng: &mut ChaCha8Rng) {
    if f2.len() < 3 {
        return;
    }
    let mut remaining = nbr;
    while remaining > 0 {
        let (bits, r) = randtab(rng, f2.len());
        if r > 1 && r < f2.len() {
            let members = unionsets(f2, &bits);
            if !members.is_empty() {
                let _ = f.add_set(&members);
            }
            remaining -= 1;
        }
    }
}

/// Draws `s` random integers in `1..=a`, retrying until the draw is a proper
/// partition label (more than one distinct value, when `s > 1`).
fn randtab2(rng: &mut ChaCha8Rng, s: usize, a: usize) -> Vec<usize> {
    loop {
        let mut labels = Vec::with_capacity(s);
        let mut only_value: Option<usize> = None;
        let mut proper = true;
        for _ in 0..s {
            let label = rng.gen_range(1..=a);
            labels.push(label);
            match only_value {
                None => only_value = Some(label),
                Some(v) if v != label => proper = false,
                _ => {}
            }
        }
        if s <= 1 || !proper {
            return labels;
        }
    }
}

/// Partitions `ta` (a set of ground elements) into at most `degree` non-empty
/// classes, recurses into each class, then layers `gen1`-generated union sets over
/// the partition as a whole. The partition classes themselves are never added to
/// `f`: only `gen1`'s unions are, since classes of the same partition are disjoint
/// and would otherwise flood the output family with sets that can never overlap
/// anything.
fn gen(f: &mut Family, ta: &[usize], degree: usize, dens: f64, rng: &mut ChaCha8Rng) {
    if ta.len() <= 1 {
        return;
    }

    let labels = randtab2(rng, ta.len(), degree);
    let mut classes: Vec<Vec<usize>> = Vec::new();
    let mut class_count = 0;

    for label in 1..=degree {
        let class: Vec<usize> = ta
            .iter()
            .zip(&labels)
            .filter(|(_, &l)| l == label)
            .map(|(&e, _)| e)
            .collect();
        if !class.is_empty() {
            class_count += 1;
            gen(f, &class, degree, dens, rng);
            classes.push(class);
        }
    }

    let extra = ((class_count * class_count) as f64 * dens) as usize;
    gen1(f, &classes, extra, rng);
}

/// Generates a family over a ground set of size `grnd_size`.
///
/// `degree` bounds how many classes each recursive partitioning step may produce;
/// `dens` controls how many extra non-partition sets get layered over each
/// partition. A `seed` of zero draws from the system clock (matching the reference
/// generator's `srand(time(NULL))` fallback); any other value is used directly, for
/// reproducible runs.
pub fn family_gen(grnd_size: usize, degree: usize, dens: f64, seed: u64) -> Family {
    let actual_seed = if seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9e3779b97f4a7c15)
    } else {
        seed
    };
    let mut rng = ChaCha8Rng::seed_from_u64(actual_seed);

    let mut family = Family::new(grnd_size);
    let ground: Vec<usize> = (0..grnd_size).collect();
    gen(&mut family, &ground, degree, dens, &mut rng);
    family
}
