//! Synthetic fallback dataset.
//!
//! Substituted when the real data file cannot be loaded, so the viewer stays
//! exercisable instead of sitting in a dead loading state. The structure is
//! deterministic (two families, twenty records each, the declared domains);
//! the scores are random but plausible.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::schema::raw::RawRecord;
use crate::schema::Domain;
use crate::store::Dataset;

/// Default seed for the fallback generator.
pub const FALLBACK_SEED: u64 = 42;

const FAMILY_SIZE: u64 = 20;

/// Generate the fallback dataset with the default seed.
pub fn fallback_dataset() -> Dataset {
    fallback_dataset_with_seed(FALLBACK_SEED)
}

/// Generate the fallback dataset from an explicit seed.
pub fn fallback_dataset_with_seed(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut families = BTreeMap::new();
    families.insert("llama".to_string(), mock_family("LLaMA", &mut rng));
    families.insert("qwen".to_string(), mock_family("Qwen", &mut rng));
    Dataset::from_raw(families)
}

fn mock_family(prefix: &str, rng: &mut StdRng) -> Vec<RawRecord> {
    (1..=FAMILY_SIZE)
        .map(|i| {
            let general = rng.random_range(20.0..100.0);
            let math = rng.random_range(15.0..85.0);
            let code = rng.random_range(20.0..95.0);
            let reasoning = rng.random_range(25.0..90.0);
            let overall = (general + math + code + reasoning) / 4.0;
            let domain = Domain::ALL[rng.random_range(0..Domain::ALL.len())];

            // Ids are left for the store to assign so they stay unique
            // across both generated families.
            RawRecord {
                id: None,
                name: format!("{prefix}_Dataset_{i}"),
                domain: Some(domain.as_str().to_string()),
                tag: None,
                size: None,
                year: None,
                general_avg: Some(round2(general)),
                math_avg: Some(round2(math)),
                code_avg: Some(round2(code)),
                reasoning_avg: Some(round2(reasoning)),
                overall_avg: Some(round2(overall)),
                general_efficiency: None,
                math_efficiency: None,
                code_efficiency: None,
                reasoning_efficiency: None,
                task_details: BTreeMap::new(),
                improvement: None,
            }
        })
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
