use evogen::genetics::{ChromosomeSpec, EncodingType, Gene, Genome};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a genome with one BOOLEAN chromosome "x" holding a single gene
/// set to the given value, independently of any RNG state.
fn single_flag_genome(seed: u64, value: bool) -> Genome {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut genome = Genome::new();
    genome.add_chromosome(
        "x",
        EncodingType::Boolean,
        ChromosomeSpec {
            n_genes: Some(1),
            ..ChromosomeSpec::default()
        },
        &mut rng,
    );
    if let Gene::Boolean { data } = &mut genome.chromosome_mut("x").unwrap().genes_mut()[0] {
        *data = value;
    }
    genome
}

#[test]
fn independently_built_genomes_share_identity() {
    // Different seeds on purpose: identity must not depend on RNG state
    let a = single_flag_genome(1, true);
    let b = single_flag_genome(999, true);
    assert_eq!(a.id(), b.id());
}

#[test]
fn single_value_change_changes_identity() {
    let a = single_flag_genome(1, true);
    let b = single_flag_genome(1, false);
    assert_ne!(a.id(), b.id());
}

#[test]
fn chromosome_order_is_part_of_identity() {
    // Degenerate bounds pin the gene values, so the two genomes differ
    // only in insertion order
    let pinned = |v: f64| ChromosomeSpec {
        n_genes: Some(1),
        min: Some(v),
        max: Some(v),
        ..ChromosomeSpec::default()
    };

    let mut rng = StdRng::seed_from_u64(5);
    let mut forward = Genome::new();
    forward.add_chromosome("a", EncodingType::Integer, pinned(7.0), &mut rng);
    forward.add_chromosome("b", EncodingType::Integer, pinned(9.0), &mut rng);

    let mut reversed = Genome::new();
    reversed.add_chromosome("b", EncodingType::Integer, pinned(9.0), &mut rng);
    reversed.add_chromosome("a", EncodingType::Integer, pinned(7.0), &mut rng);

    assert_ne!(forward.id(), reversed.id());
}

#[test]
fn fitness_does_not_affect_identity() {
    let mut genome = single_flag_genome(1, true);
    let before = genome.id();
    genome.set_fitness(55.5);
    assert_eq!(genome.id(), before);
}

#[test]
fn snapshot_carries_id_values_and_fitness() {
    let mut genome = single_flag_genome(1, true);
    genome.set_fitness(3.25);

    let snapshot = genome.snapshot();
    assert_eq!(snapshot.id, genome.id());
    assert_eq!(snapshot.fitness, Some(3.25));

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"fitness\":3.25"));
    assert!(json.contains("\"x\":[true]"));
}
