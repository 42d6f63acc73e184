use crate::config::MutationChances;
use crate::error::{EvogenError, Result};
use crate::genetics::encoding::{EncodingType, Gene, Value};
use crate::genetics::mutation::{self, fires};
use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hard cap on gene-count growth; duplication and split refuse to start
/// from a chromosome at or past this many genes.
pub const MAX_GENES: usize = 1000;

/// Shared parameters applied to every gene a chromosome creates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChromosomeSpec {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub charset: Option<String>,
    /// `Some(n)` with `n > 0` makes the chromosome fixed-length:
    /// structural operators other than swap become no-ops
    pub n_genes: Option<usize>,
}

/// Named, ordered sequence of same-typed genes.
///
/// Genes are created at construction time (`n_genes` of them, or a single
/// starter gene for variable-length chromosomes) and mutated in place for
/// the rest of the genome's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chromosome {
    id: String,
    encoding_type: EncodingType,
    n_genes: Option<usize>,
    genes: Vec<Gene>,
    min: Option<f64>,
    max: Option<f64>,
    charset: Option<String>,
}

impl Chromosome {
    /// Construct a chromosome and immediately initialize its genes with
    /// random data.
    pub fn new<R: Rng>(
        id: impl Into<String>,
        encoding_type: EncodingType,
        spec: ChromosomeSpec,
        rng: &mut R,
    ) -> Self {
        let mut chromosome = Self {
            id: id.into(),
            encoding_type,
            n_genes: spec.n_genes,
            genes: Vec::new(),
            min: spec.min,
            max: spec.max,
            charset: spec.charset,
        };
        chromosome.init_genes(rng);
        chromosome
    }

    fn init_genes<R: Rng>(&mut self, rng: &mut R) {
        let count = self.n_genes.unwrap_or(1).max(1);
        for _ in 0..count {
            let mut gene = self.fresh_gene();
            gene.set_random_data(rng);
            self.genes.push(gene);
        }
    }

    /// New gene matching this chromosome's encoding and shared parameters
    fn fresh_gene(&self) -> Gene {
        Gene::new(self.encoding_type, self.min, self.max, self.charset.as_deref())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn encoding_type(&self) -> EncodingType {
        self.encoding_type
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Fixed-length chromosomes keep their gene count for life
    pub fn is_fixed_length(&self) -> bool {
        matches!(self.n_genes, Some(n) if n > 0)
    }

    /// Append a gene, which must match this chromosome's encoding
    pub fn add_gene(&mut self, gene: Gene) -> Result<()> {
        if gene.encoding_type() != self.encoding_type {
            return Err(EvogenError::type_mismatch(
                self.encoding_type.to_string(),
                gene.encoding_type().to_string(),
            ));
        }
        self.genes.push(gene);
        Ok(())
    }

    // --- aggregation queries -------------------------------------------

    /// Value of the first gene (the scalar view of a one-gene chromosome)
    pub fn value(&self) -> Result<Value> {
        self.genes
            .first()
            .map(Gene::value)
            .ok_or_else(|| EvogenError::Configuration(format!("chromosome '{}' has no genes", self.id)))
    }

    /// All gene values in order
    pub fn list(&self) -> Vec<Value> {
        self.genes.iter().map(Gene::value).collect()
    }

    fn numeric_values(&self, query: &str) -> Result<Vec<f64>> {
        match self.encoding_type {
            EncodingType::Integer | EncodingType::Float => self
                .genes
                .iter()
                .map(|g| g.value().as_f64())
                .collect(),
            other => Err(EvogenError::type_mismatch(
                format!("INTEGER or FLOAT for {}", query),
                other.to_string(),
            )),
        }
    }

    pub fn average(&self) -> Result<f64> {
        let values = self.numeric_values("average")?;
        if values.is_empty() {
            return Ok(0.0);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    pub fn lowest(&self) -> Result<f64> {
        let values = self.numeric_values("lowest")?;
        Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
    }

    pub fn highest(&self) -> Result<f64> {
        let values = self.numeric_values("highest")?;
        Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Concatenation of all string gene values, in order
    pub fn concatenated(&self) -> Result<String> {
        match self.encoding_type {
            EncodingType::String => {
                let mut out = String::new();
                for gene in &self.genes {
                    out.push_str(gene.value().as_str()?);
                }
                Ok(out)
            }
            other => Err(EvogenError::type_mismatch(
                "STRING for concatenated",
                other.to_string(),
            )),
        }
    }

    // --- structural mutation operators ---------------------------------

    /// Clone one uniformly chosen gene (by value, never by reference) and
    /// insert the copy immediately before the original. Variable-length
    /// only, and only below the gene-count cap.
    pub fn duplication<R: Rng>(&mut self, rng: &mut R) {
        if self.is_fixed_length() || self.genes.is_empty() || self.genes.len() >= MAX_GENES {
            return;
        }
        let idx = rng.gen_range(0..self.genes.len());
        let clone = self.genes[idx].clone();
        self.genes.insert(idx, clone);
    }

    /// Remove one uniformly chosen gene; keeps at least one gene alive
    pub fn deletion<R: Rng>(&mut self, rng: &mut R) {
        if self.is_fixed_length() || self.genes.len() <= 1 {
            return;
        }
        let idx = rng.gen_range(0..self.genes.len());
        self.genes.remove(idx);
    }

    /// Splice one freshly randomized gene in at a uniformly chosen position
    pub fn insertion<R: Rng>(&mut self, rng: &mut R) {
        if self.is_fixed_length() {
            return;
        }
        let mut gene = self.fresh_gene();
        gene.set_random_data(rng);
        let idx = rng.gen_range(0..=self.genes.len());
        self.genes.insert(idx, gene);
    }

    /// Exchange two uniformly chosen gene positions (which may coincide).
    /// Legal for fixed-length chromosomes too: it never changes the count.
    pub fn swap<R: Rng>(&mut self, rng: &mut R) {
        if self.genes.len() < 2 {
            return;
        }
        let a = rng.gen_range(0..self.genes.len());
        let b = rng.gen_range(0..self.genes.len());
        self.genes.swap(a, b);
    }

    /// Split one uniformly chosen string gene at an internal index: the
    /// prefix stays in place, the suffix becomes a new gene right after it.
    /// STRING chromosomes only; no-op when the chosen gene is too short.
    pub fn split<R: Rng>(&mut self, rng: &mut R) {
        if self.is_fixed_length()
            || self.encoding_type != EncodingType::String
            || self.genes.is_empty()
            || self.genes.len() >= MAX_GENES
        {
            return;
        }
        let idx = rng.gen_range(0..self.genes.len());
        let (suffix, charset) = match &mut self.genes[idx] {
            Gene::Str { data, charset } => {
                let chars: Vec<char> = data.chars().collect();
                if chars.len() < 2 {
                    return;
                }
                let cut = rng.gen_range(1..chars.len());
                let suffix: String = chars[cut..].iter().collect();
                *data = chars[..cut].iter().collect();
                (suffix, charset.clone())
            }
            _ => return,
        };
        self.genes.insert(
            idx + 1,
            Gene::Str {
                data: suffix,
                charset,
            },
        );
    }

    /// Concatenate gene `i`'s value with gene `i+1`'s and drop `i+1`.
    /// STRING chromosomes only; requires at least two genes.
    pub fn merge<R: Rng>(&mut self, rng: &mut R) {
        if self.is_fixed_length()
            || self.encoding_type != EncodingType::String
            || self.genes.len() < 2
        {
            return;
        }
        let idx = rng.gen_range(0..self.genes.len() - 1);
        if let Gene::Str { data: next, .. } = self.genes[idx + 1].clone() {
            if let Gene::Str { data, .. } = &mut self.genes[idx] {
                data.push_str(&next);
            }
            self.genes.remove(idx + 1);
        }
    }

    // --- mutation passes -----------------------------------------------

    /// One chance-gated structural pass. Operator order (fixed):
    /// duplication, deletion, insertion, swap, split, merge.
    pub fn mutate_structure<R: Rng>(
        &mut self,
        chances: &MutationChances,
        multiplier: f64,
        rng: &mut R,
    ) {
        if fires(chances.duplication, multiplier, rng) {
            trace!("chromosome '{}': duplication", self.id);
            self.duplication(rng);
        }
        if fires(chances.deletion, multiplier, rng) {
            trace!("chromosome '{}': deletion", self.id);
            self.deletion(rng);
        }
        if fires(chances.insertion, multiplier, rng) {
            trace!("chromosome '{}': insertion", self.id);
            self.insertion(rng);
        }
        if fires(chances.swap, multiplier, rng) {
            trace!("chromosome '{}': swap", self.id);
            self.swap(rng);
        }
        if fires(chances.split, multiplier, rng) {
            trace!("chromosome '{}': split", self.id);
            self.split(rng);
        }
        if fires(chances.merge, multiplier, rng) {
            trace!("chromosome '{}': merge", self.id);
            self.merge(rng);
        }
    }

    /// One chance-gated gene-level pass over every gene
    pub fn mutate_genes<R: Rng>(
        &mut self,
        chances: &MutationChances,
        multiplier: f64,
        rng: &mut R,
    ) {
        for gene in &mut self.genes {
            mutation::mutate_gene(gene, chances, multiplier, rng);
        }
    }

    /// Full pass: structure first, then every gene
    pub fn mutate<R: Rng>(&mut self, chances: &MutationChances, multiplier: f64, rng: &mut R) {
        self.mutate_structure(chances, multiplier, rng);
        self.mutate_genes(chances, multiplier, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn integer_chromosome(rng: &mut StdRng, n_genes: Option<usize>) -> Chromosome {
        Chromosome::new(
            "c",
            EncodingType::Integer,
            ChromosomeSpec {
                min: Some(0.0),
                max: Some(100.0),
                n_genes,
                ..ChromosomeSpec::default()
            },
            rng,
        )
    }

    #[test]
    fn test_init_genes_fixed_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let chromosome = integer_chromosome(&mut rng, Some(5));
        assert_eq!(chromosome.len(), 5);
        assert!(chromosome.is_fixed_length());
    }

    #[test]
    fn test_init_genes_variable_starts_with_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let chromosome = integer_chromosome(&mut rng, None);
        assert_eq!(chromosome.len(), 1);
        assert!(!chromosome.is_fixed_length());
    }

    #[test]
    fn test_add_gene_type_check() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut chromosome = integer_chromosome(&mut rng, None);
        let wrong = Gene::Boolean { data: true };
        assert!(matches!(
            chromosome.add_gene(wrong),
            Err(EvogenError::TypeMismatch { .. })
        ));
        assert!(chromosome
            .add_gene(Gene::Integer {
                data: 7,
                min: Some(0),
                max: Some(100)
            })
            .is_ok());
    }

    #[test]
    fn test_numeric_aggregations() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut chromosome = integer_chromosome(&mut rng, None);
        chromosome.genes.clear();
        for v in [1, 2, 3] {
            chromosome
                .add_gene(Gene::Integer {
                    data: v,
                    min: Some(0),
                    max: Some(100),
                })
                .unwrap();
        }
        assert_eq!(chromosome.average().unwrap(), 2.0);
        assert_eq!(chromosome.lowest().unwrap(), 1.0);
        assert_eq!(chromosome.highest().unwrap(), 3.0);
    }

    #[test]
    fn test_average_on_string_is_type_mismatch() {
        let mut rng = StdRng::seed_from_u64(2);
        let chromosome = Chromosome::new(
            "s",
            EncodingType::String,
            ChromosomeSpec::default(),
            &mut rng,
        );
        assert!(matches!(
            chromosome.average(),
            Err(EvogenError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_concatenated() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut chromosome = Chromosome::new(
            "s",
            EncodingType::String,
            ChromosomeSpec::default(),
            &mut rng,
        );
        chromosome.genes.clear();
        for part in ["foo", "bar"] {
            chromosome
                .add_gene(Gene::Str {
                    data: part.to_string(),
                    charset: "abc".to_string(),
                })
                .unwrap();
        }
        assert_eq!(chromosome.concatenated().unwrap(), "foobar");
    }

    #[test]
    fn test_fixed_length_structure_is_invariant() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut chromosome = integer_chromosome(&mut rng, Some(4));
        for _ in 0..200 {
            chromosome.duplication(&mut rng);
            chromosome.deletion(&mut rng);
            chromosome.insertion(&mut rng);
            chromosome.split(&mut rng);
            chromosome.merge(&mut rng);
            assert_eq!(chromosome.len(), 4);
        }
    }

    #[test]
    fn test_swap_allowed_on_fixed_length() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut chromosome = integer_chromosome(&mut rng, Some(4));
        let before: Vec<_> = chromosome.list();
        chromosome.swap(&mut rng);
        assert_eq!(chromosome.len(), 4);
        let mut after = chromosome.list();
        after.sort_by_key(|v| v.as_i64().unwrap());
        let mut sorted_before = before;
        sorted_before.sort_by_key(|v| v.as_i64().unwrap());
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn test_duplication_clone_is_deep() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut chromosome = integer_chromosome(&mut rng, None);
        chromosome.duplication(&mut rng);
        assert_eq!(chromosome.len(), 2);
        assert_eq!(chromosome.genes[0], chromosome.genes[1]);
        // Mutating one twin must leave the other untouched
        if let Gene::Integer { data, .. } = &mut chromosome.genes[0] {
            *data = (*data + 1) % 100;
        }
        assert_ne!(chromosome.genes[0], chromosome.genes[1]);
    }

    #[test]
    fn test_deletion_keeps_last_gene() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut chromosome = integer_chromosome(&mut rng, None);
        for _ in 0..10 {
            chromosome.deletion(&mut rng);
        }
        assert_eq!(chromosome.len(), 1);
    }

    #[test]
    fn test_insertion_propagates_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut chromosome = Chromosome::new(
            "c",
            EncodingType::Integer,
            ChromosomeSpec {
                min: Some(10.0),
                max: Some(20.0),
                ..ChromosomeSpec::default()
            },
            &mut rng,
        );
        for _ in 0..50 {
            chromosome.insertion(&mut rng);
        }
        for gene in chromosome.genes() {
            let v = gene.value().as_i64().unwrap();
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_split_and_merge_roundtrip_content() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut chromosome = Chromosome::new(
            "s",
            EncodingType::String,
            ChromosomeSpec::default(),
            &mut rng,
        );
        chromosome.genes.clear();
        chromosome
            .add_gene(Gene::Str {
                data: "abcdef".to_string(),
                charset: "abcdef".to_string(),
            })
            .unwrap();

        chromosome.split(&mut rng);
        assert_eq!(chromosome.len(), 2);
        assert_eq!(chromosome.concatenated().unwrap(), "abcdef");

        chromosome.merge(&mut rng);
        assert_eq!(chromosome.len(), 1);
        assert_eq!(chromosome.concatenated().unwrap(), "abcdef");
    }

    #[test]
    fn test_split_on_integer_is_noop() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut chromosome = integer_chromosome(&mut rng, None);
        chromosome.split(&mut rng);
        assert_eq!(chromosome.len(), 1);
    }

    #[test]
    fn test_structure_pass_zero_chances_inert() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut chromosome = integer_chromosome(&mut rng, None);
        let before = chromosome.list();
        for _ in 0..50 {
            chromosome.mutate_structure(&MutationChances::none(), 1.0, &mut rng);
        }
        assert_eq!(chromosome.list(), before);
    }
}
