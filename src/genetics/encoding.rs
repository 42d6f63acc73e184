use crate::error::{EvogenError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters used for string genes when no charset is supplied
pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Encoding variant shared by a chromosome and all of its genes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingType {
    Boolean,
    Integer,
    Float,
    String,
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingType::Boolean => write!(f, "BOOLEAN"),
            EncodingType::Integer => write!(f, "INTEGER"),
            EncodingType::Float => write!(f, "FLOAT"),
            EncodingType::String => write!(f, "STRING"),
        }
    }
}

impl std::str::FromStr for EncodingType {
    type Err = EvogenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BOOLEAN" => Ok(EncodingType::Boolean),
            "INTEGER" => Ok(EncodingType::Integer),
            "FLOAT" => Ok(EncodingType::Float),
            "STRING" => Ok(EncodingType::String),
            other => Err(EvogenError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// Raw gene value as surfaced by aggregation queries and snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(EvogenError::type_mismatch("bool", other.kind())),
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(EvogenError::type_mismatch("integer", other.kind())),
        }
    }

    /// Numeric view: accepts both integer and float genes
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Integer(i) => Ok(*i as f64),
            Value::Float(f) => Ok(*f),
            other => Err(EvogenError::type_mismatch("number", other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(EvogenError::type_mismatch("string", other.kind())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Atomic typed value holder.
///
/// Each variant carries its own randomization context: numeric genes hold
/// optional inclusive bounds, string genes hold the charset new characters
/// are drawn from. Bounds of `None` mean unbounded; operators that require
/// both bounds (`boundary`, the bounds-respecting `gaussian` path) skip the
/// gene when either is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gene {
    Boolean {
        data: bool,
    },
    Integer {
        data: i64,
        min: Option<i64>,
        max: Option<i64>,
    },
    Float {
        data: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    Str {
        data: String,
        charset: String,
    },
}

impl Gene {
    /// Construct a gene for `encoding`, propagating shared chromosome
    /// parameters where given and falling back to the variant defaults
    /// (numeric bounds `[0, 100]`, alphanumeric charset).
    pub fn new(
        encoding: EncodingType,
        min: Option<f64>,
        max: Option<f64>,
        charset: Option<&str>,
    ) -> Self {
        match encoding {
            EncodingType::Boolean => Gene::Boolean { data: false },
            EncodingType::Integer => Gene::Integer {
                data: 0,
                min: Some(min.map(|m| m as i64).unwrap_or(0)),
                max: Some(max.map(|m| m as i64).unwrap_or(100)),
            },
            EncodingType::Float => Gene::Float {
                data: 0.0,
                min: Some(min.unwrap_or(0.0)),
                max: Some(max.unwrap_or(100.0)),
            },
            EncodingType::String => Gene::Str {
                data: String::new(),
                charset: charset.unwrap_or(DEFAULT_CHARSET).to_string(),
            },
        }
    }

    pub fn encoding_type(&self) -> EncodingType {
        match self {
            Gene::Boolean { .. } => EncodingType::Boolean,
            Gene::Integer { .. } => EncodingType::Integer,
            Gene::Float { .. } => EncodingType::Float,
            Gene::Str { .. } => EncodingType::String,
        }
    }

    pub fn value(&self) -> Value {
        match self {
            Gene::Boolean { data } => Value::Bool(*data),
            Gene::Integer { data, .. } => Value::Integer(*data),
            Gene::Float { data, .. } => Value::Float(*data),
            Gene::Str { data, .. } => Value::Text(data.clone()),
        }
    }

    /// Assign a context-appropriate random value: uniform true/false,
    /// uniform numeric in `[min, max]`, or a random string of length 1-10
    /// drawn from the charset. Always succeeds.
    pub fn set_random_data<R: Rng>(&mut self, rng: &mut R) {
        match self {
            Gene::Boolean { data } => *data = rng.gen(),
            Gene::Integer { data, min, max } => {
                let lo = min.unwrap_or(0);
                let hi = max.unwrap_or(100);
                *data = rng.gen_range(lo..=hi);
            }
            Gene::Float { data, min, max } => {
                let lo = min.unwrap_or(0.0);
                let hi = max.unwrap_or(100.0);
                *data = rng.gen_range(lo..=hi);
            }
            Gene::Str { data, charset } => {
                let len = rng.gen_range(1..=10);
                *data = random_chars(charset, len, rng);
            }
        }
    }
}

/// Draw `count` characters uniformly from `charset`
pub(crate) fn random_chars<R: Rng>(charset: &str, count: usize, rng: &mut R) -> String {
    let pool: Vec<char> = charset.chars().collect();
    if pool.is_empty() {
        return String::new();
    }
    (0..count).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_gene_matches_encoding() {
        let gene = Gene::new(EncodingType::Integer, Some(5.0), Some(10.0), None);
        assert_eq!(gene.encoding_type(), EncodingType::Integer);
        match gene {
            Gene::Integer { min, max, .. } => {
                assert_eq!(min, Some(5));
                assert_eq!(max, Some(10));
            }
            _ => panic!("expected integer gene"),
        }
    }

    #[test]
    fn test_random_integer_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut gene = Gene::new(EncodingType::Integer, Some(-3.0), Some(3.0), None);
        for _ in 0..200 {
            gene.set_random_data(&mut rng);
            let v = gene.value().as_i64().unwrap();
            assert!((-3..=3).contains(&v));
        }
    }

    #[test]
    fn test_random_string_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut gene = Gene::new(EncodingType::String, None, None, Some("ab"));
        for _ in 0..100 {
            gene.set_random_data(&mut rng);
            let s = gene.value();
            let s = s.as_str().unwrap().to_string();
            assert!((1..=10).contains(&s.len()));
            assert!(s.chars().all(|c| c == 'a' || c == 'b'));
        }
    }

    #[test]
    fn test_encoding_type_from_str() {
        assert_eq!("integer".parse::<EncodingType>().unwrap(), EncodingType::Integer);
        assert_eq!("STRING".parse::<EncodingType>().unwrap(), EncodingType::String);
        assert!(matches!(
            "complex".parse::<EncodingType>(),
            Err(EvogenError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_value_accessor_mismatch() {
        let gene = Gene::Boolean { data: true };
        assert!(gene.value().as_str().is_err());
        assert!(gene.value().as_bool().is_ok());
    }
}
