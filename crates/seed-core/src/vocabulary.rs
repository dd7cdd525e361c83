//! Fixed vocabularies records are drawn from.
//!
//! A [`Vocabulary`] is an immutable value handed to the generator. The
//! built-in defaults describe an office-supplies shop; a YAML file can
//! override any subset of the lists.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for vocabulary operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// Error reading vocabulary file
    #[error("Failed to read vocabulary file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A list the generator draws from is empty
    #[error("Vocabulary list '{0}' must not be empty")]
    Empty(&'static str),
}

/// A fixed user account sent to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl UserProfile {
    pub fn new(id: &str, username: &str, email: &str, full_name: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
        }
    }
}

/// Word lists and id pools used by the record generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vocabulary {
    /// Adjectives prefixed to product names
    pub adjectives: Vec<String>,

    /// Product nouns
    pub product_nouns: Vec<String>,

    /// Text appended to every product description
    pub description_suffix: String,

    /// User ids orders are assigned to
    pub user_ids: Vec<String>,

    /// Product ids orders reference
    pub product_ids: Vec<String>,

    /// Accounts sent to the registration endpoint
    pub users: Vec<UserProfile>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            adjectives: to_strings(DEFAULT_ADJECTIVES),
            product_nouns: to_strings(DEFAULT_PRODUCT_NOUNS),
            description_suffix: DEFAULT_DESCRIPTION_SUFFIX.to_string(),
            user_ids: (1..=10).map(|i| format!("user{i:03}")).collect(),
            product_ids: to_strings(DEFAULT_PRODUCT_IDS),
            users: DEFAULT_USERS
                .iter()
                .map(|(id, username, email, full_name)| {
                    UserProfile::new(id, username, email, full_name)
                })
                .collect(),
        }
    }
}

impl Vocabulary {
    /// Load a vocabulary from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a vocabulary from a YAML string. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary = serde_yaml::from_str(yaml)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Check that every list the generator draws from has at least one entry.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        if self.adjectives.is_empty() {
            return Err(VocabularyError::Empty("adjectives"));
        }
        if self.product_nouns.is_empty() {
            return Err(VocabularyError::Empty("product_nouns"));
        }
        if self.user_ids.is_empty() {
            return Err(VocabularyError::Empty("user_ids"));
        }
        if self.product_ids.is_empty() {
            return Err(VocabularyError::Empty("product_ids"));
        }
        Ok(())
    }

    /// Replace the user id pool orders draw from.
    pub fn with_user_ids(mut self, user_ids: Vec<String>) -> Self {
        self.user_ids = user_ids;
        self
    }

    /// Replace the product id pool orders draw from.
    pub fn with_product_ids(mut self, product_ids: Vec<String>) -> Self {
        self.product_ids = product_ids;
        self
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[rustfmt::skip]
const DEFAULT_ADJECTIVES: &[&str] = &[
    "Luxusní", "Ekonomický", "Ergonomický", "Moderní", "Klasický", "Barevný", "Praktický",
    "Skládací", "Multifunkční", "Elegantní",
];

#[rustfmt::skip]
const DEFAULT_PRODUCT_NOUNS: &[&str] = &[
    "Kancelářská židle", "Psací stůl", "Skříň", "Propisky", "Tužky", "Fixy",
    "Kancelářský papír", "Poznámkové bloky", "Sešity", "Pořadače", "Složky", "Šanony",
    "Počítač", "Monitor", "Klávesnice", "Myš", "Lampička", "Nástěnka", "Tabule", "Kalendář",
];

const DEFAULT_DESCRIPTION_SUFFIX: &str = "pro moderní kancelář";

#[rustfmt::skip]
const DEFAULT_PRODUCT_IDS: &[&str] = &[
    "prod-vzukvp808", "prod-r4hvsvl0e", "prod-sog4j2zd4", "prod-cl2wfjhmd",
    "prod-utc15sxhr", "prod-5ln6qwgz4", "prod-13a633cdd", "prod-2oghvr4r2",
    "prod-uxq0ffe0m", "prod-e8nefc67b", "prod-olv3b9cir", "prod-7tna9tdmr",
    "prod-frr3j7boh", "prod-xoxl9qerc", "prod-3vemd2rfl", "prod-yiiwjozaq",
    "prod-6f70xdmge", "prod-ehzrr29v4", "prod-tfwovxzit", "prod-1g783jdg4",
    "prod-rogjarnby", "prod-n3ocznynm", "prod-8u7zv6ugj", "prod-fuoigwbv8",
    "prod-xnapmpab9", "prod-mpx9g04wv", "prod-52n1tcddl", "prod-7eo253oi4",
    "prod-xiok201kl", "prod-debpmgn9m", "prod-cymhe9wlw", "prod-361831ht2",
    "prod-j95mf4n8n", "prod-doqoq5mnz", "prod-vlmutxpxt", "prod-aae8wm797",
    "prod-d3k8fky28", "prod-0sgxq13hp", "prod-xj5eku2ol", "prod-zhwqegfoh",
    "prod-glb1xm702", "prod-l0c5rvx20", "prod-1l6ub4qmj", "prod-is5a5cjex",
    "prod-ltlorvu8t", "prod-wua5bhoe6", "prod-4ml509ho4", "prod-96upbh961",
    "prod-cimvk30ul", "prod-2dwpdt27e", "prod-c9pzr1pzp", "prod-afnq9l05f",
    "prod-uviyg8x84", "prod-e7rqvou9a", "prod-1wbc28trs", "prod-s4owyquro",
    "prod-yu6endal8", "prod-x0fkq6ckj", "prod-l6dm4lray", "prod-oakzchdwi",
    "prod-qq3rtmlqr", "prod-uz4ffe9fo", "prod-a0vct54v6", "prod-cwca4h4cf",
    "prod-lsfmowbkq", "prod-b2rxmvdsn", "prod-0958yjjin", "prod-13rgci68k",
    "prod-lx425du89", "prod-m7befplps", "prod-qoqod2njv", "prod-fn34v0ht5",
    "prod-bo26jg4bi", "prod-axdoc729q", "prod-rwv7i2svm", "prod-d4pawprs3",
    "prod-a61482wjg", "prod-bi0sho841", "prod-eumrz3uph", "prod-eubvb59bw",
    "prod-768qbwukf", "prod-fhwg3radk", "prod-i0ru6399x", "prod-zyj491rri",
    "prod-wibbmqqo3", "prod-s3xujyff1", "prod-d77k81zcl", "prod-aq8hl3n23",
    "prod-n21ts0tiq", "prod-qmjc8dy4q", "prod-ibr4oqbv5", "prod-10dus2c64",
    "prod-hqvz13bp7", "prod-yop4ynnw7", "prod-vuwpx0ly0", "prod-ykxajwhq5",
    "prod-yccrwxpuh", "prod-vapt2is4z", "prod-ajvirqhw2", "prod-m1g0i41u7",
];

const DEFAULT_USERS: &[(&str, &str, &str, &str)] = &[
    ("user001", "jannovak", "jan.novak@example.com", "Jan Novák"),
    ("user002", "petrsvoboda", "petr.svoboda@example.com", "Petr Svoboda"),
    ("user003", "marketakovacova", "marketa.kovacova@example.com", "Markéta Kovačová"),
    ("user004", "tomashorky", "tomas.horky@example.com", "Tomáš Horký"),
    ("user005", "evakralova", "eva.kralova@example.com", "Eva Králová"),
    ("user006", "martinanemcova", "martina.nemcova@example.com", "Martina Němcová"),
    ("user007", "lukasnovotny", "lukas.novotny@example.com", "Lukáš Novotný"),
    ("user008", "janaprochazkova", "jana.prochazkova@example.com", "Jana Procházková"),
    ("user009", "ondrejkolar", "ondrej.kolar@example.com", "Ondřej Kolář"),
    ("user010", "katerinasimkova", "katerina.simkova@example.com", "Kateřina Šimková"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_default_vocabulary_sizes() {
        let vocabulary = Vocabulary::default();

        assert_eq!(vocabulary.adjectives.len(), 10);
        assert_eq!(vocabulary.product_nouns.len(), 20);
        assert_eq!(vocabulary.user_ids.len(), 10);
        assert_eq!(vocabulary.product_ids.len(), 100);
        assert_eq!(vocabulary.users.len(), 10);
        assert!(vocabulary.validate().is_ok());
    }

    #[test]
    fn test_default_ids_are_unique() {
        let vocabulary = Vocabulary::default();

        let product_ids: HashSet<_> = vocabulary.product_ids.iter().collect();
        assert_eq!(product_ids.len(), vocabulary.product_ids.len());
        assert!(vocabulary
            .product_ids
            .iter()
            .all(|id| id.starts_with("prod-") && id.len() == 14));

        assert_eq!(vocabulary.user_ids.first().unwrap(), "user001");
        assert_eq!(vocabulary.user_ids.last().unwrap(), "user010");
    }

    #[test]
    fn test_users_match_user_ids() {
        let vocabulary = Vocabulary::default();
        let profile_ids: Vec<&String> = vocabulary.users.iter().map(|u| &u.id).collect();
        let pool: Vec<&String> = vocabulary.user_ids.iter().collect();
        assert_eq!(profile_ids, pool);
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let yaml = r#"
adjectives:
  - Red
  - Blue
description_suffix: "for the office"
"#;
        let vocabulary = Vocabulary::from_yaml(yaml).unwrap();

        assert_eq!(vocabulary.adjectives, vec!["Red", "Blue"]);
        assert_eq!(vocabulary.description_suffix, "for the office");
        // Untouched keys keep their defaults
        assert_eq!(vocabulary.product_nouns.len(), 20);
        assert_eq!(vocabulary.product_ids.len(), 100);
    }

    #[test]
    fn test_from_yaml_rejects_empty_pool() {
        let result = Vocabulary::from_yaml("product_ids: []\n");
        assert!(matches!(result, Err(VocabularyError::Empty("product_ids"))));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_key() {
        let result = Vocabulary::from_yaml("colours: [red]\n");
        assert!(matches!(result, Err(VocabularyError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user_ids: [alice, bob]").unwrap();

        let vocabulary = Vocabulary::from_file(file.path()).unwrap();
        assert_eq!(vocabulary.user_ids, vec!["alice", "bob"]);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Vocabulary::from_file("/nonexistent/vocabulary.yaml");
        assert!(matches!(result, Err(VocabularyError::IoError(_))));
    }

    #[test]
    fn test_with_pools() {
        let vocabulary = Vocabulary::default()
            .with_user_ids(vec!["u1".to_string()])
            .with_product_ids(vec!["p1".to_string(), "p2".to_string()]);

        assert_eq!(vocabulary.user_ids, vec!["u1"]);
        assert_eq!(vocabulary.product_ids, vec!["p1", "p2"]);
    }
}
