//! Display catalog for the service's class taxonomy.
//!
//! The service owns the taxonomy and may add classes at any time, so the
//! catalog is a lookup with a fallback rather than an enum: unrecognized
//! names resolve to [`UNKNOWN_CLASS`].

use serde::Serialize;

/// Presentation details for one predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    /// Name as reported in `predicted_class_name`
    pub key: &'static str,
    pub display_name: &'static str,
    /// Whether the class indicates a weak generator
    pub vulnerable: bool,
    pub explanation: &'static str,
    pub improvement: &'static str,
}

pub const HEALTHY: &str = "Healthy";

/// Classes the client knows how to describe.
pub static KNOWN_CLASSES: &[ClassInfo] = &[
    ClassInfo {
        key: HEALTHY,
        display_name: "Healthy",
        vulnerable: false,
        explanation: "The generator shows good statistical properties with no obvious patterns that could lead to predictability.",
        improvement: "Statistically sound generators still need a correct implementation and deployment to stay secure in practice.",
    },
    ClassInfo {
        key: "Biased",
        display_name: "Biased",
        vulnerable: true,
        explanation: "Some values occur more often than others, which reduces the randomness of the stream.",
        improvement: "Find the source of the bias. Check that the entropy source is sound and that post-processing does not add structure; consider cryptographic whitening.",
    },
    ClassInfo {
        key: "Stuck_00",
        display_name: "Stuck at 0x00",
        vulnerable: true,
        explanation: "The stream is dominated by the byte 0x00, a critical failure of the generator.",
        improvement: "The generator hardware or software is likely malfunctioning. Replace or repair it before further use.",
    },
    ClassInfo {
        key: "Stuck_FF",
        display_name: "Stuck at 0xFF",
        vulnerable: true,
        explanation: "The stream is dominated by the byte 0xFF, a critical failure of the generator.",
        improvement: "The generator hardware or software is likely malfunctioning. Replace or repair it before further use.",
    },
    ClassInfo {
        key: "ReducedEntropy",
        display_name: "Reduced Entropy",
        vulnerable: true,
        explanation: "The stream carries less entropy than expected and is more predictable.",
        improvement: "Mix in more entropy sources such as hardware noise and timing jitter, or post-process with a cryptographic hash.",
    },
    ClassInfo {
        key: "Periodic",
        display_name: "Periodic",
        vulnerable: true,
        explanation: "The stream repeats itself after a fixed interval, making it predictable.",
        improvement: "This points to a short-period algorithm or a faulty hardware source. Use a generator with a much larger period or a CSPRNG.",
    },
    ClassInfo {
        key: "Correlated",
        display_name: "Correlated",
        vulnerable: true,
        explanation: "Values are correlated, so future output can be partially predicted from past output.",
        improvement: "Review the generation algorithm. Apply de-correlation or switch to a CSPRNG.",
    },
    ClassInfo {
        key: "LCG_Flawed",
        display_name: "LCG-like Flaw",
        vulnerable: true,
        explanation: "The stream matches a weak linear congruential generator, which is predictable once enough output is observed.",
        improvement: "Replace it with a cryptographically secure generator such as ChaCha20, or a hardware RNG.",
    },
];

/// Fallback for class names missing from [`KNOWN_CLASSES`].
pub static UNKNOWN_CLASS: ClassInfo = ClassInfo {
    key: "Unknown Class",
    display_name: "Unknown Flaw",
    vulnerable: true,
    explanation: "An unrecognized flaw type was detected. The generator may have unusual characteristics.",
    improvement: "Further investigation is recommended. Consult the generator documentation and run specialized tests.",
};

/// Presentation details for `name`, falling back to [`UNKNOWN_CLASS`].
pub fn lookup(name: &str) -> &'static ClassInfo {
    known()
        .find(|c| c.key == name)
        .unwrap_or(&UNKNOWN_CLASS)
}

pub fn is_known(name: &str) -> bool {
    known().any(|c| c.key == name)
}

/// Catalog entries in display order, excluding the unknown fallback.
pub fn known() -> impl Iterator<Item = &'static ClassInfo> {
    KNOWN_CLASSES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_class() {
        let info = lookup("Stuck_FF");
        assert_eq!(info.display_name, "Stuck at 0xFF");
        assert!(info.vulnerable);
    }

    #[test]
    fn test_only_healthy_is_not_vulnerable() {
        let safe: Vec<_> = KNOWN_CLASSES.iter().filter(|c| !c.vulnerable).collect();
        assert_eq!(safe.len(), 1);
        assert_eq!(safe[0].key, HEALTHY);
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        let info = lookup("Quantum_Weirdness");
        assert_eq!(info, &UNKNOWN_CLASS);
        assert!(info.vulnerable);
        assert!(!is_known("Quantum_Weirdness"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_known("Healthy"));
        assert!(!is_known("healthy"));
    }

    #[test]
    fn test_known_lists_catalog_in_order() {
        let keys: Vec<_> = known().map(|c| c.key).collect();
        assert_eq!(keys.first(), Some(&HEALTHY));
        assert_eq!(keys.len(), 8);
        assert!(keys.contains(&"LCG_Flawed"));
        assert!(known().all(|c| is_known(c.key)));
    }

    #[test]
    fn test_keys_unique() {
        let keys: HashSet<_> = KNOWN_CLASSES.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), KNOWN_CLASSES.len());
        assert!(!keys.contains(UNKNOWN_CLASS.key));
    }
}
