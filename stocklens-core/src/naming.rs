//! Base-name derivation for variant grouping.
//!
//! A product name such as `"Running Shoe - Red / 42"` embeds a variant
//! qualifier. The rules below strip such qualifiers, in priority order, to
//! recover the shared base name (`"Running Shoe"`). This is a best-effort
//! heuristic over free text: base names that legitimately contain a spaced
//! separator (`"Salt / Pepper Mill"`) are split too. Unspaced hyphens
//! (`"Anti-Slip Mat"`) are left alone.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// One entry of the qualifier rule table
#[derive(Debug, Clone, Copy)]
pub struct StripRule {
    pub name: &'static str,
    pub pattern: &'static str,
    /// Keep applying while the rule still matches
    pub repeat: bool,
}

/// Qualifier strip rules, applied in this order
pub const VARIANT_QUALIFIER_RULES: &[StripRule] = &[
    StripRule {
        name: "separator",
        pattern: r"\s+[-–/]\s+.*$",
        repeat: false,
    },
    StripRule {
        name: "parenthetical",
        pattern: r"\s*\([^()]*\)\s*$",
        repeat: true,
    },
    StripRule {
        name: "size-or-color",
        pattern: r"(?i)[\s,]+(?:xxs|xs|s|m|l|xl|xxl|xxxl|2xl|3xl|\d+(?:[.,]\d+)?\s*(?:ml|l|g|kg|oz|lb|cm|mm|in|gb|tb)?|red|blue|green|black|white|gr[ae]y|yellow|orange|purple|pink|brown|navy|beige|silver|gold)$",
        repeat: true,
    },
];

struct CompiledRule {
    rule: StripRule,
    regex: Regex,
}

fn compiled_rules() -> &'static [CompiledRule] {
    static RULES: OnceLock<Vec<CompiledRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        VARIANT_QUALIFIER_RULES
            .iter()
            .filter_map(|rule| match Regex::new(rule.pattern) {
                Ok(regex) => Some(CompiledRule { rule: *rule, regex }),
                Err(err) => {
                    tracing::error!(rule = rule.name, error = %err, "invalid qualifier rule skipped");
                    None
                }
            })
            .collect()
    })
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key under which base names are compared: NFC, lowercase, collapsed whitespace
pub fn normalize_key(name: &str) -> String {
    let normalized: String = name.nfc().collect::<String>().to_lowercase();
    collapse_whitespace(&normalized)
}

/// Every intermediate result of the strip rules, longest first.
/// The first entry is the full (whitespace-collapsed) name, the last is the
/// derived base name. A step that would leave nothing is never taken.
pub fn candidate_base_names(name: &str) -> Vec<String> {
    let mut current = collapse_whitespace(name);
    let mut stages = vec![current.clone()];

    for compiled in compiled_rules() {
        loop {
            let next = collapse_whitespace(&compiled.regex.replace(&current, ""));
            if next.is_empty() || next == current {
                break;
            }
            current = next;
            stages.push(current.clone());

            if !compiled.rule.repeat {
                break;
            }
        }
    }

    stages
}

/// Derive the shared base name of a product name
pub fn derive_base_name(name: &str) -> String {
    candidate_base_names(name).pop().unwrap_or_default()
}
