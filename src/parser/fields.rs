use std::sync::LazyLock;

use regex::Regex;

use super::blocks::RecordType;

/// Internal delimiter that replaces the doubly nested continuation boundary
/// when a multi-value field is folded onto one line. Field values are
/// free-form descriptive text; a literal '|' inside one is not handled.
pub const LIST_SENTINEL: &str = "|";

static NESTED_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\t\t").unwrap());
static FIELD_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\t([^\n\t].*)").unwrap());

/// Flatten a block's body into ordered `(key, value)` entries.
///
/// Doubly nested continuation lines are first folded into the preceding
/// field with the sentinel, then every singly indented line is split on its
/// first colon. Lines without a colon are continuation artifacts and are
/// dropped; values keep any colons of their own ("Bus Address: 0000:00:00.0").
pub fn normalize_block(block: &str) -> Vec<(String, String)> {
    let flat = NESTED_BOUNDARY_RE.replace_all(block, LIST_SENTINEL);
    FIELD_LINE_RE
        .captures_iter(&flat)
        .filter_map(|caps| {
            let line = caps.get(1)?.as_str();
            let (key, value) = line.split_once(':')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Where a recognized key lands on a record: a scalar assignment or a
/// sentinel-delimited list.
pub enum FieldSlot<R> {
    Scalar(fn(&mut R) -> &mut String),
    List(fn(&mut R) -> &mut Vec<String>),
}

/// Ordered key-label → slot table for one record type. Static configuration
/// data, never mutated at runtime.
pub type Schema<R> = &'static [(&'static str, FieldSlot<R>)];

/// A typed record buildable from one classified block.
pub trait Record: Default + 'static {
    const KIND: RecordType;
    const SCHEMA: Schema<Self>;
}

/// Build one record from one block against the type's schema.
///
/// Total and side-effect-free: unrecognized keys are silently dropped, a
/// repeated key overwrites (last occurrence wins), and a block yielding no
/// recognized keys produces an all-default record.
pub fn map_record<R: Record>(block: &str) -> R {
    let mut record = R::default();
    for (key, value) in normalize_block(block) {
        let Some((_, slot)) = R::SCHEMA.iter().find(|(label, _)| *label == key) else {
            continue;
        };
        match slot {
            FieldSlot::Scalar(field) => *field(&mut record) = value,
            FieldSlot::List(field) => *field(&mut record) = split_list(&value),
        }
    }
    record
}

/// Split a sentinel-joined list value into trimmed items.
///
/// The first cell comes from the label's own line — empty for a field like
/// "Characteristics:", a redundant count for "Installable Languages: 7" —
/// and is dropped whenever at least one continuation was joined, so the
/// label-line echo never appears as element zero.
pub fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = value
        .split(LIST_SENTINEL)
        .map(|item| item.trim().to_string())
        .collect();
    if items.len() > 1 {
        items.remove(0);
    }
    items.retain(|item| !item.is_empty());
    items
}

// ── Tests ──
