//! Combinatorial utterance expansion
//!
//! Substitutes slot templates with every declared slot value and renders
//! the Cartesian product as entity-span-tagged phrases. This is the only
//! combinatorially expensive step in the pipeline: cost is the product of
//! per-slot cardinalities per template.
//!
//! The generic number slot type is replaced with a fixed placeholder
//! digit and never yields an entity span.

use indexmap::IndexMap;
use intentml_core::config::GenerationConfig;
use intentml_core::{Slot, SlotDefinition};

use crate::template::{self, Segment, TemplateError};

/// A slot occurrence inside an expanded phrase; `[start_pos, end_pos)`
/// bounds the substituted value in character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// First character of the substituted value
    pub start_pos: usize,
    /// One past the last character of the substituted value
    pub end_pos: usize,
    /// Entity (slot type) name
    pub entity: String,
}

/// One member of the expanded product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedUtterance {
    /// Rendered phrase
    pub text: String,
    /// Spans for every substituted slot value, in order of appearance
    pub entities: Vec<EntitySpan>,
}

/// A candidate substitution for one placeholder
#[derive(Debug, Clone)]
struct Candidate {
    /// Substituted text
    value: String,
    /// Entity name for the span; `None` suppresses the span (number type)
    entity: Option<String>,
}

/// Expand one template over the full cross product of its placeholders'
/// slot values.
///
/// `bindings` are the owning intent's slot declarations; `slots` is the
/// value-set lookup by slot type name. A template with zero placeholders
/// yields exactly one result. A placeholder whose slot type has no values
/// yields an empty product.
///
/// # Errors
///
/// Returns `TemplateError` when the template does not parse.
pub fn expand(
    utterance: &str,
    bindings: &[SlotDefinition],
    slots: &IndexMap<String, &Slot>,
    config: &GenerationConfig,
) -> Result<Vec<ExpandedUtterance>, TemplateError> {
    let segments = template::parse(utterance)?;

    // Candidate lists for the variable segments, in template order.
    let candidate_lists: Vec<Vec<Candidate>> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Literal(_) => None,
            Segment::Variable(name) => Some(candidates_for(name, bindings, slots, config)),
        })
        .collect();

    let mut results = Vec::new();
    // Odometer over per-placeholder candidate indices; an empty candidate
    // list anywhere empties the whole product.
    let mut indices = vec![0usize; candidate_lists.len()];
    if candidate_lists.iter().any(Vec::is_empty) {
        return Ok(results);
    }

    loop {
        results.push(render(&segments, &candidate_lists, &indices));

        // Advance the odometer.
        let mut position = indices.len();
        loop {
            if position == 0 {
                return Ok(results);
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < candidate_lists[position].len() {
                break;
            }
            indices[position] = 0;
        }
    }
}

fn candidates_for(
    variable: &str,
    bindings: &[SlotDefinition],
    slots: &IndexMap<String, &Slot>,
    config: &GenerationConfig,
) -> Vec<Candidate> {
    let Some(binding) = bindings.iter().find(|slot| slot.name == variable) else {
        return Vec::new();
    };
    if binding.slot_type == config.number_slot_type {
        return vec![Candidate {
            value: config.number_placeholder.clone(),
            entity: None,
        }];
    }
    slots
        .get(&binding.slot_type)
        .map(|slot| {
            slot.values
                .iter()
                .map(|slot_value| Candidate {
                    value: slot_value.value.clone(),
                    entity: Some(binding.slot_type.clone()),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn render(
    segments: &[Segment],
    candidate_lists: &[Vec<Candidate>],
    indices: &[usize],
) -> ExpandedUtterance {
    let mut text = String::new();
    let mut position = 0usize;
    let mut entities = Vec::new();
    let mut placeholder = 0usize;

    for segment in segments {
        match segment {
            Segment::Literal(literal) => {
                text.push_str(literal);
                position += literal.chars().count();
            }
            Segment::Variable(_) => {
                let candidate = &candidate_lists[placeholder][indices[placeholder]];
                placeholder += 1;
                let length = candidate.value.chars().count();
                text.push_str(&candidate.value);
                if let Some(entity) = &candidate.entity {
                    entities.push(EntitySpan {
                        start_pos: position,
                        end_pos: position + length,
                        entity: entity.clone(),
                    });
                }
                position += length;
            }
        }
    }

    ExpandedUtterance { text, entities }
}
