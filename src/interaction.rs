//! Per-segment expand/collapse state
//!
//! The decoded transaction and the view state are separate ownership
//! domains. The transaction is immutable and shared behind an `Arc`; each
//! interactive session owns its own [`InteractionStore`] and mutates it only
//! through toggle commands.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog;
use crate::decoder::DecodedTransaction;
use crate::types::{ByteRange, Segment, SegmentKind, SubField};

/// Interaction-specific error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    #[error("Segment index {index} out of range ({len} segments)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Expanded flag per segment index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    expanded: Vec<bool>,
}

impl ViewState {
    /// Every segment collapsed
    pub fn collapsed(len: usize) -> Self {
        Self {
            expanded: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> Option<bool> {
        self.expanded.get(index).copied()
    }

    pub fn expanded_indices(&self) -> Vec<usize> {
        self.expanded
            .iter()
            .enumerate()
            .filter_map(|(i, expanded)| expanded.then_some(i))
            .collect()
    }
}

/// Flip the expanded flag of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCommand {
    pub index: usize,
}

/// State transition: returns the state with `command.index` flipped and
/// every other index unchanged. Applying the same toggle twice restores the
/// original state.
pub fn apply_toggle(state: &ViewState, command: ToggleCommand) -> Result<ViewState, InteractionError> {
    let ToggleCommand { index } = command;
    if index >= state.len() {
        return Err(InteractionError::IndexOutOfRange {
            index,
            len: state.len(),
        });
    }

    let mut next = state.clone();
    next.expanded[index] = !next.expanded[index];
    Ok(next)
}

/// A sub-field as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub label: &'static str,
    pub range: ByteRange,
    pub raw_hex: String,
}

/// One segment as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentView {
    pub index: usize,
    pub kind: SegmentKind,
    pub title: String,
    pub range: ByteRange,
    pub raw_hex: String,
    pub expanded: bool,
    /// Catalog text, present only while expanded
    pub description: Option<&'static str>,
    /// Sub-field breakdown, populated only while expanded
    pub fields: Vec<FieldView>,
}

/// Holds the current transaction and its view state for one session
#[derive(Debug, Clone)]
pub struct InteractionStore {
    transaction: Arc<DecodedTransaction>,
    state: ViewState,
}

impl InteractionStore {
    pub fn new(transaction: Arc<DecodedTransaction>) -> Self {
        let state = ViewState::collapsed(transaction.segment_count());
        Self { transaction, state }
    }

    /// Replace the transaction; the view state is rebuilt from scratch
    pub fn load(&mut self, transaction: Arc<DecodedTransaction>) {
        debug!(
            "Loading transaction with {} segments",
            transaction.segment_count()
        );
        *self = Self::new(transaction);
    }

    pub fn transaction(&self) -> &Arc<DecodedTransaction> {
        &self.transaction
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Toggle one segment, returning its new expanded flag
    pub fn toggle(&mut self, index: usize) -> Result<bool, InteractionError> {
        self.state = apply_toggle(&self.state, ToggleCommand { index })?;
        let expanded = self.state.expanded[index];
        debug!("Segment {} expanded={}", index, expanded);
        Ok(expanded)
    }

    pub fn view_model(&self) -> Vec<SegmentView> {
        let bytes = self.transaction.bytes();
        self.transaction
            .segments()
            .iter()
            .zip(self.state.expanded.iter().copied())
            .enumerate()
            .map(|(index, (segment, expanded))| {
                let fields = if expanded {
                    sub_fields(segment)
                        .iter()
                        .map(|field| FieldView {
                            label: catalog::field_label(field.kind),
                            range: field.range,
                            raw_hex: hex::encode(field.range.slice(bytes)),
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                SegmentView {
                    index,
                    kind: segment.kind(),
                    title: catalog::segment_title(segment),
                    range: segment.range,
                    raw_hex: segment.raw_hex(bytes),
                    expanded,
                    description: expanded.then(|| catalog::description(segment.kind())),
                    fields,
                }
            })
            .collect()
    }
}

fn sub_fields(segment: &Segment) -> &[SubField] {
    if let Some(input) = segment.as_input() {
        &input.fields
    } else if let Some(output) = segment.as_output() {
        &output.fields
    } else {
        &[]
    }
}
