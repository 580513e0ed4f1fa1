//! Terminal and JSON rendering of decoded transactions
//!
//! Pure string builders: every function returns the text to print, so the
//! commands stay thin and the output is testable.

use serde_json::{json, Value};

use crate::catalog;
use crate::config::DisplayConfig;
use crate::decoder::{DecodeError, DecodedTransaction};
use crate::interaction::SegmentView;
use crate::types::script::script_asm;
use crate::types::{DecodedValue, LocktimeMeaning, Segment};
use crate::utils::currency::format_sats_as_btc;

const INDENT: &str = "      ";

/// One-line summary of a segment's decoded value
pub fn summarise(segment: &Segment) -> String {
    match &segment.value {
        DecodedValue::Version(version) => version.to_string(),
        DecodedValue::InputCount(count) => format!("{} input(s)", count),
        DecodedValue::Input(input) if input.is_coinbase() => "coinbase".to_string(),
        DecodedValue::Input(input) => {
            format!("spends {}:{}", input.prev_txid_display(), input.prev_vout)
        }
        DecodedValue::OutputCount(count) => format!("{} output(s)", count),
        DecodedValue::Output(output) => format!(
            "{} to {}",
            format_sats_as_btc(output.value),
            output.script_type()
        ),
        DecodedValue::Locktime(locktime) => {
            format!("{} ({})", locktime, LocktimeMeaning::from_consensus(*locktime))
        }
    }
}

/// Split hex into lines of at most `width` characters (0 = no wrapping)
///
/// Counts characters rather than bytes: rejected input shown on the failure
/// path may contain anything.
pub fn wrap_hex(hex_str: &str, width: usize) -> Vec<&str> {
    if width == 0 {
        return vec![hex_str];
    }
    let mut lines = Vec::new();
    let mut line_start = 0;
    for (count, (offset, _)) in hex_str.char_indices().enumerate() {
        if count > 0 && count % width == 0 {
            lines.push(&hex_str[line_start..offset]);
            line_start = offset;
        }
    }
    lines.push(&hex_str[line_start..]);
    lines
}

fn push_wrapped(out: &mut String, hex_str: &str, width: usize) {
    for line in wrap_hex(hex_str, width) {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
}

/// Decoded details shown under an expanded input or output
fn segment_details(segment: &Segment, display: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::new();
    match &segment.value {
        DecodedValue::Input(input) => {
            lines.push(format!("Outpoint: {}:{}", input.prev_txid_display(), input.prev_vout));
            if display.script_asm && !input.is_coinbase() {
                lines.push(format!("Unlocking script: {}", script_asm(&input.script_sig)));
            }
            let flags = input.sequence_flags();
            lines.push(format!(
                "Sequence: 0x{:08x} (final: {}, rbf: {}, relative locktime: {})",
                input.sequence, flags.is_final, flags.signals_rbf, flags.relative_locktime
            ));
        }
        DecodedValue::Output(output) => {
            lines.push(format!("Value: {}", format_sats_as_btc(output.value)));
            lines.push(format!("Script type: {}", output.script_type()));
            if display.script_asm {
                lines.push(format!("Locking script: {}", script_asm(&output.script_pubkey)));
            }
        }
        _ => {}
    }
    lines
}

/// Render the current view model as text
pub fn render_text(tx: &DecodedTransaction, views: &[SegmentView], display: &DisplayConfig) -> String {
    let mut out = format!(
        "txid {} ({} bytes, {} segments)\n\n",
        tx.txid(),
        tx.size(),
        tx.segment_count()
    );

    for view in views {
        let Some(segment) = tx.segment(view.index) else {
            continue;
        };
        let marker = if view.expanded { '-' } else { '+' };
        out.push_str(&format!(
            "{} [{}] {} = {}\n",
            marker,
            view.index,
            view.title,
            summarise(segment)
        ));
        push_wrapped(&mut out, &view.raw_hex, display.hex_wrap);

        if !view.expanded {
            continue;
        }
        if display.show_descriptions {
            if let Some(description) = view.description {
                out.push_str(&format!("{}{}\n", INDENT, description));
            }
        }
        for field in &view.fields {
            out.push_str(&format!(
                "{}{:<24} {}\n",
                INDENT,
                format!("{}:", field.label),
                field.raw_hex
            ));
        }
        for line in segment_details(segment, display) {
            out.push_str(&format!("{}{}\n", INDENT, line));
        }
    }

    out.push_str(&format!(
        "\nTotal output value: {}\n",
        format_sats_as_btc(tx.total_output_value())
    ));
    out
}

/// Render the current view model as JSON
pub fn render_json(tx: &DecodedTransaction, views: &[SegmentView]) -> Value {
    json!({
        "txid": tx.txid(),
        "size": tx.size(),
        "version": tx.version(),
        "locktime": tx.locktime(),
        "locktime_meaning": tx.locktime_meaning(),
        "total_output_value": tx.total_output_value(),
        "view": views,
        "segments": tx.segments(),
    })
}

/// Fallback when no breakdown can be rendered: the raw hex, the error, and
/// whatever was decoded before the failure
pub fn render_failure_text(
    raw_hex: &str,
    bytes: Option<&[u8]>,
    error: &DecodeError,
    display: &DisplayConfig,
) -> String {
    let mut out = format!("Cannot render a breakdown: {}\n\nRaw hex:\n", error);
    push_wrapped(&mut out, raw_hex, display.hex_wrap);

    let partial = error.partial_segments();
    if let (Some(bytes), false) = (bytes, partial.is_empty()) {
        out.push_str("\nDecoded before failure:\n");
        for (index, segment) in partial.iter().enumerate() {
            out.push_str(&format!(
                "  [{}] {} = {}\n",
                index,
                catalog::segment_title(segment),
                summarise(segment)
            ));
            push_wrapped(&mut out, &segment.raw_hex(bytes), display.hex_wrap);
        }
    }
    out
}

pub fn render_failure_json(raw_hex: &str, error: &DecodeError) -> Value {
    json!({
        "hex": raw_hex,
        "error": {
            "kind": error.kind(),
            "offset": error.offset(),
            "message": error.to_string(),
        },
        "partial_segments": error.partial_segments(),
    })
}
