//! Output formatting for shelf slots, work order targets, and bin poses.
//!
//! Text mode prints whitespace-separated fields, one record per line:
//! - slots: `row column index item`
//! - work order: `bin item -> row column index`
//! - poses: `bin row column pose=(...) safe=(...)`
//!
//! JSON mode prints one compact JSON object per record instead.

use std::fmt::Write;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::Config;
use crate::goals::WorkTarget;
use crate::grid::SlotEntry;
use crate::layout::GridPosition;

#[derive(Serialize)]
struct SlotRecord<'a> {
    row: usize,
    column: usize,
    index: usize,
    item: Option<&'a str>,
}

#[derive(Serialize)]
struct TargetRecord<'a> {
    bin: &'a str,
    item: &'a str,
    row: usize,
    column: usize,
    slot: Option<usize>,
}

#[derive(Serialize)]
struct PoseRecord<'a> {
    bin: &'a str,
    row: usize,
    column: usize,
    pose: [f64; 6],
    safe_pose: [f64; 6],
}

/// Format one shelf slot into `out`.
pub fn format_slot(entry: &SlotEntry<'_>, config: &Config, use_color: bool, out: &mut String) {
    if config.json_output {
        push_json(
            &SlotRecord {
                row: entry.position.row,
                column: entry.position.column,
                index: entry.index,
                item: entry.item,
            },
            out,
        );
        return;
    }

    push_coordinates(entry.position, use_color, out);
    push_index(&entry.index.to_string(), use_color, out);
    out.push(' ');
    match entry.item {
        Some(item) if use_color => {
            let _ = write!(out, "{}", item.green());
        }
        Some(item) => out.push_str(item),
        None if use_color => {
            let _ = write!(out, "{}", config.empty_marker.dimmed());
        }
        None => out.push_str(&config.empty_marker),
    }
}

/// Format one resolved work order entry into `out`.
///
/// A target whose item is not in its bin shows `-` for the slot.
pub fn format_target(target: &WorkTarget, config: &Config, use_color: bool, out: &mut String) {
    if config.json_output {
        push_json(
            &TargetRecord {
                bin: &target.bin,
                item: &target.item,
                row: target.position.row,
                column: target.position.column,
                slot: target.slot,
            },
            out,
        );
        return;
    }

    if use_color {
        let _ = write!(
            out,
            "{} {} -> ",
            target.bin.cyan().bold(),
            target.item.green()
        );
    } else {
        let _ = write!(out, "{} {} -> ", target.bin, target.item);
    }
    push_coordinates(target.position, use_color, out);
    let slot = target.slot.map_or_else(|| "-".to_string(), |i| i.to_string());
    push_index(&slot, use_color, out);
}

/// Format the bin and approach poses of one occupied position into `out`.
pub fn format_pose(
    bin: &str,
    position: GridPosition,
    config: &Config,
    use_color: bool,
    out: &mut String,
) {
    let pose = config.geometry.bin_pose(position);
    let safe = config.geometry.bin_safe_pose(position);

    if config.json_output {
        push_json(
            &PoseRecord {
                bin,
                row: position.row,
                column: position.column,
                pose: [pose.x, pose.y, pose.z, pose.roll, pose.pitch, pose.yaw],
                safe_pose: [safe.x, safe.y, safe.z, safe.roll, safe.pitch, safe.yaw],
            },
            out,
        );
        return;
    }

    if use_color {
        let _ = write!(out, "{} ", bin.cyan().bold());
    } else {
        out.push_str(bin);
        out.push(' ');
    }
    push_coordinates(position, use_color, out);
    let _ = write!(out, " pose={pose} safe={safe}");
}

/// Write `row column`, bold when colored.
fn push_coordinates(position: GridPosition, use_color: bool, out: &mut String) {
    if use_color {
        let _ = write!(out, "{} {}", position.row.bold(), position.column.bold());
    } else {
        let _ = write!(out, "{} {}", position.row, position.column);
    }
}

fn push_index(index: &str, use_color: bool, out: &mut String) {
    if use_color {
        let _ = write!(out, " {}", index.bold());
    } else {
        out.push(' ');
        out.push_str(index);
    }
}

fn push_json<T: Serialize>(record: &T, out: &mut String) {
    // Serializing these plain records cannot fail.
    if let Ok(json) = serde_json::to_string(record) {
        out.push_str(&json);
    }
}
