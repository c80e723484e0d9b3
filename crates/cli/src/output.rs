//! Output formatting for CLI responses

use std::path::Path;

use anyhow::Error;
use colored::*;
use serde_json::json;
use simdisplay_protocol::{encode, FieldSpec, SimDisplayPacket, SimDisplayStatus};

use crate::error::CliError;
use crate::input::to_hex;

fn print_json(value: &serde_json::Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format {what} as JSON: {e}"),
    }
}

/// Status byte rendered by name, or `UNKNOWN(n)` outside the enumerated set.
pub fn status_label(raw: u8) -> String {
    match SimDisplayStatus::from_raw(raw) {
        Some(status) => status.name().to_string(),
        None => format!("UNKNOWN({raw})"),
    }
}

fn error_type_name(error: &Error) -> &'static str {
    error
        .downcast_ref::<CliError>()
        .map(CliError::kind)
        .unwrap_or("error")
}

/// Full error chain on one line, outermost context first.
fn error_message(error: &Error) -> String {
    format!("{error:#}")
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error_message(error),
            "type": error_type_name(error)
        }
    });
    print_json(&error_json, "error");
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the hex form of an encoded packet
pub fn print_encoded(hex: &str, written_to: Option<&Path>, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "hex": hex,
            "out": written_to.map(|p| p.display().to_string()),
        });
        print_json(&output, "encoded packet");
    } else if let Some(path) = written_to {
        println!("{} {}", "Wrote packet to".green(), path.display());
    } else {
        println!("{hex}");
    }
}

/// Print a decoded packet
pub fn print_packet(packet: &SimDisplayPacket, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "status": status_label(packet.status),
            "hex": to_hex(&encode(packet)),
            "packet": packet,
        });
        print_json(&output, "packet");
        return;
    }

    let status = status_label(packet.status);
    let status = if SimDisplayStatus::from_raw(packet.status).is_some() {
        status.green()
    } else {
        status.yellow()
    };
    println!("{} {}", "Status:".bold(), status);

    println!("  {}:", "Engine".bold());
    println!("    RPM: {}", packet.rpm);
    println!("    Optimal RPM: {}", packet.optrpm);
    println!("    Shift RPM: {}", packet.shftrpm);
    println!("    Gear: {}", packet.gear);
    println!("    Map: {}", packet.map);
    println!("    Pit Limiter: {}", on_off(packet.pit_limiter_engaged()));

    println!("  {}:", "Assists".bold());
    println!(
        "    TC: {} (cut {}) {}",
        packet.tc,
        packet.tcc,
        active_marker(packet.traction_control_active())
    );
    println!(
        "    ABS: {} {}",
        packet.abs,
        active_marker(packet.abs_active())
    );
    println!("    Brake Bias (raw): {}", packet.bb);

    println!("  {}:", "Session".bold());
    println!("    Remaining Laps: {}", packet.remlaps);
    println!("    Air Temp (raw): {}", packet.airt);
    println!("    Road Temp (raw): {}", packet.roadt);
}

fn on_off(flag: bool) -> ColoredString {
    if flag {
        "On".yellow()
    } else {
        "Off".normal()
    }
}

fn active_marker(active: bool) -> ColoredString {
    if active {
        "[active]".red()
    } else {
        "".normal()
    }
}

/// Print a successful validation result
pub fn print_valid(packet: &SimDisplayPacket, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "valid": true,
            "status": status_label(packet.status),
        });
        print_json(&output, "validation result");
    } else {
        println!(
            "{} status {}",
            "Valid packet:".green().bold(),
            status_label(packet.status)
        );
    }
}

/// Print the wire layout table
pub fn print_layout(layout: &[FieldSpec], total: usize, json: bool) {
    if json {
        let fields: Vec<_> = layout
            .iter()
            .map(|f| json!({ "name": f.name, "offset": f.offset, "width": f.width }))
            .collect();
        let output = json!({
            "success": true,
            "length": total,
            "fields": fields,
        });
        print_json(&output, "layout");
        return;
    }

    println!("{} ({} bytes, little-endian)", "Packet layout".bold(), total);
    println!("  {:<8} {:>6} {:>5}", "FIELD", "OFFSET", "WIDTH");
    for f in layout {
        println!("  {:<8} {:>6} {:>5}", f.name, f.offset, f.width);
    }
}

/// Print the protocol version tag
pub fn print_version(version: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "protocol_version": version,
        });
        print_json(&output, "version");
    } else {
        println!("{version}");
    }
}
