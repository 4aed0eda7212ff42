//! CLI entry point.
//!
//! # Responsibility
//! - Load a snapshot JSON file, run the apportionment engine and print the
//!   result as a plain-text table.
//! - Keep output deterministic; all formatting/rounding happens here, never
//!   in the core.

use rentshare_core::{compute_rent, import_snapshot, BillingSnapshot, CalculationResult};
use std::process::ExitCode;

const UNKNOWN_TENANT_LABEL: &str = "unknown tenant";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: rentshare <snapshot.json>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("rentshare: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("cannot read `{path}`: {err}"))?;
    let snapshot = import_snapshot(&raw).map_err(|err| err.to_string())?;
    let result = compute_rent(&snapshot.rent_inputs(), &snapshot.rooms, &snapshot.tenants)
        .map_err(|err| err.to_string())?;
    print_result(&snapshot, &result);
    Ok(())
}

fn print_result(snapshot: &BillingSnapshot, result: &CalculationResult) {
    println!(
        "total area: {:.2} m2 (private {:.2}, common {:.2}, unallocated {:.2})",
        result.total_area,
        result.total_private_area,
        result.total_common_area,
        result.unallocated_area
    );
    println!("rate: {:.4} per m2", result.rate_per_sqm);
    println!("common cost: {:.2}", result.total_common_cost);
    println!();

    for breakdown in &result.tenant_breakdowns {
        let name = snapshot
            .tenant_name(breakdown.tenant_id)
            .unwrap_or(UNKNOWN_TENANT_LABEL);
        println!(
            "{name}: private {:.2} m2 ({}), cold rent {:.2}, utilities {:.2}, total {:.2}",
            breakdown.private_area,
            breakdown.rooms.join(", "),
            breakdown.cold_rent,
            breakdown.utilities_share,
            breakdown.total_rent
        );
    }

    if result.unallocated_area > 0.0 {
        println!(
            "unallocated: {:.2} m2, cost {:.2} (billed to nobody)",
            result.unallocated_area, result.unallocated_cost
        );
    }
    println!();
    println!(
        "checksum: {:.2} (billed totals: {:.2})",
        result.checksum,
        result.total_cold_rent + result.utilities
    );
}
