//! CLI output formatting.

use crate::runner::RunReport;

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Version line, including the git hash when the build captured one.
#[must_use]
pub fn version_string() -> String {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            format!("pisim {} ({})", env!("CARGO_PKG_VERSION"), &hash[..hash.len().min(12)])
        }
        _ => format!("pisim {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"pisim - Monte Carlo estimation of pi from a sphere in a cube

USAGE:
    pisim <COMMAND> [OPTIONS]

COMMANDS:
    run <config.yaml>                 Run to the target and print statistics
        --seed <N>                    Override the configured seed
        --random-seed                 Draw a fresh seed in 0..1000000
        --target <N>                  Override the target point count
        --batch <N>                   Override the batch size
        -v, --verbose                 Print slice details and debug logs

    export <config.yaml> <out.json>   Run and write all points as JSON
        --seed <N>                    Override the configured seed
        --random-seed                 Draw a fresh seed in 0..1000000

    help                              Show this help message
    version                           Show version information

ENVIRONMENT:
    PISIM_LOG                         tracing filter, e.g. 'pisim=debug'

EXAMPLES:
    pisim run runs/default.yaml
    pisim run runs/default.yaml --seed 12345 --target 1000000
    pisim export runs/default.yaml points.json
"
    );
}

/// Format a 2D estimate, or a dash when the display gate rejects it.
#[must_use]
pub fn format_slice_estimate(report: &RunReport) -> String {
    if report.slice_reportable {
        format!(
            "{:.5} (err {:.5})",
            report.slice.pi_2d_estimate, report.slice.absolute_error_2d
        )
    } else {
        "—".to_string()
    }
}

/// Print a run report.
pub fn print_report(report: &RunReport, verbose: bool) {
    let s = &report.summary;
    let seed = s
        .seed
        .map_or_else(|| "entropy".to_string(), |seed| seed.to_string());

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if !report.name.is_empty() {
        println!("Run: {}", report.name);
    }
    println!("Seed: {seed}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("Points:");
    println!("  Total:   {} / {}", s.total, report.target_points);
    println!("  Inside:  {}", s.inside);
    println!("  Outside: {}", s.outside);
    println!();

    println!("3D estimate:");
    if s.total > 0 {
        println!("  π₃D:     {:.6}", s.pi_3d_estimate);
        println!("  |err|:   {:.6}", s.absolute_error_3d);
        println!(
            "  95% CI:  [{:.6}, {:.6}]",
            s.confidence_interval.0, s.confidence_interval.1
        );
    } else {
        println!("  π₃D:     —");
    }
    println!();

    let p = &report.slice_params;
    println!(
        "Slice {}={:.3} (Δ={:.3}):",
        p.axis, p.position, p.thickness
    );
    println!("  Points:  {}", report.slice.slice_total);
    println!("  π₂D:     {}", format_slice_estimate(report));

    if verbose {
        println!("  Inside:  {}", report.slice.slice_inside);
        println!("  Radius:  {:.6}", report.slice.radius);
        println!("  E[T]:    {:.1}", report.expected_slice_count);
        println!();
        println!("Batches: {}", report.batches);
        println!("Elapsed: {:.3}s", report.elapsed_secs);
    }
}
