use crate::aggregator::MetricField;
use crate::utils::config::{EDGE_SEPARATOR, REPORT_VERSION};

/// Display the metric fields accepted by --sort
pub fn display_fields() {
    println!("Sortable metric fields:");
    for field in MetricField::ALL {
        println!("  {}", field);
    }
}

/// Display version information
pub fn display_version() {
    println!("XHProf Callgraph v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Format: v{}", REPORT_VERSION);
    println!("Edge Separator: {}", EDGE_SEPARATOR);
    println!();
    println!("Call-graph aggregation for XHProf-style function profiles.");
}
