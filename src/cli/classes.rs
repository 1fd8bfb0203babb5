//! Classes command implementation

use crate::cli::output::{format_classes_json, format_classes_table};
use crate::cli::ClassesArgs;

/// Handle `rng-analyzer classes`
pub fn handle_classes(args: &ClassesArgs) -> String {
    if args.json {
        format_classes_json()
    } else {
        format_classes_table()
    }
}
