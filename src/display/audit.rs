//! Audit log display formatting

use crate::audit::AuditEntry;

/// Format audit entries, one per line
pub fn format_audit_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "Audit log is empty.".to_string();
    }

    let mut output = String::from("Audit log:\n");
    for entry in entries {
        output.push_str("  ");
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
