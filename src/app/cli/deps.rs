//! Dependency catalog listing.

use crate::app::commands::deps;
use crate::domain::{AppError, DependencyGroup};

pub fn run_deps(group: Option<String>) -> Result<(), AppError> {
    let entries = deps::list(group.as_deref())?;

    for group in DependencyGroup::ALL {
        let mut in_group = entries.iter().filter(|e| e.group == group).peekable();
        if in_group.peek().is_none() {
            continue;
        }
        println!("{}:", group);
        for entry in in_group {
            let marker = if entry.affects_output() { "" } else { " (listing only)" };
            println!("  {} - {}{}", entry.id, entry.name, marker);
            println!("    {}", entry.description);
        }
    }
    Ok(())
}
