//! Plain-text rendering of catalog views

use methodbox::{Catalog, FilterCriteria, MethodEntry, Session, Zone, VERSION};

use crate::commands;

/// Startup banner with catalog stats and the command summary.
pub fn banner(catalog: &Catalog) {
    println!("methodbox v{VERSION} - design thinking method cards");
    println!("{} methods loaded.", catalog.len());
    println!();
    commands::print_help();
}

/// Both zones, phase column by phase column.
pub fn zones(catalog: &Catalog) {
    let buckets = catalog.group_by_phase();

    for zone in Zone::ALL {
        println!();
        println!("== {} ==", zone.title());
        println!("{}", zone.note());

        for phase in zone.phases() {
            println!();
            println!("  [{phase}]");
            let ids = buckets.get(&phase).map(Vec::as_slice).unwrap_or_default();
            if ids.is_empty() {
                println!("    (no methods yet)");
                continue;
            }
            for id in ids {
                if let Some(entry) = catalog.get(id) {
                    println!("    {id} - {}", entry.title);
                }
            }
        }
    }
    println!();
}

/// Detail view of the current selection, or the placeholder.
pub fn detail(catalog: &Catalog, session: &Session) {
    match session.current_entry(catalog) {
        Some(entry) => entry_detail(entry),
        None => println!("Nothing selected. Pick a method with `select <id>`."),
    }
}

fn entry_detail(entry: &MethodEntry) {
    println!();
    println!("{}", entry.title);
    if let Some(phase) = entry.phase {
        println!("Phase: {phase}");
    }
    if let Some(short) = &entry.short {
        println!();
        println!("{short}");
    }
    if let Some(definition) = &entry.definition {
        println!();
        println!("{definition}");
    }
    if !entry.howto.is_empty() {
        println!();
        println!("How to:");
        for (index, step) in entry.howto.iter().enumerate() {
            println!("  {}. {step}", index + 1);
        }
    }
    if !entry.tips.is_empty() {
        println!();
        println!("Tips:");
        for tip in &entry.tips {
            println!("  - {tip}");
        }
    }
    if let Some(example) = &entry.example {
        println!();
        println!("Example: {example}");
    }
    println!();
}

/// Result list of a recommendation query, or the no-matches notice.
pub fn recommendations(catalog: &Catalog, criteria: &FilterCriteria) {
    let hits = catalog.filter(criteria);
    if hits.is_empty() {
        println!(
            "No methods match {} / {} / {}. Try different criteria.",
            criteria.phase, criteria.time, criteria.size_group
        );
        return;
    }

    println!("{} matching method(s):", hits.len());
    for id in hits {
        if let Some(entry) = catalog.get(id) {
            match &entry.short {
                Some(short) => println!("  {id} - {}: {short}", entry.title),
                None => println!("  {id} - {}", entry.title),
            }
        }
    }
    println!("Open one with `select <id>`.");
}
