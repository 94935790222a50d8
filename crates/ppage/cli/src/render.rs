//! Plain-text rendering of a normalized profile.

use ppage_pipeline::NormalizedProfile;
use ppage_types::DisplayEntry;

/// Print the full profile, section by section. Empty sections are skipped.
pub fn print_profile(profile: &NormalizedProfile) {
    println!("{} - pronouns.page ({})", profile.username, profile.language);

    if let Some(age) = profile.age {
        println!("age: {age}");
    }
    if let Some(description) = &profile.description {
        println!("{description}");
    }

    section("names", &profile.names);
    section("pronouns", &profile.pronouns);
    section("links", &profile.links);

    let flags: Vec<DisplayEntry> = profile.flags.entries().cloned().collect();
    section("flags", &flags);

    section("words", &profile.words);
}

fn section(title: &str, entries: &[DisplayEntry]) {
    if entries.is_empty() {
        return;
    }

    println!();
    println!("{title}:");
    for entry in entries {
        println!("  {}", entry.display_text());
    }
}
