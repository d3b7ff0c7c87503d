//! Entry extraction from a rendered manual page.
//!
//! The rendered page is a flat stream of lines; an option entry begins at a
//! line whose whole trimmed content is a dotted option path and runs until
//! the next such line. The boundary recognizer is an explicit two-state
//! machine so behavior on malformed input (no recognized entries, trailing
//! partial block) stays well-defined.
use regex::Regex;

/// One configuration option's documentation block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Dotted option path, e.g. `virtualisation.virtualbox.host.enable`.
    pub name: String,
    /// Remaining lines of the block: type, default, description, example.
    pub body: Vec<String>,
}

enum State {
    SeekingEntryStart,
    InBody(Entry),
}

struct ParseState {
    state: State,
    entries: Vec<Entry>,
}

impl ParseState {
    fn new() -> Self {
        ParseState {
            state: State::SeekingEntryStart,
            entries: Vec::new(),
        }
    }

    fn flush_entry(&mut self) {
        let prev = std::mem::replace(&mut self.state, State::SeekingEntryStart);
        if let State::InBody(entry) = prev {
            self.entries.push(entry);
        }
    }

    fn start_entry(&mut self, name: String) {
        self.flush_entry();
        self.state = State::InBody(Entry {
            name,
            body: Vec::new(),
        });
    }

    fn push_body_line(&mut self, raw: &str) {
        match &mut self.state {
            State::InBody(entry) => entry.body.push(raw.trim_end().to_string()),
            // Preamble before the first recognized option is not an entry.
            State::SeekingEntryStart => {}
        }
    }

    fn finish(mut self) -> Vec<Entry> {
        self.flush_entry();
        self.entries
    }
}

fn entry_name_pattern() -> Regex {
    // A dotted option path fills the whole line: leading segment, one or more
    // dotted segments (NixOS paths use `<name>` and `*` placeholders), and at
    // most one trailing punctuation mark from the renderer.
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*(?:\.(?:<name>|\*|[A-Za-z0-9_<>*-]+))+[.,:;]?$")
        .expect("regex for entry-start lines")
}

/// Return the option name when `line` is an entry-start line.
fn entry_name(pattern: &Regex, line: &str) -> Option<String> {
    let trimmed = line.trim();
    if !pattern.is_match(trimmed) {
        return None;
    }
    Some(trimmed.trim_end_matches(['.', ',', ':', ';']).to_string())
}

/// Split the rendered page into option entries, in source order.
///
/// Empty input yields an empty sequence; text before the first recognized
/// option line is discarded.
pub fn parse_entries(text: &str) -> Vec<Entry> {
    let pattern = entry_name_pattern();
    let mut state = ParseState::new();
    for raw in text.lines() {
        match entry_name(&pattern, raw) {
            Some(name) => state.start_entry(name),
            None => state.push_body_line(raw),
        }
    }
    let entries = state.finish();
    tracing::debug!(count = entries.len(), "parsed option entries");
    entries
}

/// Keep every entry whose name starts with `prefix`, preserving order.
///
/// The match is case-sensitive and anchored at the start of the name; the
/// empty prefix keeps everything. Zero survivors is a valid result.
pub fn filter_by_prefix(entries: Vec<Entry>, prefix: &str) -> Vec<Entry> {
    let kept: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| entry.name.starts_with(prefix))
        .collect();
    tracing::debug!(prefix, count = kept.len(), "filtered entries by prefix");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\
NAME
       configuration.nix - NixOS system configuration specification

       a.b.enable
           Enables the b subsystem.

           Type: boolean

           Default: false

       a.b.c.enable
           Enables the c subsystem.

           Type: boolean

       a.x.enable
           Enables the x subsystem.
";

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn empty_text_yields_no_entries() {
        assert!(parse_entries("").is_empty());
    }

    #[test]
    fn preamble_is_discarded_and_order_preserved() {
        let entries = parse_entries(PAGE);
        assert_eq!(names(&entries), ["a.b.enable", "a.b.c.enable", "a.x.enable"]);
    }

    #[test]
    fn bodies_reconstitute_the_source_modulo_preamble() {
        let entries = parse_entries(PAGE);
        let mut rebuilt = String::new();
        for entry in &entries {
            rebuilt.push_str(&entry.name);
            rebuilt.push('\n');
            for line in &entry.body {
                rebuilt.push_str(line);
                rebuilt.push('\n');
            }
        }
        // Everything from the first entry-start line onward survives, with
        // only the renderer's indentation on name lines normalized away.
        let pattern = entry_name_pattern();
        let expected: String = PAGE
            .lines()
            .skip_while(|line| !line.trim().starts_with("a.b.enable"))
            .map(|line| {
                if entry_name(&pattern, line).is_some() {
                    format!("{}\n", line.trim())
                } else {
                    format!("{}\n", line.trim_end())
                }
            })
            .collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn trailing_partial_block_still_becomes_an_entry() {
        let entries = parse_entries("       a.b.enable\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.b.enable");
        assert!(entries[0].body.is_empty());
    }

    #[test]
    fn text_with_no_recognized_entries_yields_nothing() {
        let entries = parse_entries("NAME\n       just prose, nothing dotted alone\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn placeholder_segments_are_recognized() {
        let entries = parse_entries("       services.postgresql.databases.<name>.schema\n");
        assert_eq!(
            names(&entries),
            ["services.postgresql.databases.<name>.schema"]
        );
    }

    #[test]
    fn trailing_punctuation_is_stripped_from_the_name() {
        let entries = parse_entries("       services.nginx.enable.\n");
        assert_eq!(names(&entries), ["services.nginx.enable"]);
    }

    #[test]
    fn undotted_or_embedded_names_do_not_start_entries() {
        let text = "\
       enable
           See /etc/nixos/configuration.nix for details.
";
        assert!(parse_entries(text).is_empty());
    }

    #[test]
    fn prefix_filter_keeps_matches_in_order() {
        let entries = filter_by_prefix(parse_entries(PAGE), "a.b");
        assert_eq!(names(&entries), ["a.b.enable", "a.b.c.enable"]);
    }

    #[test]
    fn empty_prefix_keeps_every_entry() {
        let entries = filter_by_prefix(parse_entries(PAGE), "");
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn unmatched_prefix_yields_empty_not_error() {
        let entries = filter_by_prefix(parse_entries(PAGE), "zzz.nomatch");
        assert!(entries.is_empty());
    }

    #[test]
    fn longer_prefix_filters_a_subset_of_shorter() {
        let broad = filter_by_prefix(parse_entries(PAGE), "a.b");
        let narrow = filter_by_prefix(parse_entries(PAGE), "a.b.c");
        assert!(narrow.iter().all(|entry| broad.contains(entry)));
        assert!(narrow.len() <= broad.len());
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let entries = filter_by_prefix(parse_entries(PAGE), "A.b");
        assert!(entries.is_empty());
    }
}
