//! Line-oriented reader for generated identifier headers
//!
//! The format is rigid (the authoring tool writes it, nobody edits
//! it), so the parser is a small namespace-stack walk: preprocessor
//! lines and comments are skipped, namespaces push and pop a stack,
//! and each `static const AkUniqueID` declaration is classified by
//! the stack it appears under. Sections this crate does not model
//! (switches, triggers, aux busses) are skipped with a warning so
//! headers from richer projects still parse.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::table::{IdEntry, IdTable, StateGroupEntry};

use super::HeaderError;

/// Sections the table model captures
const KNOWN_SECTIONS: &[&str] = &[
    "EVENTS",
    "STATES",
    "GAME_PARAMETERS",
    "BANKS",
    "BUSSES",
    "AUDIO_DEVICES",
];

/// Parse generated header text into a table
pub fn parse(contents: &str) -> Result<IdTable, HeaderError> {
    let mut table = IdTable::default();
    let mut stack: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;
    let mut skipped: BTreeSet<String> = BTreeSet::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        // Preprocessor lines, comments, and blanks carry no bindings.
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }

        if line.starts_with('}') {
            if pending.is_some() {
                return Err(syntax(line_number, "expected '{' before closing brace"));
            }
            if stack.pop().is_none() {
                return Err(syntax(line_number, "unmatched closing brace"));
            }
            continue;
        }

        if line == "{" {
            match pending.take() {
                Some(name) => stack.push(name),
                None => return Err(syntax(line_number, "unexpected '{'")),
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("namespace ") {
            if pending.is_some() {
                return Err(syntax(line_number, "namespace without a body"));
            }
            let name = rest.trim();
            if let Some(inline) = name.strip_suffix('{') {
                stack.push(inline.trim().to_string());
            } else {
                pending = Some(name.to_string());
            }
            continue;
        }

        if let Some(declaration) = line.strip_prefix("static const AkUniqueID ") {
            let (name, value) = split_declaration(declaration, line_number)?;
            place_binding(&mut table, &stack, name, value, line_number, &mut skipped)?;
            continue;
        }

        return Err(syntax(
            line_number,
            &format!("unrecognized line '{line}'"),
        ));
    }

    if pending.is_some() {
        return Err(HeaderError::UnexpectedEof(stack.len() + 1));
    }
    if !stack.is_empty() {
        return Err(HeaderError::UnexpectedEof(stack.len()));
    }

    for section in &skipped {
        log::warn!("skipping unrecognized section '{section}'");
    }

    Ok(table)
}

/// Parse a header file from disk
pub fn parse_file(path: &Path) -> Result<IdTable, HeaderError> {
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}

fn syntax(line: usize, message: &str) -> HeaderError {
    HeaderError::Syntax {
        line,
        message: message.to_string(),
    }
}

/// Split `NAME = 12345U;` into its symbol and value
fn split_declaration(declaration: &str, line_number: usize) -> Result<(&str, u32), HeaderError> {
    let (name, rest) = declaration
        .split_once('=')
        .ok_or_else(|| syntax(line_number, "declaration missing '='"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(syntax(line_number, "declaration missing a symbol"));
    }

    let rest = rest.trim();
    let rest = rest
        .strip_suffix(';')
        .ok_or_else(|| syntax(line_number, "declaration missing ';'"))?;
    let digits = rest
        .trim()
        .trim_end_matches(['U', 'u']);
    let value = digits.parse::<u32>().map_err(|_| {
        syntax(
            line_number,
            &format!("invalid identifier value '{}'", rest.trim()),
        )
    })?;

    Ok((name, value))
}

/// File a declaration into the table according to the namespace stack
fn place_binding(
    table: &mut IdTable,
    stack: &[String],
    name: &str,
    value: u32,
    line_number: usize,
    skipped: &mut BTreeSet<String>,
) -> Result<(), HeaderError> {
    if stack.len() < 2 || stack[0] != "AK" {
        return Err(syntax(line_number, "declaration outside a section"));
    }

    let section = stack[1].as_str();
    if !KNOWN_SECTIONS.contains(&section) {
        skipped.insert(section.to_string());
        return Ok(());
    }

    match (section, stack.len()) {
        ("EVENTS", 2) => table.events.push(IdEntry::new(name, value)),
        ("GAME_PARAMETERS", 2) => table.game_parameters.push(IdEntry::new(name, value)),
        ("BANKS", 2) => table.banks.push(IdEntry::new(name, value)),
        ("BUSSES", 2) => table.busses.push(IdEntry::new(name, value)),
        ("AUDIO_DEVICES", 2) => table.audio_devices.push(IdEntry::new(name, value)),
        ("STATES", 3) => {
            if name != "GROUP" {
                return Err(syntax(
                    line_number,
                    &format!("unexpected declaration '{name}' in state group"),
                ));
            }
            table
                .state_groups
                .push(StateGroupEntry::new(stack[2].clone(), value));
        }
        ("STATES", 4) if stack[3] == "STATE" => {
            let group = table
                .state_groups
                .last_mut()
                .filter(|group| group.name == stack[2])
                .ok_or_else(|| syntax(line_number, "state declared outside its group"))?;
            group.states.push(IdEntry::new(name, value));
        }
        _ => {
            return Err(syntax(
                line_number,
                &format!("unexpected declaration depth in section '{section}'"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::GENERATED_HEADER;
    use super::*;
    use crate::UniqueId;

    #[test]
    fn test_parse_generated_header() {
        let table = parse(GENERATED_HEADER).unwrap();

        assert_eq!(table.events.len(), 10);
        assert_eq!(table.state_groups.len(), 1);
        assert_eq!(table.game_parameters.len(), 12);
        assert_eq!(table.banks.len(), 2);
        assert_eq!(table.busses.len(), 1);
        assert_eq!(table.audio_devices.len(), 2);
        assert_eq!(table.len(), 29);

        assert_eq!(table.events[2].name, "PLAY_EXPLOSION");
        assert_eq!(table.events[2].id, UniqueId::new(4030404899));

        let group = &table.state_groups[0];
        assert_eq!(group.name, "SOUNDEFFECTSTATES");
        assert_eq!(group.id, UniqueId::new(1216687119));
        assert_eq!(group.states.len(), 1);
        assert_eq!(group.states[0].name, "NONE");
        assert_eq!(group.states[0].id, UniqueId::new(748895195));

        assert_eq!(table.busses[0].name, "MASTER_AUDIO_BUS");
        assert_eq!(table.busses[0].id, UniqueId::new(3803692087));
    }

    #[test]
    fn test_unknown_sections_are_skipped() {
        let contents = "\
namespace AK
{
    namespace SWITCHES
    {
        namespace FOOTSTEP_SURFACE
        {
            static const AkUniqueID GROUP = 1234U;

            namespace SWITCH
            {
                static const AkUniqueID GRAVEL = 5678U;
            } // namespace SWITCH
        } // namespace FOOTSTEP_SURFACE
    } // namespace SWITCHES

    namespace BANKS
    {
        static const AkUniqueID INIT = 1355168291U;
    } // namespace BANKS
}// namespace AK
";
        let table = parse(contents).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.banks[0].name, "INIT");
    }

    #[test]
    fn test_missing_equals_is_an_error() {
        let contents = "\
namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID PLAY_EXPLOSION 4030404899U;
    } // namespace EVENTS
}// namespace AK
";
        match parse(contents) {
            Err(HeaderError::Syntax { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_integer_is_an_error() {
        let contents = "\
namespace AK
{
    namespace BANKS
    {
        static const AkUniqueID INIT = 99999999999U;
    } // namespace BANKS
}// namespace AK
";
        assert!(matches!(
            parse(contents),
            Err(HeaderError::Syntax { line: 5, .. })
        ));
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let contents = "\
namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID PLAY_EXPLOSION = 4030404899U;
";
        assert!(matches!(
            parse(contents),
            Err(HeaderError::UnexpectedEof(2))
        ));
    }

    #[test]
    fn test_declaration_outside_section_is_an_error() {
        let contents = "\
namespace AK
{
    static const AkUniqueID LOOSE = 1U;
}// namespace AK
";
        assert!(matches!(
            parse(contents),
            Err(HeaderError::Syntax { line: 3, .. })
        ));
    }
}
