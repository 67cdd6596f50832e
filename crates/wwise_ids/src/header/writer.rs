//! Writers for the parsed table model
//!
//! [`write`] reproduces the authoring tool's header formatting
//! byte-for-byte, so `write(parse(h)) == h` for any well-formed
//! generated header. [`to_rust_module`] emits the same table as a
//! Rust constant module (the shape of `src/ids.rs` in this crate).

use std::fmt::Write as _;

use crate::table::{IdEntry, IdTable, StateGroupEntry};

/// Render a table in the generated header format
///
/// Empty sections are omitted, matching the authoring tool: a project
/// with no events simply has no EVENTS namespace.
#[must_use]
pub fn write(table: &IdTable) -> String {
    let rule = "/".repeat(101);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    out.push_str("//\n// Audiokinetic Wwise generated include file. Do not edit.\n//\n");
    let _ = writeln!(out, "{rule}");
    out.push('\n');
    out.push_str("#ifndef __WWISE_IDS_H__\n#define __WWISE_IDS_H__\n\n");
    out.push_str("#include <AK/SoundEngine/Common/AkTypes.h>\n\n");
    out.push_str("namespace AK\n{\n");

    push_flat_section(&mut out, "EVENTS", &table.events);
    push_states_section(&mut out, &table.state_groups);
    push_flat_section(&mut out, "GAME_PARAMETERS", &table.game_parameters);
    push_flat_section(&mut out, "BANKS", &table.banks);
    push_flat_section(&mut out, "BUSSES", &table.busses);
    push_flat_section(&mut out, "AUDIO_DEVICES", &table.audio_devices);

    out.push_str("}// namespace AK\n\n#endif // __WWISE_IDS_H__\n");
    out
}

fn push_flat_section(out: &mut String, section: &str, entries: &[IdEntry]) {
    if entries.is_empty() {
        return;
    }

    let _ = writeln!(out, "    namespace {section}\n    {{");
    for entry in entries {
        let _ = writeln!(
            out,
            "        static const AkUniqueID {} = {}U;",
            entry.name,
            entry.id.value()
        );
    }
    let _ = writeln!(out, "    }} // namespace {section}\n");
}

fn push_states_section(out: &mut String, groups: &[StateGroupEntry]) {
    if groups.is_empty() {
        return;
    }

    out.push_str("    namespace STATES\n    {\n");
    for group in groups {
        let _ = writeln!(out, "        namespace {}\n        {{", group.name);
        let _ = writeln!(
            out,
            "            static const AkUniqueID GROUP = {}U;",
            group.id.value()
        );
        if !group.states.is_empty() {
            out.push_str("\n            namespace STATE\n            {\n");
            for state in &group.states {
                let _ = writeln!(
                    out,
                    "                static const AkUniqueID {} = {}U;",
                    state.name,
                    state.id.value()
                );
            }
            out.push_str("            } // namespace STATE\n");
        }
        let _ = writeln!(out, "        }} // namespace {}\n", group.name);
    }
    out.push_str("    } // namespace STATES\n\n");
}

/// Render a table as a Rust constant module
///
/// `use_path` is the path the emitted code imports the identifier
/// types from: `"wwise_ids"` for downstream crates, `"crate"` when
/// regenerating this crate's own `ids.rs`.
#[must_use]
pub fn to_rust_module(table: &IdTable, use_path: &str) -> String {
    let mut out = String::new();

    out.push_str("//! Identifier bindings generated from the sound project\n//!\n");
    out.push_str(
        "//! Generated by `ids_bindgen` from `Wwise_IDs.h`. Do not edit by hand;\n\
         //! regenerate after the sound project is rebuilt in the authoring tool.\n\n",
    );
    out.push_str("#![allow(missing_docs)]\n#![allow(clippy::unreadable_literal)]\n\n");
    let _ = writeln!(out, "use {use_path}::{{Binding, Category}};");

    push_flat_module(&mut out, "events", &table.events, use_path);
    push_states_module(&mut out, &table.state_groups, use_path);
    push_flat_module(&mut out, "game_parameters", &table.game_parameters, use_path);
    push_flat_module(&mut out, "banks", &table.banks, use_path);
    push_flat_module(&mut out, "busses", &table.busses, use_path);
    push_flat_module(&mut out, "audio_devices", &table.audio_devices, use_path);

    out.push('\n');
    out.push_str("/// Every binding in the table, in declaration order\n");
    let lines = binding_lines(table);
    if lines.is_empty() {
        out.push_str("pub static BINDINGS: &[Binding] = &[];\n");
    } else {
        out.push_str("pub static BINDINGS: &[Binding] = &[\n");
        for line in lines {
            out.push_str(&line);
        }
        out.push_str("];\n");
    }
    out
}

fn push_flat_module(out: &mut String, module: &str, entries: &[IdEntry], use_path: &str) {
    if entries.is_empty() {
        return;
    }

    let _ = writeln!(out, "\npub mod {module} {{\n    use {use_path}::UniqueId;\n");
    for entry in entries {
        let _ = writeln!(
            out,
            "    pub const {}: UniqueId = UniqueId::new({});",
            entry.name,
            entry.id.value()
        );
    }
    out.push_str("}\n");
}

fn push_states_module(out: &mut String, groups: &[StateGroupEntry], use_path: &str) {
    if groups.is_empty() {
        return;
    }

    out.push_str("\npub mod states {\n");
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let module = group.name.to_lowercase();
        let _ = writeln!(out, "    pub mod {module} {{\n        use {use_path}::UniqueId;\n");
        let _ = writeln!(
            out,
            "        pub const GROUP: UniqueId = UniqueId::new({});",
            group.id.value()
        );
        if !group.states.is_empty() {
            let _ = writeln!(out, "\n        pub mod state {{\n            use {use_path}::UniqueId;\n");
            for state in &group.states {
                let _ = writeln!(
                    out,
                    "            pub const {}: UniqueId = UniqueId::new({});",
                    state.name,
                    state.id.value()
                );
            }
            out.push_str("        }\n");
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");
}

fn binding_lines(table: &IdTable) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &table.events {
        lines.push(format!(
            "    Binding::new(\"{0}\", events::{0}, Category::Event),\n",
            entry.name
        ));
    }
    for group in &table.state_groups {
        let module = group.name.to_lowercase();
        lines.push(format!(
            "    Binding::new(\"{}\", states::{}::GROUP, Category::StateGroup),\n",
            group.name, module
        ));
        for state in &group.states {
            lines.push(format!(
                "    Binding::new(\"{0}\", states::{1}::state::{0}, Category::State),\n",
                state.name, module
            ));
        }
    }
    for entry in &table.game_parameters {
        lines.push(format!(
            "    Binding::new(\"{0}\", game_parameters::{0}, Category::GameParameter),\n",
            entry.name
        ));
    }
    for entry in &table.banks {
        lines.push(format!(
            "    Binding::new(\"{0}\", banks::{0}, Category::Bank),\n",
            entry.name
        ));
    }
    for entry in &table.busses {
        lines.push(format!(
            "    Binding::new(\"{0}\", busses::{0}, Category::Bus),\n",
            entry.name
        ));
    }
    for entry in &table.audio_devices {
        lines.push(format!(
            "    Binding::new(\"{0}\", audio_devices::{0}, Category::AudioDevice),\n",
            entry.name
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::super::{parse, GENERATED_HEADER};
    use super::*;

    #[test]
    fn test_round_trip_reproduces_header() {
        let table = parse(GENERATED_HEADER).unwrap();
        assert_eq!(write(&table), GENERATED_HEADER);
    }

    #[test]
    fn test_rust_module_matches_shipped_bindings() {
        let table = parse(GENERATED_HEADER).unwrap();
        assert_eq!(to_rust_module(&table, "crate"), include_str!("../ids.rs"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let table = IdTable {
            banks: vec![IdEntry::new("INIT", 1355168291)],
            ..IdTable::default()
        };

        let header = write(&table);
        assert!(header.contains("namespace BANKS"));
        assert!(!header.contains("namespace EVENTS"));
        assert!(!header.contains("namespace STATES"));

        let module = to_rust_module(&table, "wwise_ids");
        assert!(module.contains("pub mod banks {"));
        assert!(!module.contains("pub mod events"));
        assert!(module.contains("use wwise_ids::UniqueId;"));
    }

    #[test]
    fn test_minimal_module_layout() {
        let table = IdTable {
            busses: vec![IdEntry::new("MASTER_AUDIO_BUS", 3803692087)],
            ..IdTable::default()
        };

        let expected = "\
//! Identifier bindings generated from the sound project
//!
//! Generated by `ids_bindgen` from `Wwise_IDs.h`. Do not edit by hand;
//! regenerate after the sound project is rebuilt in the authoring tool.

#![allow(missing_docs)]
#![allow(clippy::unreadable_literal)]

use wwise_ids::{Binding, Category};

pub mod busses {
    use wwise_ids::UniqueId;

    pub const MASTER_AUDIO_BUS: UniqueId = UniqueId::new(3803692087);
}

/// Every binding in the table, in declaration order
pub static BINDINGS: &[Binding] = &[
    Binding::new(\"MASTER_AUDIO_BUS\", busses::MASTER_AUDIO_BUS, Category::Bus),
];
";
        assert_eq!(to_rust_module(&table, "wwise_ids"), expected);
    }
}
