//! Property-based tests for Vagrantfile rendering and status parsing.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use evilgenius::domain::machine::escape_script;
use evilgenius::domain::{InternalNetwork, MachineState, ManagedMachine, parse_status};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = MachineState> {
    proptest::sample::select(MachineState::ALL.to_vec())
}

fn arb_statuses() -> impl Strategy<Value = BTreeMap<String, MachineState>> {
    proptest::collection::btree_map("[a-z][a-z0-9_]{0,11}", arb_state(), 0..8)
}

fn status_output(statuses: &BTreeMap<String, MachineState>) -> Vec<String> {
    let mut lines = vec!["Current machine states:".to_string(), String::new()];
    for (name, state) in statuses {
        lines.push(format!("{name:<25} {state} (virtualbox)"));
    }
    lines.push(String::new());
    lines.push("This environment represents multiple VMs.".to_string());
    lines
}

proptest! {
    /// Rendered blocks never contain `-`, whatever the requested name.
    #[test]
    fn prop_rendered_machine_has_no_dashes(name in "[a-z0-9-]{1,20}") {
        let rendered = ManagedMachine::builder(&name).build().render();
        prop_assert!(!rendered.contains('-'), "rendered: {rendered}");
    }

    /// Rendering is a pure function of the machine definition.
    #[test]
    fn prop_render_is_deterministic(
        name in "[a-z]{1,10}",
        scripts in proptest::collection::vec("[a-z ]{1,20}", 0..5),
        host in 1u8..=254,
    ) {
        let build = || {
            ManagedMachine::builder(&name)
                .install(scripts.clone())
                .interface(Box::new(InternalNetwork::new(format!("10.0.0.{host}/24"), "lan")))
                .build()
        };
        prop_assert_eq!(build().render(), build().render());
    }

    /// Every double quote in an inline script ends up escaped.
    #[test]
    fn prop_escaped_script_has_no_bare_quotes(script in "[a-z \"]{0,30}") {
        let escaped = escape_script(&script);
        prop_assert!(!escaped.replace("\\\"", "").contains('"'));
        prop_assert_eq!(escaped.replace("\\\"", "\""), script);
    }

    /// Every provision line survives rendering as exactly one line.
    #[test]
    fn prop_one_provision_line_per_script(
        scripts in proptest::collection::vec("[a-z \"]{1,20}", 0..6),
    ) {
        let rendered = ManagedMachine::builder("m").install(scripts.clone()).build().render();
        let provisions = rendered.lines().filter(|l| l.contains(".vm.provision :shell")).count();
        prop_assert_eq!(provisions, scripts.len());
    }

    /// Well-formed status output parses back to the machines it lists.
    #[test]
    fn prop_status_round_trips(statuses in arb_statuses()) {
        let parsed = parse_status(&status_output(&statuses)).expect("parses");
        prop_assert_eq!(parsed, statuses);
    }

    /// Lines before the header never contribute entries.
    #[test]
    fn prop_preamble_is_ignored(preamble in proptest::collection::vec("[a-z ]{0,30} running", 0..5)) {
        let parsed = parse_status(&preamble).expect("parses");
        prop_assert!(parsed.is_empty());
    }
}
