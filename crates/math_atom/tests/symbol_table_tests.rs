//! Integration tests for the symbol tables and the atom model
//! Tests command round-tripping, tokenizer coverage, and clone independence

use math_atom::{
    atom_for_command, command_dictionary, command_for_atom, commands, for_ascii, AtomKind,
    Boundary, Color, MathAtom, MathList, Space,
};
use proptest::prelude::*;

// =============================================================================
// Command round trip
// =============================================================================

#[test]
fn test_every_command_round_trips() {
    for name in commands().keys() {
        let atom = atom_for_command(name).expect("listed command resolves");
        let canonical = command_for_atom(&atom)
            .unwrap_or_else(|| panic!("no command for template of {name}"));
        assert_eq!(
            atom_for_command(canonical),
            Some(atom),
            "{name} and {canonical} disagree"
        );
    }
}

#[test]
fn test_every_command_is_tokenizable() {
    let dictionary = command_dictionary();
    for (name, atom) in commands().iter() {
        let source = format!("\\{name}");
        let (found, consumed) = dictionary
            .try_lookup(&source)
            .unwrap_or_else(|e| panic!("{source}: {e}"));
        assert_eq!(&found, atom);
        assert_eq!(consumed, source.len());
    }
}

#[test]
fn test_every_ascii_literal_is_tokenizable() {
    let dictionary = command_dictionary();
    for byte in b'!'..=b'~' {
        if let Some(atom) = for_ascii(byte) {
            let source = char::from(byte).to_string();
            let (found, consumed) = dictionary.try_lookup(&source).unwrap();
            assert_eq!(found, atom);
            assert_eq!(consumed, 1);
        }
    }
}

proptest! {
    #[test]
    fn prop_round_trip_ignores_scripts(index in 0usize..400, script in "[a-z0-9]{1,3}") {
        let names: Vec<&String> = commands().keys().collect();
        let name = names[index % names.len()];
        let template = atom_for_command(name).unwrap();

        let mut atom = template.clone();
        if atom.scripts_allowed() {
            let list: MathList = script.bytes().filter_map(for_ascii).collect();
            atom.set_superscript(list).unwrap();
        }
        for inner in atom.inner_lists_mut() {
            inner.push(MathAtom::variable("q"));
        }

        let canonical = command_for_atom(&atom).unwrap();
        prop_assert_eq!(atom_for_command(canonical), Some(template));
    }

    #[test]
    fn prop_command_span_absorbs_whitespace(spaces in "[ \t\n]{0,4}", tail in "[0-9+]{0,3}") {
        let source = format!("\\alpha{spaces}{tail}");
        let (atom, consumed) = command_dictionary().try_lookup(&source).unwrap();
        prop_assert_eq!(atom, MathAtom::variable("α"));
        prop_assert_eq!(consumed, "\\alpha".len() + spaces.len());
    }
}

// =============================================================================
// Clone independence
// =============================================================================

fn leaf() -> impl Strategy<Value = MathAtom> {
    prop::sample::select((b'!'..=b'~').filter_map(for_ascii).collect::<Vec<_>>())
}

fn atom_tree() -> impl Strategy<Value = MathAtom> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        let list = prop::collection::vec(inner, 0..3).prop_map(MathList::from);
        prop_oneof![
            (list.clone(), list.clone())
                .prop_map(|(degree, radicand)| MathAtom::radical(degree, radicand)),
            list.clone().prop_map(MathAtom::overline),
            list.clone()
                .prop_map(|l| MathAtom::inner(Boundary::new("("), l, Boundary::new(")"))),
            list.clone().prop_map(|l| MathAtom::colored(Color::BLUE, l)),
            list.clone().prop_map(|l| MathAtom::raise_box(Space::mu(2.0), l)),
            (leaf(), list).prop_map(|(mut base, script)| {
                base.set_subscript(script).unwrap();
                base
            }),
        ]
    })
}

fn append_everywhere(list: &mut MathList) {
    for atom in list.iter_mut() {
        for inner in atom.inner_lists_mut() {
            append_everywhere(inner);
        }
        if let Some(sub) = atom.subscript_mut() {
            append_everywhere(sub);
        }
    }
    list.push(MathAtom::ordinary("•"));
}

proptest! {
    #[test]
    fn prop_clone_is_equal_and_detached(atoms in prop::collection::vec(atom_tree(), 1..4)) {
        let original = MathList::from(atoms);
        let snapshot = original.clone();
        prop_assert_eq!(&snapshot, &original);

        let mut copy = original.clone();
        append_everywhere(&mut copy);

        prop_assert_eq!(&original, &snapshot);
        prop_assert!(copy.deep_count() > original.deep_count());
    }
}

#[test]
fn test_clone_detaches_table_cells() {
    let mut table = math_atom::Table::with_environment("matrix");
    table.set_cell(MathList::from(MathAtom::variable("a")), 0, 0);
    let original = MathAtom::table(table);

    let mut copy = original.clone();
    if let AtomKind::Table(table) = &mut copy.kind {
        table.set_cell(MathList::from(MathAtom::variable("b")), 0, 0);
    }

    assert_ne!(original, copy);
    assert_eq!(original.inner_lists()[0][0].nucleus, "a");
}
