//! Property tests for the lookup tables

use math_structures::{fail, split_command, AliasBiDictionary, AliasInsert, CommandDictionary};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn literal_dictionary(literals: &BTreeSet<String>) -> CommandDictionary<String> {
    let mut dict = CommandDictionary::new(
        |_: &str| fail("no literal matched"),
        |command: &str| fail(format!("Invalid command {command}")),
    );
    dict.insert_with(literals.iter().cloned(), |key| key.clone()).unwrap();
    dict
}

proptest! {
    #[test]
    fn prop_longest_literal_wins(
        literals in prop::collection::btree_set("[a-c]{1,3}", 1..10),
        text in "[a-c]{1,6}",
    ) {
        let dict = literal_dictionary(&literals);
        let longest = literals
            .iter()
            .filter(|literal| text.starts_with(literal.as_str()))
            .max_by_key(|literal| literal.len());

        match (dict.try_lookup(&text), longest) {
            (Ok((value, consumed)), Some(expected)) => {
                prop_assert_eq!(&value, expected);
                prop_assert_eq!(consumed, expected.len());
            }
            (Err(_), None) => {}
            (result, expected) => {
                prop_assert!(false, "lookup {:?} but expected {:?}", result, expected);
            }
        }
    }

    #[test]
    fn prop_letter_commands_split_at_first_non_letter(
        name in "[a-zA-Z@]{1,10}",
        rest in "[0-9 {}^_]{0,5}",
    ) {
        let text = format!("\\{name}{rest}");
        prop_assert_eq!(split_command(&text), name.len() + 1);
    }

    #[test]
    fn prop_command_absorbs_following_whitespace(
        name in "[a-z]{1,8}",
        spaces in "[ \t\n]{0,4}",
    ) {
        let mut dict: CommandDictionary<usize> = CommandDictionary::new(
            |_: &str| fail("no literal matched"),
            |command: &str| fail(format!("Invalid command {command}")),
        );
        dict.insert(format!("\\{name}"), 1).unwrap();

        let text = format!("\\{name}{spaces}2");
        prop_assert_eq!(dict.try_lookup(&text), Ok((1, 1 + name.len() + spaces.len())));
    }

    #[test]
    fn prop_reverse_link_is_earliest_remaining_first(
        pairs in prop::collection::btree_map("[a-z]{1,4}", 0u8..4, 1..12),
        removals in prop::collection::vec("[a-z]{1,4}", 0..8),
    ) {
        // Registration order is the map's key order
        let mut table: AliasBiDictionary<String, u8> = AliasBiDictionary::new();
        for (first, second) in &pairs {
            table.insert(first.clone(), *second).unwrap();
        }
        for first in &removals {
            table.remove_by_first(first.as_str());
        }

        let remaining: Vec<(&String, &u8)> = pairs
            .iter()
            .filter(|(first, _)| !removals.contains(*first))
            .collect();
        prop_assert_eq!(table.len(), remaining.len());

        for second in 0u8..4 {
            let earliest = remaining
                .iter()
                .find(|(_, s)| **s == second)
                .map(|(first, _)| *first);
            prop_assert_eq!(table.first_for(&second), earliest);
        }
    }
}
