//! Property tests for the template renderer.
//!
//! For any template whose placeholders all have field values, rendering
//! must leave no placeholder residue, and rendering is referentially
//! transparent.

use std::collections::HashMap;

use proptest::prelude::*;

use payslip_engine::error::PayrollError;
use payslip_engine::template::render;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn literal_chunk() -> impl Strategy<Value = String> {
    // Brace-free literal text, so residue checks only see placeholders.
    "[A-Za-z0-9 .,:;()-]{0,12}"
}

fn build_template(entries: &[(String, String)], chunks: &[String]) -> String {
    let mut template = String::new();
    for (index, (name, _)) in entries.iter().enumerate() {
        if !chunks.is_empty() {
            template.push_str(&chunks[index % chunks.len()]);
        }
        template.push_str("{{");
        template.push_str(name);
        template.push_str("}}");
    }
    template
}

proptest! {
    #[test]
    fn render_complete_mapping_leaves_no_residue(
        entries in proptest::collection::vec((identifier(), literal_chunk()), 1..6),
        chunks in proptest::collection::vec(literal_chunk(), 0..6),
    ) {
        let fields: HashMap<String, String> = entries.iter().cloned().collect();
        let template = build_template(&entries, &chunks);

        let rendered = render(&template, &fields).unwrap();
        prop_assert!(!rendered.contains("{{"));
        prop_assert!(!rendered.contains("}}"));
    }

    #[test]
    fn render_is_referentially_transparent(
        entries in proptest::collection::vec((identifier(), literal_chunk()), 1..6),
        chunks in proptest::collection::vec(literal_chunk(), 0..6),
    ) {
        let fields: HashMap<String, String> = entries.iter().cloned().collect();
        let template = build_template(&entries, &chunks);

        let first = render(&template, &fields).unwrap();
        let second = render(&template, &fields).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn render_missing_key_always_fails(name in identifier()) {
        let template = format!("hola {{{{{}}}}}", name);
        let empty: HashMap<String, String> = HashMap::new();

        for _ in 0..2 {
            let result = render(&template, &empty);
            let matched = matches!(
                result,
                Err(PayrollError::MissingField { ref placeholder }) if placeholder == &name
            );
            prop_assert!(matched);
        }
    }

    #[test]
    fn render_without_placeholders_is_identity(text in "[A-Za-z0-9 .,:;()-]{0,40}") {
        let fields: HashMap<String, String> = HashMap::new();
        prop_assert_eq!(render(&text, &fields).unwrap(), text);
    }
}
