//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Mo.
//! The Mo project belongs to the Dunimd project team.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use mox::errors::{MoError, Result};
use mox::plugins::{
    resolve_plugin, resolve_plugins, MoLessPlugin, MoPluginDescriptor, MoPluginModule,
    MoPluginRegistry,
};

#[derive(Debug)]
struct CleanCss;

impl MoLessPlugin for CleanCss {
    fn name(&self) -> &str {
        "clean-css"
    }
}

#[derive(Debug)]
struct Functions {
    origin: &'static str,
    options: Value,
}

impl MoLessPlugin for Functions {
    fn name(&self) -> &str {
        self.origin
    }

    fn min_version(&self) -> Option<[u32; 3]> {
        Some([3, 0, 0])
    }

    fn options(&self) -> Option<&Value> {
        Some(&self.options)
    }
}

fn build_top_level(args: &Value) -> Result<Box<dyn MoLessPlugin>> {
    Ok(Box::new(Functions {
        origin: "top-level",
        options: args.clone(),
    }))
}

fn build_default(args: &Value) -> Result<Box<dyn MoLessPlugin>> {
    Ok(Box::new(Functions {
        origin: "default",
        options: args.clone(),
    }))
}

fn build_strict(args: &Value) -> Result<Box<dyn MoLessPlugin>> {
    if args.get("prefix").is_none() {
        return Err(MoError::validation("functions plugin requires 'prefix'"));
    }
    build_top_level(args)
}

fn registry() -> MoPluginRegistry {
    let mut registry = MoPluginRegistry::new();
    registry.register("clean-css", MoPluginModule::from_instance(Arc::new(CleanCss)));
    registry.register("functions", MoPluginModule::from_constructor(build_top_level));
    registry.register(
        "functions-esm",
        MoPluginModule::from_constructor(build_top_level).with_default_constructor(build_default),
    );
    registry.register("functions-strict", MoPluginModule::from_constructor(build_strict));
    registry
}

#[test]
fn simple_descriptor_returns_exported_instance() {
    let registry = registry();
    let exported = registry
        .get("clean-css")
        .unwrap()
        .exported_instance()
        .cloned()
        .unwrap();

    let resolved = resolve_plugin(&registry, &MoPluginDescriptor::simple("clean-css")).unwrap();

    assert!(Arc::ptr_eq(&resolved, &exported));
}

#[test]
fn configured_descriptor_builds_fresh_instances() {
    let registry = registry();
    let descriptors = vec![MoPluginDescriptor::configured("functions", json!({"prefix": "fn"}))];

    let first = resolve_plugins(&registry, Some(descriptors.as_slice())).unwrap();
    let second = resolve_plugins(&registry, Some(descriptors.as_slice())).unwrap();

    assert!(!Arc::ptr_eq(&first[0], &second[0]));
    assert_eq!(first[0].options(), Some(&json!({"prefix": "fn"})));
    assert_eq!(second[0].options(), Some(&json!({"prefix": "fn"})));
}

#[test]
fn default_constructor_is_preferred() {
    let registry = registry();

    let plugin = resolve_plugin(
        &registry,
        &MoPluginDescriptor::configured("functions-esm", json!({})),
    )
    .unwrap();

    assert_eq!(plugin.name(), "default");
}

#[test]
fn top_level_constructor_is_used_without_default() {
    let registry = registry();

    let plugin = resolve_plugin(&registry, &MoPluginDescriptor::configured("functions", json!({})))
        .unwrap();

    assert_eq!(plugin.name(), "top-level");
    assert_eq!(plugin.min_version(), Some([3, 0, 0]));
}

#[test]
fn single_element_entry_calls_constructor_without_arguments() {
    let opts = mox::MoLessOptions::from_json(&json!({"plugins": [["functions-esm"]]})).unwrap();

    let plugins = resolve_plugins(&registry(), opts.plugins.as_deref()).unwrap();

    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].name(), "default");
    assert_eq!(plugins[0].options(), Some(&Value::Null));
}

#[test]
fn duplicates_are_kept() {
    let registry = registry();
    let descriptors = vec![
        MoPluginDescriptor::simple("clean-css"),
        MoPluginDescriptor::simple("clean-css"),
    ];

    let resolved = resolve_plugins(&registry, Some(descriptors.as_slice())).unwrap();

    assert_eq!(resolved.len(), 2);
    assert!(Arc::ptr_eq(&resolved[0], &resolved[1]));
}

#[test]
fn unknown_reference_is_a_resolution_error() {
    let registry = registry();
    let descriptors = vec![
        MoPluginDescriptor::simple("clean-css"),
        MoPluginDescriptor::simple("less-plugin-missing"),
    ];

    match resolve_plugins(&registry, Some(descriptors.as_slice())).unwrap_err() {
        MoError::Resolution { reference, .. } => assert_eq!(reference, "less-plugin-missing"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn descriptor_form_must_match_module_exports() {
    let registry = registry();

    let err = resolve_plugin(&registry, &MoPluginDescriptor::configured("clean-css", json!({})))
        .unwrap_err();
    assert!(matches!(err, MoError::Resolution { .. }));

    let err = resolve_plugin(&registry, &MoPluginDescriptor::simple("functions")).unwrap_err();
    assert!(matches!(err, MoError::Resolution { .. }));
}

#[test]
fn constructor_errors_propagate_unchanged() {
    let registry = registry();

    let err = resolve_plugin(
        &registry,
        &MoPluginDescriptor::configured("functions-strict", json!({})),
    )
    .unwrap_err();

    match err {
        MoError::Validation { message } => assert_eq!(message, "functions plugin requires 'prefix'"),
        other => panic!("unexpected error: {other:?}"),
    }
}

fn descriptor_for(pick: u8, index: usize) -> MoPluginDescriptor {
    match pick % 3 {
        0 => MoPluginDescriptor::simple("clean-css"),
        1 => MoPluginDescriptor::configured("functions", json!({"index": index})),
        _ => MoPluginDescriptor::configured("functions-esm", json!({"index": index})),
    }
}

proptest! {
    #[test]
    fn resolution_preserves_count_and_order(picks in proptest::collection::vec(any::<u8>(), 0..24)) {
        let registry = registry();
        let descriptors: Vec<_> = picks
            .iter()
            .enumerate()
            .map(|(index, pick)| descriptor_for(*pick, index))
            .collect();

        let resolved = resolve_plugins(&registry, Some(descriptors.as_slice())).unwrap();

        prop_assert_eq!(resolved.len(), descriptors.len());
        for (descriptor, plugin) in descriptors.iter().zip(&resolved) {
            let expected_name = match descriptor.reference() {
                "clean-css" => "clean-css",
                "functions" => "top-level",
                _ => "default",
            };
            prop_assert_eq!(plugin.name(), expected_name);
            prop_assert_eq!(plugin.options(), descriptor.arguments());
        }
    }
}
