//! End-to-end checks of the helpers as a template would call them.

use metagen_helpers::{
    Error, OutputBuffer, RenderContext, csym, csyml, ctype_enum, find_parent_section,
    find_unique_entries, pad, path_name,
};
use metagen_model::{EntryData, MetadataTree};

#[test]
fn test_symbol_filters() {
    assert_eq!(csym("abcDef.xyz"), "ABC_DEF_XYZ");
    assert_eq!(csyml("abcDef.xyz"), "abc_def_xyz");
    assert_eq!(ctype_enum("int32"), "TYPE_INT32");
    assert_eq!(ctype_enum("byte"), "TYPE_BYTE");
}

#[test]
#[allow(deprecated)]
fn test_ljust() {
    use metagen_helpers::ljust;

    assert_eq!(ljust(8)("hello"), "hello   ");
    assert_eq!(ljust(3)("hello"), format!("hello\n{}", " ".repeat(4 + 3)));
}

#[test]
fn test_same_named_entries_across_kinds() {
    let mut tree = MetadataTree::new();
    let section = tree.add_section(tree.root(), "control").unwrap();
    let controls = tree.add_kind(section, "controls").unwrap();
    let dynamic = tree.add_kind(section, "dynamic").unwrap();
    tree.add_entry(controls, "x", EntryData::new("byte").description("requested"))
        .unwrap();
    tree.add_entry(controls, "y", EntryData::new("int32")).unwrap();
    tree.add_entry(dynamic, "x", EntryData::new("byte").description("reported"))
        .unwrap();

    let entries: Vec<_> = find_unique_entries(&tree, section).unwrap().collect();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(entries[0].description.as_deref(), Some("reported"));
    assert_eq!(entries[0].kind.as_deref(), Some("dynamic"));
}

#[test]
fn test_path_and_parent_section() {
    let mut tree = MetadataTree::new();
    let section = tree.add_section(tree.root(), "android").unwrap();
    let namespace = tree.add_namespace(section, "sensor").unwrap();
    let entry = tree
        .add_entry(namespace, "level", EntryData::new("int32"))
        .unwrap();

    assert_eq!(path_name(&tree, entry), "android.sensor.level");
    assert_eq!(find_parent_section(&tree, entry), Some(namespace));
}

#[test]
fn test_find_unique_entries_type_error() {
    let mut tree = MetadataTree::new();
    let section = tree.add_section(tree.root(), "android").unwrap();
    let kind = tree.add_kind(section, "static").unwrap();

    assert!(matches!(
        find_unique_entries(&tree, kind),
        Err(Error::NotASection { found: "kind" })
    ));
}

#[test]
fn test_padding_requires_buffer() {
    let ctx = RenderContext::default();
    assert!(matches!(pad(8).apply(&ctx, "hello"), Err(Error::BufferNotSet)));

    let ctx = RenderContext::with_buffer(OutputBuffer::new());
    assert_eq!(pad(8).apply(&ctx, "hello").unwrap(), "hello   ");
}
