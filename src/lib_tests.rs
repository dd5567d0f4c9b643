use super::*;

#[test]
fn root_reexports_cover_the_inspection_flow() {
    let inspector = FileInspector::new();
    let info: FileInfo = inspector.inspect_content("f.ts", "// a\nlet x = 1;\n");

    assert_eq!(info.language, "TypeScript");
    assert_eq!(info.lines.total, 3);
}

#[test]
fn classifier_is_usable_standalone() {
    let counts = LineClassifier::new().classify("  // only\n");
    assert_eq!(counts.comment, 1);
}
