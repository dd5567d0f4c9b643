use super::*;

fn classify(text: &str) -> LineCounts {
    LineClassifier::new().classify(text)
}

#[test]
fn line_counts_default() {
    let counts = LineCounts::default();
    assert_eq!(counts.total, 0);
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 0);
}

#[test]
fn empty_text_is_one_blank_segment() {
    let counts = classify("");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 0);
}

#[test]
fn total_equals_newline_count_plus_one() {
    assert_eq!(classify("a").total, 1);
    assert_eq!(classify("a\nb").total, 2);
    assert_eq!(classify("a\nb\n").total, 3);
    assert_eq!(classify("\n\n\n").total, 4);
}

#[test]
fn code_only_lines() {
    let counts = classify("let x = 1;\nrun(x);");
    assert_eq!(counts.total, 2);
    assert_eq!(counts.code, 2);
    assert_eq!(counts.comment, 0);
}

#[test]
fn comment_only_line_moves_count_from_code() {
    let counts = classify("  // full comment");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 1);
}

#[test]
fn trailing_comment_keeps_code_count() {
    let counts = classify("x = 1; // trailing");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.code, 1);
    assert_eq!(counts.comment, 1);
}

#[test]
fn whitespace_only_line_is_blank() {
    let counts = classify("   \t ");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 0);
}

#[test]
fn doc_continuation_line_is_comment() {
    let counts = classify(" * some doc text");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 1);
}

#[test]
fn block_close_marker_is_comment() {
    let counts = classify("end of span */");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 1);
}

#[test]
fn bare_continuation_with_close_matches_once() {
    // " */" satisfies both halves of the block-marker rule but the rule
    // fires a single time.
    let counts = classify(" */");
    assert_eq!(counts.code, 0);
    assert_eq!(counts.comment, 1);
}

#[test]
fn block_open_without_close_is_not_detected() {
    // No cross-line state: a lone "/*" opener carries no recognized marker.
    let counts = classify("/* begin");
    assert_eq!(counts.code, 1);
    assert_eq!(counts.comment, 0);
}

#[test]
fn unindented_line_comment_counts_as_code() {
    // The double-slash rule wants whitespace before the marker, so a
    // comment flush at column zero slips through as code.
    let counts = classify("// top of file");
    assert_eq!(counts.code, 1);
    assert_eq!(counts.comment, 0);
}

#[test]
fn slash_inside_string_is_miscounted() {
    // Known limitation: no string-literal awareness.
    let counts = classify("let url = \"http: // host\";");
    assert_eq!(counts.comment, 1);
    assert_eq!(counts.code, 1);
}

#[test]
fn trailing_newline_adds_blank_segment() {
    let counts = classify("run();\n");
    assert_eq!(counts.total, 2);
    assert_eq!(counts.code, 1);
    assert_eq!(counts.comment, 0);
}

#[test]
fn stacked_rules_can_push_code_negative() {
    // Matches the block-marker rule (contains "*/") and the comment-only
    // rule, so code is decremented twice on a single line.
    let counts = classify("  // */ cleanup ");
    assert_eq!(counts.total, 1);
    assert_eq!(counts.comment, 2);
    assert_eq!(counts.code, -1);
}

#[test]
fn typescript_function_sample() {
    let counts = classify("function f() {\n  // hi\n  return 1;\n}\n");
    assert_eq!(counts.total, 5);
    assert_eq!(counts.code, 3);
    assert_eq!(counts.comment, 1);
}

#[test]
fn mixed_source_sample() {
    let source = "/** doc */\n * continues\nfn main() {\n\n    let a = 1; // init\n}\n";
    let counts = classify(source);

    assert_eq!(counts.total, 7);
    // "/** doc */" and " * continues" are comments, the blank line and the
    // trailing segment are neither, "// init" rides along with its code.
    assert_eq!(counts.comment, 3);
    assert_eq!(counts.code, 3);
}
