use tinyblog_core::{render_comment_form, CommentDraft};

fn empty_draft() -> CommentDraft {
    CommentDraft::default()
}

#[test]
fn empty_error_list_omits_the_error_block() {
    let html = render_comment_form(&[], &empty_draft());

    assert!(!html.contains("error box"));
    assert!(!html.contains("<li>"));
    assert!(html.starts_with("<h3>Add your comment</h3>"));
}

#[test]
fn single_error_renders_exactly_one_list_item() {
    let html = render_comment_form(&["bad".to_string()], &empty_draft());

    assert_eq!(html.matches("<li>").count(), 1);
    assert!(html.contains("<li>bad</li>"));
    assert!(html.contains("<div class=\"error box\">"));
}

#[test]
fn errors_render_in_input_order() {
    let errors = vec!["first problem".to_string(), "second problem".to_string()];
    let html = render_comment_form(&errors, &empty_draft());

    let first = html.find("first problem").unwrap();
    let second = html.find("second problem").unwrap();
    assert!(first < second);
}

#[test]
fn form_carries_the_expected_field_names() {
    let html = render_comment_form(&[], &empty_draft());

    assert!(html.contains("<form method=\"post\">"));
    assert!(html.contains("name=\"comment-name\""));
    assert!(html.contains("name=\"comment-website\""));
    assert!(html.contains("name=\"comment-text\""));
    assert!(html.contains("value=\"Submit comment\""));
}

#[test]
fn draft_values_prefill_their_fields() {
    let draft = CommentDraft::new("Alice", "https://example.com", "Nice post!");
    let html = render_comment_form(&[], &draft);

    assert!(html.contains("value=\"Alice\""));
    assert!(html.contains("value=\"https://example.com\""));
    assert!(html.contains(">Nice post!</textarea>"));
}

#[test]
fn name_field_is_escaped_independently() {
    let draft = CommentDraft::new("<script>", "", "");
    let html = render_comment_form(&[], &draft);

    assert!(html.contains("value=\"&lt;script&gt;\""));
    assert!(!html.contains("<script>"));
}

#[test]
fn website_field_is_escaped_independently() {
    let draft = CommentDraft::new("", "<script>", "");
    let html = render_comment_form(&[], &draft);

    assert!(html.contains("value=\"&lt;script&gt;\""));
    assert!(!html.contains("<script>"));
}

#[test]
fn text_field_is_escaped_independently() {
    let draft = CommentDraft::new("", "", "<script>");
    let html = render_comment_form(&[], &draft);

    assert!(html.contains(">&lt;script&gt;</textarea>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn quotes_cannot_break_out_of_attribute_position() {
    let draft = CommentDraft::new(r#"" onmouseover="alert(1)"#, "", "");
    let html = render_comment_form(&[], &draft);

    assert!(html.contains("&quot; onmouseover=&quot;alert(1)"));
    assert!(!html.contains("\" onmouseover=\"alert(1)"));
}

#[test]
fn ampersands_are_escaped_once() {
    let draft = CommentDraft::new("", "https://example.com/?a=1&b=2", "");
    let html = render_comment_form(&[], &draft);

    assert!(html.contains("a=1&amp;b=2"));
    assert!(!html.contains("&amp;amp;"));
}

#[test]
fn error_messages_are_escaped_like_field_values() {
    let errors = vec!["<b>bold</b>".to_string()];
    let html = render_comment_form(&errors, &empty_draft());

    assert!(html.contains("<li>&lt;b&gt;bold&lt;/b&gt;</li>"));
}

#[test]
fn rendering_is_a_pure_function_of_its_inputs() {
    let draft = CommentDraft::new("Alice", "https://example.com", "Hello");
    let errors = vec!["bad".to_string()];

    assert_eq!(
        render_comment_form(&errors, &draft),
        render_comment_form(&errors, &draft)
    );
}

#[test]
fn draft_round_trips_through_serde() {
    let draft = CommentDraft::new("Alice", "https://example.com", "Hello");

    let json = serde_json::to_string(&draft).unwrap();
    let back: CommentDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(back, draft);
}
