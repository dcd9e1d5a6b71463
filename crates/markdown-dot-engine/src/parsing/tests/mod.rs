//! Integration tests for the parsing module.
//!
//! Every processed tree is run through `invariants::check` and compared in
//! its normalized form.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use normalize::{Snap, normalize};

use crate::parsing::blocks::{BlockRuleSet, kinds::Heading};
use crate::parsing::inline::InlineRuleSet;
use crate::parsing::{Pipeline, parse_lines, parse_str};
use crate::tree::{BlockType, Dot, NodeKind};

fn parse(lines: &[&str]) -> Vec<Snap> {
    let dot = parse_lines(lines.iter().copied());
    invariants::check(&dot);
    normalize(&dot)
}

// Block structure

#[test]
fn ordered_list_groups_consecutive_items() {
    assert_eq!(
        parse(&["1. a", "2. b", "3. c"]),
        vec![
            Snap::branch(
                "OrderedList",
                vec![
                    Snap::leaf("ListItem", "a"),
                    Snap::leaf("ListItem", "b"),
                    Snap::leaf("ListItem", "c"),
                ]
            )
            .attr("start", "1")
        ]
    );
}

#[test]
fn code_fence_keeps_language_and_lines() {
    assert_eq!(
        parse(&["```go", "x:=1", "```"]),
        vec![Snap::branch("CodeBlock", vec![Snap::leaf("CodeLine", "x:=1")]).attr("lang", "go")]
    );
}

#[test]
fn heading_level_counts_hashes() {
    assert_eq!(
        parse(&["### Title"]),
        vec![Snap::leaf("Heading", "Title").level(3)]
    );
}

#[test]
fn image_is_not_read_as_link() {
    assert_eq!(
        parse(&["![alt](img.png)"]),
        vec![Snap::branch("Paragraph", vec![Snap::leaf("Image", "alt").attr("src", "img.png")])]
    );
}

#[rstest]
#[case(&[""])]
#[case(&["", "", ""])]
#[case(&["  ", "\t", ""])]
fn blank_runs_leave_nothing(#[case] lines: &[&str]) {
    assert_eq!(parse(lines), vec![]);
}

#[test]
fn blank_lines_separate_paragraphs() {
    assert_eq!(
        parse(&["one", "", "", "two"]),
        vec![Snap::leaf("Paragraph", "one"), Snap::leaf("Paragraph", "two")]
    );
}

#[test]
fn unterminated_fence_runs_to_end_of_input() {
    assert_eq!(
        parse(&["```", "a", "# not a heading"]),
        vec![Snap::branch(
            "CodeBlock",
            vec![Snap::leaf("CodeLine", "a"), Snap::leaf("CodeLine", "# not a heading")]
        )]
    );
}

#[test]
fn fence_contents_stay_verbatim() {
    assert_eq!(
        parse(&["```", "**not bold** [x](y)", "```"]),
        vec![Snap::branch(
            "CodeBlock",
            vec![Snap::leaf("CodeLine", "**not bold** [x](y)")]
        )]
    );
}

#[test]
fn empty_lines_inside_fence_are_kept() {
    assert_eq!(
        parse(&["```", "a", "", "b", "```", "after"]),
        vec![
            Snap::branch(
                "CodeBlock",
                vec![
                    Snap::leaf("CodeLine", "a"),
                    Snap::leaf("CodeLine", ""),
                    Snap::leaf("CodeLine", "b"),
                ]
            ),
            Snap::leaf("Paragraph", "after"),
        ]
    );
}

#[test]
fn quote_continues_over_prefixed_lines() {
    assert_eq!(
        parse(&["> first", "> second", "after"]),
        vec![
            Snap::branch(
                "Quote",
                vec![Snap::leaf("Text", "first"), Snap::leaf("Text", "second")]
            ),
            Snap::leaf("Paragraph", "after"),
        ]
    );
}

#[test]
fn quote_lines_get_inline_styling() {
    assert_eq!(
        parse(&["> a **b**"]),
        vec![Snap::branch(
            "Quote",
            vec![Snap::branch(
                "Text",
                vec![Snap::leaf("Text", "a "), Snap::leaf("Bold", "b")]
            )]
        )]
    );
}

#[test]
fn list_hands_foreign_line_back_to_dispatch() {
    assert_eq!(
        parse(&["- a", "- b", "1. c", "## d"]),
        vec![
            Snap::branch(
                "UnorderedList",
                vec![Snap::leaf("ListItem", "a"), Snap::leaf("ListItem", "b")]
            ),
            Snap::branch("OrderedList", vec![Snap::leaf("ListItem", "c")]).attr("start", "1"),
            Snap::leaf("Heading", "d").level(2),
        ]
    );
}

#[test]
fn list_start_follows_first_marker() {
    assert_eq!(
        parse(&["7. seven", "8. eight"]),
        vec![
            Snap::branch(
                "OrderedList",
                vec![Snap::leaf("ListItem", "seven"), Snap::leaf("ListItem", "eight")]
            )
            .attr("start", "7")
        ]
    );
}

#[test]
fn list_items_get_inline_styling() {
    assert_eq!(
        parse(&["- see [docs](/d)"]),
        vec![Snap::branch(
            "UnorderedList",
            vec![Snap::branch(
                "ListItem",
                vec![
                    Snap::leaf("Text", "see "),
                    Snap::leaf("Link", "docs").attr("href", "/d"),
                ]
            )]
        )]
    );
}

#[test]
fn empty_heading_has_no_text() {
    assert_eq!(parse(&["##"]), vec![Snap::leaf("Heading", "").level(2)]);
}

#[test]
fn mixed_document() {
    let dot = parse_str("# Notes\n\nSome *words* here.\n\n- one\n- two\n\n```sh\nls\n```\n");
    invariants::check(&dot);
    assert_eq!(
        normalize(&dot),
        vec![
            Snap::leaf("Heading", "Notes").level(1),
            Snap::branch(
                "Paragraph",
                vec![
                    Snap::leaf("Text", "Some "),
                    Snap::leaf("Italic", "words"),
                    Snap::leaf("Text", " here."),
                ]
            ),
            Snap::branch(
                "UnorderedList",
                vec![Snap::leaf("ListItem", "one"), Snap::leaf("ListItem", "two")]
            ),
            Snap::branch("CodeBlock", vec![Snap::leaf("CodeLine", "ls")]).attr("lang", "sh"),
        ]
    );
}

// Driver behaviour

#[test]
fn every_line_is_classified() {
    let lines = [
        "# h", "", "para", "- a", "1. b", "> q", "```", "code", "```", "tail",
    ];
    let dot = parse_lines(lines);
    invariants::check(&dot);
    assert!(
        dot.walk()
            .iter()
            .all(|&id| dot.node(id).kind != NodeKind::Raw)
    );
}

#[rstest]
#[case(&["# h", "", "para", "- a", "- b", "1. c", "> q", "> r", "tail"])]
#[case(&["- ", "- b", "> ", "> x", ">", "2. ", "3. y"])]
#[case(&["", "- a", "", "- b", "", "", "> q", "##", "text"])]
#[case(&["- a", "- ", "> x", "> ", "1. ", "plain", "  "])]
fn every_non_blank_line_is_represented_once(#[case] lines: &[&str]) {
    let dot = parse_lines(lines.iter().copied());
    invariants::check(&dot);

    let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(invariants::represented_lines(&dot), non_blank);
}

#[test]
fn code_lines_are_represented_between_fences() {
    let lines = ["```sh", "one", "", "three", "```"];
    let dot = parse_lines(lines);
    invariants::check(&dot);

    assert_eq!(invariants::represented_lines(&dot), lines.len() - 2);
}

#[test]
fn empty_first_list_item_is_kept() {
    assert_eq!(
        parse(&["- ", "- b"]),
        vec![Snap::branch(
            "UnorderedList",
            vec![Snap::leaf("ListItem", ""), Snap::leaf("ListItem", "b")]
        )]
    );
}

#[test]
fn empty_first_quote_line_is_kept() {
    assert_eq!(
        parse(&["> ", "> x"]),
        vec![Snap::branch(
            "Quote",
            vec![Snap::leaf("Text", ""), Snap::leaf("Text", "x")]
        )]
    );
}

#[test]
fn bare_fence_line_adds_no_code_line() {
    assert_eq!(
        parse(&["```", "x", "```"]),
        vec![Snap::branch("CodeBlock", vec![Snap::leaf("CodeLine", "x")])]
    );
}

#[test]
fn cleanup_is_idempotent() {
    let mut dot = parse_lines(["- a", "- b", "", "text"]);
    let before = normalize(&dot);

    let root = dot.root();
    assert_eq!(dot.cleanup(root), 0);
    assert_eq!(normalize(&dot), before);
}

#[test]
fn processing_twice_changes_nothing() {
    let mut dot = parse_lines(["# t", "> q", "> r"]);
    let before = normalize(&dot);

    Pipeline::markdown().process(&mut dot);

    invariants::check(&dot);
    assert_eq!(normalize(&dot), before);
}

#[test]
fn unclaimed_line_falls_back_to_paragraph() {
    let blocks = BlockRuleSet::new(vec![Heading::recognizer().unwrap()]);
    let pipeline = Pipeline::new(blocks, InlineRuleSet::markdown());

    let dot = pipeline.parse_lines(["# h", "plain **b**"]);

    invariants::check(&dot);
    assert_eq!(
        normalize(&dot),
        vec![
            Snap::leaf("Heading", "h").level(1),
            Snap::branch(
                "Paragraph",
                vec![Snap::leaf("Text", "plain "), Snap::leaf("Bold", "b")]
            ),
        ]
    );
}

#[test]
fn empty_inline_rules_keep_text_whole() {
    let pipeline = Pipeline::new(BlockRuleSet::markdown(), InlineRuleSet::empty());
    let dot = pipeline.parse_lines(["a **b** c"]);
    assert_eq!(normalize(&dot), vec![Snap::leaf("Paragraph", "a **b** c")]);
}

#[test]
fn empty_input_gives_empty_root() {
    let dot = parse_str("");
    invariants::check(&dot);
    assert!(dot.children(dot.root()).is_empty());
    assert_eq!(dot.node(dot.root()).block, BlockType::None);
}

#[test]
fn detached_originals_stay_out_of_the_walk() {
    let dot: Dot = parse_lines(["1. a", "2. b"]);
    // Raw lines and their clones share the arena but only the clones are
    // reachable.
    assert!(dot.arena_len() > dot.walk().len());
}
