// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`. Then a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote\n> over two lines\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n![image](pic.png)\n\n";
    base.repeat(size)
}
