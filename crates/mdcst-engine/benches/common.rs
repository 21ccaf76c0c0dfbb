// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(sections: usize) -> String {
    let mut out = String::new();
    for i in 0..sections {
        out.push_str(&format!("## Section {i}\n\n"));
        out.push_str("Some *emphasis* and **strong** text with a [link](https://example.com) and `code`.\n\n");
        out.push_str("- item one\n- item two\n  - nested\n\n");
        out.push_str("> a quoted paragraph\n> spanning two lines\n\n");
        out.push_str("```rust\nfn f() {}\n```\n\n");
    }
    out
}
