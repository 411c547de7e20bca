// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> quoted `code`\n\n```rust\nfn example() {\n    /* block\n       comment */\n    println!(\"Hello {}\", 42);\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_mixed_code(sections: usize) -> String {
    let fences = [
        ("cpp", "#include <vector>\nstatic_cast<int>(x) + 0x10;\n"),
        ("python", "def f(a):\n    return a * 2  # double\n"),
        ("css", ".nav { color: rgb(10, 20, 30); }\n#main { color: #fff; }\n"),
        ("html", "<a href=\"x.html\" class=\"y\">link</a>\n"),
    ];

    let mut content = String::from("---\ntitle: bench\n---\n\n");
    for section in 0..sections {
        content.push_str(&format!("Section {section}\n==========\n\n"));
        let (tag, body) = fences[section % fences.len()];
        content.push_str(&format!("```{tag}\n{body}```\n\n"));
        content.push_str("<!--\nnote\n-->\n\n");
    }
    content
}
