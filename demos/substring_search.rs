//! Suffix Tree Substring Search Example
//!
//! Demonstrates building a tree and querying in O(pattern_length).
//!
//! ```bash
//! cargo run --example substring_search
//! ```

use alice_suffix::{SuffixTree, SuffixTreeBuilder};

fn main() -> Result<(), alice_suffix::Error> {
    println!("=== ALICE-Suffix Ukkonen Demo ===\n");

    let text = "thequickbrownfoxjumpsoverthelazydog\
                thefoxwasquickandthedogwaslazy\
                aquickbrowndogoutfoxedalazyfox";

    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", text);

    let tree = SuffixTree::build(text)?;
    println!(
        "\n  {} nodes, {} leaves, ~{} bytes",
        tree.node_count(),
        tree.leaf_count(),
        tree.size_bytes()
    );

    println!("\n--- Search Results ---\n");

    let queries = ["fox", "the", "quick", "lazy", "cat", "brownfox"];

    for query in &queries {
        let count = tree.count(query.as_bytes());
        let positions = tree.locate_all(query.as_bytes());

        if count > 0 {
            println!("  \"{}\" -> {} occurrences at positions {:?}", query, count, positions);
        } else {
            println!("  \"{}\" -> not found", query);
        }
    }

    println!("\n--- Incremental Matching ---\n");
    let mut cursor = tree.cursor();
    for &byte in b"quickbrowncat" {
        if !cursor.advance(byte) {
            println!("  longest prefix of \"quickbrowncat\" found: {} bytes", cursor.matched_len());
            break;
        }
        println!("  +{} -> {} occurrences", byte as char, cursor.count());
    }

    println!("\n--- Alphabet Check ---\n");
    match SuffixTree::build("Hello World") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {}", e),
    }

    let mut builder = SuffixTreeBuilder::new();
    builder.extend(b"online")?;
    builder.push(b'x')?;
    let online = builder.finish();
    println!("  online build: \"linex\" found = {}", online.contains(b"linex"));

    Ok(())
}
