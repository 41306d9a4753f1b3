use luars_block::{LuaSyntaxNode, ParserConfig, collect_lazy_blocks};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    let source = if args.len() > 1 {
        let filename = &args[1];
        match fs::read_to_string(filename) {
            Ok(content) => {
                println!("=== File: {} ===\n", filename);
                content
            }
            Err(e) => {
                eprintln!("Error reading file '{}': {}", filename, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("Usage: block_dump <source_file.lua>");
        std::process::exit(0);
    };

    let blocks = collect_lazy_blocks(&source, &ParserConfig::default());
    println!("{} top-level blocks", blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        dump_block(&source, i, block);
    }
}

fn dump_block(source: &str, index: usize, block: &LuaSyntaxNode) {
    let start = block.range.start_offset;
    let end = block.range.end_offset();
    let first_line = line_of(source, start);
    let last_line = line_of(source, end.saturating_sub(1).max(start));

    let body = &source[start..end];
    let preview: String = body.trim().chars().take(40).collect();
    println!(
        "[{:>3}] lines {}-{} bytes {}..{} {:?}",
        index, first_line, last_line, start, end, preview
    );
}

fn line_of(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset.min(source.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
