//! Debug commands: `tokens` and `ast` for inspecting the front end.

use vds_ir::{AstArena, NodeId};
use vds_parse::parse_all;

use super::read_file;
use crate::reporting::render_parse_error;

/// Tokenize a file and display the token stream.
pub fn tokens_file(path: &str) {
    let content = read_file(path);
    let tokens = vds_lexer::tokenize(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:<10} {} @ {:?}", format!("{:?}", token.class()), token.kind, token.pos);
    }
}

/// Parse a file and display every function's tree.
pub fn ast_file(path: &str) {
    let content = read_file(path);
    let mut arena = AstArena::with_capacity(content.len());
    let (functions, error) = parse_all(&content, &mut arena);

    println!("Parse result for '{path}':");
    println!("  Functions: {}", functions.len());
    println!("  Nodes: {}", arena.node_count());

    for id in functions {
        println!();
        for visit in arena.subtree(NodeId::Function(id)) {
            println!("{}{}", "  ".repeat(visit.depth + 1), arena.node_label(visit.node));
        }
    }

    if let Some(error) = error {
        println!();
        print!("{}", render_parse_error(&content, path, &error));
        std::process::exit(1);
    }
}
