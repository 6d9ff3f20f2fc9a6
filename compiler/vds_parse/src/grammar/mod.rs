//! Grammar productions, split by level: top-level items, statements,
//! expressions.

mod expr;
mod item;
mod stmt;
