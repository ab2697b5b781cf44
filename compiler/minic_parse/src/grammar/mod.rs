//! Grammar productions, one module per syntactic category.

mod expr;
mod item;
mod stmt;
