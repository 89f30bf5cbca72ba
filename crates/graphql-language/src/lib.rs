#![doc = include_str!("../README.md")]

pub mod ast;
mod block_string;
mod error;
mod lexer;
mod node;
mod parser;
mod printer;
mod source;
pub mod visitor;

pub use crate::ast::AstNode;
pub use crate::ast::Kind;
pub use crate::block_string::dedent_block_string_lines;
pub use crate::block_string::print_block_string;
pub use crate::error::print_location;
pub use crate::error::print_source_location;
pub use crate::error::GraphQLError;
pub use crate::error::InvariantError;
pub use crate::error::PathSegment;
pub use crate::lexer::Lexer;
pub use crate::lexer::LinkedTokens;
pub use crate::lexer::Token;
pub use crate::lexer::TokenId;
pub use crate::lexer::TokenKind;
pub use crate::lexer::TokenStream;
pub use crate::node::Location;
pub use crate::node::Node;
pub use crate::parser::parse;
pub use crate::parser::parse_const_value;
pub use crate::parser::parse_type;
pub use crate::parser::parse_value;
pub use crate::parser::Parser;
pub use crate::printer::print;
pub use crate::source::get_location;
pub use crate::source::LineColumn;
pub use crate::source::Source;
pub use crate::visitor::visit;
pub use crate::visitor::visit_in_parallel;
pub use crate::visitor::ParallelVisitors;
pub use crate::visitor::PathElement;
pub use crate::visitor::VisitAction;
pub use crate::visitor::Visitor;
