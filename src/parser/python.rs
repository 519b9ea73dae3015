//! Python Syntax Checking
//!
//! Wraps a tree-sitter parser loaded with the Python grammar. Tree-sitter
//! always produces a tree; syntax errors show up as ERROR or MISSING nodes.

use anyhow::{Context, Result};
use thiserror::Error;
use tree_sitter::{Node, Tree};

use super::indent::check_indentation;

/// Longest source excerpt quoted in a diagnostic
const EXCERPT_LIMIT: usize = 40;

/// First syntax error found in a piece of source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct SyntaxError {
    /// 1-based line
    pub line: usize,
    /// 1-based column, in bytes
    pub column: usize,
    pub message: String,
}

/// A reusable Python parser
pub struct PythonParser {
    inner: tree_sitter::Parser,
}

impl std::fmt::Debug for PythonParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PythonParser").finish_non_exhaustive()
    }
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language)
            .context("Failed to load Python grammar")?;
        Ok(Self { inner })
    }

    /// Parse source into a syntax tree, errors included
    pub fn parse(&mut self, source: &str) -> Option<Tree> {
        self.inner.parse(source, None)
    }

    /// Check that the source is valid Python 3
    ///
    /// Grammar errors come first, then the Python 2 statements the grammar
    /// still accepts, then block indentation.
    pub fn check_syntax(&mut self, source: &str) -> Result<(), SyntaxError> {
        let Some(tree) = self.parse(source) else {
            return Err(no_tree());
        };

        let root = tree.root_node();
        if root.has_error() {
            return Err(self.locate_error(source));
        }

        if let Some(node) = first_legacy_statement(root) {
            let position = node.start_position();
            let keyword = node.child(0).map(|k| k.kind()).unwrap_or("print");
            return Err(SyntaxError {
                line: position.row + 1,
                column: position.column + 1,
                message: format!("Missing parentheses in call to '{keyword}'"),
            });
        }

        check_indentation(source)
    }

    /// Find the line the error starts on
    ///
    /// Error recovery can wrap several valid statements in one ERROR node,
    /// so the fault line is the first one after the longest prefix of whole
    /// lines that still parses cleanly.
    fn locate_error(&mut self, source: &str) -> SyntaxError {
        let ends: Vec<usize> = source
            .split_inclusive('\n')
            .scan(0, |end, line| {
                *end += line.len();
                Some(*end)
            })
            .collect();
        if ends.is_empty() {
            return no_tree();
        }

        let mut fault = 0;
        for row in (0..ends.len() - 1).rev() {
            let clean = self
                .parse(&source[..ends[row]])
                .is_some_and(|tree| !tree.root_node().has_error());
            if clean {
                fault = row + 1;
                break;
            }
        }

        let prefix = &source[..ends[fault]];
        if let Some(tree) = self.parse(prefix)
            && let Some(node) = first_error_on_row(tree.root_node(), fault)
        {
            let position = node.start_position();
            return SyntaxError {
                line: position.row + 1,
                column: position.column + 1,
                message: describe(node, prefix),
            };
        }

        let start = if fault == 0 { 0 } else { ends[fault - 1] };
        let line = &source[start..ends[fault]];
        let body = line.trim_start();
        let excerpt: String = body.trim_end().chars().take(EXCERPT_LIMIT).collect();
        SyntaxError {
            line: fault + 1,
            column: line.len() - body.len() + 1,
            message: if excerpt.is_empty() {
                "invalid syntax".to_string()
            } else {
                format!("invalid syntax near `{excerpt}`")
            },
        }
    }
}

fn no_tree() -> SyntaxError {
    SyntaxError {
        line: 1,
        column: 1,
        message: "parser produced no syntax tree".to_string(),
    }
}

/// Depth-first search for the earliest ERROR or MISSING node starting on `row`
fn first_error_on_row<'tree>(node: Node<'tree>, row: usize) -> Option<Node<'tree>> {
    if (node.is_error() || node.is_missing()) && node.start_position().row == row {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_error_on_row(child, row))
}

/// `print x` and `exec x` still parse with the Python grammar
fn first_legacy_statement<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    if matches!(node.kind(), "print_statement" | "exec_statement") {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_legacy_statement)
}

fn describe(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("invalid syntax: missing `{}`", node.kind());
    }

    let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
    let first_line = text.lines().next().unwrap_or_default().trim();
    if first_line.is_empty() {
        return "invalid syntax".to_string();
    }

    let excerpt: String = first_line.chars().take(EXCERPT_LIMIT).collect();
    format!("invalid syntax near `{excerpt}`")
}
