/*
 * ==========================================================================
 * SAPLING - Parse Trees from Tokens
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Github:   https://github.com/samwilcox/sapling
 *
 * License:
 * This file is part of the SAPLING parser project.
 *
 * SAPLING is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::Serialize;
use std::fmt;

/// Placeholder printed for nodes that carry no value.
pub const NO_VALUE: &str = "None";

/// A node of the concrete syntax tree.
///
/// - `kind` names the grammar construct (`assignment_statement`, `number`, ...)
/// - `value` holds the lexeme for terminal-derived leaves and for the
///   keyword of `conditional_statement` / `loop_statement`
/// - `children` are kept in left-to-right derivation order
///
/// Nodes are built bottom-up: a grammar routine creates its node, appends
/// already finished children, and hands it to its caller. Nothing mutates a
/// node after it has been attached to a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    kind: String,
    value: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// An interior node with no value.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_value(kind, None)
    }

    /// A node carrying a lexeme.
    pub fn leaf(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(kind, Some(value.into()))
    }

    pub fn with_value(kind: impl Into<String>, value: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            value,
            children: Vec::new(),
        }
    }

    /// Appends `child` after every existing child.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Kinds of the direct children, in order.
    pub fn child_kinds(&self) -> Vec<&str> {
        self.children.iter().map(Node::kind).collect()
    }

    /// Pre-order dump: one `kind: value` line per node, two spaces of
    /// indentation per depth level.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{}{}: {}",
            "  ".repeat(depth),
            self.kind,
            self.value.as_deref().unwrap_or(NO_VALUE)
        )?;

        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

/// A successfully parsed program. The root is always a `program` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParseTree {
    root: Node,
}

impl ParseTree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn render(&self) -> String {
        self.root.render()
    }

    /// Pretty-printed JSON, `{ "kind", "value", "children" }` per node.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.root)
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut term = Node::new("term");
        term.add_child(Node::leaf("number", "1"));

        let mut expression = Node::new("expression");
        expression.add_child(term);

        let mut assignment = Node::new("assignment_statement");
        assignment.add_child(Node::leaf("identifier", "x"));
        assignment.add_child(Node::leaf("assignment_operator", "="));
        assignment.add_child(expression);
        assignment
    }

    #[test]
    fn render_is_preorder_with_two_space_indent() {
        assert_eq!(
            sample().render(),
            "assignment_statement: None\n  identifier: x\n  assignment_operator: =\n  expression: None\n    term: None\n      number: 1\n"
        );
    }

    #[test]
    fn render_twice_is_identical() {
        let node = sample();
        assert_eq!(node.render(), node.render());
    }

    #[test]
    fn children_keep_insertion_order() {
        assert_eq!(
            sample().child_kinds(),
            vec!["identifier", "assignment_operator", "expression"]
        );
    }

    #[test]
    fn json_uses_null_for_missing_values() {
        let json = serde_json::to_value(ParseTree::new(Node::leaf("number", "7"))).unwrap();
        assert_eq!(json["kind"], "number");
        assert_eq!(json["value"], "7");
        assert!(json["children"].as_array().unwrap().is_empty());

        let json = serde_json::to_value(Node::new("program")).unwrap();
        assert!(json["value"].is_null());
    }
}
