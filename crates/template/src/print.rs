use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::expression::{
    block, AndNode, BlockNode, CompoundNode, Expression, IfNode, NotNode, ParensNode,
};

const TAB: &str = "  ";

pub fn print(expr: &Expression) -> String {
    print_expr(expr, "")
}

/// Prints `expr` wrapped in a named start/end comment block.
pub fn print_block(name: &str, expr: Expression) -> String {
    print(&block(name, [expr]))
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&print(self))
    }
}

fn print_expr(expr: &Expression, indent: &str) -> String {
    match expr {
        Expression::If(node) => print_if(node, indent),
        Expression::And(node) => print_and(node, indent),
        Expression::Not(node) => print_not(node, indent),
        Expression::Parens(node) => print_parens(node, indent),
        Expression::Raw(node) => indent_lines(&node.value, indent),
        Expression::Reference(node) => indent_lines(&format!("${}", node.value), indent),
        Expression::Block(node) => print_block_node(node, indent),
        Expression::Compound(node) => print_compound(node, indent),
    }
}

fn print_if(node: &IfNode, indent: &str) -> String {
    format!(
        "{indent}#if( {} )\n{}\n{indent}#end",
        print_expr(&node.predicate, ""),
        print_expr(&node.expr, &format!("{}{}", indent, TAB)),
        indent = indent
    )
}

fn print_and(node: &AndNode, indent: &str) -> String {
    let operands = node
        .expressions
        .iter()
        .map(|expr| print_expr(expr, ""))
        .collect::<Vec<_>>();
    format!("{}{}", indent, operands.join(" && "))
}

fn print_not(node: &NotNode, indent: &str) -> String {
    format!("{}!{}", indent, print_expr(&node.expr, ""))
}

fn print_parens(node: &ParensNode, indent: &str) -> String {
    format!("{}({})", indent, print_expr(&node.expr, ""))
}

fn print_block_node(node: &BlockNode, indent: &str) -> String {
    let content = node
        .content
        .iter()
        .map(|expr| print_expr(expr, indent))
        .collect::<Vec<_>>();
    format!(
        "{indent}## [Start] {name}. **\n{}\n{indent}## [End] {name}. **",
        content.join("\n"),
        indent = indent,
        name = node.name
    )
}

fn print_compound(node: &CompoundNode, indent: &str) -> String {
    node.expressions
        .iter()
        .map(|expr| print_expr(expr, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent_lines(text: &str, indent: &str) -> String {
    if indent.is_empty() {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
