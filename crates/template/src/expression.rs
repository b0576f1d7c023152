/// A node of a resolver mapping template.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    If(IfNode),
    And(AndNode),
    Not(NotNode),
    Parens(ParensNode),
    Raw(RawNode),
    Reference(ReferenceNode),
    Block(BlockNode),
    Compound(CompoundNode),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IfNode {
    pub predicate: Box<Expression>,
    pub expr: Box<Expression>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AndNode {
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NotNode {
    pub expr: Box<Expression>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParensNode {
    pub expr: Box<Expression>,
}

/// Text emitted verbatim.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RawNode {
    pub value: String,
}

/// A `$`-prefixed variable or method call, e.g. `util.error(...)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReferenceNode {
    pub value: String,
}

/// Content framed by `## [Start] <name>. **` and `## [End] <name>. **`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BlockNode {
    pub name: String,
    pub content: Vec<Expression>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompoundNode {
    pub expressions: Vec<Expression>,
}

pub fn iff(predicate: Expression, expr: Expression) -> Expression {
    Expression::If(IfNode {
        predicate: Box::new(predicate),
        expr: Box::new(expr),
    })
}

pub fn and(expressions: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::And(AndNode {
        expressions: expressions.into_iter().collect(),
    })
}

pub fn not(expr: Expression) -> Expression {
    Expression::Not(NotNode {
        expr: Box::new(expr),
    })
}

pub fn parens(expr: Expression) -> Expression {
    Expression::Parens(ParensNode {
        expr: Box::new(expr),
    })
}

pub fn raw(value: impl Into<String>) -> Expression {
    Expression::Raw(RawNode {
        value: value.into(),
    })
}

pub fn reference(value: impl Into<String>) -> Expression {
    Expression::Reference(ReferenceNode {
        value: value.into(),
    })
}

pub fn block(name: impl Into<String>, content: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::Block(BlockNode {
        name: name.into(),
        content: content.into_iter().collect(),
    })
}

pub fn compound(expressions: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::Compound(CompoundNode {
        expressions: expressions.into_iter().collect(),
    })
}

/// Single-quoted template string literal, embedded quotes doubled.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
