use std::any::Any;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// Let Statement
/// Binds the result of an expression to a name: `let x = 5;`.
#[derive(Debug)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: ExprWrapper,
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(LetStmt {
            token: self.token.clone(),
            name: self.name.clone(),
            value: self.value.clone_wrapper(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!(
            "{} {} = {};",
            self.token.literal,
            self.name.render(),
            self.value.render()
        )
    }
}

/// Return Statement
/// Returns the value of an expression from the enclosing function.
#[derive(Debug)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: ExprWrapper,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ReturnStmt {
            token: self.token.clone(),
            value: self.value.clone_wrapper(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!("{} {};", self.token.literal, self.value.render())
    }
}

/// Expression Statement
/// A standalone expression used in statement position: `foobar;`.
/// The default/fallback statement production.
#[derive(Debug)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ExpressionStmt {
            token: self.token.clone(),
            expression: self.expression.clone_wrapper(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        self.expression.render()
    }
}

/// Block Statement
/// A `{ ... }` sequence of statements, used for `if` branches and function
/// bodies.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        let body = self
            .statements
            .iter()
            .map(|stmt| stmt.render())
            .collect::<Vec<String>>()
            .join(" ");

        format!("{{ {} }}", body)
    }
}

/// If Statement
/// A conditional with an optional `else` branch. Chained `else if`s form a
/// right-leaning chain of nested `IfStmt`s through `else_if`; a trailing
/// bare `else` block terminates the chain in `alternative`.
#[derive(Debug)]
pub struct IfStmt {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub else_if: Option<Box<IfStmt>>,
}

impl IfStmt {
    fn clone_inner(&self) -> IfStmt {
        IfStmt {
            token: self.token.clone(),
            condition: self.condition.clone_wrapper(),
            consequence: self.consequence.clone(),
            alternative: self.alternative.clone(),
            else_if: self
                .else_if
                .as_ref()
                .map(|chained| Box::new(chained.clone_inner())),
        }
    }
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone_inner())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        let mut out = format!(
            "if {} {}",
            self.condition.render(),
            self.consequence.render()
        );
        if let Some(chained) = &self.else_if {
            out.push_str(&format!(" else {}", chained.render()));
        }
        if let Some(alternative) = &self.alternative {
            out.push_str(&format!(" else {}", alternative.render()));
        }
        out
    }
}
