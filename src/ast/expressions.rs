use std::any::Any;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprType, ExprWrapper, Stmt},
    statements::BlockStmt,
};

// LITERALS

/// Identifier Expression
/// A leaf expression naming a binding. Also used for `let` names and
/// function parameters.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Identifier {
        Identifier {
            value: token.literal.clone(),
            token,
        }
    }
}

impl Expr for Identifier {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        self.value.clone()
    }
}

/// Integer Expression
/// Represents a decimal, unsigned integer literal in the AST. A leading
/// minus is a separate prefix operator, never part of the literal.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        self.token.literal.clone()
    }
}

/// Boolean Expression
/// Represents a `true` or `false` literal in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        self.token.literal.clone()
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation (`!x`, `-x`) on an expression in the AST.
#[derive(Debug)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(PrefixExpr {
            token: self.token.clone(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!("({}{})", self.operator, self.right.render())
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug)]
pub struct BinaryExpr {
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for BinaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            token: self.token.clone(),
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!(
            "({} {} {})",
            self.left.render(),
            self.operator,
            self.right.render()
        )
    }
}

/// Assignment Expression
/// Represents a plain or compound assignment (`=`, `+=`, `-=`, `*=`, `/=`)
/// in the AST. Assignments are ordinary low-precedence infix expressions.
#[derive(Debug)]
pub struct AssignmentExpr {
    pub token: Token,
    pub assignee: ExprWrapper,
    pub operator: String,
    pub value: ExprWrapper,
}

impl Expr for AssignmentExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(AssignmentExpr {
            token: self.token.clone(),
            assignee: self.assignee.clone_wrapper(),
            operator: self.operator.clone(),
            value: self.value.clone_wrapper(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        format!(
            "({} {} {})",
            self.assignee.render(),
            self.operator,
            self.value.render()
        )
    }
}

/// Call Expression
/// Represents a function call in the AST. The callee may be an identifier
/// or a function literal.
#[derive(Debug)]
pub struct CallExpr {
    pub token: Token,
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        let cloned_args = self
            .arguments
            .iter()
            .map(|arg| arg.clone_wrapper())
            .collect::<Vec<ExprWrapper>>();

        ExprWrapper::new(CallExpr {
            token: self.token.clone(),
            callee: self.callee.clone_wrapper(),
            arguments: cloned_args,
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        let args = self
            .arguments
            .iter()
            .map(|arg| arg.render())
            .collect::<Vec<String>>()
            .join(", ");

        format!("{}({})", self.callee.render(), args)
    }
}

/// Function Expression
/// Represents a function literal (`fn(x, y) { ... }`) in the AST.
#[derive(Debug)]
pub struct FunctionExpr {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Expr for FunctionExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(FunctionExpr {
            token: self.token.clone(),
            parameters: self.parameters.clone(),
            body: self.body.clone(),
        })
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
    fn render(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|param| param.render())
            .collect::<Vec<String>>()
            .join(", ");

        format!("{}({}) {}", self.token.literal, params, self.body.render())
    }
}
