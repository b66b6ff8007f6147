//! A concrete, exhaustively-matched AST for the source language.
//!
//! Lexing, parsing, and full semantic analysis are out of scope for this
//! repository -- they are external collaborators the translator trusts.
//! This module only gives their output a shape the translator (and tests,
//! and the CLI's JSON front end) can construct and match on directly,
//! instead of chasing stringly-tagged, sibling-linked nodes.

use serde::{Deserialize, Serialize};

/// A whole compilation unit: a sequence of top-level definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub ext_defs: Vec<ExtDef>,
}

/// The declared type of a variable or function return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specifier {
    Int,
    Float,
}

/// A top-level definition: either a (rejected) global declaration list or a
/// function declaration/definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExtDef {
    /// `int a, b;` at top level -- Assumption 4 violation, global variables
    /// are not allowed. `names` carries the declared identifiers purely for
    /// diagnostic context; no code is ever emitted for this variant.
    GlobalVarDecl { names: Vec<String>, line: u32 },
    /// A function declaration (`;` body) or definition (`{ ... }` body).
    FunctionDef {
        specifier: Specifier,
        fundec: FunDec,
        /// `None` for a bare declaration, `Some` for a definition.
        body: Option<CompStmt>,
        line: u32,
    },
}

/// A function's name and ordered parameter list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunDec {
    pub name: String,
    pub params: Vec<Param>,
    pub line: u32,
}

/// One formal parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    pub specifier: Specifier,
    pub name: String,
}

/// A local variable declaration inside a compound statement's declaration
/// section. Initializers and array/struct declarators are not modeled --
/// they are acknowledged TODOs, out of scope for this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarDecl {
    pub specifier: Specifier,
    pub name: String,
    pub line: u32,
}

/// `{ decl-list stmt-list }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompStmt {
    pub decls: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Stmt {
    /// An expression evaluated for its side effects; its value is discarded.
    Expr(Exp),
    /// A nested `{ ... }` block.
    Block(CompStmt),
    Return(Exp),
    If {
        cond: Exp,
        then_branch: Box<Stmt>,
    },
    IfElse {
        cond: Exp,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },
    While {
        cond: Exp,
        body: Box<Stmt>,
    },
}

/// Binary arithmetic operators recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Relational operators recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelOp {
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
}

/// An expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Exp {
    Int(i32),
    /// A float literal -- always an Assumption 1 violation when lowered.
    Float { value: f64, line: u32 },
    Var { name: String, line: u32 },
    /// `( e )`. Kept as its own node (rather than elided by the parser) so
    /// the "nested parenthesization produces the same IC" boundary test has
    /// something concrete to exercise.
    Paren(Box<Exp>),
    Neg(Box<Exp>),
    Not(Box<Exp>),
    Bin(BinOp, Box<Exp>, Box<Exp>),
    Rel(RelOp, Box<Exp>, Box<Exp>),
    And(Box<Exp>, Box<Exp>),
    Or(Box<Exp>, Box<Exp>),
    /// `lexp = rexp`.
    Assign(Box<Exp>, Box<Exp>),
    /// A function call, `read`/`write` included -- the translator
    /// special-cases those two names, the parser does not.
    Call { name: String, args: Vec<Exp>, line: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_json_roundtrip() {
        let program = Program {
            ext_defs: vec![ExtDef::FunctionDef {
                specifier: Specifier::Int,
                fundec: FunDec {
                    name: "main".to_string(),
                    params: vec![],
                    line: 1,
                },
                body: Some(CompStmt {
                    decls: vec![],
                    stmts: vec![Stmt::Return(Exp::Int(0))],
                }),
                line: 1,
            }],
        };
        let json = serde_json::to_string(&program).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ext_defs.len(), 1);
    }

    #[test]
    fn global_var_decl_carries_no_code() {
        let decl = ExtDef::GlobalVarDecl {
            names: vec!["x".to_string()],
            line: 3,
        };
        match decl {
            ExtDef::GlobalVarDecl { names, line } => {
                assert_eq!(names, vec!["x".to_string()]);
                assert_eq!(line, 3);
            }
            _ => panic!("wrong variant"),
        }
    }
}
