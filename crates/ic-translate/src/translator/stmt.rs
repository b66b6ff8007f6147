//! Statement lowering. Every branch structure here only ever emits
//! conditional jumps generated by [`super::cond`] -- no other code in the
//! translator needs to know how short-circuit boolean code looks.

use ic_core::ast::{CompStmt, Stmt};
use ic_core::ic::Instruction;

use super::Translator;

impl Translator {
    pub(crate) fn translate_comp_stmt(&mut self, comp: &CompStmt) {
        for decl in &comp.decls {
            // Declarations allocate a variable id; no IC is emitted for
            // them. Initializers and array/struct decls are out of scope.
            self.symtab.declare_var(&decl.name);
        }
        for stmt in &comp.stmts {
            self.translate_stmt(stmt);
        }
    }

    pub(crate) fn translate_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(exp) => {
                self.translate_exp(exp);
            }
            Stmt::Block(comp) => {
                self.translate_comp_stmt(comp);
            }
            Stmt::Return(exp) => {
                let v = self.translate_exp(exp);
                self.emit(Instruction::Return(v));
            }
            Stmt::If { cond, then_branch } => {
                let l_true = self.labels.fresh_label();
                let l_false = self.labels.fresh_label();
                self.translate_cond(cond, l_true, l_false);
                self.emit(Instruction::Label(l_true));
                self.translate_stmt(then_branch);
                self.emit(Instruction::Label(l_false));
            }
            Stmt::IfElse {
                cond,
                then_branch,
                else_branch,
            } => {
                let l_true = self.labels.fresh_label();
                let l_false = self.labels.fresh_label();
                let l_exit = self.labels.fresh_label();
                self.translate_cond(cond, l_true, l_false);
                self.emit(Instruction::Label(l_true));
                self.translate_stmt(then_branch);
                self.emit(Instruction::Goto(l_exit));
                self.emit(Instruction::Label(l_false));
                self.translate_stmt(else_branch);
                self.emit(Instruction::Label(l_exit));
            }
            Stmt::While { cond, body } => {
                let l_begin = self.labels.fresh_label();
                let l_body = self.labels.fresh_label();
                let l_false = self.labels.fresh_label();
                self.emit(Instruction::Label(l_begin));
                self.translate_cond(cond, l_body, l_false);
                self.emit(Instruction::Label(l_body));
                self.translate_stmt(body);
                self.emit(Instruction::Goto(l_begin));
                self.emit(Instruction::Label(l_false));
            }
        }
    }
}
