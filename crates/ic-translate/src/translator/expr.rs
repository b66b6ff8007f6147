//! Expression lowering, including constant folding inlined into the
//! recursion: arithmetic, unary negation, and relational comparisons
//! between constant operands collapse into a literal operand (or, for
//! relations used as conditions, a direct jump -- see [`super::cond`]).

use ic_core::ast::{BinOp, Exp};
use ic_core::diagnostics::TranslationError;
use ic_core::ic::{ArithOp, Instruction, Operand};

use super::Translator;

fn to_arith_op(op: BinOp) -> ArithOp {
    match op {
        BinOp::Add => ArithOp::Add,
        BinOp::Sub => ArithOp::Sub,
        BinOp::Mul => ArithOp::Mul,
        BinOp::Div => ArithOp::Div,
    }
}

/// Evaluate a binary arithmetic op over two host integers, with truncating
/// (wrapping) integer semantics. Division by a constant zero is undefined
/// by the source language's translator and is not guarded here.
fn fold_arith(op: BinOp, lhs: i32, rhs: i32) -> i32 {
    match op {
        BinOp::Add => lhs.wrapping_add(rhs),
        BinOp::Sub => lhs.wrapping_sub(rhs),
        BinOp::Mul => lhs.wrapping_mul(rhs),
        BinOp::Div => lhs.wrapping_div(rhs),
    }
}

impl Translator {
    /// Lower an expression to the operand holding its value. Boolean-shaped
    /// expressions (relations, `&&`, `||`, `!`) are materialized to a value
    /// via [`Translator::translate_bool_to_value`].
    pub(crate) fn translate_exp(&mut self, exp: &Exp) -> Operand {
        match exp {
            Exp::Int(v) => Operand::Const(*v),

            Exp::Float { line, .. } => {
                self.report(TranslationError::FloatNotAllowed { line: *line });
                Operand::Const(0)
            }

            Exp::Var { name, .. } => match self.symtab.find(name) {
                Some(id) => Operand::Var(id),
                None => {
                    // Semantic analysis should have caught an unresolved
                    // name already -- reaching here is a pipeline bug.
                    unreachable!("unresolved variable '{name}' reached the translator");
                }
            },

            Exp::Paren(inner) => self.translate_exp(inner),

            Exp::Neg(inner) => {
                let v = self.translate_exp(inner);
                match v {
                    Operand::Const(n) => Operand::Const(n.wrapping_neg()),
                    Operand::Var(_) => {
                        let t = Operand::Var(self.symtab.fresh_temp());
                        self.emit(Instruction::Arith {
                            op: ArithOp::Sub,
                            dst: t,
                            lhs: Operand::Const(0),
                            rhs: v,
                        });
                        t
                    }
                }
            }

            Exp::Bin(op, lhs, rhs) => {
                let l = self.translate_exp(lhs);
                let r = self.translate_exp(rhs);
                match (l, r) {
                    (Operand::Const(lv), Operand::Const(rv)) => {
                        Operand::Const(fold_arith(*op, lv, rv))
                    }
                    _ => {
                        let t = Operand::Var(self.symtab.fresh_temp());
                        self.emit(Instruction::Arith {
                            op: to_arith_op(*op),
                            dst: t,
                            lhs: l,
                            rhs: r,
                        });
                        t
                    }
                }
            }

            Exp::Assign(lexp, rexp) => {
                let l = self.translate_exp(lexp);
                debug_assert!(!l.is_const(), "assignment target must not be a constant");
                let r = self.translate_exp(rexp);
                self.emit(Instruction::Assign { dst: l, src: r });
                l
            }

            Exp::Rel(..) | Exp::And(..) | Exp::Or(..) | Exp::Not(..) => {
                self.translate_bool_to_value(exp)
            }

            Exp::Call { name, args, .. } => self.translate_call(name, args),
        }
    }

    fn translate_call(&mut self, name: &str, args: &[Exp]) -> Operand {
        if name == "read" && args.is_empty() {
            let t = self.symtab.fresh_temp();
            self.emit(Instruction::Read(t));
            return Operand::Var(t);
        }
        if name == "write" && args.len() == 1 {
            let v = self.translate_exp(&args[0]);
            self.emit(Instruction::Write(v));
            return Operand::Const(0);
        }

        // Evaluate arguments in source order, but emit ARG in reverse
        // source order -- see §4.E / DESIGN.md for why.
        self.emit_args_reversed(args);

        let t = self.symtab.fresh_temp();
        self.emit(Instruction::Call {
            callee: name.to_string(),
            dst: t,
        });
        Operand::Var(t)
    }

    /// Evaluate each argument expression in source order, but append the
    /// `ARG` instructions in reverse: the recursion bottoms out on the last
    /// argument first, so its `ARG` is emitted before any earlier
    /// argument's. This matches a callee that pops arguments off a stack in
    /// source order.
    fn emit_args_reversed(&mut self, args: &[Exp]) {
        match args.split_first() {
            None => {}
            Some((head, tail)) => {
                let head_val = self.translate_exp(head);
                self.emit_args_reversed(tail);
                self.emit(Instruction::Arg(head_val));
            }
        }
    }
}
