//! Condition lowering: the short-circuit code schema.
//!
//! `translate_cond(exp, l_true, l_false)` emits code that jumps to `l_true`
//! if `exp` is truthy and to `l_false` otherwise. Every path through the
//! generated code reaches one of the two labels; there is no fall-through.

use ic_core::ast::Exp;
use ic_core::id::LabelId;
use ic_core::ic::{Instruction, Operand, RelOp};

use super::Translator;

fn to_ic_relop(op: ic_core::ast::RelOp) -> RelOp {
    use ic_core::ast::RelOp as A;
    match op {
        A::Eq => RelOp::Eq,
        A::Neq => RelOp::Neq,
        A::Lt => RelOp::Lt,
        A::Le => RelOp::Le,
        A::Gt => RelOp::Gt,
        A::Ge => RelOp::Ge,
    }
}

impl Translator {
    pub(crate) fn translate_cond(&mut self, exp: &Exp, l_true: LabelId, l_false: LabelId) {
        match exp {
            Exp::Paren(inner) => self.translate_cond(inner, l_true, l_false),

            // Swap labels, no new label emitted -- recurses on the operand
            // of `!` itself, never a sibling node.
            Exp::Not(inner) => self.translate_cond(inner, l_false, l_true),

            Exp::Rel(op, lhs, rhs) => {
                let l = self.translate_exp(lhs);
                let r = self.translate_exp(rhs);
                let relop = to_ic_relop(*op);
                match (l.as_const(), r.as_const()) {
                    (Some(lv), Some(rv)) => {
                        let target = if relop.eval(lv, rv) { l_true } else { l_false };
                        self.emit(Instruction::Goto(target));
                    }
                    _ => {
                        self.emit(Instruction::CondGoto {
                            relop,
                            lhs: l,
                            rhs: r,
                            target: l_true,
                        });
                        self.emit(Instruction::Goto(l_false));
                    }
                }
            }

            Exp::And(lhs, rhs) => {
                let l_mid = self.labels.fresh_label();
                self.translate_cond(lhs, l_mid, l_false);
                self.emit(Instruction::Label(l_mid));
                self.translate_cond(rhs, l_true, l_false);
            }

            Exp::Or(lhs, rhs) => {
                let l_mid = self.labels.fresh_label();
                self.translate_cond(lhs, l_true, l_mid);
                self.emit(Instruction::Label(l_mid));
                self.translate_cond(rhs, l_true, l_false);
            }

            // "Otherwise": any expression used as a condition that is not
            // itself a boolean-shaped form above.
            other => {
                let v = self.translate_exp(other);
                match v.as_const() {
                    Some(value) => {
                        let target = if value != 0 { l_true } else { l_false };
                        self.emit(Instruction::Goto(target));
                    }
                    None => {
                        self.emit(Instruction::CondGoto {
                            relop: RelOp::Neq,
                            lhs: v,
                            rhs: Operand::Const(0),
                            target: l_true,
                        });
                        self.emit(Instruction::Goto(l_false));
                    }
                }
            }
        }
    }

    /// Materialize a boolean-shaped expression to a runtime value: the
    /// redundant write on the true path is accepted as intentional
    /// simplicity (see spec §4.F).
    pub(crate) fn translate_bool_to_value(&mut self, exp: &Exp) -> Operand {
        let t = Operand::Var(self.symtab.fresh_temp());
        let l_true = self.labels.fresh_label();
        let l_false = self.labels.fresh_label();

        self.emit(Instruction::Assign {
            dst: t,
            src: Operand::Const(0),
        });
        self.translate_cond(exp, l_true, l_false);
        self.emit(Instruction::Label(l_true));
        self.emit(Instruction::Assign {
            dst: t,
            src: Operand::Const(1),
        });
        self.emit(Instruction::Label(l_false));
        t
    }
}
