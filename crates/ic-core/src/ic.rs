//! The three-address intermediate-code (IC) data model.
//!
//! Pure value types and an append-only instruction list. Nothing in this
//! module performs translation -- it is the vocabulary the translator
//! (`ic-translate`) writes into.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{LabelId, VarId};

/// An IC operand: either a compile-time constant or a variable (named or
/// temporary -- the two share one id space, see [`crate::id::VarIdAllocator`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Const(i32),
    Var(VarId),
}

impl Operand {
    pub fn is_const(&self) -> bool {
        matches!(self, Operand::Const(_))
    }

    /// The constant value, if this operand is one.
    pub fn as_const(&self) -> Option<i32> {
        match self {
            Operand::Const(v) => Some(*v),
            Operand::Var(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Const(v) => write!(f, "#{}", v),
            Operand::Var(id) => write!(f, "{}", id),
        }
    }
}

/// Arithmetic operators available to [`Instruction::Arith`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        };
        write!(f, "{}", sym)
    }
}

/// Relational operators available to [`Instruction::CondGoto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelOp {
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    /// Evaluate this relation over two constants at compile time.
    pub fn eval(&self, lhs: i32, rhs: i32) -> bool {
        match self {
            RelOp::Eq => lhs == rhs,
            RelOp::Neq => lhs != rhs,
            RelOp::Lt => lhs < rhs,
            RelOp::Le => lhs <= rhs,
            RelOp::Gt => lhs > rhs,
            RelOp::Ge => lhs >= rhs,
        }
    }

    /// The relation that holds exactly when this one does not.
    pub fn negate(&self) -> RelOp {
        match self {
            RelOp::Eq => RelOp::Neq,
            RelOp::Neq => RelOp::Eq,
            RelOp::Lt => RelOp::Ge,
            RelOp::Le => RelOp::Gt,
            RelOp::Gt => RelOp::Le,
            RelOp::Ge => RelOp::Lt,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            RelOp::Eq => "==",
            RelOp::Neq => "!=",
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        };
        write!(f, "{}", sym)
    }
}

/// A single three-address IC instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Defines a jump target.
    Label(LabelId),
    /// Begins a function body.
    FuncDef(String),
    /// Declares the next formal parameter.
    Param(VarId),
    /// `dst := src`.
    Assign { dst: Operand, src: Operand },
    /// `dst := lhs op rhs`.
    Arith {
        op: ArithOp,
        dst: Operand,
        lhs: Operand,
        rhs: Operand,
    },
    /// Unconditional jump.
    Goto(LabelId),
    /// Jump to `target` if `lhs relop rhs` holds.
    CondGoto {
        relop: RelOp,
        lhs: Operand,
        rhs: Operand,
        target: LabelId,
    },
    /// Return a value from the enclosing function.
    Return(Operand),
    /// Push one outgoing call argument.
    Arg(Operand),
    /// Call `callee`, storing the result in `dst`.
    Call { callee: String, dst: VarId },
    /// Built-in input: read an integer into `dst`.
    Read(VarId),
    /// Built-in output: write `src`.
    Write(Operand),
}

impl Instruction {
    /// The destination operand of this instruction, for instructions that
    /// have one. Per invariant 1, this is always a variable, never a
    /// constant.
    pub fn destination(&self) -> Option<Operand> {
        match self {
            Instruction::Assign { dst, .. } => Some(*dst),
            Instruction::Arith { dst, .. } => Some(*dst),
            Instruction::Call { dst, .. } => Some(Operand::Var(*dst)),
            Instruction::Read(dst) => Some(Operand::Var(*dst)),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Label(l) => write!(f, "LABEL {} :", l),
            Instruction::FuncDef(name) => write!(f, "FUNCTION {} :", name),
            Instruction::Param(v) => write!(f, "PARAM {}", v),
            Instruction::Assign { dst, src } => write!(f, "{} := {}", dst, src),
            Instruction::Arith { op, dst, lhs, rhs } => {
                write!(f, "{} := {} {} {}", dst, lhs, op, rhs)
            }
            Instruction::Goto(l) => write!(f, "GOTO {}", l),
            Instruction::CondGoto {
                relop,
                lhs,
                rhs,
                target,
            } => write!(f, "IF {} {} {} GOTO {}", lhs, relop, rhs, target),
            Instruction::Return(v) => write!(f, "RETURN {}", v),
            Instruction::Arg(v) => write!(f, "ARG {}", v),
            Instruction::Call { callee, dst } => write!(f, "{} := CALL {}", dst, callee),
            Instruction::Read(dst) => write!(f, "READ {}", dst),
            Instruction::Write(src) => write!(f, "WRITE {}", src),
        }
    }
}

/// An ordered, append-only sequence of [`Instruction`]s -- the sole output
/// artifact of translation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InstrList {
    instructions: Vec<Instruction>,
}

impl InstrList {
    pub fn new() -> Self {
        InstrList {
            instructions: Vec::new(),
        }
    }

    pub fn push(&mut self, instr: Instruction) {
        self.instructions.push(instr);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Render the textual form: one instruction per line, in appearance
    /// order, matching the canonical forms of the downstream assembler.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for instr in &self.instructions {
            out.push_str(&instr.to_string());
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a InstrList {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
