use crate::class::Operand;

/// Call of a target intrinsic with the instruction's input operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrinsicCall {
    pub intrinsic: String,
    pub args: Vec<Operand>,
}

/// Selection pattern linking an instruction to an intrinsic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// No pattern; the instruction is only reachable from assembly.
    Empty,
    /// Intrinsic with no result.
    Call(IntrinsicCall),
    /// Intrinsic whose single result lands in `result`.
    Bind {
        result: Operand,
        call: IntrinsicCall,
    },
}

impl Pattern {
    pub fn is_empty(&self) -> bool {
        matches!(self, Pattern::Empty)
    }
}
