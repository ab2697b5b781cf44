//! User-defined functions as stored in the environment.

use minic_ir::{Name, SharedArena, Span, StmtRange};

use crate::types::{ReturnType, VarType};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: Name,
    pub ty: VarType,
}

/// A function definition with its types resolved.
///
/// The body is a statement range in `arena`, parsed once and shared by every
/// call.
#[derive(Clone, Debug)]
pub struct Function {
    pub name: Name,
    pub return_type: ReturnType,
    pub params: Vec<Parameter>,
    pub body: StmtRange,
    pub arena: SharedArena,
    pub span: Span,
}

impl Function {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
