//! Arena indices for expressions, statements and parameter lists.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

macro_rules! arena_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(self) -> usize {
                self.len as usize
            }

            #[inline]
            pub(crate) fn to_range(self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    };
}

arena_id!(
    /// Index of an [`Expr`](crate::Expr) in an [`ExprArena`](crate::ExprArena).
    ExprId
);
arena_id!(
    /// Index of a [`Stmt`](crate::Stmt) in an [`ExprArena`](crate::ExprArena).
    StmtId
);

arena_range!(
    /// Contiguous run of call arguments.
    ExprRange
);
arena_range!(
    /// Contiguous run of statements (a block body or a function body).
    StmtRange
);
arena_range!(
    /// Contiguous run of function parameters.
    ParamRange
);
