//! Trip dispatch: the board, its booking invariants, and fuel costing.

pub mod board;
pub mod fuel;
