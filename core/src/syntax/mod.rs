pub mod int_literal;
