//! Edge case tests for toyc-lex
