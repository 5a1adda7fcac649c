//! Edge case tests for arixc-lex
