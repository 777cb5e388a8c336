use super::*;

mod require_linked;
