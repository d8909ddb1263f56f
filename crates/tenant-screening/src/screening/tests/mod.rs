mod common;
mod flags;
mod recommendation;
