mod common;
mod rounds;
