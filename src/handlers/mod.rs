pub mod solve;
pub mod wordlist;
