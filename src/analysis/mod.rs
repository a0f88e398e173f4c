pub mod mbbg;
